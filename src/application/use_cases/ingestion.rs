// ============================================================
// DATASET INGESTION
// ============================================================
// Orchestrate parse -> profile -> store for an uploaded file

use crate::application::use_cases::profiler::ColumnProfiler;
use crate::domain::dataset::EngineConfig;
use crate::domain::error::Result;
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::store::DatasetStore;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Result of one load operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub elapsed_ms: u64,
}

/// Loads raw CSV text into the store: parse, profile the columns, then
/// replace the store's content. Loading always replaces the previous
/// dataset in full; there are no merge semantics.
pub struct DatasetLoader {
    parser: CsvParser,
    profiler: ColumnProfiler,
}

impl DatasetLoader {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            parser: CsvParser::new(),
            profiler: ColumnProfiler::new(config),
        }
    }

    pub fn load(
        &self,
        store: &mut DatasetStore,
        text: &str,
        file_name: &str,
    ) -> Result<LoadSummary> {
        let start = Instant::now();

        let parsed = self.parser.parse(text)?;
        let columns = self.profiler.profile(&parsed.headers, &parsed.rows);

        let summary = LoadSummary {
            row_count: parsed.rows.len(),
            column_count: columns.len(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        store.replace(parsed.rows, columns, file_name);

        tracing::info!(
            file = file_name,
            rows = summary.row_count,
            columns = summary.column_count,
            elapsed_ms = summary.elapsed_ms,
            "dataset loaded"
        );

        Ok(summary)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(crate::infrastructure::config::resolved().clone())
    }
}

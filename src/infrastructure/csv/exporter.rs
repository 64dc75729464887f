// ============================================================
// DATASET EXPORTER
// ============================================================
// Render the current dataset back to CSV and build run metadata

use crate::domain::dataset::Dataset;
use crate::domain::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Render the dataset's selected columns as CSV text.
///
/// Null cells render as empty strings. A cell value containing the
/// delimiter is wrapped in double quotes; embedded quote characters are
/// not escaped (documented limitation, symmetric with the parser's lack
/// of quote handling).
pub fn to_csv(dataset: &Dataset) -> String {
    let selected: Vec<usize> = dataset
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.selected)
        .map(|(idx, _)| idx)
        .collect();

    let mut lines = Vec::with_capacity(dataset.rows.len() + 1);

    let header = selected
        .iter()
        .map(|&idx| dataset.columns[idx].name.clone())
        .collect::<Vec<_>>()
        .join(",");
    lines.push(header);

    for row in &dataset.rows {
        let rendered = selected
            .iter()
            .map(|&idx| quote_if_needed(row.cell(idx).render()))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(rendered);
    }

    lines.join("\n")
}

fn quote_if_needed(value: String) -> String {
    if value.contains(',') {
        format!("\"{}\"", value)
    } else {
        value
    }
}

/// Metadata record describing one export, serialized to JSON for the
/// reporting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub report_id: Uuid,
    pub file_name: String,
    pub exported_at: DateTime<Utc>,
    pub row_count: usize,
    pub selected_columns: Vec<String>,
}

impl RunReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Internal(format!("Failed to serialize run report: {}", e)))
    }
}

/// Build the run-metadata record for the dataset's current state.
pub fn run_report(dataset: &Dataset) -> RunReport {
    RunReport {
        report_id: Uuid::new_v4(),
        file_name: dataset.source_name.clone(),
        exported_at: Utc::now(),
        row_count: dataset.row_count(),
        selected_columns: dataset
            .selected_columns()
            .iter()
            .map(|c| c.name.clone())
            .collect(),
    }
}

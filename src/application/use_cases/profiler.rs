// ============================================================
// COLUMN PROFILER
// ============================================================
// Infer column types and null counts from parsed rows

use crate::domain::dataset::{ColumnProfile, ColumnType, DataRow, EngineConfig};

/// Builds column profiles from parsed rows.
///
/// Type inference looks at a bounded sample of rows (the first
/// `type_sample_rows`, a tunable): a column whose non-empty sampled values
/// are more than half numeric-parseable classifies as numeric. Null counts
/// are exact over the full row set, not extrapolated from the sample.
pub struct ColumnProfiler {
    config: EngineConfig,
}

impl ColumnProfiler {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Profile every column: stable 1-based id, inferred type, exact null
    /// count, selected by default.
    pub fn profile(&self, headers: &[String], rows: &[DataRow]) -> Vec<ColumnProfile> {
        headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let mut profile = ColumnProfile::new(idx as u32 + 1, header.as_str());
                profile.column_type = self.infer_type(rows, idx);
                profile.null_count = count_nulls(rows, idx);
                profile
            })
            .collect()
    }

    /// Classify one column from its sampled values.
    fn infer_type(&self, rows: &[DataRow], column: usize) -> ColumnType {
        let mut non_empty = 0usize;
        let mut numeric = 0usize;

        for row in rows.iter().take(self.config.type_sample_rows) {
            let cell = row.cell(column);
            if cell.is_empty() {
                continue;
            }
            non_empty += 1;
            if cell.as_number().is_some() {
                numeric += 1;
            }
        }

        // A column with no usable sample values stays textual.
        if non_empty == 0 {
            return ColumnType::Text;
        }

        if numeric as f32 / non_empty as f32 > self.config.numeric_threshold {
            ColumnType::Numeric
        } else {
            ColumnType::Text
        }
    }
}

/// Exact count of empty-predicate matches for one column.
pub fn count_nulls(rows: &[DataRow], column: usize) -> usize {
    rows.iter().filter(|row| row.cell(column).is_empty()).count()
}

/// Recompute every column's null count against the given rows. Called
/// after each cleaning mutation so that profiles never drift from the
/// data.
pub fn recompute_null_counts(columns: &mut [ColumnProfile], rows: &[DataRow]) {
    for (idx, column) in columns.iter_mut().enumerate() {
        column.null_count = count_nulls(rows, idx);
    }
}

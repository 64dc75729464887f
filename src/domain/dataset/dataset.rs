// ============================================================
// DATASET
// ============================================================
// The central aggregate: rows, column profiles, source file name

use super::{CellValue, ColumnProfile, DataRow};
use serde::{Deserialize, Serialize};

/// The currently loaded dataset. Row order matches the source file and is
/// meaningful (previews truncate from the front). The column list is fixed
/// once a dataset is loaded; a "remove column" gesture deselects, it does
/// not delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub rows: Vec<DataRow>,
    pub columns: Vec<ColumnProfile>,
    pub source_name: String,
}

impl Dataset {
    pub fn new(rows: Vec<DataRow>, columns: Vec<ColumnProfile>, source_name: impl Into<String>) -> Self {
        Self {
            rows,
            columns,
            source_name: source_name.into(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Cell lookup by row position and column name.
    pub fn cell(&self, row: usize, column_name: &str) -> Option<&CellValue> {
        let col = self.column_index(column_name)?;
        self.rows.get(row).map(|r| r.cell(col))
    }

    /// Columns currently active for downstream use, in column order.
    pub fn selected_columns(&self) -> Vec<&ColumnProfile> {
        self.columns.iter().filter(|c| c.selected).collect()
    }

    /// Selected columns that inferred as numeric, in column order.
    pub fn selected_numeric_columns(&self) -> Vec<&ColumnProfile> {
        self.columns
            .iter()
            .filter(|c| c.selected && c.column_type.is_numeric())
            .collect()
    }

    /// Sum of per-column null counts.
    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.null_count).sum()
    }

    /// First `limit` rows, for table previews.
    pub fn preview(&self, limit: usize) -> &[DataRow] {
        let end = limit.min(self.rows.len());
        &self.rows[..end]
    }
}

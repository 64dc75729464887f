// ============================================================
// DATA ROW
// ============================================================
// One parsed row, stored positionally in column order

use super::CellValue;
use serde::{Deserialize, Serialize};

static NULL_CELL: CellValue = CellValue::Null;

/// A single dataset row. Values are stored positionally, aligned with the
/// dataset's column order; name lookup goes through the column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub values: Vec<CellValue>,
}

impl DataRow {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell at a column position. Out-of-range positions read as `Null`
    /// so that callers never have to special-case short rows.
    pub fn cell(&self, index: usize) -> &CellValue {
        self.values.get(index).unwrap_or(&NULL_CELL)
    }

    /// Pad the row with `Null` up to the given column count.
    pub fn pad_to(&mut self, width: usize) {
        while self.values.len() < width {
            self.values.push(CellValue::Null);
        }
    }
}

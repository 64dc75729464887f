// ============================================================
// DUPLICATE DETECTOR
// ============================================================
// Count repeated rows under null-normalized equality

use crate::domain::dataset::{DataRow, EngineConfig};
use std::collections::HashSet;

/// Sentinel substituted for every empty-predicate cell before keying, so
/// that null, absent and empty-string values compare equal.
const MISSING_SENTINEL: &str = "__missing__";

/// Separator between cells in a row key. A control character keeps data
/// commas from colliding with field boundaries.
const KEY_SEPARATOR: char = '\u{1f}';

/// Result of a duplicate scan. Above the configured row limit the scan is
/// skipped entirely and reported as such — never a silent partial count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateCount {
    Exact(usize),
    Skipped { row_count: usize, limit: usize },
}

impl DuplicateCount {
    pub fn exact(&self) -> Option<usize> {
        match self {
            DuplicateCount::Exact(n) => Some(*n),
            DuplicateCount::Skipped { .. } => None,
        }
    }
}

/// Canonical key for a row: cells rendered in column order with empty
/// values normalized to one sentinel. Rows with equal keys are duplicates.
pub fn normalized_key(row: &DataRow) -> String {
    let mut key = String::new();
    for (idx, value) in row.values.iter().enumerate() {
        if idx > 0 {
            key.push(KEY_SEPARATOR);
        }
        if value.is_empty() {
            key.push_str(MISSING_SENTINEL);
        } else {
            key.push_str(&value.render());
        }
    }
    key
}

/// Count repeat occurrences: a row is a duplicate when an earlier row
/// produced the same normalized key; first occurrences are never counted.
pub fn count(rows: &[DataRow], config: &EngineConfig) -> DuplicateCount {
    if rows.len() > config.duplicate_scan_limit {
        tracing::warn!(
            rows = rows.len(),
            limit = config.duplicate_scan_limit,
            "duplicate scan skipped: dataset too large"
        );
        return DuplicateCount::Skipped {
            row_count: rows.len(),
            limit: config.duplicate_scan_limit,
        };
    }

    let mut seen = HashSet::with_capacity(rows.len());
    let mut duplicates = 0usize;
    for row in rows {
        if !seen.insert(normalized_key(row)) {
            duplicates += 1;
        }
    }
    DuplicateCount::Exact(duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::CellValue;

    fn row(values: &[CellValue]) -> DataRow {
        DataRow::new(values.to_vec())
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_empty_string_and_null_compare_equal() {
        let rows = vec![
            row(&[text("1"), text("")]),
            row(&[text("1"), CellValue::Null]),
        ];
        assert_eq!(count(&rows, &EngineConfig::default()), DuplicateCount::Exact(1));
    }

    #[test]
    fn test_first_occurrence_not_counted() {
        let rows = vec![
            row(&[text("a")]),
            row(&[text("a")]),
            row(&[text("a")]),
            row(&[text("b")]),
        ];
        // Three identical rows count as two repeats.
        assert_eq!(count(&rows, &EngineConfig::default()), DuplicateCount::Exact(2));
    }

    #[test]
    fn test_distinct_rows_have_no_duplicates() {
        let rows = vec![row(&[text("a"), text("b")]), row(&[text("b"), text("a")])];
        assert_eq!(count(&rows, &EngineConfig::default()), DuplicateCount::Exact(0));
    }

    #[test]
    fn test_key_is_order_sensitive() {
        let first = row(&[text("x"), text("y")]);
        let second = row(&[text("y"), text("x")]);
        assert_ne!(normalized_key(&first), normalized_key(&second));
    }

    #[test]
    fn test_scan_skipped_above_limit() {
        let mut config = EngineConfig::default();
        config.duplicate_scan_limit = 2;
        let rows = vec![row(&[text("a")]), row(&[text("a")]), row(&[text("a")])];
        assert_eq!(
            count(&rows, &config),
            DuplicateCount::Skipped { row_count: 3, limit: 2 }
        );
    }
}

// ============================================================
// CLEANING OPERATIONS
// ============================================================
// Pure dataset transforms plus the store-applying service

use crate::application::use_cases::duplicates::normalized_key;
use crate::application::use_cases::profiler::recompute_null_counts;
use crate::domain::dataset::{
    parse_numeric, CellValue, ColumnProfile, ColumnType, DataRow, EngineConfig,
};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::store::DatasetStore;
use std::collections::HashSet;

/// Result of a null-imputation pass.
#[derive(Debug, Clone)]
pub struct ImputeOutcome {
    pub rows: Vec<DataRow>,
    pub columns: Vec<ColumnProfile>,
    pub cells_filled: usize,
}

/// Result of a numeric-coercion pass.
#[derive(Debug, Clone)]
pub struct CoerceOutcome {
    pub rows: Vec<DataRow>,
    pub columns: Vec<ColumnProfile>,
    pub cells_coerced: usize,
    pub cells_nulled: usize,
}

/// Replace every empty cell: numeric columns get the arithmetic mean of
/// the column's parseable values (0.0 when nothing parses), other columns
/// get the configured fill sentinel. Null counts drop to zero.
pub fn impute_nulls(
    rows: &[DataRow],
    columns: &[ColumnProfile],
    config: &EngineConfig,
) -> ImputeOutcome {
    let fills: Vec<CellValue> = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            if column.column_type.is_numeric() {
                CellValue::Number(column_mean(rows, idx))
            } else {
                CellValue::Text(config.text_fill_value.clone())
            }
        })
        .collect();

    let mut cells_filled = 0usize;
    let new_rows: Vec<DataRow> = rows
        .iter()
        .map(|row| {
            let values = (0..columns.len())
                .map(|idx| {
                    let cell = row.cell(idx);
                    if cell.is_empty() {
                        cells_filled += 1;
                        fills[idx].clone()
                    } else {
                        cell.clone()
                    }
                })
                .collect();
            DataRow::new(values)
        })
        .collect();

    let mut new_columns = columns.to_vec();
    for column in new_columns.iter_mut() {
        column.null_count = 0;
    }

    ImputeOutcome {
        rows: new_rows,
        columns: new_columns,
        cells_filled,
    }
}

/// Mean of the column's non-empty parseable values; 0.0 when none parse.
fn column_mean(rows: &[DataRow], column: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for row in rows {
        if let Some(value) = row.cell(column).as_number() {
            sum += value;
            count += 1;
        }
    }
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Drop every repeat occurrence under the null-normalized key, keeping
/// first occurrences. Returns the surviving rows and the removed count.
pub fn remove_duplicates(rows: &[DataRow]) -> (Vec<DataRow>, usize) {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(normalized_key(row)) {
            kept.push(row.clone());
        }
    }
    let removed = rows.len() - kept.len();
    (kept, removed)
}

/// Convert text cells of the targeted text columns to numbers.
///
/// Lenient by default: cells that fail to parse are left verbatim, and the
/// column's type becomes numeric regardless. With `strict_coercion` set,
/// unparseable non-empty cells are nulled out instead. Targets that are
/// not text-typed are ignored; zero eligible targets is an error.
pub fn coerce_numeric(
    rows: &[DataRow],
    columns: &[ColumnProfile],
    target_ids: &[u32],
    config: &EngineConfig,
) -> Result<CoerceOutcome> {
    let eligible: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| target_ids.contains(&c.id) && c.column_type == ColumnType::Text)
        .map(|(idx, _)| idx)
        .collect();

    if eligible.is_empty() {
        return Err(AppError::NoEligibleColumns(
            "No text columns among coercion targets".to_string(),
        ));
    }

    let mut cells_coerced = 0usize;
    let mut cells_nulled = 0usize;

    let new_rows: Vec<DataRow> = rows
        .iter()
        .map(|row| {
            let values = (0..columns.len())
                .map(|idx| {
                    let cell = row.cell(idx);
                    if !eligible.contains(&idx) {
                        return cell.clone();
                    }
                    match cell {
                        CellValue::Text(s) => match parse_numeric(s) {
                            Some(n) => {
                                cells_coerced += 1;
                                CellValue::Number(n)
                            }
                            None if config.strict_coercion && !cell.is_empty() => {
                                cells_nulled += 1;
                                CellValue::Null
                            }
                            None => cell.clone(),
                        },
                        _ => cell.clone(),
                    }
                })
                .collect();
            DataRow::new(values)
        })
        .collect();

    let mut new_columns = columns.to_vec();
    for &idx in &eligible {
        new_columns[idx].column_type = ColumnType::Numeric;
    }
    recompute_null_counts(&mut new_columns, &new_rows);

    Ok(CoerceOutcome {
        rows: new_rows,
        columns: new_columns,
        cells_coerced,
        cells_nulled,
    })
}

/// Keep only rows whose cells in every targeted numeric column parse as
/// finite numbers. Returns the surviving rows and the removed count.
pub fn filter_valid_rows(
    rows: &[DataRow],
    columns: &[ColumnProfile],
    target_ids: &[u32],
) -> Result<(Vec<DataRow>, usize)> {
    let eligible: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| target_ids.contains(&c.id) && c.column_type.is_numeric())
        .map(|(idx, _)| idx)
        .collect();

    if eligible.is_empty() {
        return Err(AppError::NoEligibleColumns(
            "No numeric columns among filter targets".to_string(),
        ));
    }

    let kept: Vec<DataRow> = rows
        .iter()
        .filter(|row| eligible.iter().all(|&idx| row.cell(idx).as_number().is_some()))
        .cloned()
        .collect();
    let removed = rows.len() - kept.len();
    Ok((kept, removed))
}

/// Applies the cleaning transforms to the shared store, keeping column
/// profiles consistent with the rows after every operation.
pub struct CleaningService {
    config: EngineConfig,
}

impl CleaningService {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    fn loaded<'a>(&self, store: &'a DatasetStore) -> Result<&'a crate::domain::dataset::Dataset> {
        store
            .dataset()
            .ok_or_else(|| AppError::NotFound("No dataset loaded".to_string()))
    }

    /// Impute every empty cell. Returns the number of cells filled.
    pub fn impute_nulls(&self, store: &mut DatasetStore) -> Result<usize> {
        let dataset = self.loaded(store)?;
        let outcome = impute_nulls(&dataset.rows, &dataset.columns, &self.config);
        let filled = outcome.cells_filled;
        store.update_rows(outcome.rows);
        store.update_columns(outcome.columns);
        tracing::info!(cells_filled = filled, "null imputation applied");
        Ok(filled)
    }

    /// Remove duplicate rows. Returns the number of rows removed.
    pub fn remove_duplicates(&self, store: &mut DatasetStore) -> Result<usize> {
        let dataset = self.loaded(store)?;
        let (rows, removed) = remove_duplicates(&dataset.rows);
        let mut columns = dataset.columns.clone();
        recompute_null_counts(&mut columns, &rows);
        store.update_rows(rows);
        store.update_columns(columns);
        tracing::info!(rows_removed = removed, "duplicate removal applied");
        Ok(removed)
    }

    /// Coerce the targeted text columns to numeric. Returns the number of
    /// cells converted.
    pub fn coerce_numeric(&self, store: &mut DatasetStore, target_ids: &[u32]) -> Result<usize> {
        let dataset = self.loaded(store)?;
        let outcome = coerce_numeric(&dataset.rows, &dataset.columns, target_ids, &self.config)?;
        let coerced = outcome.cells_coerced;
        store.update_rows(outcome.rows);
        store.update_columns(outcome.columns);
        tracing::info!(
            cells_coerced = coerced,
            cells_nulled = outcome.cells_nulled,
            "numeric coercion applied"
        );
        Ok(coerced)
    }

    /// Drop rows with unparseable cells in the targeted numeric columns.
    /// Returns the number of rows removed.
    pub fn filter_valid_rows(&self, store: &mut DatasetStore, target_ids: &[u32]) -> Result<usize> {
        let dataset = self.loaded(store)?;
        let (rows, removed) = filter_valid_rows(&dataset.rows, &dataset.columns, target_ids)?;
        let mut columns = dataset.columns.clone();
        recompute_null_counts(&mut columns, &rows);
        store.update_rows(rows);
        store.update_columns(columns);
        tracing::info!(rows_removed = removed, "row validity filter applied");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn numeric_column(id: u32, name: &str) -> ColumnProfile {
        let mut col = ColumnProfile::new(id, name);
        col.column_type = ColumnType::Numeric;
        col
    }

    fn text_column(id: u32, name: &str) -> ColumnProfile {
        let mut col = ColumnProfile::new(id, name);
        col.column_type = ColumnType::Text;
        col
    }

    fn amount_rows() -> Vec<DataRow> {
        vec![
            DataRow::new(vec![text("10.5"), text("A")]),
            DataRow::new(vec![CellValue::Null, CellValue::Null]),
            DataRow::new(vec![text("20"), text("B")]),
        ]
    }

    fn amount_columns() -> Vec<ColumnProfile> {
        let mut amount = numeric_column(1, "amount");
        amount.null_count = 1;
        let mut category = text_column(2, "category");
        category.null_count = 1;
        vec![amount, category]
    }

    #[test]
    fn test_impute_numeric_mean_and_text_sentinel() {
        let outcome = impute_nulls(&amount_rows(), &amount_columns(), &EngineConfig::default());

        // Mean of {10.5, 20} = 15.25.
        assert_eq!(outcome.rows[1].cell(0), &CellValue::Number(15.25));
        assert_eq!(outcome.rows[1].cell(1), &text("n/a"));
        assert_eq!(outcome.cells_filled, 2);
        assert!(outcome.columns.iter().all(|c| c.null_count == 0));
    }

    #[test]
    fn test_impute_is_idempotent() {
        let config = EngineConfig::default();
        let first = impute_nulls(&amount_rows(), &amount_columns(), &config);
        let second = impute_nulls(&first.rows, &first.columns, &config);
        assert_eq!(second.cells_filled, 0);
        assert_eq!(second.rows, first.rows);
    }

    #[test]
    fn test_impute_unparseable_numeric_column_falls_back_to_zero() {
        let rows = vec![
            DataRow::new(vec![text("abc")]),
            DataRow::new(vec![CellValue::Null]),
        ];
        let columns = vec![numeric_column(1, "broken")];
        let outcome = impute_nulls(&rows, &columns, &EngineConfig::default());
        assert_eq!(outcome.rows[1].cell(0), &CellValue::Number(0.0));
    }

    #[test]
    fn test_remove_duplicates_keeps_first_occurrence() {
        let rows = vec![
            DataRow::new(vec![text("1"), text("")]),
            DataRow::new(vec![text("1"), CellValue::Null]),
            DataRow::new(vec![text("2"), text("x")]),
        ];
        let (kept, removed) = remove_duplicates(&rows);
        assert_eq!(removed, 1);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].cell(1), &text(""));
    }

    #[test]
    fn test_coerce_is_partial_and_lenient() {
        let rows = vec![
            DataRow::new(vec![text("1")]),
            DataRow::new(vec![text("2")]),
            DataRow::new(vec![text("abc")]),
        ];
        let columns = vec![text_column(1, "mixed")];
        let outcome =
            coerce_numeric(&rows, &columns, &[1], &EngineConfig::default()).unwrap();

        assert_eq!(outcome.rows[0].cell(0), &CellValue::Number(1.0));
        assert_eq!(outcome.rows[1].cell(0), &CellValue::Number(2.0));
        // The unparseable cell stays verbatim, yet the column flips type.
        assert_eq!(outcome.rows[2].cell(0), &text("abc"));
        assert_eq!(outcome.columns[0].column_type, ColumnType::Numeric);
        assert_eq!(outcome.cells_coerced, 2);
        assert_eq!(outcome.cells_nulled, 0);
    }

    #[test]
    fn test_strict_coercion_nulls_unparseable_cells() {
        let rows = vec![DataRow::new(vec![text("1")]), DataRow::new(vec![text("abc")])];
        let columns = vec![text_column(1, "mixed")];
        let outcome = coerce_numeric(&rows, &columns, &[1], &EngineConfig::strict()).unwrap();

        assert_eq!(outcome.rows[1].cell(0), &CellValue::Null);
        assert_eq!(outcome.cells_nulled, 1);
        assert_eq!(outcome.columns[0].null_count, 1);
    }

    #[test]
    fn test_coerce_without_text_targets_is_rejected() {
        let rows = vec![DataRow::new(vec![text("1")])];
        let columns = vec![numeric_column(1, "already_numeric")];
        let err = coerce_numeric(&rows, &columns, &[1], &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::NoEligibleColumns(_)));
    }

    #[test]
    fn test_filter_valid_rows_drops_unparseable() {
        let rows = vec![
            DataRow::new(vec![text("1"), text("ok")]),
            DataRow::new(vec![text("oops"), text("bad")]),
            DataRow::new(vec![CellValue::Null, text("bad")]),
        ];
        let columns = vec![numeric_column(1, "amount"), text_column(2, "note")];
        let (kept, removed) = filter_valid_rows(&rows, &columns, &[1]).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_filter_without_numeric_targets_is_rejected() {
        let rows = vec![DataRow::new(vec![text("x")])];
        let columns = vec![text_column(1, "note")];
        let err = filter_valid_rows(&rows, &columns, &[1]).unwrap_err();
        assert!(matches!(err, AppError::NoEligibleColumns(_)));
    }

    #[test]
    fn test_service_keeps_null_counts_consistent() {
        let mut store = DatasetStore::new();
        store.replace(amount_rows(), amount_columns(), "sample.csv");
        let service = CleaningService::new(EngineConfig::default());

        let filled = service.impute_nulls(&mut store).unwrap();
        assert_eq!(filled, 2);

        let dataset = store.dataset().unwrap();
        for (idx, column) in dataset.columns.iter().enumerate() {
            let actual = dataset.rows.iter().filter(|r| r.cell(idx).is_empty()).count();
            assert_eq!(column.null_count, actual);
            assert_eq!(column.null_count, 0);
        }
    }

    #[test]
    fn test_service_requires_loaded_dataset() {
        let mut store = DatasetStore::new();
        let service = CleaningService::new(EngineConfig::default());
        assert!(matches!(
            service.impute_nulls(&mut store),
            Err(AppError::NotFound(_))
        ));
    }
}

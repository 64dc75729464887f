// ============================================================
// DATASET ANALYSIS
// ============================================================
// Read-side summary statistics for the loaded dataset

use crate::domain::dataset::{ColumnType, Dataset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many top values to report per text column.
const TOP_VALUE_LIMIT: usize = 5;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumnStats {
    pub name: String,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Number of parseable, non-empty values the stats are computed over.
    pub count: usize,
}

/// One value/frequency pair in a categorical breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Distinct-value statistics for one text column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalColumnStats {
    pub name: String,
    pub distinct_values: usize,
    pub top_values: Vec<ValueCount>,
}

/// Aggregate report over the whole dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    pub total_rows: usize,
    pub total_columns: usize,
    pub selected_columns: usize,
    pub total_nulls: usize,
    /// Non-null cells as a percentage of all cells.
    pub completeness_pct: f64,
    pub numeric: Vec<NumericColumnStats>,
    pub categorical: Vec<CategoricalColumnStats>,
}

/// Compute the dataset report. Pure read-side computation; an empty
/// dataset yields an all-zero report.
pub fn summarize(dataset: &Dataset) -> DatasetReport {
    let total_rows = dataset.row_count();
    let total_columns = dataset.column_count();
    let total_nulls = dataset.total_nulls();
    let total_cells = total_rows * total_columns;

    let completeness_pct = if total_cells > 0 {
        (total_cells - total_nulls) as f64 / total_cells as f64 * 100.0
    } else {
        0.0
    };

    let mut numeric = Vec::new();
    let mut categorical = Vec::new();

    for (idx, column) in dataset.columns.iter().enumerate() {
        match column.column_type {
            ColumnType::Numeric => {
                if let Some(stats) = numeric_stats(dataset, idx, &column.name) {
                    numeric.push(stats);
                }
            }
            ColumnType::Text => categorical.push(categorical_stats(dataset, idx, &column.name)),
            ColumnType::Unknown => {}
        }
    }

    DatasetReport {
        total_rows,
        total_columns,
        selected_columns: dataset.selected_columns().len(),
        total_nulls,
        completeness_pct,
        numeric,
        categorical,
    }
}

fn numeric_stats(dataset: &Dataset, column: usize, name: &str) -> Option<NumericColumnStats> {
    let mut values: Vec<f64> = dataset
        .rows
        .iter()
        .filter_map(|row| row.cell(column).as_number())
        .collect();

    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    // Lower-middle element, matching the source's index-based median.
    let median = values[count / 2];

    Some(NumericColumnStats {
        name: name.to_string(),
        mean,
        median,
        min: values[0],
        max: values[count - 1],
        count,
    })
}

fn categorical_stats(dataset: &Dataset, column: usize, name: &str) -> CategoricalColumnStats {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &dataset.rows {
        let cell = row.cell(column);
        if cell.is_empty() {
            continue;
        }
        *counts.entry(cell.render()).or_insert(0) += 1;
    }

    let distinct_values = counts.len();
    let mut top_values: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // Count descending, then value ascending for a stable report.
    top_values.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));
    top_values.truncate(TOP_VALUE_LIMIT);

    CategoricalColumnStats {
        name: name.to_string(),
        distinct_values,
        top_values,
    }
}

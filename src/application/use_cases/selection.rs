// ============================================================
// COLUMN SELECTION
// ============================================================
// Toggle, reset and filter the active-column flags

use crate::domain::dataset::{ColumnProfile, ColumnType};

/// Type filter for column searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Numeric,
    Text,
}

impl TypeFilter {
    fn matches(&self, column_type: ColumnType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Numeric => column_type == ColumnType::Numeric,
            TypeFilter::Text => column_type == ColumnType::Text,
        }
    }
}

/// Flip the selection flag of the column with the given id.
///
/// An unknown id is a logged no-op, not an error: the UI can hold a stale
/// id across a dataset reload. Returns whether a column was toggled.
pub fn toggle(columns: &mut [ColumnProfile], id: u32) -> bool {
    match columns.iter_mut().find(|c| c.id == id) {
        Some(column) => {
            column.selected = !column.selected;
            true
        }
        None => {
            tracing::warn!(column_id = id, "toggle ignored: unknown column id");
            false
        }
    }
}

/// Re-select every column.
pub fn reset_all(columns: &mut [ColumnProfile]) {
    for column in columns.iter_mut() {
        column.selected = true;
    }
}

/// Filtered read-only view of the columns: case-insensitive substring
/// match on the name, intersected with the type filter. Computed on
/// demand from the current state; nothing is mutated.
pub fn filter<'a>(
    columns: &'a [ColumnProfile],
    search_term: &str,
    type_filter: TypeFilter,
) -> Vec<&'a ColumnProfile> {
    let term = search_term.to_lowercase();
    columns
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&term))
        .filter(|c| type_filter.matches(c.column_type))
        .collect()
}

// ============================================================
// COLUMN PROFILE
// ============================================================
// Per-column metadata: inferred type, selection flag, null count

use serde::{Deserialize, Serialize};

/// Semantic type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// More than half of the sampled non-empty values parse as numbers.
    Numeric,

    /// Everything else: categorical labels, free text, identifiers.
    Text,

    /// Transitional state before inference has run.
    Unknown,
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Metadata about one dataset column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Stable identity assigned at parse time (1-based position in the
    /// header line). Never reused; toggle and coercion target columns by
    /// this id.
    pub id: u32,

    /// Header string. Uniqueness within a dataset is not enforced.
    pub name: String,

    /// Inferred semantic type.
    pub column_type: ColumnType,

    /// Whether the column is active for downstream use. Defaults to true.
    pub selected: bool,

    /// Count of rows whose cell for this column matches the empty
    /// predicate. Recomputed after every cleaning mutation, never
    /// incrementally maintained.
    pub null_count: usize,
}

impl ColumnProfile {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            column_type: ColumnType::Unknown,
            selected: true,
            null_count: 0,
        }
    }
}

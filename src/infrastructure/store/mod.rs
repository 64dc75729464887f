// ============================================================
// DATASET STORE
// ============================================================
// Explicit shared container for the currently loaded dataset

use crate::domain::dataset::{ColumnProfile, DataRow, Dataset};

/// The single shared resource of the engine: the currently loaded dataset.
///
/// Created empty at process start; populated exactly once per upload
/// (`replace` discards prior content, there are no merge semantics); reset
/// only by loading a new file or calling `clear`.
///
/// Writers are expected to be sequential — the engine runs in a
/// single-user, action-driven model. `version` increments on every write
/// so that a multi-actor embedding can layer optimistic write checks on
/// top without changing the store itself.
#[derive(Debug, Default)]
pub struct DatasetStore {
    dataset: Option<Dataset>,
    version: u64,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Monotonic write counter. Starts at 0 in the empty state.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn dataset_mut(&mut self) -> Option<&mut Dataset> {
        if self.dataset.is_some() {
            self.version += 1;
        }
        self.dataset.as_mut()
    }

    /// Fully replace the stored dataset with freshly loaded content.
    pub fn replace(
        &mut self,
        rows: Vec<DataRow>,
        columns: Vec<ColumnProfile>,
        source_name: impl Into<String>,
    ) -> &Dataset {
        let dataset = Dataset::new(rows, columns, source_name);
        tracing::info!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            source = %dataset.source_name,
            "dataset replaced"
        );
        self.version += 1;
        self.dataset.insert(dataset)
    }

    /// Reset the store to its initial empty state.
    pub fn clear(&mut self) {
        if self.dataset.take().is_some() {
            self.version += 1;
            tracing::info!("dataset cleared");
        }
    }

    /// Replace the row collection. The caller is responsible for keeping
    /// rows and columns mutually consistent. Returns false (and does
    /// nothing) when no dataset is loaded.
    pub fn update_rows(&mut self, rows: Vec<DataRow>) -> bool {
        match self.dataset.as_mut() {
            Some(dataset) => {
                dataset.rows = rows;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Replace the column profiles. Same consistency contract as
    /// `update_rows`.
    pub fn update_columns(&mut self, columns: Vec<ColumnProfile>) -> bool {
        match self.dataset.as_mut() {
            Some(dataset) => {
                dataset.columns = columns;
                self.version += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::CellValue;

    fn row(value: &str) -> DataRow {
        DataRow::new(vec![CellValue::Text(value.to_string())])
    }

    #[test]
    fn test_starts_empty() {
        let store = DatasetStore::new();
        assert!(!store.is_loaded());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_replace_discards_prior_content() {
        let mut store = DatasetStore::new();
        store.replace(vec![row("a")], vec![ColumnProfile::new(1, "x")], "first.csv");
        store.replace(vec![row("b"), row("c")], vec![ColumnProfile::new(1, "y")], "second.csv");

        let dataset = store.dataset().unwrap();
        assert_eq!(dataset.source_name, "second.csv");
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_updates_require_loaded_dataset() {
        let mut store = DatasetStore::new();
        assert!(!store.update_rows(vec![row("a")]));
        assert!(!store.update_columns(vec![ColumnProfile::new(1, "x")]));
        assert_eq!(store.version(), 0);

        store.replace(vec![row("a")], vec![ColumnProfile::new(1, "x")], "data.csv");
        assert!(store.update_rows(vec![row("b")]));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut store = DatasetStore::new();
        store.replace(vec![row("a")], vec![ColumnProfile::new(1, "x")], "data.csv");
        store.clear();
        assert!(!store.is_loaded());
        // Clearing an already-empty store is a no-op.
        let version = store.version();
        store.clear();
        assert_eq!(store.version(), version);
    }
}

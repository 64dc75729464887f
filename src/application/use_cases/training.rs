// ============================================================
// TRAINING BOUNDARY
// ============================================================
// Readiness gating, snapshot preparation and the trainer seam

use crate::domain::dataset::{Dataset, EngineConfig};
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Training run configuration, passed through to the trainer unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyperparameters {
    pub model_type: String,
    pub test_size: f64,
    pub epochs: u32,
    pub batch_size: u32,
    pub learning_rate: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            model_type: "random_forest".to_string(),
            test_size: 0.2,
            epochs: 100,
            batch_size: 32,
            learning_rate: 0.001,
        }
    }
}

/// Result record returned by the trainer. The engine passes it through to
/// the report view without interpreting or validating the numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Heuristic accuracy in percent (0..100), as reported by the trainer.
    pub accuracy: f64,
    pub loss: f64,
    pub val_accuracy: f64,
    pub val_loss: f64,
    pub epochs_completed: u32,
    pub train_time_seconds: f64,
}

/// Immutable feature/label snapshot handed to the trainer.
///
/// Features come from every selected numeric column except the last; the
/// last selected numeric column is the label. Unparseable feature cells
/// become 0.0; rows whose label cell does not parse are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSnapshot {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
    pub feature_columns: Vec<String>,
    pub label_column: String,
}

impl TrainingSnapshot {
    pub fn prepare(dataset: &Dataset, config: &EngineConfig) -> Result<Self> {
        readiness(dataset, config)?;

        let numeric: Vec<(usize, &crate::domain::dataset::ColumnProfile)> = dataset
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.selected && c.column_type.is_numeric())
            .collect();

        let (label_index, label_profile) = numeric[numeric.len() - 1];
        let feature_profiles = &numeric[..numeric.len() - 1];
        let feature_indexes: Vec<usize> = feature_profiles.iter().map(|(idx, _)| *idx).collect();

        let mut features = Vec::new();
        let mut labels = Vec::new();
        for row in &dataset.rows {
            let label = match row.cell(label_index).as_number() {
                Some(value) => value,
                None => continue,
            };
            features.push(
                feature_indexes
                    .iter()
                    .map(|&idx| row.cell(idx).as_number().unwrap_or(0.0))
                    .collect(),
            );
            labels.push(label);
        }

        if features.is_empty() {
            return Err(AppError::InsufficientData(
                "No valid rows for training".to_string(),
            ));
        }

        Ok(Self {
            features,
            labels,
            feature_columns: feature_profiles.iter().map(|(_, p)| p.name.clone()).collect(),
            label_column: label_profile.name.clone(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    pub fn feature_count(&self) -> usize {
        self.feature_columns.len()
    }
}

/// Cheap readiness query to run before attempting a handoff: training
/// needs at least `min_numeric_columns` selected numeric columns.
pub fn readiness(dataset: &Dataset, config: &EngineConfig) -> Result<()> {
    let numeric = dataset.selected_numeric_columns().len();
    if numeric < config.min_numeric_columns {
        return Err(AppError::InsufficientData(format!(
            "Training needs at least {} selected numeric columns, found {}",
            config.min_numeric_columns, numeric
        )));
    }
    Ok(())
}

/// External training collaborator. The engine hands over an immutable
/// snapshot and passes the outcome through unchanged.
///
/// Sequencing contract: the snapshot must stay a stable input for the
/// collaborator, so callers must not apply cleaning operations between
/// taking a snapshot and the completion of `train`. The engine does not
/// enforce this; it is a caller-level obligation.
#[async_trait]
pub trait ModelTrainer: Send + Sync {
    async fn train(
        &self,
        snapshot: &TrainingSnapshot,
        params: &Hyperparameters,
    ) -> Result<TrainingOutcome>;
}

/// Gate, snapshot and hand off in one step.
pub async fn run_training(
    dataset: &Dataset,
    trainer: &dyn ModelTrainer,
    params: &Hyperparameters,
    config: &EngineConfig,
) -> Result<TrainingOutcome> {
    let snapshot = TrainingSnapshot::prepare(dataset, config)?;
    tracing::info!(
        rows = snapshot.row_count(),
        features = snapshot.feature_count(),
        label = %snapshot.label_column,
        model = %params.model_type,
        "training handoff"
    );
    trainer.train(&snapshot, params).await
}

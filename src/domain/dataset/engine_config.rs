// ============================================================
// ENGINE CONFIGURATION
// ============================================================
// Tunable constants for profiling, duplicate detection and cleaning

use serde::{Deserialize, Serialize};

/// Configuration for the dataset-preparation engine.
///
/// The sample size and the duplicate scan limit are tunables, not
/// invariants; observed deployments have run with several different
/// values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of rows sampled for column type inference (default: 100)
    pub type_sample_rows: usize,

    /// Fraction of numeric-parseable non-empty sampled values a column
    /// must strictly exceed to classify as numeric (default: 0.5)
    pub numeric_threshold: f32,

    /// Row count above which duplicate detection is skipped and reported
    /// as unavailable instead of silently truncated (default: 100000)
    pub duplicate_scan_limit: usize,

    /// Replacement value imputed into empty cells of text columns
    /// (default: "n/a")
    pub text_fill_value: String,

    /// When true, numeric coercion nulls out cells that fail to parse
    /// instead of leaving them verbatim (default: false)
    pub strict_coercion: bool,

    /// Minimum selected numeric columns required before a training
    /// handoff (default: 2)
    pub min_numeric_columns: usize,

    /// Rows shown in dataset previews (default: 15)
    pub preview_rows: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            type_sample_rows: 100,
            numeric_threshold: 0.5,
            duplicate_scan_limit: 100_000,
            text_fill_value: "n/a".to_string(),
            strict_coercion: false,
            min_numeric_columns: 2,
            preview_rows: 15,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config variant where coercion nulls unparseable cells instead of
    /// keeping them verbatim
    pub fn strict() -> Self {
        Self {
            strict_coercion: true,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.type_sample_rows == 0 {
            return Err("type_sample_rows must be > 0".to_string());
        }
        if !(0.0..1.0).contains(&self.numeric_threshold) {
            return Err("numeric_threshold must be in [0.0, 1.0)".to_string());
        }
        if self.duplicate_scan_limit == 0 {
            return Err("duplicate_scan_limit must be > 0".to_string());
        }
        if self.min_numeric_columns < 2 {
            return Err("min_numeric_columns must be >= 2".to_string());
        }
        if self.preview_rows == 0 {
            return Err("preview_rows must be > 0".to_string());
        }
        Ok(())
    }
}

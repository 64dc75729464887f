// ============================================================
// DATALIMPIA
// ============================================================
// CSV dataset cleaning and preparation engine: parse an uploaded
// file, profile and select columns, clean the rows, and hand a
// feature/label snapshot to an external trainer.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::analysis::{summarize, DatasetReport};
pub use application::use_cases::cleaning::CleaningService;
pub use application::use_cases::duplicates::DuplicateCount;
pub use application::use_cases::ingestion::{DatasetLoader, LoadSummary};
pub use application::use_cases::profiler::ColumnProfiler;
pub use application::use_cases::selection::TypeFilter;
pub use application::use_cases::training::{
    Hyperparameters, ModelTrainer, TrainingOutcome, TrainingSnapshot,
};
pub use domain::dataset::{CellValue, ColumnProfile, ColumnType, DataRow, Dataset, EngineConfig};
pub use domain::error::{AppError, Result};
pub use infrastructure::csv::{CsvParser, ParsedCsv, RunReport};
pub use infrastructure::store::DatasetStore;

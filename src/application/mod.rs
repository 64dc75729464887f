pub mod use_cases;

pub use use_cases::cleaning::CleaningService;
pub use use_cases::ingestion::DatasetLoader;
pub use use_cases::profiler::ColumnProfiler;

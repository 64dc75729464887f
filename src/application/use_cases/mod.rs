pub mod analysis;
pub mod cleaning;
pub mod duplicates;
pub mod ingestion;
pub mod profiler;
pub mod selection;
pub mod training;

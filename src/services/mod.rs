pub mod export;
pub mod stats;

pub use export::{ExportService, object_key};
pub use stats::{FetchError, PipelineOptions, StatsService};

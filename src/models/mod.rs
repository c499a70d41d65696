//! Data models and structures for the network metrics plotter

pub mod config;
pub mod samples;
pub mod summary;

// Re-export main model types
pub use config::Config;
pub use samples::{MeasurementSet, SampleSeries};
pub use summary::{EfficiencySeries, MetricsSummary, SummaryStatistics};

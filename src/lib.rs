//! Network Performance Plots
//!
//! Summarizes a goodput/throughput/jitter measurement run into efficiency,
//! overhead and jitter stability figures, prints a short report and renders
//! the series as SVG charts.

pub mod app;
pub mod charts;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, EfficiencySeries, MeasurementSet, MetricsSummary, SampleSeries, SummaryStatistics};
pub use stats::MetricsSummarizer;
pub use charts::{ChartArtifacts, ChartRenderer};
pub use output::{ColoredFormatter, JsonFormatter, OutputFormatterFactory, PlainFormatter, ReportCoordinator, ReportFormatter};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_OUTPUT_DIR: &str = "network_plots";
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Fixed y-axis range of the jitter chart, in microseconds
    pub const JITTER_AXIS_RANGE: (f64, f64) = (16.12, 16.22);

    /// Pixel size of the three-panel chart
    pub const COMBINED_CHART_SIZE: (u32, u32) = (1500, 1200);

    /// Pixel size of the single-panel charts
    pub const SINGLE_CHART_SIZE: (u32, u32) = (1000, 500);
}

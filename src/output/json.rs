//! JSON report for scripts and dashboards

use super::formatter::ReportFormatter;
use super::ReportContext;
use crate::{charts::ChartArtifacts, error::Result, models::SummaryStatistics};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// One row of the per-sample table
#[derive(Debug, Serialize)]
struct SampleRow {
    time: usize,
    goodput: Option<f64>,
    throughput: Option<f64>,
    efficiency: Option<f64>,
    jitter: Option<f64>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    statistics: &'a SummaryStatistics,
    efficiency: &'a [f64],
    samples: Vec<SampleRow>,
    output_dir: &'a Path,
    charts: Option<&'a ChartArtifacts>,
    generated_at: DateTime<Utc>,
    version: &'static str,
}

/// Serializes the report as pretty-printed JSON
///
/// Non-finite numbers have no JSON form and come out as `null`.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, report: &ReportContext<'_>) -> Result<String> {
        let set = report.measurements;
        let efficiency = &report.summary.efficiency.values;

        let samples = (0..set.len())
            .map(|i| SampleRow {
                time: i,
                goodput: set.goodput.values.get(i).copied(),
                throughput: set.throughput.values.get(i).copied(),
                efficiency: efficiency.get(i).copied(),
                jitter: set.jitter.values.get(i).copied(),
            })
            .collect();

        let document = JsonReport {
            statistics: &report.summary.statistics,
            efficiency,
            samples,
            output_dir: report.output_dir,
            charts: report.charts,
            generated_at: Utc::now(),
            version: crate::VERSION,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

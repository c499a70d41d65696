//! Report formatting and display
//!
//! Text reports come in plain and colored flavors; `--format json` swaps
//! in the JSON formatter.

mod formatter;
mod colored;
mod json;

pub use formatter::{
    ReportFormatter,
    PlainFormatter,
    FormattingOptions,
    Column,
    Alignment,
    RowData,
    REPORT_TITLE,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
    OverheadLevel,
};
pub use json::JsonFormatter;

use crate::{
    charts::ChartArtifacts,
    error::Result,
    models::{Config, MeasurementSet, MetricsSummary},
    types::ReportFormat,
};
use std::io::Write;
use std::path::Path;

/// Everything a formatter needs to produce one report
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub measurements: &'a MeasurementSet,
    pub summary: &'a MetricsSummary,
    /// `None` when rendering was skipped
    pub charts: Option<&'a ChartArtifacts>,
    pub output_dir: &'a Path,
}

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter for the given format and preferences
    pub fn create_formatter(format: ReportFormat, enable_color: bool, verbose: bool) -> Box<dyn ReportFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
            table_borders: true,
        };

        match format {
            ReportFormat::Json => Box::new(JsonFormatter),
            ReportFormat::Text if enable_color => Box::new(ColoredFormatter::new(options)),
            ReportFormat::Text => Box::new(PlainFormatter::new(options)),
        }
    }

    /// Create the formatter a configuration asks for
    pub fn from_config(config: &Config) -> Box<dyn ReportFormatter> {
        Self::create_formatter(config.report_format, config.enable_color, config.verbose)
    }
}

/// Formats reports and writes them to stdout
pub struct ReportCoordinator {
    formatter: Box<dyn ReportFormatter>,
}

impl ReportCoordinator {
    pub fn new(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }

    pub fn formatter_name(&self) -> &'static str {
        self.formatter.name()
    }

    /// Format a report without printing it
    pub fn render(&self, report: &ReportContext<'_>) -> Result<String> {
        self.formatter.format_report(report)
    }

    /// Format a report and print it to stdout
    pub fn display(&self, report: &ReportContext<'_>) -> Result<()> {
        let output = self.render(report)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_selects_formatter() {
        let json = OutputFormatterFactory::create_formatter(ReportFormat::Json, true, false);
        assert_eq!(json.name(), "json");

        let colored = OutputFormatterFactory::create_formatter(ReportFormat::Text, true, false);
        assert_eq!(colored.name(), "colored");

        let plain = OutputFormatterFactory::create_formatter(ReportFormat::Text, false, true);
        assert_eq!(plain.name(), "plain");
    }

    #[test]
    fn test_factory_from_config() {
        let config = Config {
            report_format: ReportFormat::Json,
            ..Config::default()
        };
        let coordinator = ReportCoordinator::new(OutputFormatterFactory::from_config(&config));
        assert_eq!(coordinator.formatter_name(), "json");
    }
}

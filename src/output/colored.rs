//! Colored report formatter
//!
//! Same layout as the plain report, with ANSI colors on the header, the
//! figures and the footer. Efficiency and overhead are colored by how much
//! of the link capacity is lost to protocol overhead.

use super::formatter::{FormattingOptions, PlainFormatter, ReportFormatter, REPORT_TITLE};
use super::ReportContext;
use crate::{error::Result, models::SummaryStatistics};
use colored::*;
use std::path::Path;

/// Overhead classification used for color coding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverheadLevel {
    /// Below 5% overhead
    Low,
    /// 5% up to 15%
    Moderate,
    /// 15% and above, or not a finite number
    High,
}

impl OverheadLevel {
    /// Classify an overhead percentage
    pub fn from_overhead(overhead: f64) -> Self {
        if !overhead.is_finite() || overhead >= 15.0 {
            Self::High
        } else if overhead >= 5.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Moderate => Color::Yellow,
            Self::High => Color::Red,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub label: Color,
    pub value: Color,
    pub jitter: Color,
    pub footer: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            label: Color::White,
            value: Color::Cyan,
            jitter: Color::Magenta,
            footer: Color::Green,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self::with_color_scheme(options, ColorScheme::default())
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        Self {
            plain_formatter: PlainFormatter::new(options.clone()),
            options,
            color_scheme,
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    fn format_header(&self, title: &str) -> String {
        let header = self.plain_formatter.format_header(title);
        if self.options.enable_color {
            header.color(self.color_scheme.header).bold().to_string()
        } else {
            header
        }
    }

    fn format_line(&self, label: &str, value: &str, unit: &str, color: Color) -> String {
        let value = if self.options.enable_color {
            value.color(color).bold()
        } else {
            value.normal()
        };
        format!("{} {}{}", self.colorize(label, self.color_scheme.label), value, unit)
    }

    fn format_statistics(&self, stats: &SummaryStatistics) -> String {
        let level = OverheadLevel::from_overhead(stats.overhead).color();

        [
            self.format_line("Average Goodput:", &stats.format_mean_goodput(), " Mbps", self.color_scheme.value),
            self.format_line("Average Throughput:", &stats.format_mean_throughput(), " Mbps", self.color_scheme.value),
            self.format_line("Average Efficiency:", &stats.format_mean_efficiency(), "%", level),
            self.format_line("Average Overhead:", &stats.format_overhead(), "%", level),
            self.format_line("Jitter Stability:", &stats.format_jitter_std_dev(), " μs std.dev.", self.color_scheme.jitter),
        ]
        .join("\n")
    }

    fn format_footer(&self, output_dir: &Path) -> String {
        self.colorize(&self.plain_formatter.format_footer(output_dir), self.color_scheme.footer)
            .to_string()
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_report(&self, report: &ReportContext<'_>) -> Result<String> {
        let mut sections = vec![format!(
            "{}\n{}",
            self.format_header(REPORT_TITLE),
            self.format_statistics(&report.summary.statistics)
        )];

        if self.options.verbose_mode {
            sections.push(
                self.plain_formatter
                    .format_sample_table(report.measurements, &report.summary.efficiency)?,
            );
        }

        if report.charts.is_some() {
            sections.push(self.format_footer(report.output_dir));
        }

        Ok(sections.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "colored"
    }
}

//! Core formatting trait and the plain text report
//!
//! The plain report reproduces the classic console output:
//!
//! ```text
//! === Network Performance Metrics ===
//! Average Goodput: 930.23 Mbps
//! Average Throughput: 968.39 Mbps
//! Average Efficiency: 96.06%
//! Average Overhead: 3.94%
//! Jitter Stability: 0.0206 μs std.dev.
//!
//! Plots saved to network_plots directory
//! ```

use super::ReportContext;
use crate::{
    error::{AppError, Result},
    models::{EfficiencySeries, MeasurementSet, SummaryStatistics},
};
use std::fmt::Write as _;
use std::path::Path;

pub const REPORT_TITLE: &str = "Network Performance Metrics";

/// Main trait for report formatting
pub trait ReportFormatter: Send + Sync {
    /// Format the complete report
    fn format_report(&self, report: &ReportContext<'_>) -> Result<String>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Append the per-sample table
    pub verbose_mode: bool,
    /// Show table borders
    pub table_borders: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
            table_borders: true,
        }
    }
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub alignment: Alignment,
}

impl Column {
    pub fn new(header: &str, alignment: Alignment) -> Self {
        Self {
            header: header.to_string(),
            alignment,
        }
    }
}

/// Text alignment options
#[derive(Debug, Clone)]
pub enum Alignment {
    Left,
    Right,
}

/// Row data for table formatting
pub type RowData = Vec<String>;

pub(crate) fn fmt_error(e: std::fmt::Error) -> AppError {
    AppError::internal(format!("Failed to format report: {}", e))
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormattingOptions {
        &self.options
    }

    /// `=== title ===`
    pub fn format_header(&self, title: &str) -> String {
        format!("=== {} ===", title)
    }

    /// The five summary lines
    pub fn format_statistics(&self, stats: &SummaryStatistics) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "Average Goodput: {} Mbps", stats.format_mean_goodput()).map_err(fmt_error)?;
        writeln!(output, "Average Throughput: {} Mbps", stats.format_mean_throughput()).map_err(fmt_error)?;
        writeln!(output, "Average Efficiency: {}%", stats.format_mean_efficiency()).map_err(fmt_error)?;
        writeln!(output, "Average Overhead: {}%", stats.format_overhead()).map_err(fmt_error)?;
        write!(output, "Jitter Stability: {} μs std.dev.", stats.format_jitter_std_dev()).map_err(fmt_error)?;

        Ok(output)
    }

    /// Per-sample table (time, goodput, throughput, efficiency, jitter)
    pub fn format_sample_table(&self, set: &MeasurementSet, efficiency: &EfficiencySeries) -> Result<String> {
        let columns = vec![
            Column::new("Time (s)", Alignment::Right),
            Column::new(&set.goodput.label(), Alignment::Right),
            Column::new(&set.throughput.label(), Alignment::Right),
            Column::new("Efficiency (%)", Alignment::Right),
            Column::new(&set.jitter.label(), Alignment::Right),
        ];

        let rows: Vec<RowData> = (0..set.len())
            .map(|i| {
                vec![
                    i.to_string(),
                    format_cell(set.goodput.values.get(i), 3),
                    format_cell(set.throughput.values.get(i), 3),
                    format_cell(efficiency.values.get(i), 2),
                    format_cell(set.jitter.values.get(i), 3),
                ]
            })
            .collect();

        Ok(self.create_table(&columns, &rows))
    }

    /// `Plots saved to <dir> directory`
    pub fn format_footer(&self, output_dir: &Path) -> String {
        format!("Plots saved to {} directory", output_dir.display())
    }

    /// Create a table with the given columns and data
    pub(crate) fn create_table(&self, columns: &[Column], rows: &[RowData]) -> String {
        let widths = calculate_column_widths(columns, rows);
        let borders = self.options.table_borders;
        let mut lines = Vec::with_capacity(rows.len() + 4);

        if borders {
            lines.push(create_horizontal_border(&widths));
        }
        let headers: Vec<String> = columns.iter().map(|c| c.header.clone()).collect();
        lines.push(create_row(&headers, &widths, columns, borders));
        if borders {
            lines.push(create_horizontal_border(&widths));
        }

        for row in rows {
            lines.push(create_row(row, &widths, columns, borders));
        }

        if borders {
            lines.push(create_horizontal_border(&widths));
        }

        lines.join("\n")
    }
}

impl ReportFormatter for PlainFormatter {
    fn format_report(&self, report: &ReportContext<'_>) -> Result<String> {
        let mut sections = vec![format!(
            "{}\n{}",
            self.format_header(REPORT_TITLE),
            self.format_statistics(&report.summary.statistics)?
        )];

        if self.options.verbose_mode {
            sections.push(self.format_sample_table(report.measurements, &report.summary.efficiency)?);
        }

        if report.charts.is_some() {
            sections.push(self.format_footer(report.output_dir));
        }

        Ok(sections.join("\n\n"))
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

fn format_cell(value: Option<&f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

/// Width of the widest cell per column, in characters
fn calculate_column_widths(columns: &[Column], rows: &[RowData]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .fold(column.header.chars().count(), usize::max)
        })
        .collect()
}

fn create_row(data: &[String], widths: &[usize], columns: &[Column], borders: bool) -> String {
    let mut row = String::new();

    if borders {
        row.push('|');
    }

    for ((cell, &width), column) in data.iter().zip(widths).zip(columns) {
        let padded_cell = align_text(cell, width, &column.alignment);

        if borders {
            row.push(' ');
            row.push_str(&padded_cell);
            row.push_str(" |");
        } else {
            row.push_str(&padded_cell);
            row.push_str("  ");
        }
    }

    row.trim_end().to_string()
}

fn create_horizontal_border(widths: &[usize]) -> String {
    let mut border = String::from("+");
    for &width in widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border
}

fn align_text(text: &str, width: usize, alignment: &Alignment) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let padding = " ".repeat(width - len);
    match alignment {
        Alignment::Left => format!("{}{}", text, padding),
        Alignment::Right => format!("{}{}", padding, text),
    }
}

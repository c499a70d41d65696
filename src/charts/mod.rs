//! SVG chart rendering for a summarized measurement run
//!
//! Three files are written into the output directory:
//! - `combined_metrics.svg`: rates, jitter and efficiency stacked in one image
//! - `throughput_comparison.svg`: goodput against throughput
//! - `jitter_analysis.svg`: jitter alone
//!
//! Drawing code works with `anyhow` so each step can carry its own context;
//! failures leave this module as `AppError::Render`.

use crate::{
    defaults::{COMBINED_CHART_SIZE, JITTER_AXIS_RANGE, SINGLE_CHART_SIZE},
    error::{AppError, ErrorContext, Result},
    models::{MeasurementSet, MetricsSummary},
};
use anyhow::Context as _;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const COMBINED_METRICS_FILE: &str = "combined_metrics.svg";
pub const THROUGHPUT_COMPARISON_FILE: &str = "throughput_comparison.svg";
pub const JITTER_ANALYSIS_FILE: &str = "jitter_analysis.svg";

const PURPLE: RGBColor = RGBColor(128, 0, 128);
const FONT: &str = "sans-serif";
/// Jitter marker outline in pixels around the sample point
const DIAMOND: [(i32, i32); 4] = [(0, -6), (6, 0), (0, 6), (-6, 0)];

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Paths of the images written by one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArtifacts {
    pub combined_metrics: PathBuf,
    pub throughput_comparison: PathBuf,
    pub jitter_analysis: PathBuf,
}

impl ChartArtifacts {
    fn in_dir(dir: &Path) -> Self {
        Self {
            combined_metrics: dir.join(COMBINED_METRICS_FILE),
            throughput_comparison: dir.join(THROUGHPUT_COMPARISON_FILE),
            jitter_analysis: dir.join(JITTER_ANALYSIS_FILE),
        }
    }

    /// All written paths, in render order
    pub fn paths(&self) -> [&Path; 3] {
        [
            self.combined_metrics.as_path(),
            self.throughput_comparison.as_path(),
            self.jitter_analysis.as_path(),
        ]
    }
}

/// Renders measurement charts into one directory
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if needed and write all three charts
    pub fn render(&self, set: &MeasurementSet, summary: &MetricsSummary) -> Result<ChartArtifacts> {
        // anyhow's Context is also in scope here
        ErrorContext::with_context(std::fs::create_dir_all(&self.output_dir), || {
            format!("Failed to create output directory '{}'", self.output_dir.display())
        })?;

        let artifacts = ChartArtifacts::in_dir(&self.output_dir);

        render_combined(&artifacts.combined_metrics, set, summary)
            .map_err(|e| AppError::render(format!("{:#}", e)))?;
        render_throughput_comparison(&artifacts.throughput_comparison, set)
            .map_err(|e| AppError::render(format!("{:#}", e)))?;
        render_jitter_analysis(&artifacts.jitter_analysis, set)
            .map_err(|e| AppError::render(format!("{:#}", e)))?;

        Ok(artifacts)
    }
}

fn render_combined(path: &Path, set: &MeasurementSet, summary: &MetricsSummary) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, COMBINED_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).context("filling combined chart background")?;

    let panels = root.split_evenly((3, 1));
    draw_rate_panel(&panels[0], set, "Network Performance Metrics Over Time", false)
        .context("drawing rate panel")?;
    draw_jitter_panel(&panels[1], set, None, false).context("drawing jitter panel")?;
    draw_efficiency_panel(&panels[2], summary).context("drawing efficiency panel")?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn render_throughput_comparison(path: &Path, set: &MeasurementSet) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, SINGLE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).context("filling throughput chart background")?;

    draw_rate_panel(&root, set, "Throughput Comparison", true).context("drawing rate chart")?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn render_jitter_analysis(path: &Path, set: &MeasurementSet) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, SINGLE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).context("filling jitter chart background")?;

    draw_jitter_panel(&root, set, Some("Packet Delay Variation"), true).context("drawing jitter chart")?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Goodput and throughput lines with point markers and a legend
fn draw_rate_panel(area: &Panel<'_>, set: &MeasurementSet, title: &str, time_label: bool) -> anyhow::Result<()> {
    let values = set.goodput.values.iter().chain(&set.throughput.values).copied();
    let (low, high) = padded_range(values);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(time_axis(set.len()), low..high)
        .context("building axes")?;

    let mut mesh = chart.configure_mesh();
    mesh.axis_desc_style((FONT, 16)).y_desc("Mbps");
    if time_label {
        mesh.x_desc("Time (seconds)");
    }
    mesh.draw().context("drawing grid")?;

    chart
        .draw_series(LineSeries::new(set.goodput.points(), BLUE.stroke_width(2)))
        .context("drawing goodput line")?
        .label(set.goodput.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(set.goodput.points().into_iter().map(|p| Circle::new(p, 4, BLUE.filled())))
        .context("drawing goodput markers")?;

    chart
        .draw_series(LineSeries::new(set.throughput.points(), RED.stroke_width(2)))
        .context("drawing throughput line")?
        .label(set.throughput.label())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(
            set.throughput
                .points()
                .into_iter()
                .map(|p| EmptyElement::at(p) + Rectangle::new([(-4, -4), (4, 4)], RED.filled())),
        )
        .context("drawing throughput markers")?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .context("drawing legend")?;

    Ok(())
}

/// Jitter line on the fixed microsecond range
fn draw_jitter_panel(area: &Panel<'_>, set: &MeasurementSet, title: Option<&str>, time_label: bool) -> anyhow::Result<()> {
    let (low, high) = JITTER_AXIS_RANGE;

    let mut builder = ChartBuilder::on(area);
    builder.margin(15).x_label_area_size(40).y_label_area_size(70);
    if let Some(title) = title {
        builder.caption(title, (FONT, 28));
    }
    let mut chart = builder
        .build_cartesian_2d(time_axis(set.len()), low..high)
        .context("building axes")?;

    let mut mesh = chart.configure_mesh();
    mesh.axis_desc_style((FONT, 16)).y_desc(set.jitter.label());
    if time_label {
        mesh.x_desc("Time (seconds)");
    }
    mesh.draw().context("drawing grid")?;

    chart
        .draw_series(LineSeries::new(set.jitter.points(), GREEN.stroke_width(2)))
        .context("drawing jitter line")?;
    chart
        .draw_series(set.jitter.points().into_iter().map(|p| {
            EmptyElement::at(p) + Polygon::new(DIAMOND.to_vec(), GREEN.filled())
        }))
        .context("drawing jitter markers")?;

    Ok(())
}

/// One bar per sample plus a dashed line at the mean
///
/// Non-finite efficiencies (only possible under the propagate policy) are
/// left out of the bars, and the mean line is dropped when the mean itself
/// is not finite.
fn draw_efficiency_panel(area: &Panel<'_>, summary: &MetricsSummary) -> anyhow::Result<()> {
    let bars: Vec<(f64, f64)> = summary
        .efficiency
        .points()
        .into_iter()
        .filter(|(_, v)| v.is_finite())
        .collect();

    let top = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let bottom = bars.iter().map(|(_, v)| *v).fold(0.0, f64::min);
    let high = if top > 0.0 { top * 1.05 } else { 1.0 };
    let x_axis = time_axis(summary.efficiency.len());

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_axis.clone(), bottom..high)
        .context("building axes")?;

    chart
        .configure_mesh()
        .axis_desc_style((FONT, 16))
        .y_desc("Efficiency (%)")
        .x_desc("Time (seconds)")
        .draw()
        .context("drawing grid")?;

    chart
        .draw_series(
            bars.iter()
                .map(|&(x, v)| Rectangle::new([(x - 0.4, 0.0), (x + 0.4, v)], PURPLE.filled())),
        )
        .context("drawing efficiency bars")?;

    let mean = summary.statistics.mean_efficiency;
    if mean.is_finite() {
        chart
            .draw_series(DashedLineSeries::new(
                vec![(x_axis.start, mean), (x_axis.end, mean)],
                10,
                6,
                BLACK.stroke_width(2),
            ))
            .context("drawing mean line")?
            .label(format!("Avg: {:.2}%", mean))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .context("drawing legend")?;
    }

    Ok(())
}

/// Sample index axis with half a step of room on each side
fn time_axis(len: usize) -> Range<f64> {
    -0.5..(len.max(1) as f64 - 0.5)
}

/// Finite min/max widened by 5% of the span (or 1.0 for a flat series)
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset, stats::MetricsSummarizer, types::ZeroThroughputPolicy};
    use tempfile::{tempdir, NamedTempFile};

    fn builtin_summary() -> (MeasurementSet, MetricsSummary) {
        let set = dataset::builtin();
        let summary = MetricsSummarizer::default().summarize(&set).unwrap();
        (set, summary)
    }

    #[test]
    fn test_render_writes_three_svg_files() {
        let dir = tempdir().unwrap();
        let (set, summary) = builtin_summary();

        let artifacts = ChartRenderer::new(dir.path()).render(&set, &summary).unwrap();

        for path in artifacts.paths() {
            let content = std::fs::read_to_string(path).unwrap();
            assert!(!content.is_empty(), "{} is empty", path.display());
            assert!(content.contains("<svg"), "{} is not SVG", path.display());
        }
        assert_eq!(artifacts.combined_metrics, dir.path().join(COMBINED_METRICS_FILE));
    }

    #[test]
    fn test_render_draws_titles_and_mean_label() {
        let dir = tempdir().unwrap();
        let (set, summary) = builtin_summary();
        let artifacts = ChartRenderer::new(dir.path()).render(&set, &summary).unwrap();

        let combined = std::fs::read_to_string(&artifacts.combined_metrics).unwrap();
        assert!(combined.contains("Network Performance Metrics Over Time"));
        assert!(combined.contains("Avg: 96.06%"));

        let comparison = std::fs::read_to_string(&artifacts.throughput_comparison).unwrap();
        assert!(comparison.contains("Throughput Comparison"));

        let jitter = std::fs::read_to_string(&artifacts.jitter_analysis).unwrap();
        assert!(jitter.contains("Packet Delay Variation"));
    }

    /// Vertex count of every `<polygon>` in an SVG document
    fn polygon_vertex_counts(svg: &str) -> Vec<usize> {
        svg.split("<polygon")
            .skip(1)
            .filter_map(|tag| {
                let tag = &tag[..tag.find('>')?];
                let start = tag.find("points=\"")? + "points=\"".len();
                let end = start + tag[start..].find('"')?;
                Some(tag[start..end].split_whitespace().count())
            })
            .collect()
    }

    #[test]
    fn test_jitter_samples_drawn_as_diamonds() {
        let dir = tempdir().unwrap();
        let (set, summary) = builtin_summary();
        let artifacts = ChartRenderer::new(dir.path()).render(&set, &summary).unwrap();

        let jitter = std::fs::read_to_string(&artifacts.jitter_analysis).unwrap();
        let counts = polygon_vertex_counts(&jitter);
        assert_eq!(counts.iter().filter(|&&n| n == 4).count(), set.jitter.len());
        assert!(!counts.contains(&3));
    }

    #[test]
    fn test_render_creates_nested_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("runs").join("latest");
        let (set, summary) = builtin_summary();

        ChartRenderer::new(&nested).render(&set, &summary).unwrap();
        assert!(nested.join(JITTER_ANALYSIS_FILE).is_file());
    }

    #[test]
    fn test_render_into_file_path_is_io_error() {
        let file = NamedTempFile::new().unwrap();
        let (set, summary) = builtin_summary();

        let result = ChartRenderer::new(file.path()).render(&set, &summary);
        match result {
            Err(AppError::Io(message)) => assert!(message.starts_with("Failed to create output directory")),
            other => panic!("expected an I/O error, got {:?}", other.map(|a| a.combined_metrics)),
        }
    }

    #[test]
    fn test_render_with_propagated_infinity() {
        let dir = tempdir().unwrap();
        let set = MeasurementSet::from_values(vec![10.0, 20.0], vec![0.0, 25.0], vec![16.15, 16.16]);
        let summary = MetricsSummarizer::new(ZeroThroughputPolicy::Propagate)
            .summarize(&set)
            .unwrap();

        let artifacts = ChartRenderer::new(dir.path()).render(&set, &summary).unwrap();
        let combined = std::fs::read_to_string(&artifacts.combined_metrics).unwrap();
        assert!(!combined.contains("Avg:"));
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range([5.0, 5.0].into_iter()), (4.0, 6.0));
        assert_eq!(padded_range(std::iter::empty()), (0.0, 1.0));

        let (low, high) = padded_range([0.0, 10.0, f64::NAN].into_iter());
        assert!((low + 0.5).abs() < 1e-12);
        assert!((high - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_time_axis_covers_every_sample() {
        assert_eq!(time_axis(15), -0.5..14.5);
        assert_eq!(time_axis(0), -0.5..0.5);
    }
}

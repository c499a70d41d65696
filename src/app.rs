//! Main application orchestration and execution

use crate::{
    charts::{ChartArtifacts, ChartRenderer},
    cli::Cli,
    config::{load_config, validate_config, ValidationLevel},
    dataset,
    error::{AppError, Result},
    log_debug, log_info,
    logging::LoggerFactory,
    models::{Config, MeasurementSet, MetricsSummary},
    output::{OutputFormatterFactory, ReportContext, ReportCoordinator},
    stats::MetricsSummarizer,
};

/// Result of one summarize-and-render pass
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub measurements: MeasurementSet,
    pub summary: MetricsSummary,
    /// `None` when rendering was disabled
    pub charts: Option<ChartArtifacts>,
}

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    loggers: LoggerFactory,
}

impl App {
    /// Create a new application instance from a loaded configuration
    pub fn new(config: Config) -> Self {
        let loggers = LoggerFactory::new(config.clone());
        Self { config, loggers }
    }

    /// Load configuration from CLI arguments, `.env` and the environment
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Ok(Self::new(load_config(cli)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Summarize the built-in run, render charts and print the report
    pub async fn run(&self) -> Result<()> {
        let outcome = self.execute(dataset::builtin()).await?;

        let coordinator = ReportCoordinator::new(OutputFormatterFactory::from_config(&self.config));
        let context = ReportContext {
            measurements: &outcome.measurements,
            summary: &outcome.summary,
            charts: outcome.charts.as_ref(),
            output_dir: &self.config.output_dir,
        };
        coordinator.display(&context)
    }

    /// Summarize a measurement set and render its charts without printing a report
    pub async fn execute(&self, measurements: MeasurementSet) -> Result<RunOutcome> {
        let logger = self.loggers.create_logger("APP").await;
        let mut perf = self.loggers.create_performance_logger().await;
        let errors = self.loggers.create_error_logger().await;

        logger
            .add_context_field("output_dir".to_string(), self.config.output_dir.display().to_string())
            .await;

        self.report_warnings()?;

        log_debug!(
            logger,
            "Summarizing {} samples with {} policy",
            measurements.len(),
            self.config.zero_throughput_policy
        );

        perf.start_timing("summarize").await;
        let summarizer = MetricsSummarizer::new(self.config.zero_throughput_policy);
        let summary = match summarizer.summarize(&measurements) {
            Ok(summary) => summary,
            Err(e) => {
                errors.log_error(&e, Some("Summarizing measurements")).await;
                return Err(e);
            }
        };
        perf.end_timing("summarize").await;
        perf.log_summary(&summary.statistics).await;

        let charts = if self.config.render_charts {
            perf.start_timing("render").await;
            let result = self.render_charts(&measurements, &summary).await;
            perf.end_timing("render").await;

            match result {
                Ok(artifacts) => {
                    log_info!(logger, "Wrote charts to {}", self.config.output_dir.display());
                    Some(artifacts)
                }
                Err(e) => {
                    errors.log_error(&e, Some("Rendering charts")).await;
                    return Err(e);
                }
            }
        } else {
            log_debug!(logger, "Chart rendering disabled");
            None
        };

        Ok(RunOutcome {
            measurements,
            summary,
            charts,
        })
    }

    /// Chart output is blocking file I/O, so it runs off the async workers
    async fn render_charts(&self, measurements: &MeasurementSet, summary: &MetricsSummary) -> Result<ChartArtifacts> {
        let renderer = ChartRenderer::new(self.config.output_dir.clone());
        let measurements = measurements.clone();
        let summary = summary.clone();

        tokio::task::spawn_blocking(move || renderer.render(&measurements, &summary))
            .await
            .map_err(|e| AppError::internal(format!("Chart rendering task failed: {}", e)))?
    }

    /// Print configuration warnings to stderr; info-level ones only in verbose mode
    fn report_warnings(&self) -> Result<()> {
        let warnings = validate_config(&self.config)?;

        for warning in warnings
            .iter()
            .filter(|w| self.config.verbose || w.level != ValidationLevel::Info)
        {
            eprintln!("{}", warning.format(self.config.enable_color));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZeroThroughputPolicy;
    use tempfile::tempdir;

    fn config_for(dir: &std::path::Path) -> Config {
        Config {
            output_dir: dir.join("plots"),
            enable_color: false,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_execute_renders_charts() {
        let dir = tempdir().unwrap();
        let app = App::new(config_for(dir.path()));

        let outcome = app.execute(dataset::builtin()).await.unwrap();
        assert_eq!(outcome.summary.statistics.format_mean_efficiency(), "96.06");

        let charts = outcome.charts.unwrap();
        for path in charts.paths() {
            assert!(path.starts_with(dir.path().join("plots")));
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[tokio::test]
    async fn test_execute_without_charts_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = Config {
            render_charts: false,
            ..config_for(dir.path())
        };

        let outcome = App::new(config).execute(dataset::builtin()).await.unwrap();
        assert!(outcome.charts.is_none());
        assert!(!dir.path().join("plots").exists());
    }

    #[tokio::test]
    async fn test_execute_rejects_zero_throughput() {
        let dir = tempdir().unwrap();
        let app = App::new(config_for(dir.path()));
        let set = MeasurementSet::from_values(vec![1.0, 2.0], vec![1.0, 0.0], vec![16.15, 16.16]);

        let result = app.execute(set).await;
        assert!(matches!(result, Err(AppError::DivisionByZero { index: 1 })));
        assert!(!dir.path().join("plots").exists());
    }

    #[tokio::test]
    async fn test_execute_propagates_zero_throughput() {
        let dir = tempdir().unwrap();
        let config = Config {
            zero_throughput_policy: ZeroThroughputPolicy::Propagate,
            ..config_for(dir.path())
        };
        let set = MeasurementSet::from_values(vec![1.0, 2.0], vec![1.0, 0.0], vec![16.15, 16.16]);

        let outcome = App::new(config).execute(set).await.unwrap();
        assert!(outcome.summary.statistics.mean_efficiency.is_infinite());
        assert!(outcome.charts.is_some());
    }

    #[tokio::test]
    async fn test_execute_mismatched_lengths() {
        let dir = tempdir().unwrap();
        let app = App::new(config_for(dir.path()));
        let set = MeasurementSet::from_values(vec![1.0, 2.0], vec![1.0], vec![16.15, 16.16]);

        assert!(matches!(app.execute(set).await, Err(AppError::Validation(_))));
    }
}

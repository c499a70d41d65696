//! Configuration data model and validation

use crate::types::{AppError, ReportFormat, Result, ZeroThroughputPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the chart images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Render chart images (disabled by --no-charts)
    #[serde(default = "default_render_charts")]
    pub render_charts: bool,

    /// Report output format
    #[serde(default)]
    pub report_format: ReportFormat,

    /// Handling of zero throughput samples
    #[serde(default)]
    pub zero_throughput_policy: ZeroThroughputPolicy,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            render_charts: default_render_charts(),
            report_format: ReportFormat::default(),
            zero_throughput_policy: ZeroThroughputPolicy::default(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::config("Output directory cannot be empty"));
        }

        if self.render_charts && self.output_dir.is_file() {
            return Err(AppError::config(format!(
                "Output path '{}' exists and is not a directory",
                self.output_dir.display()
            )));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(output_dir) = std::env::var("OUTPUT_DIR") {
            let output_dir = output_dir.trim();
            if !output_dir.is_empty() {
                self.output_dir = PathBuf::from(output_dir);
            }
        }

        if let Ok(format) = std::env::var("REPORT_FORMAT") {
            self.report_format = format.parse()
                .map_err(|e| AppError::config(format!("Invalid REPORT_FORMAT value '{}': {}", format, e)))?;
        }

        if let Ok(policy) = std::env::var("ZERO_THROUGHPUT_POLICY") {
            self.zero_throughput_policy = policy.parse()
                .map_err(|e| AppError::config(format!("Invalid ZERO_THROUGHPUT_POLICY value '{}': {}", policy, e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_output_dir() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_OUTPUT_DIR)
}

fn default_render_charts() -> bool {
    true
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_dir, PathBuf::from("network_plots"));
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(config.zero_throughput_policy, ZeroThroughputPolicy::Reject);
        assert!(config.render_charts);
    }

    #[test]
    fn test_empty_output_dir_invalid() {
        let mut config = Config::default();
        config.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_dir_pointing_at_file_invalid() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.output_dir = file.path().to_path_buf();
        assert!(config.validate().is_err());

        // Nothing is written when charts are off
        config.render_charts = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"report_format": "json"}"#).unwrap();
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.output_dir, PathBuf::from("network_plots"));
        assert!(config.render_charts);
    }
}

//! Configuration validation rules

use crate::{
    error::{AppError, Result},
    models::Config,
    types::{ReportFormat, ZeroThroughputPolicy},
};
use colored::Colorize;
use std::path::Path;

/// Configuration validator producing non-fatal warnings on top of `Config::validate`
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        config.validate()?;

        if config.render_charts {
            warnings.extend(Self::validate_output_dir(&config.output_dir)?);
        }
        warnings.extend(Self::validate_output_settings(config));

        Ok(warnings)
    }

    /// Checks on the chart output directory
    fn validate_output_dir(dir: &Path) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if !dir.exists() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Output directory '{}' will be created", dir.display()),
            ));
            return Ok(warnings);
        }

        let entries = std::fs::read_dir(dir)
            .map_err(|e| AppError::config(format!("Cannot read output directory '{}': {}", dir.display(), e)))?;

        if entries.count() > 0 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Output directory '{}' is not empty, existing charts will be overwritten", dir.display()),
            ));
        }

        let read_only = std::fs::metadata(dir)
            .map(|m| m.permissions().readonly())
            .unwrap_or(false);
        if read_only {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Output directory '{}' is read-only", dir.display()),
            ));
        }

        Ok(warnings)
    }

    /// Checks on option combinations
    fn validate_output_settings(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.zero_throughput_policy == ZeroThroughputPolicy::Propagate {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                "Zero throughput samples will produce infinite or NaN efficiency values".to_string(),
            ));
        }

        if config.report_format == ReportFormat::Json && config.verbose {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "The per-sample table is part of the JSON report, --verbose only raises the log level".to_string(),
            ));
        }

        warnings
    }
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if !use_color {
            return format!("{} {}", tag, self.message);
        }

        let tag = match self.level {
            ValidationLevel::Info => tag.blue(),
            ValidationLevel::Warning => tag.yellow(),
            ValidationLevel::Error => tag.red(),
        };
        format!("{} {}", tag, self.message)
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}

//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::types::{ReportFormat, ZeroThroughputPolicy};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug)
    }

    /// Load a specific env file if it exists
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<()> {
        if path.exists() {
            dotenv::from_path(path)
                .map_err(|e| AppError::config(format!("Failed to load {} file: {}", path.display(), e)))?;

            if debug {
                eprintln!("Loaded configuration from {}", path.display());
            }
        } else if debug {
            eprintln!("No {} file found, using defaults and CLI arguments", path.display());
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Network Performance Plots Configuration
#
# Values here are used as defaults and can be overridden by
# command-line arguments.

# Directory the chart images are written to
# OUTPUT_DIR=network_plots

# Report format (text/json)
# REPORT_FORMAT=text

# Handling of zero throughput samples (reject/propagate)
# ZERO_THROUGHPUT_POLICY=reject

# Enable colored output (true/false)
# ENABLE_COLOR=true
"#.to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        let content = Self::create_example_env_content();
        std::fs::write(path, content)
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "OUTPUT_DIR" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("OUTPUT_DIR cannot be empty"));
                }
            }
            "REPORT_FORMAT" => {
                value.parse::<ReportFormat>()
                    .map_err(|e| AppError::config(format!("Invalid REPORT_FORMAT value '{}': {}", value, e)))?;
            }
            "ZERO_THROUGHPUT_POLICY" => {
                value.parse::<ZeroThroughputPolicy>()
                    .map_err(|e| AppError::config(format!("Invalid ZERO_THROUGHPUT_POLICY value '{}': {}", value, e)))?;
            }
            "ENABLE_COLOR" => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", value, e)))?;
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("OUTPUT_DIR", "Directory the chart images are written to", "network_plots"),
            ("REPORT_FORMAT", "Report format (text, json)", "text"),
            ("ZERO_THROUGHPUT_POLICY", "Zero throughput handling (reject, propagate)", "reject"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<24} {}\n", var, description));
            help.push_str(&format!("  {:<24} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");

        help
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        let mut warnings = Vec::new();

        for (var_name, _, _) in Self::get_supported_env_vars() {
            if let Ok(value) = std::env::var(var_name) {
                if let Err(e) = Self::validate_env_var(var_name, &value) {
                    warnings.push(format!("Warning: {}", e));
                }
            }
        }

        warnings
    }
}

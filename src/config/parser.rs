//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{supports_color, Cli},
    config::env::EnvManager,
    error::{AppError, Result},
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
    load_env_file: bool,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli, load_env_file: true }
    }

    /// Skip reading `.env` from the working directory
    pub fn without_env_file(mut self) -> Self {
        self.load_env_file = false;
        self
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.cli.validate().map_err(AppError::validation)?;

        let mut config = Config::default();

        if self.load_env_file {
            EnvManager::load_env_file(self.cli.debug)?;
        }

        config.merge_from_env()?;

        self.apply_cli_overrides(&mut config);

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.cli.output_dir {
            config.output_dir = dir.clone();
        }

        if self.cli.no_charts {
            config.render_charts = false;
        }

        if let Some(format) = self.cli.format {
            config.report_format = format;
        }

        if let Some(policy) = self.cli.zero_throughput {
            config.zero_throughput_policy = policy;
        }

        // Explicit flags win, otherwise the terminal has to support color too
        if self.cli.color_overridden() {
            config.enable_color = self.cli.use_colors();
        } else {
            config.enable_color = config.enable_color && supports_color();
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let summary = [
        format!("Output Directory: {}", config.output_dir.display()),
        format!("Render Charts: {}", config.render_charts),
        format!("Report Format: {}", config.report_format),
        format!("Zero Throughput Policy: {}", config.zero_throughput_policy),
        format!("Color Output: {}", config.enable_color),
        format!("Verbose: {}", config.verbose),
        format!("Debug: {}", config.debug),
    ];

    summary.join("\n")
}

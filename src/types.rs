//! Type definitions and aliases

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// What to do when a throughput sample is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroThroughputPolicy {
    /// Fail the whole summarization with `AppError::DivisionByZero`
    #[default]
    Reject,
    /// Keep the IEEE-754 result (`Inf` or `NaN`) and let it flow into the means
    Propagate,
}

impl ZeroThroughputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Propagate => "propagate",
        }
    }
}

impl fmt::Display for ZeroThroughputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZeroThroughputPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "error" => Ok(Self::Reject),
            "propagate" | "ieee" => Ok(Self::Propagate),
            _ => Err(AppError::parse(format!(
                "Invalid zero-throughput policy '{}' (expected reject or propagate)",
                s
            ))),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(AppError::parse(format!(
                "Invalid report format '{}' (expected text or json)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("reject".parse::<ZeroThroughputPolicy>().unwrap(), ZeroThroughputPolicy::Reject);
        assert_eq!("PROPAGATE".parse::<ZeroThroughputPolicy>().unwrap(), ZeroThroughputPolicy::Propagate);
        assert_eq!(" ieee ".parse::<ZeroThroughputPolicy>().unwrap(), ZeroThroughputPolicy::Propagate);
        assert!("ignore".parse::<ZeroThroughputPolicy>().is_err());
        assert_eq!(ZeroThroughputPolicy::default(), ZeroThroughputPolicy::Reject);
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("Text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("yaml".parse::<ReportFormat>().is_err());
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}

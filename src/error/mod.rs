//! Error handling for the network metrics plotter

use thiserror::Error;

/// Custom error types for the network metrics plotter
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input series are empty or have mismatched lengths
    #[error("Validation error: {0}")]
    Validation(String),

    /// A throughput sample was zero while the reject policy was active
    #[error("Division by zero: throughput sample {index} is zero")]
    DivisionByZero { index: usize },

    /// I/O errors (output directory, report writing)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (env values, JSON)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Chart rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a division-by-zero error for the given sample index
    pub fn division_by_zero(index: usize) -> Self {
        Self::DivisionByZero { index }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::DivisionByZero { .. } => "DIV_ZERO",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Render(_) => "RENDER",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Goodput, throughput and jitter must be non-empty and of equal length.", msg)
            }
            Self::DivisionByZero { index } => {
                format!("Throughput sample {} is zero, so efficiency is undefined.\n\nSuggestion: Use --zero-throughput propagate to keep Inf/NaN values instead of failing.", index)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check permissions and free space for the output directory.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Check the format of your environment variables.", msg)
            }
            Self::Render(msg) => {
                format!("Chart rendering failed: {}\n\nSuggestion: Check that the output directory is writable, or pass --no-charts.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,
            Self::Io(_) => 5,
            Self::DivisionByZero { .. } => 6,
            Self::Render(_) => 7,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::DivisionByZero { .. } => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Io(_) | Self::Render(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        // Keep the original variant so exit codes stay meaningful
        self.map_err(|e| match e.into() {
            AppError::Config(msg) => AppError::Config(format!("{}: {}", f(), msg)),
            AppError::Validation(msg) => AppError::Validation(format!("{}: {}", f(), msg)),
            AppError::Io(msg) => AppError::Io(format!("{}: {}", f(), msg)),
            AppError::Parse(msg) => AppError::Parse(format!("{}: {}", f(), msg)),
            AppError::Render(msg) => AppError::Render(format!("{}: {}", f(), msg)),
            AppError::Internal(msg) => AppError::Internal(format!("{}: {}", f(), msg)),
            other @ AppError::DivisionByZero { .. } => other,
        })
    }
}

/// Error reporter for structured error logging and user feedback
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Render an error the way `report_error` prints it
    pub fn format_error(&self, error: &AppError) -> String {
        let mut output = error.format_for_console(self.use_color);
        if self.verbose {
            output.push_str("\n\n");
            output.push_str(&error.user_friendly_message());
        }
        output
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_error(error));
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

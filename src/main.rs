//! Network Performance Plots - Main CLI Application
//!
//! Summarizes a goodput/throughput/jitter run, prints the report and
//! writes the charts.

use clap::Parser;
use netperf_plots::{
    app::App,
    cli::Cli,
    config::display_config_summary,
    error::{AppError, ErrorReporter},
    PKG_NAME, VERSION,
};
use std::process;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue with the command line that triggered it");
        process::exit(99);
    }));

    let cli = Cli::parse();
    let verbose = cli.verbose || cli.debug;
    let use_color = !cli.no_color && (cli.color || netperf_plots::cli::supports_color());

    if let Err(e) = run_application(cli).await {
        ErrorReporter::new(use_color, verbose).report_error(&e);
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<(), AppError> {
    let debug = cli.debug;
    let app = App::from_cli(cli)?;
    let config = app.config();

    colored::control::set_override(config.enable_color);

    if debug {
        eprintln!("{} v{}", PKG_NAME, VERSION);
        eprintln!(
            "Built {} from {} for {}",
            env!("BUILD_TIME"),
            option_env!("GIT_COMMIT").unwrap_or("unknown commit"),
            env!("TARGET_TRIPLE")
        );
        eprintln!("Debug mode enabled");
        eprintln!();
        eprintln!("Configuration:");
        eprintln!("{}", display_config_summary(config));
        eprintln!();
    }

    app.run().await
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - REPORT_FORMAT accepts text or json");
            eprintln!("  - ZERO_THROUGHPUT_POLICY accepts reject or propagate");
            eprintln!("  - ENABLE_COLOR accepts true or false");
        }
        AppError::DivisionByZero { .. } => {
            eprintln!();
            eprintln!("Statistics help:");
            eprintln!("  - A throughput sample of zero makes efficiency undefined");
            eprintln!("  - Use --zero-throughput propagate to keep infinite/NaN values");
        }
        AppError::Io(_) | AppError::Render(_) => {
            eprintln!();
            eprintln!("Output troubleshooting:");
            eprintln!("  - Check that the output directory is writable");
            eprintln!("  - Choose another location with --output-dir");
            eprintln!("  - Use --no-charts to print the report only");
        }
        _ => {}
    }
}

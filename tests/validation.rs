//! Output validation tests
//!
//! These tests check that the text report keeps the classic console layout
//! and precision, and that the JSON report stays consistent with it.

use assert_cmd::prelude::*;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command isolated in `dir`
fn create_test_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("netperf-plots").unwrap();
    cmd.current_dir(dir)
        .env_remove("OUTPUT_DIR")
        .env_remove("REPORT_FORMAT")
        .env_remove("ZERO_THROUGHPUT_POLICY")
        .env_remove("ENABLE_COLOR")
        .env_remove("FORCE_COLOR");
    cmd
}

fn run_stdout(args: &[&str]) -> String {
    let temp_dir = TempDir::new().unwrap();
    let output = create_test_cmd(temp_dir.path()).args(args).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

/// Validation patterns for the report lines
struct OutputPatterns {
    pub header: Regex,
    pub goodput: Regex,
    pub throughput: Regex,
    pub efficiency: Regex,
    pub overhead: Regex,
    pub jitter: Regex,
    pub footer: Regex,
    pub ansi: Regex,
}

impl Default for OutputPatterns {
    fn default() -> Self {
        Self {
            header: Regex::new(r"^=== Network Performance Metrics ===$").unwrap(),
            goodput: Regex::new(r"^Average Goodput: \d+\.\d{2} Mbps$").unwrap(),
            throughput: Regex::new(r"^Average Throughput: \d+\.\d{2} Mbps$").unwrap(),
            efficiency: Regex::new(r"^Average Efficiency: \d+\.\d{2}%$").unwrap(),
            overhead: Regex::new(r"^Average Overhead: -?\d+\.\d{2}%$").unwrap(),
            jitter: Regex::new(r"^Jitter Stability: \d+\.\d{4} μs std\.dev\.$").unwrap(),
            footer: Regex::new(r"^Plots saved to .+ directory$").unwrap(),
            ansi: Regex::new(r"\x1b\[[0-9;]*m").unwrap(),
        }
    }
}

#[test]
fn test_text_report_line_formats() {
    let patterns = OutputPatterns::default();
    let stdout = run_stdout(&["--no-color"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 8, "unexpected report:\n{}", stdout);
    assert!(patterns.header.is_match(lines[0]));
    assert!(patterns.goodput.is_match(lines[1]));
    assert!(patterns.throughput.is_match(lines[2]));
    assert!(patterns.efficiency.is_match(lines[3]));
    assert!(patterns.overhead.is_match(lines[4]));
    assert!(patterns.jitter.is_match(lines[5]));
    assert_eq!(lines[6], "");
    assert!(patterns.footer.is_match(lines[7]));
}

#[test]
fn test_text_report_values() {
    let stdout = run_stdout(&["--no-color", "--no-charts"]);

    let expected = "=== Network Performance Metrics ===\n\
                    Average Goodput: 930.23 Mbps\n\
                    Average Throughput: 968.39 Mbps\n\
                    Average Efficiency: 96.06%\n\
                    Average Overhead: 3.94%\n\
                    Jitter Stability: 0.0206 μs std.dev.\n";
    assert_eq!(stdout, expected);
}

#[test]
fn test_colored_report_strips_to_plain() {
    let patterns = OutputPatterns::default();
    let colored = run_stdout(&["--color", "--no-charts"]);
    let plain = run_stdout(&["--no-color", "--no-charts"]);

    assert!(patterns.ansi.is_match(&colored));
    assert_eq!(patterns.ansi.replace_all(&colored, ""), plain);
}

#[test]
fn test_verbose_table_rows() {
    let row = Regex::new(r"^\|\s+\d+ \|\s+\d+\.\d{3} \|\s+\d+\.\d{3} \|\s+\d+\.\d{2} \|\s+\d+\.\d{3} \|$").unwrap();
    let stdout = run_stdout(&["--no-color", "--no-charts", "--verbose"]);

    let rows = stdout.lines().filter(|line| row.is_match(line)).count();
    assert_eq!(rows, 15, "unexpected table:\n{}", stdout);
}

#[test]
fn test_json_matches_text_report() {
    let text = run_stdout(&["--no-color", "--no-charts"]);
    let json: Value = serde_json::from_str(&run_stdout(&["--format", "json", "--no-charts"])).unwrap();
    let stats = &json["statistics"];

    let pairs = [
        ("mean_goodput", 2, "Average Goodput: "),
        ("mean_throughput", 2, "Average Throughput: "),
        ("mean_efficiency", 2, "Average Efficiency: "),
        ("overhead", 2, "Average Overhead: "),
        ("jitter_std_dev", 4, "Jitter Stability: "),
    ];

    for (key, precision, label) in pairs {
        let value = stats[key].as_f64().unwrap();
        let line = format!("{}{:.*}", label, precision, value);
        assert!(text.contains(&line), "{} not found in text report", line);
    }

    assert_eq!(json["samples"].as_array().unwrap().len(), 15);
    let generated_at = json["generated_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(generated_at).is_ok());
}

#[test]
fn test_overhead_complements_efficiency_in_json() {
    let json: Value = serde_json::from_str(&run_stdout(&["--format", "json", "--no-charts"])).unwrap();
    let stats = &json["statistics"];

    let efficiency = stats["mean_efficiency"].as_f64().unwrap();
    let overhead = stats["overhead"].as_f64().unwrap();
    assert!((efficiency + overhead - 100.0).abs() < 1e-9);
}

//! Derived efficiency series and summary statistics

use serde::{Deserialize, Serialize};

/// Per-sample efficiency, `goodput[i] / throughput[i] * 100`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencySeries {
    pub values: Vec<f64>,
}

impl EfficiencySeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every value is finite (never the case after a propagated zero)
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// `(timestamp, value)` pairs for plotting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }
}

/// Scalar aggregates of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of samples N
    pub sample_count: usize,

    /// Arithmetic mean of goodput
    pub mean_goodput: f64,

    /// Arithmetic mean of throughput
    pub mean_throughput: f64,

    /// Arithmetic mean of the efficiency series (percent)
    pub mean_efficiency: f64,

    /// `100 - mean_efficiency` (percent)
    pub overhead: f64,

    /// Mean jitter, the centre used for the deviation
    pub jitter_mean: f64,

    /// Population standard deviation of jitter
    pub jitter_std_dev: f64,
}

impl SummaryStatistics {
    pub fn format_mean_goodput(&self) -> String {
        format!("{:.2}", self.mean_goodput)
    }

    pub fn format_mean_throughput(&self) -> String {
        format!("{:.2}", self.mean_throughput)
    }

    pub fn format_mean_efficiency(&self) -> String {
        format!("{:.2}", self.mean_efficiency)
    }

    pub fn format_overhead(&self) -> String {
        format!("{:.2}", self.overhead)
    }

    pub fn format_jitter_std_dev(&self) -> String {
        format!("{:.4}", self.jitter_std_dev)
    }
}

/// Everything a summarization produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub efficiency: EfficiencySeries,
    pub statistics: SummaryStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_statistics() -> SummaryStatistics {
        SummaryStatistics {
            sample_count: 2,
            mean_goodput: 929.6955,
            mean_throughput: 967.8275,
            mean_efficiency: 96.06391,
            overhead: 3.93609,
            jitter_mean: 16.1647,
            jitter_std_dev: 0.022808,
        }
    }

    #[test]
    fn test_statistics_formatting_precision() {
        let stats = sample_statistics();
        assert_eq!(stats.format_mean_goodput(), "929.70");
        assert_eq!(stats.format_mean_throughput(), "967.83");
        assert_eq!(stats.format_mean_efficiency(), "96.06");
        assert_eq!(stats.format_overhead(), "3.94");
        assert_eq!(stats.format_jitter_std_dev(), "0.0228");
    }

    #[test]
    fn test_efficiency_finiteness() {
        let finite = EfficiencySeries { values: vec![96.0, 97.0] };
        assert!(finite.is_finite());
        assert_eq!(finite.points()[1], (1.0, 97.0));

        let with_inf = EfficiencySeries { values: vec![96.0, f64::INFINITY] };
        assert!(!with_inf.is_finite());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = MetricsSummary {
            efficiency: EfficiencySeries { values: vec![96.05, 96.07] },
            statistics: sample_statistics(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["statistics"]["sample_count"], 2);
        assert_eq!(json["efficiency"]["values"].as_array().unwrap().len(), 2);
    }
}

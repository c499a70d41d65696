//! Efficiency and summary statistics for goodput, throughput and jitter

use crate::{
    error::{AppError, Result},
    models::{EfficiencySeries, MeasurementSet, MetricsSummary, SummaryStatistics},
    types::ZeroThroughputPolicy,
};

/// Computes efficiency ratios and summary statistics from one measurement set
///
/// The computation is a pure function of its input: nothing is cached and
/// every call builds fresh values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSummarizer {
    policy: ZeroThroughputPolicy,
}

impl MetricsSummarizer {
    /// Create a summarizer with the given zero-throughput policy
    pub fn new(policy: ZeroThroughputPolicy) -> Self {
        Self { policy }
    }

    /// Policy applied when a throughput sample is zero
    pub fn policy(&self) -> ZeroThroughputPolicy {
        self.policy
    }

    /// Summarize a measurement set
    pub fn summarize(&self, set: &MeasurementSet) -> Result<MetricsSummary> {
        self.summarize_series(&set.goodput.values, &set.throughput.values, &set.jitter.values)
    }

    /// Summarize three raw series sampled at the same time steps
    ///
    /// Fails with `Validation` when the series are empty or differ in
    /// length, and with `DivisionByZero` when a throughput sample is zero
    /// under `ZeroThroughputPolicy::Reject`.
    pub fn summarize_series(
        &self,
        goodput: &[f64],
        throughput: &[f64],
        jitter: &[f64],
    ) -> Result<MetricsSummary> {
        validate_lengths(goodput, throughput, jitter)?;

        let efficiency = efficiency_series(goodput, throughput, self.policy)?;

        let mean_goodput = mean(goodput)?;
        let mean_throughput = mean(throughput)?;
        let mean_efficiency = mean(&efficiency.values)?;
        let jitter_mean = mean(jitter)?;
        let jitter_std_dev = deviation_from(jitter, jitter_mean);

        let statistics = SummaryStatistics {
            sample_count: goodput.len(),
            mean_goodput,
            mean_throughput,
            mean_efficiency,
            overhead: 100.0 - mean_efficiency,
            jitter_mean,
            jitter_std_dev,
        };

        Ok(MetricsSummary { efficiency, statistics })
    }
}

fn validate_lengths(goodput: &[f64], throughput: &[f64], jitter: &[f64]) -> Result<()> {
    if goodput.is_empty() || throughput.is_empty() || jitter.is_empty() {
        return Err(AppError::validation(format!(
            "Sample series must not be empty (goodput={}, throughput={}, jitter={})",
            goodput.len(),
            throughput.len(),
            jitter.len()
        )));
    }

    if goodput.len() != throughput.len() || goodput.len() != jitter.len() {
        return Err(AppError::validation(format!(
            "Sample series lengths differ (goodput={}, throughput={}, jitter={})",
            goodput.len(),
            throughput.len(),
            jitter.len()
        )));
    }

    Ok(())
}

/// Per-sample efficiency, `goodput[i] / throughput[i] * 100`
pub fn efficiency_series(
    goodput: &[f64],
    throughput: &[f64],
    policy: ZeroThroughputPolicy,
) -> Result<EfficiencySeries> {
    if goodput.len() != throughput.len() {
        return Err(AppError::validation(format!(
            "Goodput and throughput lengths differ ({} vs {})",
            goodput.len(),
            throughput.len()
        )));
    }

    let mut values = Vec::with_capacity(goodput.len());
    for (index, (&g, &t)) in goodput.iter().zip(throughput).enumerate() {
        if t == 0.0 && policy == ZeroThroughputPolicy::Reject {
            return Err(AppError::division_by_zero(index));
        }
        // Propagate: x/0 gives ±Inf, 0/0 gives NaN
        values.push(g / t * 100.0);
    }

    Ok(EfficiencySeries { values })
}

/// Unweighted arithmetic mean
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AppError::validation("Cannot compute the mean of an empty series"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N, not N-1)
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    let centre = mean(values)?;
    Ok(deviation_from(values, centre))
}

fn deviation_from(values: &[f64], centre: f64) -> f64 {
    let variance = values
        .iter()
        .map(|x| (x - centre).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

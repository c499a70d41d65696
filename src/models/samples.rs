//! Measurement sample series

use serde::{Deserialize, Serialize};

/// An ordered sequence of measurements, one per uniformly-spaced time step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    /// Display name (e.g. "Goodput")
    pub name: String,

    /// Unit label (e.g. "Mbps")
    pub unit: String,

    /// Sample values, index i taken at time step i
    pub values: Vec<f64>,
}

impl SampleSeries {
    /// Create a new named series
    pub fn new(name: impl Into<String>, unit: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Label used in chart legends, e.g. "Goodput (Mbps)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }

    /// Smallest and largest sample, `None` when empty
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
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

/// The three series captured in one measurement run
///
/// Lengths are not checked here; `MetricsSummarizer` rejects mismatched sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    pub goodput: SampleSeries,
    pub throughput: SampleSeries,
    pub jitter: SampleSeries,
}

impl MeasurementSet {
    /// Build a set from raw values using the default names and units
    pub fn from_values(goodput: Vec<f64>, throughput: Vec<f64>, jitter: Vec<f64>) -> Self {
        Self {
            goodput: SampleSeries::new("Goodput", "Mbps", goodput),
            throughput: SampleSeries::new("Throughput", "Mbps", throughput),
            jitter: SampleSeries::new("Jitter", "μs", jitter),
        }
    }

    /// Number of samples in the goodput series
    pub fn len(&self) -> usize {
        self.goodput.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goodput.is_empty()
    }

    /// Implicit timestamps `0..N-1`, in seconds
    pub fn timestamps(&self) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_label_and_bounds() {
        let series = SampleSeries::new("Jitter", "μs", vec![16.2, 16.1, 16.3]);
        assert_eq!(series.label(), "Jitter (μs)");
        assert_eq!(series.bounds(), Some((16.1, 16.3)));
        assert_eq!(series.len(), 3);

        let empty = SampleSeries::new("Empty", "Mbps", vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.bounds(), None);
    }

    #[test]
    fn test_points_use_sample_index_as_time() {
        let series = SampleSeries::new("Goodput", "Mbps", vec![1.0, 2.0]);
        assert_eq!(series.points(), vec![(0.0, 1.0), (1.0, 2.0)]);
    }

    #[test]
    fn test_measurement_set_timestamps() {
        let set = MeasurementSet::from_values(vec![1.0; 4], vec![2.0; 4], vec![3.0; 4]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.timestamps(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(set.throughput.label(), "Throughput (Mbps)");
    }
}

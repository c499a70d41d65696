//! Built-in measurement run
//!
//! Fifteen one-second samples from a single gigabit link run. Goodput and
//! throughput are in Mbps, jitter in microseconds.

use crate::models::MeasurementSet;

pub const GOODPUT_MBPS: [f64; 15] = [
    929.456, 929.935, 930.117, 930.204, 930.256,
    930.286, 930.316, 930.333, 930.349, 930.361,
    930.371, 930.377, 930.379, 930.385, 930.393,
];

pub const THROUGHPUT_MBPS: [f64; 15] = [
    967.578, 968.077, 968.266, 968.357, 968.411,
    968.443, 968.474, 968.491, 968.508, 968.520,
    968.531, 968.537, 968.539, 968.546, 968.553,
];

pub const JITTER_US: [f64; 15] = [
    16.134, 16.171, 16.189, 16.196, 16.198,
    16.201, 16.205, 16.209, 16.212, 16.214,
    16.214, 16.213, 16.210, 16.208, 16.207,
];

/// The built-in run as a `MeasurementSet`
pub fn builtin() -> MeasurementSet {
    MeasurementSet::from_values(
        GOODPUT_MBPS.to_vec(),
        THROUGHPUT_MBPS.to_vec(),
        JITTER_US.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_series_share_length() {
        let set = builtin();
        assert_eq!(set.len(), 15);
        assert_eq!(set.throughput.len(), 15);
        assert_eq!(set.jitter.len(), 15);
    }

    #[test]
    fn test_builtin_values_non_negative() {
        let set = builtin();
        for series in [&set.goodput, &set.throughput, &set.jitter] {
            assert!(series.values.iter().all(|v| *v >= 0.0), "{} has a negative sample", series.name);
        }
        assert!(set.throughput.values.iter().all(|v| *v != 0.0));
    }

    #[test]
    fn test_jitter_fits_fixed_chart_range() {
        let (min, max) = builtin().jitter.bounds().unwrap();
        assert!(min > crate::defaults::JITTER_AXIS_RANGE.0);
        assert!(max < crate::defaults::JITTER_AXIS_RANGE.1);
    }
}

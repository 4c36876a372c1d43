//! Summary statistics over one result group.

use serde::{Deserialize, Serialize};

/// Summary of a group of raw samples.
///
/// Every statistic except `count` is absent for an empty group and
/// serializes as JSON null. Field order matches the report schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub max: Option<f64>,
    pub p50: Option<f64>,
    pub p95: Option<f64>,
    pub p99: Option<f64>,
    pub min: Option<f64>,
    pub count: usize,
}

impl MetricSummary {
    /// Summary of the empty group.
    pub fn empty() -> Self {
        Self {
            max: None,
            p50: None,
            p95: None,
            p99: None,
            min: None,
            count: 0,
        }
    }

    /// Reduce a sequence of raw samples to its summary statistics.
    ///
    /// Input order is irrelevant; the values are ranked internally.
    pub fn from_samples(values: &[u64]) -> Self {
        if values.is_empty() {
            return Self::empty();
        }

        let mut sorted: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        sorted.sort_by(f64::total_cmp);

        Self {
            max: Some(sorted[sorted.len() - 1]),
            p50: Some(percentile(&sorted, 50.0)),
            p95: Some(percentile(&sorted, 95.0)),
            p99: Some(percentile(&sorted, 99.0)),
            min: Some(sorted[0]),
            count: values.len(),
        }
    }
}

/// Percentile by linear interpolation between closest ranks.
///
/// For a sorted sequence x of length n, the p-th percentile sits at fractional
/// rank `p/100 * (n - 1)`; the result interpolates linearly between the two
/// neighboring order statistics. This is the same estimator numpy calls the
/// "linear" method, so reports stay comparable with earlier tooling.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let frac = rank - lower as f64;
    if lower + 1 < sorted.len() {
        sorted[lower] + frac * (sorted[lower + 1] - sorted[lower])
    } else {
        sorted[lower]
    }
}

//! Precomputed degree-distribution histogram attached to a catalog entry.

use hdrhistogram::Histogram;

/// Summary statistics over a graph's out-degree distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeDistribution {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub p50: u64,
    pub p75: u64,
    pub p90: u64,
    pub p95: u64,
    pub p99: u64,
    pub p999: u64,
}

impl DegreeDistribution {
    /// Computes the distribution from a sequence of out-degrees.
    ///
    /// Returns `None` for an empty input — there is nothing to distribute.
    pub fn compute(degrees: impl IntoIterator<Item = u64>) -> Option<Self> {
        let mut histogram = Histogram::<u64>::new(3).expect("valid histogram precision");
        let mut any = false;
        for degree in degrees {
            histogram.record(degree).expect("degree within histogram range");
            any = true;
        }
        if !any {
            return None;
        }

        Some(Self {
            min: histogram.min(),
            max: histogram.max(),
            mean: histogram.mean(),
            p50: histogram.value_at_quantile(0.50),
            p75: histogram.value_at_quantile(0.75),
            p90: histogram.value_at_quantile(0.90),
            p95: histogram.value_at_quantile(0.95),
            p99: histogram.value_at_quantile(0.99),
            p999: histogram.value_at_quantile(0.999),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert!(DegreeDistribution::compute(std::iter::empty()).is_none());
    }

    #[test]
    fn uniform_degrees_collapse_every_percentile() {
        let dist = DegreeDistribution::compute(std::iter::repeat(5).take(100)).unwrap();
        assert_eq!(dist.min, 5);
        assert_eq!(dist.max, 5);
        assert_eq!(dist.p50, 5);
        assert_eq!(dist.p999, 5);
    }

    #[test]
    fn skewed_degrees_report_distinct_percentiles() {
        let mut degrees: Vec<u64> = vec![1; 90];
        degrees.extend(std::iter::repeat(100).take(10));
        let dist = DegreeDistribution::compute(degrees).unwrap();
        assert_eq!(dist.min, 1);
        assert_eq!(dist.max, 100);
        assert!(dist.p90 <= 100);
        assert!(dist.mean > 1.0);
    }
}

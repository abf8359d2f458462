use serde::Serialize;

/// Equal-width histogram over a numeric series.
///
/// `edges` has one more entry than `counts`; bins are contiguous and
/// together span [min, max] of the series, so the counts always sum to the
/// series length.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub bin_width: f64,
}

impl Histogram {
    /// Bucket `values` into `bins` equal-width bins spanning [min, max].
    /// Returns None for an empty series or a zero bin count.
    ///
    /// A constant series collapses to a single degenerate bin holding
    /// every value, avoiding zero-width bins.
    pub fn build(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Some(Histogram {
                edges: vec![min, max],
                counts: vec![values.len()],
                bin_width: 0.0,
            });
        }

        let bin_width = (max - min) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| min + bin_width * i as f64).collect();
        edges[bins] = max; // pin the last edge against float drift

        let mut counts = vec![0usize; bins];
        for &v in values {
            counts[bin_index(v, min, max, bins)] += 1;
        }

        Some(Histogram {
            edges,
            counts,
            bin_width,
        })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bin assignment: floor((value - min) / width), clamped so the maximum
/// value lands in the last bin rather than a phantom one past the end.
/// Pure in (value, min, max, bins).
pub fn bin_index(value: f64, min: f64, max: f64, bins: usize) -> usize {
    if max == min {
        return 0;
    }
    let width = (max - min) / bins as f64;
    let idx = ((value - min) / width).floor() as usize;
    idx.min(bins - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_series_length_for_any_bin_count() {
        let values = [22.0, 25.0, 27.0, 30.0, 35.0, 40.0, 45.0];
        for bins in 1..=12 {
            let hist = Histogram::build(&values, bins).unwrap();
            assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
            assert_eq!(hist.edges.len(), hist.counts.len() + 1);
        }
    }

    #[test]
    fn four_bins_over_known_series() {
        let values = [22.0, 25.0, 27.0, 30.0, 35.0, 40.0, 45.0];
        let hist = Histogram::build(&values, 4).unwrap();
        assert!((hist.bin_width - 5.75).abs() < 1e-12);
        assert_eq!(hist.counts, vec![3, 1, 1, 2]);
        assert_eq!(hist.edges.first().copied(), Some(22.0));
        assert_eq!(hist.edges.last().copied(), Some(45.0));
    }

    #[test]
    fn max_value_falls_in_last_bin() {
        let values: Vec<f64> = (0..=10).map(f64::from).collect();
        let hist = Histogram::build(&values, 5).unwrap();
        assert_eq!(hist.counts.iter().sum::<usize>(), 11);
        assert_eq!(*hist.counts.last().unwrap(), 3); // 8, 9, 10
    }

    #[test]
    fn constant_series_collapses_to_one_bin() {
        let hist = Histogram::build(&[5.0, 5.0, 5.0, 5.0], 10).unwrap();
        assert_eq!(hist.counts, vec![4]);
        assert_eq!(hist.edges, vec![5.0, 5.0]);
        assert_eq!(hist.bin_width, 0.0);
    }

    #[test]
    fn single_value_series() {
        let hist = Histogram::build(&[3.0], 4).unwrap();
        assert_eq!(hist.counts, vec![1]);
    }

    #[test]
    fn empty_series_has_no_histogram() {
        assert!(Histogram::build(&[], 10).is_none());
    }

    #[test]
    fn bin_index_is_pure_and_clamped() {
        assert_eq!(bin_index(45.0, 22.0, 45.0, 4), 3);
        assert_eq!(bin_index(22.0, 22.0, 45.0, 4), 0);
        for _ in 0..3 {
            assert_eq!(bin_index(30.0, 22.0, 45.0, 4), bin_index(30.0, 22.0, 45.0, 4));
        }
    }
}

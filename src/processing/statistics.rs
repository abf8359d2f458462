use serde::Serialize;

/// Full descriptive statistics for a numeric series.
///
/// Shape measures and the coefficient of variation are `None` where the
/// math leaves them undefined (too few observations, zero variance, zero
/// mean) rather than carrying a sentinel value.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub q25: f64,
    pub q75: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub range: f64,
    pub iqr: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub cv: Option<f64>,
}

impl SeriesStats {
    /// Compute statistics from a series of finite values.
    /// Returns None for an empty series: no data means no summary, not a
    /// summary full of zeros.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let min = sorted[0];
        let max = sorted[count - 1];
        let mean = values.iter().sum::<f64>() / n;

        let median = percentile_sorted(&sorted, 0.5);
        let q25 = percentile_sorted(&sorted, 0.25);
        let q75 = percentile_sorted(&sorted, 0.75);

        // Sample variance (n-1 divisor); a lone observation has none
        let variance = if count > 1 {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let std_dev = variance.sqrt();

        let (skewness, kurtosis) = shape_moments(values, mean);

        let cv = if mean != 0.0 {
            Some(std_dev / mean)
        } else {
            None
        };

        Some(SeriesStats {
            count,
            min,
            max,
            mean,
            median,
            q25,
            q75,
            std_dev,
            variance,
            range: max - min,
            iqr: q75 - q25,
            skewness,
            kurtosis,
            cv,
        })
    }
}

/// Percentile by linear interpolation between the two nearest ranks of a
/// sorted slice: rank = p * (n - 1).
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = p * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Adjusted Fisher-Pearson skewness (G1) and sample excess kurtosis (G2).
/// Skewness needs n >= 3, kurtosis n >= 4; both are undefined on zero
/// variance.
fn shape_moments(values: &[f64], mean: f64) -> (Option<f64>, Option<f64>) {
    let count = values.len();
    let n = count as f64;

    let m2 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if m2 == 0.0 {
        return (None, None);
    }

    let skewness = if count >= 3 {
        let m3 = values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;
        let g1 = m3 / m2.powf(1.5);
        Some((n * (n - 1.0)).sqrt() / (n - 2.0) * g1)
    } else {
        None
    };

    let kurtosis = if count >= 4 {
        let m4 = values.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / n;
        let g2 = m4 / (m2 * m2) - 3.0;
        Some((n - 1.0) / ((n - 2.0) * (n - 3.0)) * ((n + 1.0) * g2 + 6.0))
    } else {
        None
    };

    (skewness, kurtosis)
}

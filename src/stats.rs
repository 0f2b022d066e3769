//! Statistical helpers behind the chart views.
//!
//! Conventions follow the usual dataframe tooling: Pearson correlation with
//! NaN for zero-variance columns, equal-width histogram bins with the last
//! bin closed, Gaussian KDE with Scott's bandwidth.

use std::collections::BTreeMap;

/// Calculate the mean of a slice of values.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n-1 denominator).
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean_val = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean_val).powi(2)).sum();
    Some((sum_sq / (n - 1) as f64).sqrt())
}

/// Occurrences of each distinct value, ordered by descending count and then
/// ascending value.
pub fn value_counts<T: Ord + Copy>(values: &[T]) -> Vec<(T, usize)> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(*v).or_default() += 1;
    }
    let mut out: Vec<(T, usize)> = counts.into_iter().collect();
    // Stable sort keeps ascending value order among equal counts.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Pearson correlation coefficient. NaN when either side has zero variance
/// or the lengths differ.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    let (Some(mx), Some(my)) = (mean(x), mean(y)) else {
        return f64::NAN;
    };
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

/// Pairwise Pearson matrix over `columns`, row-major.
///
/// The result is exactly symmetric; the diagonal is 1.0 for every column
/// with non-zero variance.
pub fn correlation_matrix(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = columns.len();
    let mut matrix = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = if i == j {
                if sample_std_dev(&columns[i]).is_some_and(|s| s > 0.0) {
                    1.0
                } else {
                    f64::NAN
                }
            } else {
                pearson(&columns[i], &columns[j])
            };
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

/// `bins + 1` equal-width edges over the finite range of `values`.
///
/// A degenerate range `[v, v]` is widened to `[v - 0.5, v + 0.5]`.
/// Returns `None` when there are no finite values or `bins == 0`.
pub fn bin_edges(values: &[f64], bins: usize) -> Option<Vec<f64>> {
    if bins == 0 {
        return None;
    }
    let (mut lo, mut hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
    edges.push(hi);
    Some(edges)
}

/// Count `values` into the bins described by `edges`. Every bin is half-open
/// except the last, which includes its right edge. Values outside the edges
/// and non-finite values are dropped.
pub fn histogram_counts(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let bins = edges.len().saturating_sub(1);
    let mut counts = vec![0usize; bins];
    if bins == 0 {
        return counts;
    }
    let lo = edges[0];
    let hi = edges[bins];
    for &v in values {
        if !v.is_finite() || v < lo || v > hi {
            continue;
        }
        // First edge strictly greater than v, minus one.
        let idx = edges.partition_point(|&e| e <= v).saturating_sub(1).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}

/// Scott's rule bandwidth: `std * n^(-1/5)`.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let std = sample_std_dev(values)?;
    if std <= 0.0 || !std.is_finite() {
        return None;
    }
    Some(std * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density estimate.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit on `samples`. `None` for fewer than two samples or zero variance.
    pub fn new(samples: &[f64]) -> Option<Self> {
        let bandwidth = scott_bandwidth(samples)?;
        Some(GaussianKde {
            samples: samples.to_vec(),
            bandwidth,
        })
    }

    /// Density at `x`; integrates to 1 over the real line.
    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * self.bandwidth);
        let sum: f64 = self
            .samples
            .iter()
            .map(|s| {
                let z = (x - s) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum / self.samples.len() as f64
    }

    /// Evaluate on `gridsize` evenly spaced points spanning the sample range
    /// extended by `cut` bandwidths on each side.
    pub fn curve(&self, gridsize: usize, cut: f64) -> Vec<[f64; 2]> {
        let lo = self.samples.iter().copied().fold(f64::INFINITY, f64::min) - cut * self.bandwidth;
        let hi = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max) + cut * self.bandwidth;
        if gridsize < 2 {
            return vec![[lo, self.density(lo)]];
        }
        let step = (hi - lo) / (gridsize - 1) as f64;
        (0..gridsize)
            .map(|i| {
                let x = lo + step * i as f64;
                [x, self.density(x)]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(&[1, 0, 1, 1, 0, 2]);
        assert_eq!(counts, vec![(1, 3), (0, 2), (2, 1)]);

        // Ties fall back to ascending value.
        let counts = value_counts(&[1, 0]);
        assert_eq!(counts, vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_pearson_known_values() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let up = [2.0, 4.0, 6.0, 8.0, 10.0];
        let down = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert!((pearson(&x, &up) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &down) + 1.0).abs() < 1e-12);

        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert!((pearson(&x, &y) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_degenerate() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0, 2.0], &[1.0]).is_nan());
    }

    #[test]
    fn test_correlation_matrix_properties() {
        let columns = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 1.0, 3.0, 2.0],
            vec![0.5, 0.7, 0.2, 0.9],
            vec![3.0, 3.0, 3.0, 3.0],
        ];
        let m = correlation_matrix(&columns);
        assert_eq!(m.len(), 4);
        for i in 0..3 {
            assert_eq!(m[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
                assert!(m[i][j].abs() <= 1.0);
            }
        }
        assert!(m[3][3].is_nan());
        assert!(m[0][3].is_nan());
    }

    #[test]
    fn test_bin_edges() {
        let edges = bin_edges(&[0.0, 10.0, 5.0], 5).unwrap();
        assert_eq!(edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let edges = bin_edges(&[3.0, 3.0], 2).unwrap();
        assert_eq!(edges, vec![2.5, 3.0, 3.5]);

        assert!(bin_edges(&[], 5).is_none());
        assert!(bin_edges(&[1.0], 0).is_none());
    }

    #[test]
    fn test_histogram_counts_edges_inclusive_last() {
        let edges = vec![0.0, 1.0, 2.0, 3.0];
        let counts = histogram_counts(&[0.0, 0.5, 1.0, 2.9, 3.0, 3.1, f64::NAN], &edges);
        assert_eq!(counts, vec![2, 1, 2]);
    }

    #[test]
    fn test_histogram_counts_cover_all_values() {
        let values: Vec<f64> = (0..97).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
        let edges = bin_edges(&values, 13).unwrap();
        let counts = histogram_counts(&values, &edges);
        assert_eq!(counts.len(), 13);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let samples = [1.0, 2.0, 2.5, 3.0, 7.0, 7.5];
        let kde = GaussianKde::new(&samples).unwrap();
        let curve = kde.curve(2000, 6.0);
        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {area}");
    }

    #[test]
    fn test_kde_degenerate_inputs() {
        assert!(GaussianKde::new(&[1.0]).is_none());
        assert!(GaussianKde::new(&[2.0, 2.0, 2.0]).is_none());
    }

    #[test]
    fn test_kde_curve_span() {
        let kde = GaussianKde::new(&[0.0, 1.0, 2.0]).unwrap();
        let curve = kde.curve(50, 0.0);
        assert_eq!(curve.len(), 50);
        assert_eq!(curve[0][0], 0.0);
        assert!((curve[49][0] - 2.0).abs() < 1e-12);
    }
}

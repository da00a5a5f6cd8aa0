//! Numeric kernel backing the analysis handlers and chart renderers.
//!
//! Pure functions over `f64` slices, plus a couple of column-level helpers.
//! Conventions follow the usual statistics-package defaults: sample standard
//! deviation (n − 1), linear-interpolation quantiles, pairwise-complete
//! Pearson correlation, and Silverman's rule for KDE bandwidth. Undefined
//! results are `NaN`, never panics.

use super::types::Column;
use std::collections::HashMap;

/// Summary statistics for one numeric column, in describe-output order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator). `NaN` for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Quantile with linear interpolation between order statistics.
///
/// `q` is in `[0, 1]`. `NaN` for an empty slice. The input need not be sorted.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Computes the full summary for a slice of values.
pub fn summarize(values: &[f64]) -> Summary {
    let mut min = f64::NAN;
    let mut max = f64::NAN;
    for &v in values {
        if min.is_nan() || v < min {
            min = v;
        }
        if max.is_nan() || v > max {
            max = v;
        }
    }
    Summary {
        count: values.len(),
        mean: mean(values),
        std: std_dev(values),
        min,
        q1: quantile(values, 0.25),
        median: quantile(values, 0.5),
        q3: quantile(values, 0.75),
        max,
    }
}

/// Pearson correlation over pairwise-complete observations.
///
/// Rows where either side is missing are skipped. `NaN` when fewer than two
/// complete pairs remain or either side has zero variance.
pub fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in &pairs {
        cov += (x - mx) * (y - my);
        vx += (x - mx) * (x - mx);
        vy += (y - my) * (y - my);
    }
    if vx == 0.0 || vy == 0.0 {
        return f64::NAN;
    }
    cov / (vx.sqrt() * vy.sqrt())
}

/// Full pairwise-complete Pearson matrix for a set of columns.
pub fn correlation_matrix(columns: &[&Column]) -> Vec<Vec<f64>> {
    let cells: Vec<Vec<Option<f64>>> = columns.iter().map(|c| c.f64_cells()).collect();
    (0..columns.len())
        .map(|i| {
            (0..columns.len())
                .map(|j| pearson(&cells[i], &cells[j]))
                .collect()
        })
        .collect()
}

/// Frequency of each distinct non-missing value in a column, most frequent
/// first. Ties break by first appearance, keeping the output deterministic.
pub fn value_counts(column: &Column) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for cell in column.cells() {
        if cell.is_missing() {
            continue;
        }
        let key = cell.to_display_string();
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    // Stable sort preserves first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Count of distinct non-missing values in a column.
pub fn unique_count(column: &Column) -> usize {
    let mut seen: HashMap<String, ()> = HashMap::new();
    for cell in column.cells() {
        if !cell.is_missing() {
            seen.insert(cell.to_display_string(), ());
        }
    }
    seen.len()
}

/// Fixed-width histogram over `[min, max]`.
///
/// Returns the bin edges (`bins + 1` entries) and per-bin counts. Degenerate
/// inputs (empty, or all values equal) get a padded unit-wide range so the
/// edges are always strictly increasing.
pub fn histogram(values: &[f64], bins: usize) -> (Vec<f64>, Vec<usize>) {
    let (lo, hi) = padded_bounds(values);
    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];
    for &v in values {
        let mut idx = ((v - lo) / width) as usize;
        if idx >= bins {
            idx = bins - 1; // right edge inclusive
        }
        counts[idx] += 1;
    }
    (edges, counts)
}

/// Silverman's rule-of-thumb bandwidth. `NaN` when undefined.
pub fn silverman_bandwidth(values: &[f64]) -> f64 {
    let sd = std_dev(values);
    if !sd.is_finite() || sd == 0.0 {
        return f64::NAN;
    }
    1.06 * sd * (values.len() as f64).powf(-0.2)
}

/// Gaussian kernel density estimate evaluated over `grid`.
///
/// Returns an empty vector when the bandwidth is undefined (fewer than two
/// values, or zero variance).
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Vec<f64> {
    let h = silverman_bandwidth(values);
    if !h.is_finite() {
        return Vec::new();
    }
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * h * values.len() as f64);
    grid.iter()
        .map(|&x| {
            values
                .iter()
                .map(|&v| {
                    let z = (x - v) / h;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm
        })
        .collect()
}

/// Data bounds padded for plotting: 5% margin, or ±0.5 when the range is
/// degenerate, `(0, 1)` when there is no data.
pub fn padded_bounds(values: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo == hi {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

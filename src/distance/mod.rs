//! Distance functions over feature vectors.
//!
//! Five metrics used by the instance-based predictors: Euclidean,
//! Manhattan, Minkowski(p), Chebyshev, and cosine distance. All are pure
//! functions over two equal-length `f64` slices, exposed both as free
//! functions and through the [`DistanceMetric`] selector enum.
//!
//! # Example
//!
//! ```
//! use inferir::distance::{euclidean_distance, DistanceMetric};
//!
//! let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]);
//! assert!((d - 5.0).abs() < 1e-12);
//!
//! let metric = DistanceMetric::from_name("EUCLIDEAN");
//! assert_eq!(metric, DistanceMetric::Euclidean);
//! ```

use serde::{Deserialize, Serialize};

/// Minkowski exponent used when a descriptor doesn't carry one.
pub const DEFAULT_MINKOWSKI_P: f64 = 3.0;

/// Distance metric selector for instance-based predictors.
///
/// The Minkowski exponent is not part of the selector; it travels in the
/// model descriptor (`minkowski_p`) and is passed to [`DistanceMetric::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance: `sqrt(sum((x1_i - x2_i)^2))`
    Euclidean,
    /// Manhattan distance: `sum(|x1_i - x2_i|)`
    Manhattan,
    /// Minkowski distance with caller-supplied exponent p
    Minkowski,
    /// Chebyshev distance: `max(|x1_i - x2_i|)`
    Chebyshev,
    /// Cosine distance: `1 - cos(x1, x2)`
    Cosine,
}

impl DistanceMetric {
    /// Parses a wire-format metric name, case-insensitively.
    ///
    /// Unknown names fall back to Euclidean. This is the only place in the
    /// crate where an unrecognized metric is defaulted; typed call sites
    /// cannot express an unknown metric at all.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Self::Manhattan,
            "minkowski" => Self::Minkowski,
            "chebyshev" => Self::Chebyshev,
            "cosine" => Self::Cosine,
            _ => Self::Euclidean,
        }
    }

    /// Computes the selected distance between two equal-length vectors.
    ///
    /// `minkowski_p` is only consulted for [`DistanceMetric::Minkowski`];
    /// `None` means [`DEFAULT_MINKOWSKI_P`].
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    #[must_use]
    pub fn compute(&self, x1: &[f64], x2: &[f64], minkowski_p: Option<f64>) -> f64 {
        match self {
            Self::Euclidean => euclidean_distance(x1, x2),
            Self::Manhattan => manhattan_distance(x1, x2),
            Self::Minkowski => {
                minkowski_distance(x1, x2, minkowski_p.unwrap_or(DEFAULT_MINKOWSKI_P))
            }
            Self::Chebyshev => chebyshev_distance(x1, x2),
            Self::Cosine => cosine_distance(x1, x2),
        }
    }
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self::Euclidean
    }
}

/// Euclidean distance: `sqrt(sum((x1_i - x2_i)^2))`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn euclidean_distance(x1: &[f64], x2: &[f64]) -> f64 {
    assert_eq!(x1.len(), x2.len(), "Vectors must have same length");
    x1.iter()
        .zip(x2.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// Manhattan distance: `sum(|x1_i - x2_i|)`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn manhattan_distance(x1: &[f64], x2: &[f64]) -> f64 {
    assert_eq!(x1.len(), x2.len(), "Vectors must have same length");
    x1.iter().zip(x2.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// Minkowski distance: `(sum(|x1_i - x2_i|^p))^(1/p)`.
///
/// Euclidean and Manhattan are the p = 2 and p = 1 special cases.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn minkowski_distance(x1: &[f64], x2: &[f64], p: f64) -> f64 {
    assert_eq!(x1.len(), x2.len(), "Vectors must have same length");
    x1.iter()
        .zip(x2.iter())
        .map(|(a, b)| (a - b).abs().powf(p))
        .sum::<f64>()
        .powf(1.0 / p)
}

/// Chebyshev distance: `max(|x1_i - x2_i|)`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn chebyshev_distance(x1: &[f64], x2: &[f64]) -> f64 {
    assert_eq!(x1.len(), x2.len(), "Vectors must have same length");
    x1.iter()
        .zip(x2.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Cosine distance: `1 - (x1 . x2) / (||x1|| ||x2||)`.
///
/// If either vector has zero norm the distance is defined as `1.0`
/// (maximal), never NaN.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn cosine_distance(x1: &[f64], x2: &[f64]) -> f64 {
    assert_eq!(x1.len(), x2.len(), "Vectors must have same length");

    let dot: f64 = x1.iter().zip(x2.iter()).map(|(a, b)| a * b).sum();
    let norm_x1 = x1.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_x2 = x2.iter().map(|a| a * a).sum::<f64>().sqrt();

    if norm_x1 == 0.0 || norm_x2 == 0.0 {
        return 1.0;
    }

    1.0 - dot / (norm_x1 * norm_x2)
}

#[cfg(test)]
mod tests_distance_contract;

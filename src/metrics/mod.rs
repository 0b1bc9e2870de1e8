//! Evaluation metrics for predictions.
//!
//! Regression metrics (MSE, RMSE, MAE, R², MAPE) and classification
//! metrics (accuracy, macro precision/recall/F1, binary confusion counts)
//! over parallel actual/predicted sequences. The aggregate report
//! functions are the UI-facing surface and validate their inputs; the
//! individual metric functions follow the convention of panicking on
//! malformed slices, documented per function.
//!
//! # Example
//!
//! ```
//! use inferir::metrics::regression_report;
//!
//! let report = regression_report(&[3.0, -0.5, 2.0], &[2.5, 0.0, 2.0]).expect("non-empty");
//! assert!(report.mse < 0.2);
//! assert!(report.r2 > 0.9);
//! ```

use crate::error::{InferirError, Result};
use serde::{Deserialize, Serialize};

/// Magnitude floor substituted for near-zero actuals in the MAPE
/// denominator.
const MAPE_DENOMINATOR_FLOOR: f64 = 1e-10;

/// Aggregate regression metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionReport {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    pub mape: f64,
}

/// Binary confusion counts, accumulated only over pairs where both labels
/// denote 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionCounts {
    pub true_positives: u32,
    pub true_negatives: u32,
    pub false_positives: u32,
    pub false_negatives: u32,
}

/// Aggregate classification metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    pub accuracy: f64,
    /// Macro-averaged over observed classes.
    pub precision: f64,
    /// Macro-averaged over observed classes.
    pub recall: f64,
    /// Harmonic mean of the macro precision and macro recall.
    pub f1: f64,
    pub confusion: ConfusionCounts,
}

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(actual - predicted)²`
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
#[must_use]
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len(), "Sequences must have same length");
    assert!(!actual.is_empty(), "Sequences cannot be empty");

    let sum_sq: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    sum_sq / actual.len() as f64
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// RMSE = sqrt(MSE)
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
#[must_use]
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Computes the Mean Absolute Error (MAE).
///
/// MAE = (1/n) * `Σ|actual - predicted|`
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
#[must_use]
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len(), "Sequences must have same length");
    assert!(!actual.is_empty(), "Sequences cannot be empty");

    let sum_abs: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    sum_abs / actual.len() as f64
}

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`). A constant target (`SS_tot` = 0) is
/// defined as a perfect fit: R² = 1.0, never a division by zero.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
#[must_use]
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len(), "Sequences must have same length");
    assert!(!actual.is_empty(), "Sequences cannot be empty");

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    let ss_tot: f64 = actual.iter().map(|a| (a - mean) * (a - mean)).sum();

    if ss_tot == 0.0 {
        return 1.0;
    }

    1.0 - ss_res / ss_tot
}

/// Computes the Mean Absolute Percentage Error (MAPE), in percent.
///
/// Near-zero actuals are floored in magnitude at 1e-10 in the denominator
/// so a zero target contributes a large finite term instead of infinity.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
#[must_use]
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len(), "Sequences must have same length");
    assert!(!actual.is_empty(), "Sequences cannot be empty");

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| {
            let denominator = if a.abs() < MAPE_DENOMINATOR_FLOOR {
                MAPE_DENOMINATOR_FLOOR
            } else {
                *a
            };
            ((a - p) / denominator).abs()
        })
        .sum();
    sum / actual.len() as f64 * 100.0
}

/// Computes every regression metric over parallel actual/predicted values.
///
/// # Errors
///
/// Returns a validation error if the sequences are empty or their lengths
/// differ.
pub fn regression_report(actual: &[f64], predicted: &[f64]) -> Result<RegressionReport> {
    validate_parallel(actual.len(), predicted.len())?;

    Ok(RegressionReport {
        mse: mse(actual, predicted),
        rmse: rmse(actual, predicted),
        mae: mae(actual, predicted),
        r2: r_squared(actual, predicted),
        mape: mape(actual, predicted),
    })
}

/// Computes classification accuracy: exact label matches over total pairs.
///
/// # Panics
///
/// Panics if the slices have different lengths or are empty.
#[must_use]
pub fn accuracy(actual: &[String], predicted: &[String]) -> f64 {
    assert_eq!(actual.len(), predicted.len(), "Sequences must have same length");
    assert!(!actual.is_empty(), "Sequences cannot be empty");

    let correct = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64
}

/// Computes every classification metric over parallel label sequences.
///
/// Accuracy counts every pair. The binary confusion counts only accumulate
/// over pairs where both labels denote 0 or 1; macro precision/recall/F1
/// average over the union of observed classes in first-appearance order.
///
/// # Errors
///
/// Returns a validation error if the sequences are empty or their lengths
/// differ.
pub fn classification_report(
    actual: &[String],
    predicted: &[String],
) -> Result<ClassificationReport> {
    validate_parallel(actual.len(), predicted.len())?;

    let classes = observed_classes(actual, predicted);

    let mut precisions = Vec::with_capacity(classes.len());
    let mut recalls = Vec::with_capacity(classes.len());
    for class in &classes {
        let mut tp = 0u32;
        let mut fp = 0u32;
        let mut fn_ = 0u32;
        for (a, p) in actual.iter().zip(predicted.iter()) {
            let actual_is = a == class;
            let predicted_is = p == class;
            match (actual_is, predicted_is) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => {}
            }
        }
        precisions.push(safe_ratio(tp, tp + fp));
        recalls.push(safe_ratio(tp, tp + fn_));
    }

    let precision = precisions.iter().sum::<f64>() / precisions.len() as f64;
    let recall = recalls.iter().sum::<f64>() / recalls.len() as f64;
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    Ok(ClassificationReport {
        accuracy: accuracy(actual, predicted),
        precision,
        recall,
        f1,
        confusion: confusion_counts(actual, predicted),
    })
}

/// Accumulates binary confusion counts over pairs where both labels denote
/// 0 or 1. Pairs outside {0, 1} are excluded here but still count toward
/// accuracy.
#[must_use]
pub fn confusion_counts(actual: &[String], predicted: &[String]) -> ConfusionCounts {
    let mut counts = ConfusionCounts::default();
    for (a, p) in actual.iter().zip(predicted.iter()) {
        let (Some(a), Some(p)) = (binary_value(a), binary_value(p)) else {
            continue;
        };
        match (a, p) {
            (1, 1) => counts.true_positives += 1,
            (0, 0) => counts.true_negatives += 1,
            (0, 1) => counts.false_positives += 1,
            (1, 0) => counts.false_negatives += 1,
            _ => unreachable!("binary_value only emits 0 or 1"),
        }
    }
    counts
}

/// Recognizes the labels whose numeric value is exactly 0 or 1 (`"0"`,
/// `"1"`, `"0.0"`, `"1.0"`, ...).
fn binary_value(label: &str) -> Option<u8> {
    let value: f64 = label.trim().parse().ok()?;
    if value == 0.0 {
        Some(0)
    } else if value == 1.0 {
        Some(1)
    } else {
        None
    }
}

/// Union of observed classes, in first-appearance order across the actual
/// then predicted sequences. The order is the deterministic iteration
/// order for macro averaging.
fn observed_classes(actual: &[String], predicted: &[String]) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for label in actual.iter().chain(predicted.iter()) {
        if !classes.contains(label) {
            classes.push(label.clone());
        }
    }
    classes
}

fn safe_ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

fn validate_parallel(n_actual: usize, n_predicted: usize) -> Result<()> {
    if n_actual == 0 || n_predicted == 0 {
        return Err(InferirError::empty_input("actual/predicted sequences"));
    }
    if n_actual != n_predicted {
        return Err(InferirError::dimension_mismatch(
            "predicted values",
            n_actual,
            n_predicted,
        ));
    }
    Ok(())
}

//! Predictor dispatch.
//!
//! One pure handler per [`ModelDescriptor`] variant, consolidated behind a
//! single [`predict`] entry point so every call site shares identical
//! semantics. No handler holds state: a prediction is a function of the
//! descriptor and the query features, nothing else.
//!
//! # Example
//!
//! ```
//! use inferir::model::ModelDescriptor;
//! use inferir::predict::predict;
//!
//! let model = ModelDescriptor::Linear {
//!     slope: 2.0,
//!     intercept: 1.0,
//!     feature_name: "hour".to_string(),
//! };
//! let prediction = predict(&model, &[3.0]).expect("one finite feature");
//! assert_eq!(prediction.as_value(), Some(7.0));
//! ```

use crate::error::{InferirError, Result};
use crate::model::{ModelDescriptor, Prediction, VARIANCE_FLOOR};
use std::collections::HashMap;
use std::f64::consts::PI;

/// Logit magnitude cap applied before the sigmoid so extreme linear terms
/// saturate to 0/1 instead of overflowing.
pub const LOGIT_CLIP: f64 = 500.0;

/// Runs inference for `model` on the feature vector `x`.
///
/// The descriptor's structural invariants and the query's arity and
/// finiteness are checked on every call.
///
/// # Errors
///
/// Returns a validation error for a malformed descriptor, a feature-count
/// mismatch, or non-finite features.
pub fn predict(model: &ModelDescriptor, x: &[f64]) -> Result<Prediction> {
    model.validate()?;
    model.validate_features(x)?;

    match model {
        ModelDescriptor::Linear {
            slope, intercept, ..
        } => Ok(Prediction::Regression {
            value: slope * x[0] + intercept,
        }),

        ModelDescriptor::MultiLinear {
            coefficients,
            intercept,
            ..
        } => Ok(Prediction::Regression {
            value: intercept + dot(coefficients, x),
        }),

        ModelDescriptor::Polynomial {
            coefficients,
            intercept,
            degree,
            include_bias,
            interaction_only,
            ..
        } => {
            let expanded =
                crate::preprocessing::expand(x, *degree, *include_bias, *interaction_only)?;
            if coefficients.len() != expanded.len() {
                return Err(InferirError::dimension_mismatch(
                    "polynomial coefficients",
                    expanded.len(),
                    coefficients.len(),
                ));
            }
            Ok(Prediction::Regression {
                value: intercept + dot(coefficients, &expanded),
            })
        }

        ModelDescriptor::Logistic {
            coefficients,
            intercept,
            ..
        } => {
            let z = (intercept + dot(coefficients, x)).clamp(-LOGIT_CLIP, LOGIT_CLIP);
            let probability = 1.0 / (1.0 + (-z).exp());
            Ok(Prediction::Probabilistic {
                class_label: usize::from(probability >= 0.5),
                probability,
            })
        }

        ModelDescriptor::KnnRegression {
            k,
            distance_metric,
            minkowski_p,
            training_features,
            training_labels,
            ..
        } => {
            let neighbors =
                nearest_neighbors(x, training_features, *distance_metric, *minkowski_p, *k);
            let sum: f64 = neighbors.iter().map(|&i| training_labels[i]).sum();
            Ok(Prediction::Regression {
                value: sum / neighbors.len() as f64,
            })
        }

        ModelDescriptor::KnnClassification {
            k,
            distance_metric,
            minkowski_p,
            training_features,
            training_labels,
            ..
        } => {
            let neighbors =
                nearest_neighbors(x, training_features, *distance_metric, *minkowski_p, *k);

            // Tally in ascending-distance scan order; the order doubles as
            // the tie-break (first label to reach the winning count wins).
            let mut vote_counts: Vec<(String, u32)> = Vec::new();
            for &idx in &neighbors {
                let label = &training_labels[idx];
                match vote_counts.iter_mut().find(|(seen, _)| seen == label) {
                    Some((_, count)) => *count += 1,
                    None => vote_counts.push((label.clone(), 1)),
                }
            }

            let mut winner = 0;
            for (i, (_, count)) in vote_counts.iter().enumerate() {
                if *count > vote_counts[winner].1 {
                    winner = i;
                }
            }

            Ok(Prediction::Voted {
                class_label: vote_counts[winner].0.clone(),
                vote_counts,
            })
        }

        ModelDescriptor::NaiveBayes {
            classes,
            class_means,
            class_variances,
            class_priors,
            ..
        } => naive_bayes_posterior(x, classes, class_means, class_variances, class_priors),
    }
}

fn dot(coefficients: &[f64], x: &[f64]) -> f64 {
    coefficients.iter().zip(x.iter()).map(|(c, v)| c * v).sum()
}

/// Indices of the `k` nearest training rows, ascending by distance.
///
/// The sort is stable, so equidistant rows keep their training order and
/// downstream vote/mean results are deterministic.
fn nearest_neighbors(
    query: &[f64],
    training_features: &[Vec<f64>],
    metric: crate::distance::DistanceMetric,
    minkowski_p: Option<f64>,
    k: usize,
) -> Vec<usize> {
    let mut order: Vec<(f64, usize)> = training_features
        .iter()
        .enumerate()
        .map(|(idx, row)| (metric.compute(query, row, minkowski_p), idx))
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));
    order.truncate(k.min(order.len()));
    order.into_iter().map(|(_, idx)| idx).collect()
}

fn naive_bayes_posterior(
    x: &[f64],
    classes: &[String],
    class_means: &HashMap<String, Vec<f64>>,
    class_variances: &HashMap<String, Vec<f64>>,
    class_priors: &HashMap<String, f64>,
) -> Result<Prediction> {
    let mut log_posteriors = Vec::with_capacity(classes.len());

    for class in classes {
        let means = class_means
            .get(class)
            .ok_or_else(|| InferirError::validation(format!("missing class means for {class:?}")))?;
        let variances = class_variances.get(class).ok_or_else(|| {
            InferirError::validation(format!("missing class variances for {class:?}"))
        })?;
        let prior = class_priors.get(class).ok_or_else(|| {
            InferirError::validation(format!("missing class prior for {class:?}"))
        })?;

        let mut log_posterior = prior.ln();
        for ((value, mean), variance) in x.iter().zip(means.iter()).zip(variances.iter()) {
            let variance = variance.max(VARIANCE_FLOOR);
            let diff = value - mean;
            log_posterior +=
                -0.5 * (2.0 * PI * variance).ln() - diff * diff / (2.0 * variance);
        }
        log_posteriors.push(log_posterior);
    }

    // Softmax with max-subtraction; the shift cancels in the ratio and
    // keeps the exponentials in range.
    let max_log = log_posteriors
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let unnormalized: Vec<f64> = log_posteriors
        .iter()
        .map(|lp| (lp - max_log).exp())
        .collect();
    let total: f64 = unnormalized.iter().sum();

    let class_probabilities: Vec<(String, f64)> = classes
        .iter()
        .cloned()
        .zip(unnormalized.iter().map(|u| u / total))
        .collect();

    // Argmax over declared class order; strict comparison keeps ties on
    // the first class.
    let mut best = 0;
    for (i, (_, probability)) in class_probabilities.iter().enumerate() {
        if *probability > class_probabilities[best].1 {
            best = i;
        }
    }

    Ok(Prediction::Posterior {
        class_label: class_probabilities[best].0.clone(),
        class_probabilities,
    })
}


#[cfg(test)]
mod tests_predict_contract;

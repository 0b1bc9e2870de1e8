//! Model descriptors and prediction values.
//!
//! A [`ModelDescriptor`] is the immutable record of a trained model an
//! external training service hands to this engine: one variant per model
//! kind, each carrying exactly the fitted parameters inference needs.
//! Descriptors are plain JSON-compatible values; every inference call
//! borrows them read-only, so one descriptor may be shared freely across
//! callers and threads.
//!
//! A [`Prediction`] is what dispatch returns: a plain regression value, a
//! binary probability, a vote tally, or a full class posterior.
//!
//! # Example
//!
//! ```
//! use inferir::model::ModelDescriptor;
//! use inferir::predict::predict;
//!
//! let model = ModelDescriptor::MultiLinear {
//!     coefficients: vec![2.0, -1.0],
//!     intercept: 3.0,
//!     feature_names: vec!["age".to_string(), "bmi".to_string()],
//! };
//! let prediction = predict(&model, &[4.0, 1.0]).expect("two finite features");
//! assert_eq!(prediction.as_value(), Some(10.0));
//! ```

use crate::distance::DistanceMetric;
use crate::error::{InferirError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inference-side floor applied to every Naive Bayes variance before it
/// enters the Gaussian log-density. Tunable constant, not a fitted value;
/// the descriptor's trainer-side `alpha` smoothing is carried separately.
pub const VARIANCE_FLOOR: f64 = 1e-9;

/// Immutable record of a trained model's kind and fitted parameters.
///
/// Produced by an external training service and consumed read-only here.
/// The serialized form is the tagged JSON record attached to a pipeline
/// node (`"model": "knnRegression"`, camelCase fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ModelDescriptor {
    /// Simple linear regression over one feature.
    Linear {
        slope: f64,
        intercept: f64,
        feature_name: String,
    },
    /// Multiple linear regression.
    MultiLinear {
        coefficients: Vec<f64>,
        intercept: f64,
        feature_names: Vec<String>,
    },
    /// Linear regression over an expanded polynomial basis.
    Polynomial {
        /// One coefficient per expanded feature, in expansion order.
        coefficients: Vec<f64>,
        intercept: f64,
        degree: usize,
        include_bias: bool,
        interaction_only: bool,
        feature_names: Vec<String>,
    },
    /// Binary logistic regression.
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
        feature_names: Vec<String>,
    },
    /// Instance-based regression over a stored training set.
    KnnRegression {
        k: usize,
        distance_metric: DistanceMetric,
        /// Minkowski exponent; `None` means the crate default of 3.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minkowski_p: Option<f64>,
        training_features: Vec<Vec<f64>>,
        training_labels: Vec<f64>,
        feature_names: Vec<String>,
    },
    /// Instance-based classification over a stored training set.
    KnnClassification {
        k: usize,
        distance_metric: DistanceMetric,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minkowski_p: Option<f64>,
        training_features: Vec<Vec<f64>>,
        training_labels: Vec<String>,
        feature_names: Vec<String>,
    },
    /// Gaussian Naive Bayes classifier.
    NaiveBayes {
        /// Class iteration order for posteriors and argmax tie-breaking.
        classes: Vec<String>,
        class_means: HashMap<String, Vec<f64>>,
        class_variances: HashMap<String, Vec<f64>>,
        class_priors: HashMap<String, f64>,
        /// Trainer-side smoothing, recorded for provenance.
        alpha: f64,
        feature_names: Vec<String>,
    },
}

impl ModelDescriptor {
    /// Short tag naming the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::MultiLinear { .. } => "multiLinear",
            Self::Polynomial { .. } => "polynomial",
            Self::Logistic { .. } => "logistic",
            Self::KnnRegression { .. } => "knnRegression",
            Self::KnnClassification { .. } => "knnClassification",
            Self::NaiveBayes { .. } => "naiveBayes",
        }
    }

    /// Number of raw input features the model was trained on.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        match self {
            Self::Linear { .. } => 1,
            Self::MultiLinear { feature_names, .. }
            | Self::Polynomial { feature_names, .. }
            | Self::Logistic { feature_names, .. }
            | Self::KnnRegression { feature_names, .. }
            | Self::KnnClassification { feature_names, .. }
            | Self::NaiveBayes { feature_names, .. } => feature_names.len(),
        }
    }

    /// True for the variants whose predictions carry a class label usable
    /// on a decision-boundary grid.
    #[must_use]
    pub fn is_grid_classifier(&self) -> bool {
        matches!(
            self,
            Self::KnnClassification { .. } | Self::NaiveBayes { .. }
        )
    }

    /// Checks a query feature vector against the descriptor's declared
    /// feature arity and rejects non-finite elements.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `x.len()` differs from
    /// [`feature_count`](Self::feature_count), or a validation error if any
    /// element is NaN or infinite.
    pub fn validate_features(&self, x: &[f64]) -> Result<()> {
        let expected = self.feature_count();
        if x.len() != expected {
            return Err(InferirError::dimension_mismatch(
                "features", expected, x.len(),
            ));
        }
        if let Some(pos) = x.iter().position(|v| !v.is_finite()) {
            return Err(InferirError::validation(format!(
                "feature {pos} is not finite: {}",
                x[pos]
            )));
        }
        Ok(())
    }

    /// Checks the descriptor's own structural invariants: coefficient
    /// vectors aligned to declared features, non-empty aligned training
    /// sets, and consistent Naive Bayes per-class parameter maps.
    ///
    /// Dispatch runs this on every call; collaborators may also call it
    /// once on receipt to reject a malformed descriptor early.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Linear {
                slope, intercept, ..
            } => {
                if !slope.is_finite() || !intercept.is_finite() {
                    return Err(InferirError::validation(
                        "linear parameters must be finite",
                    ));
                }
                Ok(())
            }
            Self::MultiLinear {
                coefficients,
                feature_names,
                ..
            }
            | Self::Logistic {
                coefficients,
                feature_names,
                ..
            } => {
                if coefficients.len() != feature_names.len() {
                    return Err(InferirError::dimension_mismatch(
                        "coefficients",
                        feature_names.len(),
                        coefficients.len(),
                    ));
                }
                Ok(())
            }
            Self::Polynomial { degree, .. } => {
                if *degree < 1 {
                    return Err(InferirError::validation(format!(
                        "polynomial degree must be at least 1, got {degree}"
                    )));
                }
                // Coefficient count depends on the expansion; dispatch
                // checks it against the expanded vector.
                Ok(())
            }
            Self::KnnRegression {
                k,
                training_features,
                training_labels,
                feature_names,
                ..
            } => {
                validate_training_set(*k, training_features, training_labels.len(), feature_names)
            }
            Self::KnnClassification {
                k,
                training_features,
                training_labels,
                feature_names,
                ..
            } => {
                validate_training_set(*k, training_features, training_labels.len(), feature_names)
            }
            Self::NaiveBayes {
                classes,
                class_means,
                class_variances,
                class_priors,
                feature_names,
                ..
            } => validate_class_parameters(
                classes,
                class_means,
                class_variances,
                class_priors,
                feature_names.len(),
            ),
        }
    }
}

fn validate_training_set(
    k: usize,
    training_features: &[Vec<f64>],
    n_labels: usize,
    feature_names: &[String],
) -> Result<()> {
    if k == 0 {
        return Err(InferirError::validation("k must be at least 1"));
    }
    if training_features.is_empty() {
        return Err(InferirError::empty_input("training set"));
    }
    if training_features.len() != n_labels {
        return Err(InferirError::dimension_mismatch(
            "training labels",
            training_features.len(),
            n_labels,
        ));
    }
    for (row_idx, row) in training_features.iter().enumerate() {
        if row.len() != feature_names.len() {
            return Err(InferirError::validation(format!(
                "training row {row_idx} has {} features, expected {}",
                row.len(),
                feature_names.len()
            )));
        }
    }
    Ok(())
}

fn validate_class_parameters(
    classes: &[String],
    class_means: &HashMap<String, Vec<f64>>,
    class_variances: &HashMap<String, Vec<f64>>,
    class_priors: &HashMap<String, f64>,
    n_features: usize,
) -> Result<()> {
    if classes.is_empty() {
        return Err(InferirError::empty_input("classes"));
    }
    if class_means.len() != classes.len()
        || class_variances.len() != classes.len()
        || class_priors.len() != classes.len()
    {
        return Err(InferirError::validation(
            "classMeans, classVariances and classPriors must be keyed by exactly the declared classes",
        ));
    }
    for class in classes {
        let means = class_means.get(class).ok_or_else(|| {
            InferirError::validation(format!("missing class means for {class:?}"))
        })?;
        let variances = class_variances.get(class).ok_or_else(|| {
            InferirError::validation(format!("missing class variances for {class:?}"))
        })?;
        if !class_priors.contains_key(class) {
            return Err(InferirError::validation(format!(
                "missing class prior for {class:?}"
            )));
        }
        if means.len() != n_features {
            return Err(InferirError::dimension_mismatch(
                "class means",
                n_features,
                means.len(),
            ));
        }
        if variances.len() != n_features {
            return Err(InferirError::dimension_mismatch(
                "class variances",
                n_features,
                variances.len(),
            ));
        }
    }
    Ok(())
}

/// Result of one inference call.
///
/// Label-keyed tallies are ordered association lists, not maps: vote
/// counts appear in first-encountered scan order and class posteriors in
/// the descriptor's declared class order, which is also the tie-breaking
/// order. Serialization preserves that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Prediction {
    /// A plain regression value.
    Regression { value: f64 },
    /// Binary probabilistic classification (logistic regression).
    Probabilistic { class_label: usize, probability: f64 },
    /// Majority-vote classification (k-NN).
    Voted {
        class_label: String,
        vote_counts: Vec<(String, u32)>,
    },
    /// Full posterior classification (Naive Bayes).
    Posterior {
        class_label: String,
        class_probabilities: Vec<(String, f64)>,
    },
}

impl Prediction {
    /// Scalar projection of the prediction, where one exists: the
    /// regression value, or the positive-class probability. Vote- and
    /// posterior-based predictions have no scalar form.
    #[must_use]
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Regression { value } => Some(*value),
            Self::Probabilistic { probability, .. } => Some(*probability),
            Self::Voted { .. } | Self::Posterior { .. } => None,
        }
    }

    /// The predicted class label for label-producing variants.
    #[must_use]
    pub fn class_label(&self) -> Option<&str> {
        match self {
            Self::Voted { class_label, .. } | Self::Posterior { class_label, .. } => {
                Some(class_label)
            }
            Self::Regression { .. } | Self::Probabilistic { .. } => None,
        }
    }
}

//! Visualization sampling.
//!
//! Derives renderer-ready artifacts from a model descriptor by repeated
//! dispatch: an ordered prediction curve for single-feature models, and a
//! decision-boundary grid for two-feature classifiers. The renderer itself
//! is an external collaborator; this module only produces the points.
//!
//! # Example
//!
//! ```
//! use inferir::model::ModelDescriptor;
//! use inferir::sampling::{sample_curve, Domain};
//!
//! let model = ModelDescriptor::Linear {
//!     slope: 2.0,
//!     intercept: 1.0,
//!     feature_name: "x".to_string(),
//! };
//! let domain = Domain::of(&[0.0, 4.0, 10.0]).expect("observed values");
//! let curve = sample_curve(&model, domain).expect("single-feature model");
//! assert_eq!(curve.len(), 101);
//! assert_eq!(curve[0], [0.0, 1.0]);
//! ```

use crate::error::{InferirError, Result};
use crate::model::ModelDescriptor;
use crate::predict::predict;
use serde::{Deserialize, Serialize};

/// Points per sampled curve.
pub const CURVE_SAMPLES: usize = 101;

/// Cells per axis of a decision-boundary grid.
pub const GRID_CELLS: usize = 40;

/// Fraction of the observed range added on each side of a grid axis.
pub const GRID_PADDING: f64 = 0.1;

/// Closed interval of observed feature values along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Builds a domain from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either bound is non-finite or
    /// `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(InferirError::validation(format!(
                "domain bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min > max {
            return Err(InferirError::validation(format!(
                "domain min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Observed min/max of a value sequence, ignoring non-finite entries.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no finite value remains.
    pub fn of(values: &[f64]) -> Result<Self> {
        let mut finite = values.iter().copied().filter(|v| v.is_finite());
        let first = finite
            .next()
            .ok_or_else(|| InferirError::empty_input("observed values"))?;
        let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Ok(Self { min, max })
    }

    /// Grid bounds: the observed range padded by [`GRID_PADDING`] per
    /// side, with a degenerate range widened to `[min - 1, min + 1]`.
    fn padded(self) -> (f64, f64) {
        let range = self.max - self.min;
        if range == 0.0 {
            (self.min - 1.0, self.min + 1.0)
        } else {
            (self.min - GRID_PADDING * range, self.max + GRID_PADDING * range)
        }
    }
}

/// One evaluated cell of a decision-boundary grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    /// Predicted class label at the cell center.
    pub label: String,
}

/// Samples an ordered prediction curve for a single-feature model.
///
/// Evaluates [`CURVE_SAMPLES`] evenly spaced points across the observed
/// domain, endpoints included and unpadded. The y value is the scalar
/// projection of each prediction (regression value or positive-class
/// probability).
///
/// # Errors
///
/// Returns a validation error if the model takes more than one feature,
/// if its predictions have no scalar projection, or if any underlying
/// dispatch fails.
pub fn sample_curve(model: &ModelDescriptor, domain: Domain) -> Result<Vec<[f64; 2]>> {
    if model.feature_count() != 1 {
        return Err(InferirError::validation(format!(
            "curve sampling needs a single-feature model, {} takes {}",
            model.kind(),
            model.feature_count()
        )));
    }

    let span = domain.max - domain.min;
    let mut curve = Vec::with_capacity(CURVE_SAMPLES);
    for i in 0..CURVE_SAMPLES {
        let t = i as f64 / (CURVE_SAMPLES - 1) as f64;
        let x = domain.min + span * t;
        let prediction = predict(model, &[x])?;
        let y = prediction.as_value().ok_or_else(|| {
            InferirError::validation(format!(
                "{} predictions have no scalar value to plot",
                model.kind()
            ))
        })?;
        curve.push([x, y]);
    }
    Ok(curve)
}

/// Samples a decision-boundary grid for a two-feature classifier.
///
/// Pads each axis by [`GRID_PADDING`] per side (a degenerate axis widens
/// to `[min - 1, min + 1]`), divides it into [`GRID_CELLS`] cells, and
/// evaluates the classifier at every cell center, row by row.
///
/// # Errors
///
/// Returns a validation error unless the model is a two-feature
/// label-producing classifier (k-NN classification or Naive Bayes).
pub fn sample_decision_grid(
    model: &ModelDescriptor,
    x_domain: Domain,
    y_domain: Domain,
) -> Result<Vec<GridPoint>> {
    if !model.is_grid_classifier() {
        return Err(InferirError::validation(format!(
            "decision grid needs a label-producing classifier, got {}",
            model.kind()
        )));
    }
    if model.feature_count() != 2 {
        return Err(InferirError::validation(format!(
            "decision grid needs a two-feature model, {} takes {}",
            model.kind(),
            model.feature_count()
        )));
    }

    let (x_min, x_max) = x_domain.padded();
    let (y_min, y_max) = y_domain.padded();
    let x_step = (x_max - x_min) / GRID_CELLS as f64;
    let y_step = (y_max - y_min) / GRID_CELLS as f64;

    let mut grid = Vec::with_capacity(GRID_CELLS * GRID_CELLS);
    for row in 0..GRID_CELLS {
        let y = y_min + (row as f64 + 0.5) * y_step;
        for col in 0..GRID_CELLS {
            let x = x_min + (col as f64 + 0.5) * x_step;
            let prediction = predict(model, &[x, y])?;
            let label = prediction
                .class_label()
                .ok_or_else(|| {
                    InferirError::validation(format!(
                        "{} predictions carry no class label",
                        model.kind()
                    ))
                })?
                .to_string();
            grid.push(GridPoint { x, y, label });
        }
    }
    Ok(grid)
}

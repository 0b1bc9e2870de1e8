//! Inferir: model inference and evaluation engine in pure Rust.
//!
//! Inferir consumes the fitted parameters an external training service
//! produces (a [`model::ModelDescriptor`]) and reproduces that model's
//! predictions exactly, along with the evaluation metrics and
//! visualization artifacts a pipeline editor renders around them. It
//! trains nothing, persists nothing, and logs nothing: every operation is
//! a pure function of its explicit inputs.
//!
//! # Quick Start
//!
//! ```
//! use inferir::prelude::*;
//!
//! // A descriptor delivered by the external trainer.
//! let model = ModelDescriptor::MultiLinear {
//!     coefficients: vec![2.0, -1.0],
//!     intercept: 3.0,
//!     feature_names: vec!["age".to_string(), "bmi".to_string()],
//! };
//!
//! // Reproduce its prediction for one feature vector.
//! let prediction = predict(&model, &[4.0, 1.0]).unwrap();
//! assert_eq!(prediction.as_value(), Some(10.0));
//!
//! // Evaluate a batch of predictions against observed targets.
//! let report = regression_report(&[10.0, 6.0], &[10.0, 5.5]).unwrap();
//! assert!(report.r2 > 0.9);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Model descriptors and prediction values
//! - [`distance`]: Distance functions over feature vectors
//! - [`preprocessing`]: Polynomial feature expansion
//! - [`data`]: Dataset row coercion
//! - [`predict`]: Predictor dispatch
//! - [`metrics`]: Regression and classification metrics
//! - [`sampling`]: Curve and decision-boundary sampling

pub mod data;
pub mod distance;
pub mod error;
pub mod metrics;
pub mod model;
pub mod predict;
pub mod prelude;
pub mod preprocessing;
pub mod sampling;

pub use error::{InferirError, Result};
pub use model::{ModelDescriptor, Prediction};
pub use predict::predict;

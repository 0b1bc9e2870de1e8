//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use inferir::prelude::*;
//! ```

pub use crate::distance::DistanceMetric;
pub use crate::error::{InferirError, Result};
pub use crate::metrics::{classification_report, regression_report};
pub use crate::model::{ModelDescriptor, Prediction};
pub use crate::predict::predict;
pub use crate::sampling::{sample_curve, sample_decision_grid, Domain, GridPoint};

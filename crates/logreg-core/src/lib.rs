//! Core traits and types for Newton's-Method logistic regression.
//!
//! This crate provides the building blocks the model is assembled from:
//! the scalar trait, the numerical kernels of the logistic loss, the
//! error types, and the callback interface used to observe training.
//!
//! # Modules
//!
//! - [`callback`]: Training callbacks and the loss printer
//! - [`error`]: Error types for fitting and prediction
//! - [`numerical`]: Sigmoid, loss, gradient and Hessian kernels
//! - [`report`]: Summary of a training run
//! - [`types`]: Scalar trait, matrix aliases and default constants

pub mod callback;
pub mod error;
pub mod numerical;
pub mod report;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{LogRegError, OptimizerError, OptimizerResult, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use logreg_core::prelude::*;
///
/// let z = DVector::from_vec(vec![0.0_f64, 2.0]);
/// assert_eq!(sigmoid_vector(&z)[0], 0.5);
/// ```
pub mod prelude {
    pub use crate::callback::{
        IterationInfo, LossHistory, LossPrinter, NoOpCallback, StopAfter, TrainingCallback,
    };
    pub use crate::error::{LogRegError, OptimizerError, OptimizerResult, Result};
    pub use crate::numerical::{sigmoid, sigmoid_vector};
    pub use crate::report::{FitReport, TerminationReason};
    pub use crate::types::{constants, DMatrix, DVector, Scalar};
}

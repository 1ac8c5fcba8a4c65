//! Error types for logistic regression training and prediction.
//!
//! This module defines the model-level errors raised while fitting or
//! evaluating the model, and the optimizer-level errors raised for
//! invalid configurations.

use thiserror::Error;

/// Errors that can occur while fitting or evaluating the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogRegError {
    /// Dimension mismatch between inputs.
    ///
    /// Raised when the feature matrix, label vector and parameter vector
    /// have incompatible shapes.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// The training set has no examples.
    #[error("Training set is empty: at least one example is required")]
    EmptyTrainingSet,

    /// The model has no parameter vector yet.
    #[error("Model is not fitted: call fit or supply an initial theta first")]
    NotFitted,

    /// The Hessian could not be inverted or factorized.
    ///
    /// This happens with perfectly separable data, linearly dependent
    /// features or duplicate columns.
    #[error("Hessian is singular at iteration {iteration}")]
    SingularHessian {
        /// Iteration at which the Newton step failed
        iteration: usize,
    },

    /// A training callback failed.
    #[error("Training callback failed: {reason}")]
    Callback {
        /// Description of the failure
        reason: String,
    },
}

impl LogRegError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a NotFitted error.
    pub fn not_fitted() -> Self {
        Self::NotFitted
    }

    /// Create a SingularHessian error for the given iteration.
    pub fn singular_hessian(iteration: usize) -> Self {
        Self::SingularHessian { iteration }
    }

    /// Create a Callback error with a custom reason.
    pub fn callback<S: Into<String>>(reason: S) -> Self {
        Self::Callback {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during optimization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizerError {
    /// Invalid optimizer configuration.
    ///
    /// This error occurs when the optimizer is configured with invalid
    /// parameters (e.g., non-positive tolerance, zero iteration cap).
    #[error("Invalid optimizer configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the configuration error
        reason: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
    },

    /// Propagated model error.
    #[error("Model operation failed: {0}")]
    Model(#[from] LogRegError),
}

impl OptimizerError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(reason: S1, parameter: S2, value: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            reason: reason.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }
}

/// Result type alias for operations that can produce LogRegError.
pub type Result<T> = std::result::Result<T, LogRegError>;

/// Result type alias for optimizer operations.
pub type OptimizerResult<T> = std::result::Result<T, OptimizerError>;

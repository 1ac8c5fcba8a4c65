//! Newton's-Method logistic regression.
//!
//! This crate provides the trainable model and its configuration. The
//! numerical kernels, callbacks and error types live in `logreg-core`.
//!
//! # Examples
//!
//! ```rust
//! use logreg_optim::{LogisticRegression, NewtonConfig, NewtonSolver};
//!
//! // Quiet training, Cholesky solve instead of an explicit inverse
//! let model = LogisticRegression::<f64>::new(
//!     NewtonConfig::new()
//!         .with_max_iterations(100)
//!         .with_tolerance(1e-8)
//!         .with_solver(NewtonSolver::Cholesky)
//!         .with_verbose(false),
//! );
//! assert!(!model.is_fitted());
//!
//! // Run training (x, y defined elsewhere)
//! // let report = model.fit(&x, &y)?;
//! ```

pub mod logistic_regression;
pub mod newton;

pub use logistic_regression::LogisticRegression;
pub use newton::{NewtonConfig, NewtonSolver};

// Re-export commonly used items from core
pub use logreg_core::{
    callback::{LossHistory, LossPrinter, TrainingCallback},
    report::{FitReport, TerminationReason},
};

//! Binary logistic regression trained with Newton's Method.
//!
//! This crate re-exports the model from `logreg-optim` and the supporting
//! types from `logreg-core` behind a single [`prelude`].
//!
//! ```rust
//! use logreg::prelude::*;
//!
//! let x = DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
//! let y = DVector::from_vec(vec![0.0, 0.0, 1.0, 1.0]);
//!
//! let mut model = LogisticRegression::new(
//!     NewtonConfig::new().with_max_iterations(10).with_verbose(false),
//! );
//! model.fit(&x, &y)?;
//!
//! let p = model.predict(&x)?;
//! assert!(p[1] < 0.5 && p[2] > 0.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use logreg_core;
pub use logreg_optim;
pub use nalgebra;

/// Everything needed to train and query a model.
pub mod prelude {
    pub use logreg_core::prelude::*;
    pub use logreg_optim::{LogisticRegression, NewtonConfig, NewtonSolver};
}

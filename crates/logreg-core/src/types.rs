//! Type definitions and aliases for logistic regression.
//!
//! This module provides the scalar trait the model is generic over, the
//! dense matrix/vector aliases used for training data, and default
//! hyperparameter constants.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used by the model (f32 or f64).
///
/// This trait combines the numeric traits required by the Newton loop:
/// nalgebra's field operations for the linear algebra and `num_traits`
/// for the elementwise transcendental functions.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Default convergence threshold (also the log-stability additive term).
    const DEFAULT_TOLERANCE: Self;

    /// Lifts an `f64` constant into this type.
    ///
    /// # Panics
    ///
    /// Never for `f32`/`f64`; both represent every finite `f64` (rounded).
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("float constant out of range")
    }

    /// Sample count as a scalar, used for the `1/n` means.
    ///
    /// # Panics
    ///
    /// Never for `f32`/`f64`.
    fn from_usize(v: usize) -> Self {
        <Self as FromPrimitive>::from_usize(v).expect("sample count out of range")
    }
}

impl Scalar for f32 {
    const DEFAULT_TOLERANCE: Self = 1e-5;
}

impl Scalar for f64 {
    const DEFAULT_TOLERANCE: Self = 1e-5;
}

/// Dynamically-sized matrix, used for feature matrices and Hessians.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Dynamically-sized column vector, used for labels, probabilities and theta.
pub type DVector<T> = OVector<T, Dyn>;

/// Default hyperparameter values.
pub mod constants {
    /// Step size held by the configuration. The Newton update never reads it.
    pub const DEFAULT_STEP_SIZE: f64 = 0.01;

    /// Hard cap on Newton iterations.
    pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

    /// Convergence threshold on the L1 norm of the parameter change.
    pub const DEFAULT_TOLERANCE: f64 = 1e-5;

    /// Per-iteration loss output is on unless disabled.
    pub const DEFAULT_VERBOSE: bool = true;

    /// Probability threshold separating the two classes.
    pub const DECISION_THRESHOLD: f64 = 0.5;
}

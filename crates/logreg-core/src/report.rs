//! Results of a training run.

use crate::types::{DVector, Scalar};
use std::time::Duration;

/// Reason the Newton loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// The L1 norm of the parameter change fell below the tolerance
    Converged,
    /// The iteration cap was reached first
    MaxIterations,
    /// A training callback asked to stop
    UserTerminated,
}

/// Summary of a call to `fit`.
///
/// Not reaching convergence is not an error: the report simply carries
/// `TerminationReason::MaxIterations` and the last computed theta.
#[derive(Debug, Clone)]
pub struct FitReport<T: Scalar> {
    /// Parameter vector after the last update
    pub theta: DVector<T>,

    /// Number of Newton updates applied
    pub iterations: usize,

    /// L1 norm of the last parameter change (`None` when no update ran)
    pub last_step: Option<T>,

    /// Mean cross-entropy at the final theta
    pub final_loss: T,

    /// Total training time
    pub duration: Duration,

    /// Reason for termination
    pub termination_reason: TerminationReason,

    /// Whether the convergence criterion fired
    pub converged: bool,
}

impl<T: Scalar> FitReport<T> {
    /// Creates a new report; `converged` is derived from the reason.
    pub fn new(
        theta: DVector<T>,
        iterations: usize,
        final_loss: T,
        duration: Duration,
        termination_reason: TerminationReason,
    ) -> Self {
        Self {
            theta,
            iterations,
            last_step: None,
            final_loss,
            duration,
            termination_reason,
            converged: termination_reason == TerminationReason::Converged,
        }
    }

    /// Sets the L1 norm of the last parameter change.
    pub fn with_last_step(mut self, step: T) -> Self {
        self.last_step = Some(step);
        self
    }
}

//! Newton's Method configuration and step solver
//!
//! The Newton update is `theta_new = theta - hess⁻¹ · grad`. The direction
//! `hess⁻¹ · grad` is computed by one of the strategies in [`NewtonSolver`].

use logreg_core::{
    error::{OptimizerError, OptimizerResult},
    types::{constants, DMatrix, DVector, Scalar},
};
use num_traits::Float;

/// Strategy used to compute the Newton direction `hess⁻¹ · grad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NewtonSolver {
    /// Explicit inverse of the Hessian applied to the gradient
    #[default]
    Inverse,
    /// Solve `hess · delta = grad` with a Cholesky factorization
    Cholesky,
    /// Solve `hess · delta = grad` with an LU factorization
    Lu,
}

impl NewtonSolver {
    /// Computes `hess⁻¹ · grad`.
    ///
    /// Returns `None` when the Hessian cannot be inverted or factorized.
    /// Near-singular Hessians are not detected and may yield non-finite
    /// directions.
    pub fn direction<T: Scalar>(
        self,
        hessian: DMatrix<T>,
        gradient: &DVector<T>,
    ) -> Option<DVector<T>> {
        match self {
            Self::Inverse => hessian.try_inverse().map(|inv| inv * gradient),
            Self::Cholesky => hessian.cholesky().map(|chol| chol.solve(gradient)),
            Self::Lu => hessian.lu().solve(gradient),
        }
    }
}

/// Configuration for the Newton's-Method logistic regression
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonConfig<T: Scalar> {
    /// Step size, kept for interface compatibility. The Newton update does not use it.
    pub step_size: T,
    /// Maximum number of Newton iterations
    pub max_iterations: usize,
    /// Threshold on the L1 norm of the parameter change; also added inside
    /// the logarithms of the reported loss
    pub tolerance: T,
    /// Initial guess for theta (zeros of the right length when `None`)
    pub initial_theta: Option<DVector<T>>,
    /// Print the loss of every iteration to standard output
    pub verbose: bool,
    /// How the Newton direction is computed
    pub solver: NewtonSolver,
}

impl<T: Scalar> Default for NewtonConfig<T> {
    fn default() -> Self {
        Self {
            step_size: <T as Scalar>::from_f64(constants::DEFAULT_STEP_SIZE),
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            tolerance: <T as Scalar>::DEFAULT_TOLERANCE,
            initial_theta: None,
            verbose: constants::DEFAULT_VERBOSE,
            solver: NewtonSolver::default(),
        }
    }
}

impl<T: Scalar> NewtonConfig<T> {
    /// Create a new Newton configuration with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step size
    pub fn with_step_size(mut self, step_size: T) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the maximum number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Start training from the given theta instead of zeros
    pub fn with_initial_theta(mut self, theta: DVector<T>) -> Self {
        self.initial_theta = Some(theta);
        self
    }

    /// Enable or disable per-iteration loss output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the Newton direction solver
    pub fn with_solver(mut self, solver: NewtonSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Checks that every hyperparameter is usable.
    pub fn validate(&self) -> OptimizerResult<()> {
        if !(<T as Float>::is_finite(self.step_size) && self.step_size > T::zero()) {
            return Err(OptimizerError::invalid_configuration(
                "step size must be positive and finite",
                "step_size",
                self.step_size.to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(OptimizerError::invalid_configuration(
                "at least one iteration is required",
                "max_iterations",
                "0",
            ));
        }
        if !(<T as Float>::is_finite(self.tolerance) && self.tolerance > T::zero()) {
            return Err(OptimizerError::invalid_configuration(
                "tolerance must be positive and finite",
                "tolerance",
                self.tolerance.to_string(),
            ));
        }
        Ok(())
    }
}

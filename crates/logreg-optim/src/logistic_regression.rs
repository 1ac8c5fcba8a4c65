//! Binary logistic regression trained with Newton's Method
//!
//! Each iteration computes the predicted probabilities, the gradient and
//! the Hessian of the mean negative log-likelihood, and takes a full Newton
//! step. Training stops when the L1 norm of the parameter change drops
//! below the tolerance, or after `max_iterations` updates.
//!
//! # Example
//!
//! ```rust
//! use logreg_optim::{LogisticRegression, NewtonConfig};
//! use nalgebra::{DMatrix, DVector};
//!
//! let x = DMatrix::from_row_slice(6, 2, &[
//!     1.0, 0.0,
//!     1.0, 1.0,
//!     1.0, 2.0,
//!     1.0, 3.0,
//!     1.0, 1.5,
//!     1.0, 1.7,
//! ]);
//! let y = DVector::from_vec(vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
//!
//! let mut model = LogisticRegression::new(NewtonConfig::new().with_verbose(false));
//! let report = model.fit(&x, &y)?;
//! assert!(report.converged);
//!
//! let probabilities = model.predict(&x)?;
//! assert_eq!(probabilities.len(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::newton::NewtonConfig;
use logreg_core::{
    callback::{IterationInfo, LossPrinter, TrainingCallback},
    error::{LogRegError, OptimizerResult, Result},
    numerical,
    report::{FitReport, TerminationReason},
    types::{constants, DMatrix, DVector, Scalar},
};
use std::time::Instant;

/// Logistic regression model.
///
/// The model is *untrained* until it holds a parameter vector, either from
/// `NewtonConfig::initial_theta` or from a call to [`fit`](Self::fit).
/// Fitting a trained model continues from its current theta.
#[derive(Debug, Clone)]
pub struct LogisticRegression<T: Scalar> {
    config: NewtonConfig<T>,
    theta: Option<DVector<T>>,
}

impl<T: Scalar> Default for LogisticRegression<T> {
    fn default() -> Self {
        Self::new(NewtonConfig::default())
    }
}

impl<T: Scalar> LogisticRegression<T> {
    /// Create a model with the given configuration
    pub fn new(config: NewtonConfig<T>) -> Self {
        let theta = config.initial_theta.clone();
        Self { config, theta }
    }

    /// The hyperparameters this model was built with
    pub fn config(&self) -> &NewtonConfig<T> {
        &self.config
    }

    /// Current parameter vector, if any
    pub fn theta(&self) -> Option<&DVector<T>> {
        self.theta.as_ref()
    }

    /// Whether the model holds a parameter vector
    pub fn is_fitted(&self) -> bool {
        self.theta.is_some()
    }

    /// Number of features the parameter vector expects
    pub fn n_features(&self) -> Option<usize> {
        self.theta.as_ref().map(DVector::len)
    }

    /// Run Newton's Method on `x` (shape `(n, p)`) and `y` (shape `(n,)`).
    ///
    /// Labels are expected in {0, 1}; this is not checked. When the
    /// configuration is verbose, `Iteration <i>: Loss = <value>` is printed
    /// to standard output for every iteration.
    pub fn fit(&mut self, x: &DMatrix<T>, y: &DVector<T>) -> OptimizerResult<FitReport<T>> {
        if self.config.verbose {
            let mut printer = LossPrinter::stdout();
            self.train(x, y, Some(&mut printer))
        } else {
            self.train(x, y, None)
        }
    }

    /// Same as [`fit`](Self::fit), reporting every iteration to `callback`
    /// instead of standard output.
    pub fn fit_with_callback<C>(
        &mut self,
        x: &DMatrix<T>,
        y: &DVector<T>,
        callback: &mut C,
    ) -> OptimizerResult<FitReport<T>>
    where
        C: TrainingCallback<T>,
    {
        self.train(x, y, Some(callback as &mut dyn TrainingCallback<T>))
    }

    /// Predicted probabilities `sigmoid(x · theta)`, one per row of `x`.
    pub fn predict(&self, x: &DMatrix<T>) -> Result<DVector<T>> {
        let theta = self.fitted_theta(x)?;
        Ok(numerical::probabilities(x, theta))
    }

    /// Hard 0/1 labels, thresholding the probabilities at 0.5.
    pub fn predict_labels(&self, x: &DMatrix<T>) -> Result<DVector<T>> {
        let threshold = <T as Scalar>::from_f64(constants::DECISION_THRESHOLD);
        Ok(self
            .predict(x)?
            .map(|p| if p > threshold { T::one() } else { T::zero() }))
    }

    /// Mean cross-entropy of the current theta on `(x, y)`, with the same
    /// additive tolerance as the training output.
    pub fn loss(&self, x: &DMatrix<T>, y: &DVector<T>) -> Result<T> {
        let theta = self.fitted_theta(x)?;
        check_labels(x, y)?;
        let h = numerical::probabilities(x, theta);
        Ok(numerical::log_loss(y, &h, self.config.tolerance))
    }

    fn fitted_theta(&self, x: &DMatrix<T>) -> Result<&DVector<T>> {
        let theta = self.theta.as_ref().ok_or_else(LogRegError::not_fitted)?;
        if x.ncols() != theta.len() {
            return Err(LogRegError::dimension_mismatch(
                format!("{} columns", theta.len()),
                format!("{} columns", x.ncols()),
            ));
        }
        Ok(theta)
    }

    fn train(
        &mut self,
        x: &DMatrix<T>,
        y: &DVector<T>,
        mut observer: Option<&mut dyn TrainingCallback<T>>,
    ) -> OptimizerResult<FitReport<T>> {
        self.config.validate()?;

        let (n, p) = x.shape();
        if n == 0 {
            return Err(LogRegError::EmptyTrainingSet.into());
        }
        check_labels(x, y)?;
        if let Some(theta) = &self.theta {
            if theta.len() != p {
                return Err(LogRegError::dimension_mismatch(
                    format!("{} features", theta.len()),
                    format!("{p} features"),
                )
                .into());
            }
        }

        let eps = self.config.tolerance;
        let max_iterations = self.config.max_iterations;
        let solver = self.config.solver;
        let theta = self.theta.get_or_insert_with(|| DVector::zeros(p));

        let start = Instant::now();
        if let Some(cb) = observer.as_deref_mut() {
            cb.on_training_start(n, p)?;
        }

        let mut iterations = 0;
        let mut last_step = None;
        let mut reason = TerminationReason::MaxIterations;

        for iteration in 0..max_iterations {
            let h = numerical::probabilities(x, theta);
            let grad = numerical::gradient(x, y, &h);
            let hess = numerical::hessian(x, &h);
            let loss = observer.is_some().then(|| numerical::log_loss(y, &h, eps));
            if let (Some(cb), Some(loss)) = (observer.as_deref_mut(), loss) {
                cb.on_iteration_start(iteration, loss)?;
            }

            let direction = solver
                .direction(hess, &grad)
                .ok_or_else(|| LogRegError::singular_hessian(iteration))?;
            let updated = &*theta - direction;
            let step = numerical::l1_norm(&(&updated - &*theta));
            *theta = updated;
            iterations = iteration + 1;
            last_step = Some(step);

            let mut keep_going = true;
            if let (Some(cb), Some(loss)) = (observer.as_deref_mut(), loss) {
                let info = IterationInfo {
                    iteration,
                    loss,
                    theta: &*theta,
                    step,
                    elapsed: start.elapsed(),
                };
                keep_going = cb.on_iteration_end(&info)?;
            }

            if step < eps {
                reason = TerminationReason::Converged;
                break;
            }
            if !keep_going {
                reason = TerminationReason::UserTerminated;
                break;
            }
        }

        let final_loss = numerical::log_loss(y, &numerical::probabilities(x, theta), eps);
        let mut report = FitReport::new(
            theta.clone(),
            iterations,
            final_loss,
            start.elapsed(),
            reason,
        );
        if let Some(step) = last_step {
            report = report.with_last_step(step);
        }

        if let Some(cb) = observer.as_deref_mut() {
            cb.on_training_end(&report)?;
        }
        Ok(report)
    }
}

fn check_labels<T: Scalar>(x: &DMatrix<T>, y: &DVector<T>) -> Result<()> {
    if y.len() != x.nrows() {
        return Err(LogRegError::dimension_mismatch(
            format!("{} labels", x.nrows()),
            format!("{} labels", y.len()),
        ));
    }
    Ok(())
}

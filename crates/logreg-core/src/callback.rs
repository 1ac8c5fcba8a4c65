//! Callback support for the training loop.
//!
//! Callbacks observe each Newton iteration. They are how training progress
//! is reported: the verbose mode of the model is a [`LossPrinter`] writing
//! to standard output.

use crate::error::{LogRegError, Result};
use crate::report::FitReport;
use crate::types::{DVector, Scalar};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Information passed to callbacks after each Newton update.
#[derive(Debug, Clone, Copy)]
pub struct IterationInfo<'a, T: Scalar> {
    /// Zero-based iteration index
    pub iteration: usize,

    /// Mean cross-entropy at the theta the iteration started from
    pub loss: T,

    /// Parameter vector after the update
    pub theta: &'a DVector<T>,

    /// L1 norm of the parameter change
    pub step: T,

    /// Elapsed time since training started
    pub elapsed: Duration,
}

/// Trait for training callbacks.
pub trait TrainingCallback<T: Scalar>: Send {
    /// Called before the first iteration with the problem shape.
    fn on_training_start(&mut self, n_samples: usize, n_features: usize) -> Result<()> {
        let _ = (n_samples, n_features);
        Ok(())
    }

    /// Called once the loss of an iteration is known, before the Newton
    /// step is solved. A singular Hessian still leaves this call behind.
    fn on_iteration_start(&mut self, iteration: usize, loss: T) -> Result<()> {
        let _ = (iteration, loss);
        Ok(())
    }

    /// Called at the end of each iteration.
    ///
    /// Returns `true` to continue training, `false` to stop early.
    fn on_iteration_end(&mut self, info: &IterationInfo<'_, T>) -> Result<bool> {
        let _ = info;
        Ok(true)
    }

    /// Called once the loop has stopped.
    fn on_training_end(&mut self, report: &FitReport<T>) -> Result<()> {
        let _ = report;
        Ok(())
    }
}

/// A callback that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpCallback;

impl<T: Scalar> TrainingCallback<T> for NoOpCallback {}

/// Writes `Iteration <i>: Loss = <value>` for every iteration.
#[derive(Debug)]
pub struct LossPrinter<W: Write + Send> {
    writer: W,
}

impl LossPrinter<Stdout> {
    /// Printer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LossPrinter<W> {
    /// Printer writing to an arbitrary sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<T: Scalar, W: Write + Send> TrainingCallback<T> for LossPrinter<W> {
    fn on_iteration_start(&mut self, iteration: usize, loss: T) -> Result<()> {
        writeln!(self.writer, "Iteration {iteration}: Loss = {loss}")
            .map_err(|e| LogRegError::callback(e.to_string()))
    }

    fn on_training_end(&mut self, _report: &FitReport<T>) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LogRegError::callback(e.to_string()))
    }
}

/// Records the loss of every iteration.
#[derive(Debug, Clone, Default)]
pub struct LossHistory<T: Scalar> {
    losses: Vec<T>,
    steps: Vec<T>,
}

impl<T: Scalar> LossHistory<T> {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            losses: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Loss per iteration, in order.
    pub fn losses(&self) -> &[T] {
        &self.losses
    }

    /// L1 step norm per iteration, in order.
    pub fn steps(&self) -> &[T] {
        &self.steps
    }
}

impl<T: Scalar> TrainingCallback<T> for LossHistory<T> {
    fn on_training_start(&mut self, _n_samples: usize, _n_features: usize) -> Result<()> {
        self.losses.clear();
        self.steps.clear();
        Ok(())
    }

    fn on_iteration_end(&mut self, info: &IterationInfo<'_, T>) -> Result<bool> {
        self.losses.push(info.loss);
        self.steps.push(info.step);
        Ok(true)
    }
}

/// Stops training after a fixed number of iterations.
#[derive(Debug, Clone, Copy)]
pub struct StopAfter {
    iterations: usize,
}

impl StopAfter {
    /// Stop once `iterations` updates have been applied.
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }
}

impl<T: Scalar> TrainingCallback<T> for StopAfter {
    fn on_iteration_end(&mut self, info: &IterationInfo<'_, T>) -> Result<bool> {
        Ok(info.iteration + 1 < self.iterations)
    }
}

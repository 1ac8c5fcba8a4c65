//! Integration tests for logreg-optim
//!
//! These tests train the model end to end on small synthetic problems and
//! check convergence, prediction quality and the diagnostic output.

use approx::assert_relative_eq;
use logreg_core::{
    callback::{LossHistory, LossPrinter},
    error::{LogRegError, OptimizerError},
    report::TerminationReason,
};
use logreg_optim::{LogisticRegression, NewtonConfig, NewtonSolver};
use nalgebra::{DMatrix, DVector};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Two unit-variance Gaussian clusters centred at `(-sep, -sep)` (label 0)
/// and `(sep, sep)` (label 1), with a bias column.
///
/// One point of each class is planted at the other cluster's centre so the
/// classes always overlap and the maximum-likelihood estimate is finite.
fn two_clusters(n_per_class: usize, sep: f64, seed: u64) -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let n = 2 * n_per_class + 2;

    let mut x = DMatrix::zeros(n, 3);
    let mut y = DVector::zeros(n);
    for i in 0..2 * n_per_class {
        let label = if i < n_per_class { 0.0 } else { 1.0 };
        let centre = if label > 0.5 { sep } else { -sep };
        x[(i, 0)] = 1.0;
        x[(i, 1)] = centre + noise.sample(&mut rng);
        x[(i, 2)] = centre + noise.sample(&mut rng);
        y[i] = label;
    }

    let planted = [(sep, 0.0), (-sep, 1.0)];
    for (k, &(centre, label)) in planted.iter().enumerate() {
        let i = 2 * n_per_class + k;
        x[(i, 0)] = 1.0;
        x[(i, 1)] = centre;
        x[(i, 2)] = centre;
        y[i] = label;
    }
    (x, y)
}

fn quiet() -> NewtonConfig<f64> {
    NewtonConfig::new().with_verbose(false)
}

fn accuracy(predicted: &DVector<f64>, y: &DVector<f64>) -> f64 {
    let hits = predicted
        .iter()
        .zip(y.iter())
        .filter(|&(&p, &label)| (p > 0.5) == (label > 0.5))
        .count();
    hits as f64 / y.len() as f64
}

#[test]
fn test_converges_on_gaussian_clusters() {
    let (x, y) = two_clusters(200, 1.5, 7);
    let mut model = LogisticRegression::new(quiet());

    let report = model.fit(&x, &y).unwrap();

    assert!(report.converged);
    assert_eq!(report.termination_reason, TerminationReason::Converged);
    assert!(report.iterations < 50, "took {} iterations", report.iterations);
    assert!(report.final_loss.is_finite());
    assert_eq!(model.theta().unwrap().len(), 3);
}

#[test]
fn test_training_accuracy_on_clean_clusters() {
    let (x, y) = two_clusters(200, 1.5, 11);
    let mut model = LogisticRegression::new(quiet());
    model.fit(&x, &y).unwrap();

    let probabilities = model.predict(&x).unwrap();
    let acc = accuracy(&probabilities, &y);
    assert!(acc >= 0.95, "training accuracy {acc}");
}

#[test]
fn test_loss_does_not_increase_near_convergence() {
    let (x, y) = two_clusters(150, 1.0, 3);
    let mut model = LogisticRegression::new(quiet());
    let mut history = LossHistory::<f64>::new();

    let report = model.fit_with_callback(&x, &y, &mut history).unwrap();
    assert!(report.converged);

    let losses = history.losses();
    assert_eq!(losses.len(), report.iterations);
    let tail = &losses[losses.len().saturating_sub(4)..];
    for pair in tail.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12, "loss went up: {pair:?}");
    }
    assert!(report.final_loss <= losses[0]);
}

#[test]
fn test_separable_scenario_splits_at_boundary() {
    // Perfectly separable: the MLE runs off to infinity, so cap the loop.
    let x = DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
    let y = DVector::from_vec(vec![0.0, 0.0, 1.0, 1.0]);
    let mut model = LogisticRegression::new(quiet().with_max_iterations(10));

    let report = model.fit(&x, &y).unwrap();
    assert_eq!(report.iterations, 10);
    assert_eq!(report.termination_reason, TerminationReason::MaxIterations);

    let p = model.predict(&x).unwrap();
    assert!(p[0] < 0.5 && p[1] < 0.5);
    assert!(p[2] > 0.5 && p[3] > 0.5);

    // boundary sits at 1.5, halfway between rows 1 and 2
    let theta = model.theta().unwrap();
    assert_relative_eq!(-theta[0] / theta[1], 1.5, epsilon = 1e-2);
}

#[test]
fn test_predict_is_idempotent_and_shaped() {
    let (x, y) = two_clusters(50, 1.0, 5);
    let mut model = LogisticRegression::new(quiet());
    model.fit(&x, &y).unwrap();

    let new_points =
        DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 0.0, 1.0, 4.0, 4.0, 1.0, -4.0, -4.0]);
    let first = model.predict(&new_points).unwrap();
    let second = model.predict(&new_points).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert!(first[1] > 0.5 && first[2] < 0.5);
}

#[test]
fn test_solvers_agree() {
    let (x, y) = two_clusters(100, 1.0, 21);
    let mut thetas = Vec::new();

    for solver in [NewtonSolver::Inverse, NewtonSolver::Cholesky, NewtonSolver::Lu] {
        let mut model = LogisticRegression::new(quiet().with_solver(solver));
        let report = model.fit(&x, &y).unwrap();
        assert!(report.converged, "{solver:?} did not converge");
        thetas.push(report.theta);
    }

    assert_relative_eq!(thetas[0], thetas[1], epsilon = 1e-6);
    assert_relative_eq!(thetas[0], thetas[2], epsilon = 1e-6);
}

#[test]
fn test_loss_printer_output_format() {
    let (x, y) = two_clusters(40, 1.0, 9);
    let mut model = LogisticRegression::new(quiet());
    let mut printer = LossPrinter::new(Vec::new());

    let report = model.fit_with_callback(&x, &y, &mut printer).unwrap();
    let output = String::from_utf8(printer.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), report.iterations);
    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("Iteration {i}: Loss = ");
        assert!(line.starts_with(&prefix), "unexpected line {line:?}");
        let value: f64 = line[prefix.len()..].parse().unwrap();
        assert!(value.is_finite() && value > 0.0);
    }

    // theta starts at zero, so every probability is 0.5
    let first: f64 = lines[0]["Iteration 0: Loss = ".len()..].parse().unwrap();
    assert_relative_eq!(first, -(0.5_f64 + 1e-5).ln(), epsilon = 1e-12);
}

#[test]
fn test_single_precision_model() {
    let x = DMatrix::<f32>::from_row_slice(
        6,
        2,
        &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0, 1.0, 1.5, 1.0, 1.7],
    );
    let y = DVector::<f32>::from_vec(vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
    let mut model = LogisticRegression::new(
        NewtonConfig::<f32>::new()
            .with_tolerance(1e-4)
            .with_max_iterations(50)
            .with_verbose(false),
    );

    let report = model.fit(&x, &y).unwrap();
    assert!(report.converged);
    let theta = model.theta().unwrap();
    assert_relative_eq!(theta[0], -6.381158, epsilon = 1e-3);
    assert_relative_eq!(theta[1], 4.065723, epsilon = 1e-3);
}

#[test]
fn test_initial_theta_of_wrong_length_is_rejected() {
    let (x, y) = two_clusters(10, 1.0, 1);
    let mut model = LogisticRegression::new(quiet().with_initial_theta(DVector::zeros(2)));

    let err = model.fit(&x, &y).unwrap_err();
    assert_eq!(
        err,
        OptimizerError::Model(LogRegError::dimension_mismatch("2 features", "3 features"))
    );
}

#[test]
fn test_warm_start_from_initial_theta() {
    let (x, y) = two_clusters(100, 1.0, 13);

    let mut cold = LogisticRegression::new(quiet());
    let cold_report = cold.fit(&x, &y).unwrap();

    let mut warm = LogisticRegression::new(quiet().with_initial_theta(cold_report.theta.clone()));
    let warm_report = warm.fit(&x, &y).unwrap();

    assert!(warm_report.iterations < cold_report.iterations);
    assert_relative_eq!(warm_report.theta, cold_report.theta, epsilon = 1e-6);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serializes_to_json() {
    let config = quiet().with_max_iterations(25).with_solver(NewtonSolver::Cholesky);
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["max_iterations"], 25);
    assert_eq!(json["verbose"], false);
    assert_eq!(json["solver"], "Cholesky");
}

proptest! {
    #[test]
    fn prop_predict_shape_and_range(
        rows in 1usize..20,
        w0 in -3.0f64..3.0,
        w1 in -1.0f64..1.0,
        scale in 0.1f64..1.0,
    ) {
        let model = LogisticRegression::new(
            quiet().with_initial_theta(DVector::from_vec(vec![w0, w1])),
        );
        let x = DMatrix::from_fn(rows, 2, |i, j| if j == 0 { 1.0 } else { scale * i as f64 - 5.0 });

        let p = model.predict(&x).unwrap();
        prop_assert_eq!(p.len(), rows);
        for &value in p.iter() {
            prop_assert!(value > 0.0 && value < 1.0);
        }
    }
}

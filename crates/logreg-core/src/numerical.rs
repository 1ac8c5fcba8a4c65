//! Numerical kernels for the logistic loss.
//!
//! Every function here is pure and works on nalgebra types. Shape checks
//! are the caller's job: the kernels assume `x` is `(n, p)`, `y` and `h`
//! have length `n`, and `theta` has length `p`.

use crate::types::{DMatrix, DVector, Scalar};
use num_traits::Float;

/// Logistic function `1 / (1 + exp(-z))`.
///
/// Saturates to exactly 0 or 1 for inputs of large magnitude.
#[inline]
pub fn sigmoid<T: Scalar>(z: T) -> T {
    T::one() / (T::one() + <T as Float>::exp(-z))
}

/// Elementwise logistic function.
pub fn sigmoid_vector<T: Scalar>(z: &DVector<T>) -> DVector<T> {
    z.map(sigmoid)
}

/// Predicted probabilities `sigmoid(x · theta)`.
pub fn probabilities<T: Scalar>(x: &DMatrix<T>, theta: &DVector<T>) -> DVector<T> {
    sigmoid_vector(&(x * theta))
}

/// Mean cross-entropy `-mean(y ln(h + eps) + (1 - y) ln(1 - h + eps))`.
///
/// `eps` keeps the logarithms finite when `h` saturates.
pub fn log_loss<T: Scalar>(y: &DVector<T>, h: &DVector<T>, eps: T) -> T {
    let one = T::one();
    let total = y.iter().zip(h.iter()).fold(T::zero(), |acc, (&yi, &hi)| {
        acc + yi * <T as Float>::ln(hi + eps) + (one - yi) * <T as Float>::ln(one - hi + eps)
    });
    -total / <T as Scalar>::from_usize(y.len())
}

/// Gradient of the mean negative log-likelihood, `-(1/n) xᵗ (y - h)`.
pub fn gradient<T: Scalar>(x: &DMatrix<T>, y: &DVector<T>, h: &DVector<T>) -> DVector<T> {
    let n = <T as Scalar>::from_usize(x.nrows());
    let residual = y - h;
    x.tr_mul(&residual) * (-T::one() / n)
}

/// Hessian of the mean negative log-likelihood, `(1/n) xᵗ diag(h (1 - h)) x`.
///
/// The result is a symmetric `p × p` matrix.
pub fn hessian<T: Scalar>(x: &DMatrix<T>, h: &DVector<T>) -> DMatrix<T> {
    let n = <T as Scalar>::from_usize(x.nrows());
    let weights = h.map(|hi| hi * (T::one() - hi));

    let mut weighted = x.clone();
    for j in 0..weighted.ncols() {
        for i in 0..weighted.nrows() {
            weighted[(i, j)] *= weights[i];
        }
    }

    x.tr_mul(&weighted) * (T::one() / n)
}

/// Sum of absolute values.
pub fn l1_norm<T: Scalar>(v: &DVector<T>) -> T {
    v.iter().fold(T::zero(), |acc, &vi| acc + <T as Float>::abs(vi))
}

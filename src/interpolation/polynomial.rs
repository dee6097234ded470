//! Owned polynomial in ascending coefficient order.

use log::trace;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::evaluate::{evaluate, evaluate_at};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::scalar::Scalar;
use crate::interpolation::solve::solve;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::vandermonde::build_vandermonde_checked;


/// `P(x) = coeffs[0] + coeffs[1] x + ... + coeffs[m-1] x^(m-1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Interpolating polynomial through `(x[i], y[i])`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] or
    ///   [`InterpolationError::DuplicateX`] from the checked builder.
    /// - [`InterpolationError::UnequalLength`] if `x` and `y` differ in length.
    pub fn fit(x: &[T], y: &[T]) -> Result<Self, InterpolationError> {
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let v = build_vandermonde_checked(x)?;
        let coeffs = solve(v, y)?;

        let poly = Self { coeffs };
        trace!("fitted {} samples, degree {:?}", x.len(), poly.degree());
        Ok(poly)
    }

    /// Ascending-degree coefficients, trailing zeros included.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Index of the highest non-zero coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }
}

impl<T: Scalar> Interpolator<T> for Polynomial<T> {
    fn eval(&self, x: &T) -> T {
        evaluate_at(x, &self.coeffs)
    }

    fn eval_many(&self, xs: &[T]) -> Vec<T> {
        evaluate(xs, &self.coeffs)
    }
}

impl<T: Scalar> From<InterpolationReport<T>> for Polynomial<T> {
    fn from(report: InterpolationReport<T>) -> Self {
        Self { coeffs: report.coefficients }
    }
}

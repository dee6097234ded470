//! Polynomial evaluation from an ascending coefficient vector.
//!
//! `coeffs[i]` multiplies `x^i`:
//!
//! ```text
//! P(x) = coeffs[0] + coeffs[1] x + coeffs[2] x^2 + ... + coeffs[m-1] x^(m-1)
//! ```
//!
//! Powers go through [`num_traits::pow::pow`] with a non-negative integer
//! exponent, so exact coordinate types stay exact.

use num_traits::pow::pow;

use crate::interpolation::scalar::Scalar;


/// Evaluates `P(x)` at a single point.
///
/// An empty coefficient slice is the zero polynomial.
pub fn evaluate_at<T: Scalar>(x: &T, coeffs: &[T]) -> T {
    coeffs
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, c)| acc + c.clone() * pow(x.clone(), i))
}


/// Evaluates the polynomial with coefficients `coeffs` at every point of `x`.
///
/// # Behavior
/// - `out[j] = sum_i coeffs[i] * x[j]^i`
/// - `out.len() == x.len()`, same order as `x`
/// - the number of coefficients is unrelated to `x.len()`; with no
///   coefficients every output is zero
pub fn evaluate<T: Scalar>(x: &[T], coeffs: &[T]) -> Vec<T> {
    x.iter().map(|xq| evaluate_at(xq, coeffs)).collect()
}

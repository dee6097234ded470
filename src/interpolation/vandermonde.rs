//! Vandermonde Interpolation
//!
//! Global polynomial interpolation through the
//! [Vandermonde matrix](https://en.wikipedia.org/wiki/Vandermonde_matrix).
//!
//! For `n` distinct samples the coefficients `c` of the unique polynomial of
//! degree `<= n - 1` through them solve
//!
//! ```text
//! [1  x_0  x_0^2  ...  x_0^(n-1)] [c_0    ]   [y_0    ]
//! [1  x_1  x_1^2  ...  x_1^(n-1)] [c_1    ] = [y_1    ]
//! [          ...                ] [ ...   ]   [ ...   ]
//! [1  x_n-1     ...  x_n-1^(n-1)] [c_(n-1)]   [y_(n-1)]
//! ```
//!
//! With an exact coordinate type the whole chain (build, solve, evaluate)
//! is exact.

use log::debug;
use num_traits::pow::pow;

use crate::interpolation::config::VandermondeCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::evaluate::evaluate;
use crate::interpolation::matrix::Matrix;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::scalar::Scalar;
use crate::interpolation::solve::solve;


/// Builds the `n x n` Vandermonde matrix of `x`, `M[i][j] = x[i]^j`.
///
/// Column 0 is all ones, `0^0` included. Distinctness of `x` is not
/// checked: repeated values give a singular matrix, which [`solve`]
/// reports as [`InterpolationError::SingularMatrix`]. Use
/// [`build_vandermonde_checked`] to fail early instead.
pub fn build_vandermonde<T: Scalar>(x: &[T]) -> Matrix<T> {
    let n = x.len();
    let mut data = Vec::with_capacity(n * n);

    for xi in x {
        for j in 0..n {
            data.push(pow(xi.clone(), j));
        }
    }

    Matrix::from_row_major(n, data)
}


/// First pair of indices `(i, j)`, `i < j`, with `x[i] == x[j]`.
pub fn find_duplicate<T: Scalar>(x: &[T]) -> Option<(usize, usize)> {
    for i in 0..x.len() {
        for j in i + 1..x.len() {
            if x[i] == x[j] {
                return Some((i, j));
            }
        }
    }
    None
}


/// [`build_vandermonde`] with input validation.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] for an empty `x`.
/// - [`InterpolationError::DuplicateX`] for the first repeated pair.
pub fn build_vandermonde_checked<T: Scalar>(x: &[T]) -> Result<Matrix<T>, InterpolationError> {
    if x.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some((first, second)) = find_duplicate(x) {
        return Err(InterpolationError::DuplicateX { first, second });
    }
    Ok(build_vandermonde(x))
}


/// Performs Vandermonde interpolation.
///
/// # Behavior
/// - Builds the Vandermonde matrix of `cfg.x()`.
/// - Solves `V c = y` exactly for the coefficients `c`.
/// - Evaluates `P(xq) = sum_i c[i] xq^i` for each `xq` in `cfg.x_eval()`.
///   There is no domain check, points outside the samples extrapolate.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"vandermonde"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `coefficients`   : ascending-degree coefficients
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Anything raised by [`VandermondeCfg::validate`].
/// - [`InterpolationError::SingularMatrix`] if distinctness checking was
///   disabled and `x` repeats a value.
pub fn interpolate<T: Scalar>(
    cfg: VandermondeCfg<'_, T>,
) -> Result<InterpolationReport<T>, InterpolationError> {
    cfg.validate()?;

    let x     = cfg.x();
    let y     = cfg.y();
    let evals = cfg.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();
    debug!(
        "vandermonde interpolation: {} samples, {} evaluation points",
        n_provided, n_evaluated
    );

    let mut report = InterpolationReport::new(n_provided, n_evaluated);

    let v = build_vandermonde(x);
    report.coefficients = solve(v, y)?;
    report.evaluated = evaluate(evals, &report.coefficients);

    Ok(report)
}

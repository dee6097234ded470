//! Exact Gauss-Jordan solver for `V c = y`.
//!
//! Pivoting picks the first row at or below the diagonal with a non-zero
//! entry in the current column. For exact types a zero test is all that is
//! needed; there is no magnitude-based pivoting, so results over `f64` can
//! lose all accuracy on ill-conditioned systems (a `1e-300` pivot is taken
//! as is).

use log::debug;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::matrix::Matrix;
use crate::interpolation::scalar::Scalar;


/// Solves `matrix * c = rhs` for `c`.
///
/// # Behavior
/// Reduces the augmented matrix `[matrix | rhs]` to reduced row echelon
/// form and reads the solution off the last column. The matrix is consumed.
///
/// # Errors
/// - [`InterpolationError::DimensionMismatch`] if `rhs.len() != matrix.dim()`.
/// - [`InterpolationError::SingularMatrix`] if some column has no non-zero
///   pivot, e.g. a Vandermonde matrix built from repeated `x` values.
pub fn solve<T: Scalar>(matrix: Matrix<T>, rhs: &[T]) -> Result<Vec<T>, InterpolationError> {
    let n = matrix.dim();
    if rhs.len() != n {
        return Err(InterpolationError::DimensionMismatch { rows: n, rhs: rhs.len() });
    }

    // augmented rows [a_i0 ... a_i(n-1) | b_i]
    let mut a: Vec<Vec<T>> = matrix.into_rows();
    for (row, b) in a.iter_mut().zip(rhs) {
        row.push(b.clone());
    }

    for col in 0..n {
        let pivot = match (col..n).find(|&r| !a[r][col].is_zero()) {
            Some(r) => r,
            None => {
                debug!("no pivot in column {} of {}x{} system", col, n, n);
                return Err(InterpolationError::SingularMatrix { column: col });
            }
        };
        a.swap(col, pivot);

        // scale pivot row to a leading one
        let p = a[col][col].clone();
        for k in col..=n {
            a[col][k] = a[col][k].clone() / p.clone();
        }

        // clear the column everywhere else
        let pivot_row = a[col].clone();
        for (r, row) in a.iter_mut().enumerate() {
            if r == col || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for k in col..=n {
                row[k] = row[k].clone() - factor.clone() * pivot_row[k].clone();
            }
        }
    }

    Ok(a.into_iter().map(|mut row| row.swap_remove(n)).collect())
}

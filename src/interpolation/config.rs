//! Configuration for Vandermonde interpolation.
//!
//! [`VandermondeCfg`] fields
//! - `x`              : sample x values, pairwise distinct
//! - `y`              : sample y values, same length as `x`
//! - `x_eval`         : x values to evaluate the fitted polynomial at
//! - `check_distinct` : reject repeated `x` up front; `true` by default
//!
//! [`VandermondeCfg::new`] initializes configuration with empty slices.
//! Setters validate eagerly and hand the configuration back, so they chain
//! with `?`.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::scalar::Scalar;
use crate::interpolation::vandermonde::find_duplicate;


/// Vandermonde interpolation configuration
///
/// # Construction
/// - Use [`VandermondeCfg::new`] then setters.
///
/// # Defaults
/// - `check_distinct = true`. With it disabled, repeated `x` values are
///   only caught by the solver as [`InterpolationError::SingularMatrix`].
#[derive(Debug, Clone)]
pub struct VandermondeCfg<'a, T> {
    pub(crate) x      : &'a [T],
    pub(crate) y      : &'a [T],
    pub(crate) x_eval : &'a [T],
    pub(crate) check_distinct: bool,
}

impl<'a, T: Scalar> Default for VandermondeCfg<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Scalar> VandermondeCfg<'a, T> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            check_distinct: true,
        }
    }

    /// Cross-field checks run by [`crate::interpolation::vandermonde::interpolate`].
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if self.check_distinct {
            if let Some((first, second)) = find_duplicate(x) {
                return Err(InterpolationError::DuplicateX { first, second });
            }
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [T] { self.x }
    pub fn y(&self) -> &'a [T] { self.y }
    pub fn x_eval(&self) -> &'a [T] { self.x_eval }
    pub fn check_distinct(&self) -> bool { self.check_distinct }

    // setters
    pub fn set_x(mut self, v: &'a [T]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if self.check_distinct {
            if let Some((first, second)) = find_duplicate(v) {
                return Err(InterpolationError::DuplicateX { first, second });
            }
        }

        // length agreement check
        // symmetric with set_y
        let y_len = self.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }

        self.x = v;
        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [T]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }

        let x_len = self.x.len();
        let y_len = v.len();
        if x_len != 0 && y_len != x_len {
            return Err(InterpolationError::UnequalLength { x_len, y_len });
        }

        self.y = v;
        Ok(self)
    }

    /// Any length, including empty. Points outside the sample range are
    /// extrapolated.
    pub fn set_x_eval(mut self, v: &'a [T]) -> Result<Self, InterpolationError> {
        self.x_eval = v;
        Ok(self)
    }

    /// Must be called before [`VandermondeCfg::set_x`] to affect its eager
    /// check; [`VandermondeCfg::validate`] always honours the final value.
    pub fn set_check_distinct(mut self, v: bool) -> Self {
        self.check_distinct = v;
        self
    }
}

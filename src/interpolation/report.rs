//! Defines the struct returned by [`crate::interpolation::vandermonde::interpolate`].
//!
//! The report carries the solved coefficients alongside the evaluated
//! values so callers can keep the polynomial around
//! (see [`crate::interpolation::polynomial::Polynomial`]).

pub const ALGORITHM_NAME: &str = "vandermonde";

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : `"vandermonde"`
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which the polynomial was evaluated
/// - `coefficients`   : solved coefficients, ascending degree
/// - `evaluated`      : polynomial values at each evaluation point
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport<T> {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub coefficients: Vec<T>,
    pub evaluated: Vec<T>,
}

impl<T> InterpolationReport<T> {
    pub fn new(n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: ALGORITHM_NAME,
            n_provided,
            n_evaluated,
            coefficients: Vec::new(),
            evaluated: Vec::new(),
        }
    }
}

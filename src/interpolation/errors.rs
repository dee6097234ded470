//! Interpolation error types.
//!
//! ┌ input shape   : empty vectors, unequal `x`/`y` lengths, ragged matrices
//! ├ input values  : repeated `x` coordinates, unparsable coordinate text
//! └ linear solve  : right-hand side size, singular Vandermonde system

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected at indices {first} and {second}")]
    DuplicateX { first: usize, second: usize },

    #[error("dimension mismatch: matrix has {rows} rows, right-hand side has {rhs} entries")]
    DimensionMismatch { rows: usize, rhs: usize },

    #[error("matrix is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare { rows: usize, row: usize, cols: usize },

    #[error("singular matrix: no pivot in column {column}, system has no unique solution")]
    SingularMatrix { column: usize },

    #[error("invalid coordinate {input:?}: expected an integer, fraction or decimal")]
    InvalidCoordinate { input: String },
}

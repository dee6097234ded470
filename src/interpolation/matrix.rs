//! Dense square matrix returned by the Vandermonde builder.
//!
//! Storage is a single row-major `Vec<T>` of length `dim * dim`, so
//! `row(i)` is a contiguous slice.

use std::ops::Index;

use crate::interpolation::errors::InterpolationError;

/// Owned `n x n` matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    dim : usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from `dim * dim` row-major entries.
    pub(crate) fn from_row_major(dim: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// - [`InterpolationError::NotSquare`] if any row length differs from
    ///   the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, InterpolationError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(InterpolationError::NotSquare { rows: dim, row: i, cols: row.len() });
            }
            data.extend(row);
        }

        Ok(Self { dim, data })
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize { self.dim }

    pub fn is_empty(&self) -> bool { self.dim == 0 }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.dim && j < self.dim {
            self.data.get(i * self.dim + j)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// If `i >= self.dim()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.dim, "row index {} out of range for {}x{} matrix", i, self.dim, self.dim);
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // data is empty when dim == 0, max(1) only keeps chunks() from panicking
        self.data.chunks(self.dim.max(1))
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let dim = self.dim;
        let mut rows = Vec::with_capacity(dim);
        let mut it = self.data.into_iter();
        for _ in 0..dim {
            rows.push(it.by_ref().take(dim).collect());
        }
        rows
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.dim && j < self.dim,
            "index ({}, {}) out of range for {}x{} matrix", i, j, self.dim, self.dim
        );
        &self.data[i * self.dim + j]
    }
}

//! Dense 2D and 3D tables for dynamic programming.
//!
//! Both types store their elements in one contiguous row-major `Vec` and
//! index by coordinate tuples. Serialization flattens to shape + data so a
//! presentation layer can rebuild the nested arrays it expects.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A dense row-major 2D matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix2<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix2<T> {
    /// Creates a `rows × cols` matrix with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }
}

impl<T> Matrix2<T> {
    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the backing slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns a cell without panicking on out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl Matrix2<u32> {
    /// Returns true if every row is non-decreasing left to right.
    pub fn is_monotone_rows(&self) -> bool {
        (0..self.rows).all(|r| (1..self.cols).all(|c| self[(r, c - 1)] <= self[(r, c)]))
    }

    /// Returns true if every column is non-decreasing top to bottom.
    pub fn is_monotone_cols(&self) -> bool {
        (0..self.cols).all(|c| (1..self.rows).all(|r| self[(r - 1, c)] <= self[(r, c)]))
    }
}

/// A dense row-major 3D array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix3<T> {
    dim0: usize,
    dim1: usize,
    dim2: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix3<T> {
    /// Creates a `dim0 × dim1 × dim2` array with every cell set to `fill`.
    pub fn filled(dim0: usize, dim1: usize, dim2: usize, fill: T) -> Self {
        Self {
            dim0,
            dim1,
            dim2,
            data: vec![fill; dim0 * dim1 * dim2],
        }
    }
}

impl<T> Matrix3<T> {
    /// Returns `(dim0, dim1, dim2)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.dim0, self.dim1, self.dim2)
    }

    /// Returns the backing slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize, usize)> for Matrix3<T> {
    type Output = T;

    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        debug_assert!(i < self.dim0 && j < self.dim1 && k < self.dim2);
        &self.data[(i * self.dim1 + j) * self.dim2 + k]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Matrix3<T> {
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        debug_assert!(i < self.dim0 && j < self.dim1 && k < self.dim2);
        &mut self.data[(i * self.dim1 + j) * self.dim2 + k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix2_fill_and_index() {
        let mut m = Matrix2::filled(3, 4, 0u32);
        assert_eq!(m.shape(), (3, 4));
        m[(2, 3)] = 7;
        assert_eq!(m[(2, 3)], 7);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m.as_slice().len(), 12);
    }

    #[test]
    fn test_matrix2_get_out_of_range() {
        let m = Matrix2::filled(2, 2, 1u32);
        assert_eq!(m.get(1, 1), Some(&1));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_matrix2_monotone_checks() {
        let mut m = Matrix2::filled(2, 3, 0u32);
        m[(0, 1)] = 1;
        m[(0, 2)] = 1;
        m[(1, 0)] = 1;
        m[(1, 1)] = 1;
        m[(1, 2)] = 2;
        assert!(m.is_monotone_rows());
        assert!(m.is_monotone_cols());

        m[(1, 2)] = 0;
        assert!(!m.is_monotone_rows());
    }

    #[test]
    fn test_matrix3_fill_and_index() {
        let mut m = Matrix3::filled(2, 3, 4, 0u32);
        assert_eq!(m.shape(), (2, 3, 4));
        m[(1, 2, 3)] = 9;
        assert_eq!(m[(1, 2, 3)], 9);
        assert_eq!(m.as_slice().iter().sum::<u32>(), 9);
    }
}

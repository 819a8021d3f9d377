//! Dense Representation
//!
//! Full n×n 0/1 matrix. Column addition XORs every row entry-wise and
//! `low` scans a column from the bottom, so reduction is O(n³) in the
//! worst case.
//!
//! Entries are stored one per byte rather than bit-packed, so an n×n
//! matrix takes n² bytes.

use ndarray::Array2;

use super::sparse::SparseBoundaryMatrix;
use super::BoundaryColumns;

/// Boundary matrix stored as an n×n array of 0/1 entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBoundaryMatrix {
    data: Array2<u8>,
}

impl DenseBoundaryMatrix {
    /// An all-zero n×n matrix (n² bytes)
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array2::zeros((n, n)),
        }
    }

    /// Set entry (row, col) to 1
    pub fn set(&mut self, row: usize, col: usize) {
        self.data[[row, col]] = 1;
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }

    /// Sparse copy with the same entries
    pub fn to_sparse(&self) -> SparseBoundaryMatrix {
        SparseBoundaryMatrix::from_columns((0..self.n_columns()).map(|j| self.column(j)).collect())
    }
}

impl From<&SparseBoundaryMatrix> for DenseBoundaryMatrix {
    fn from(sparse: &SparseBoundaryMatrix) -> Self {
        let mut dense = Self::zeros(sparse.n_columns());
        for (j, rows) in sparse.columns().iter().enumerate() {
            for &i in rows {
                dense.set(i, j);
            }
        }
        dense
    }
}

impl BoundaryColumns for DenseBoundaryMatrix {
    fn n_columns(&self) -> usize {
        self.data.ncols()
    }

    fn low(&self, j: usize) -> Option<usize> {
        (0..self.data.nrows()).rev().find(|&i| self.data[[i, j]] != 0)
    }

    fn contains(&self, row: usize, j: usize) -> bool {
        self.data[[row, j]] != 0
    }

    fn add_column(&mut self, source: usize, target: usize) {
        for i in 0..self.data.nrows() {
            let bit = self.data[[i, source]];
            self.data[[i, target]] ^= bit;
        }
    }

    fn column(&self, j: usize) -> Vec<usize> {
        self.data
            .column(j)
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b != 0)
            .map(|(i, _)| i)
            .collect()
    }

    fn nnz(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_xor() {
        let mut m = DenseBoundaryMatrix::zeros(4);
        m.set(0, 2);
        m.set(1, 2);
        m.set(1, 3);
        m.add_column(2, 3);
        assert_eq!(m.column(3), vec![0]);
        assert_eq!(m.low(3), Some(0));
        assert_eq!(m.low(0), None);
        assert!(m.contains(1, 2));
    }

    #[test]
    fn test_dense_sparse_conversion() {
        let sparse = SparseBoundaryMatrix::from_columns(vec![vec![], vec![], vec![0, 1]]);
        let dense = DenseBoundaryMatrix::from(&sparse);
        assert_eq!(dense.nnz(), 2);
        assert_eq!(dense.to_sparse(), sparse);
    }
}

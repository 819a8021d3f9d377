//! Matrix Module: GF(2) Boundary Matrices
//!
//! The boundary operator of a filtration with n simplices is a square
//! n×n matrix over GF(2) with entry (i, j) = 1 iff simplex i is a
//! codimension-1 face of simplex j. Rows and columns are indexed by
//! simplex id.
//!
//! ## Two Representations
//!
//! - `sparse.rs`: one strictly ascending list of row indices per column.
//!   Memory is proportional to the number of incidences. Preferred.
//!
//! - `dense.rs`: a full n×n 0/1 matrix. O(n²) memory, kept as the
//!   reference representation.
//!
//! Both implement [`BoundaryColumns`], which is all the reduction needs.

mod builder;
mod dense;
mod sparse;

pub use builder::{build_dense, build_sparse, BoundaryBuilder};
pub use dense::DenseBoundaryMatrix;
pub use sparse::{symmetric_difference, SparseBoundaryMatrix};

/// Column access over a square GF(2) matrix
pub trait BoundaryColumns {
    /// Number of columns (= number of rows)
    fn n_columns(&self) -> usize;

    /// Largest row index holding a 1 in column `j`
    fn low(&self, j: usize) -> Option<usize>;

    /// Is entry (row, j) nonzero?
    fn contains(&self, row: usize, j: usize) -> bool;

    /// Column `target` += column `source` over GF(2), i.e. the symmetric
    /// difference of their supports. Requires `source != target`.
    fn add_column(&mut self, source: usize, target: usize);

    /// Nonzero rows of column `j`, ascending
    fn column(&self, j: usize) -> Vec<usize>;

    fn is_zero_column(&self, j: usize) -> bool {
        self.low(j).is_none()
    }

    /// Total number of nonzero entries
    fn nnz(&self) -> usize {
        (0..self.n_columns()).map(|j| self.column(j).len()).sum()
    }
}

//! Boundary Matrix Reduction over GF(2)
//!
//! The standard persistence algorithm. Columns are processed left to
//! right; while the low of column j is already the pivot of an earlier
//! column k, column k is added to column j. When the loop stops the
//! column is either zero or owns a fresh pivot row.
//!
//! On completion no two nonzero columns share a low. Each addition
//! strictly decreases the low of column j or empties it, so the loop
//! terminates. The column order is a hard dependency: column j may need
//! any earlier column.
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification". Discrete & Computational Geometry.

use log::debug;

use crate::matrix::BoundaryColumns;

/// Row → column pivot assignment produced by a reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pivots {
    pivot_of_row: Vec<Option<usize>>,
}

impl Pivots {
    fn new(n: usize) -> Self {
        Self {
            pivot_of_row: vec![None; n],
        }
    }

    /// Column whose low is `row`, if any
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.pivot_of_row.get(row).copied().flatten()
    }

    /// (row, column) pairs in row order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pivot_of_row
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| (row, c)))
    }

    pub fn len(&self) -> usize {
        self.pivot_of_row.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counters collected during a reduction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Columns processed
    pub columns: usize,
    /// Column additions performed
    pub column_additions: usize,
    /// Nonzero columns after reduction
    pub pivots: usize,
}

/// Reduce `matrix` in place, returning the pivot assignment
pub fn reduce<M: BoundaryColumns + ?Sized>(matrix: &mut M) -> (Pivots, ReductionStats) {
    let n = matrix.n_columns();
    let mut pivots = Pivots::new(n);
    let mut stats = ReductionStats {
        columns: n,
        ..Default::default()
    };

    for j in 0..n {
        let mut low = matrix.low(j);
        while let Some(row) = low {
            match pivots.pivot_of_row[row] {
                Some(k) => {
                    matrix.add_column(k, j);
                    stats.column_additions += 1;
                    low = matrix.low(j);
                }
                None => break,
            }
        }
        if let Some(row) = low {
            pivots.pivot_of_row[row] = Some(j);
            stats.pivots += 1;
        }
    }

    debug!(
        "reduced {} columns: {} additions, {} pivots",
        stats.columns, stats.column_additions, stats.pivots
    );
    (pivots, stats)
}

/// Is `matrix` reduced, i.e. do all nonzero columns have distinct lows?
pub fn is_reduced<M: BoundaryColumns + ?Sized>(matrix: &M) -> bool {
    let mut seen = vec![false; matrix.n_columns()];
    for j in 0..matrix.n_columns() {
        if let Some(row) = matrix.low(j) {
            if std::mem::replace(&mut seen[row], true) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{
        build_dense, build_sparse, BoundaryBuilder, DenseBoundaryMatrix, SparseBoundaryMatrix,
    };
    use crate::topology::sphere_filtration;

    fn filled_triangle() -> SparseBoundaryMatrix {
        SparseBoundaryMatrix::from_columns(vec![
            vec![],
            vec![],
            vec![],
            vec![0, 1],
            vec![0, 2],
            vec![1, 2],
            vec![3, 4, 5],
        ])
    }

    #[test]
    fn test_reduce_triangle() {
        let mut m = filled_triangle();
        let (pivots, stats) = reduce(&mut m);

        assert_eq!(m.column(3), vec![0, 1]);
        assert_eq!(m.column(4), vec![0, 2]);
        // 5 += 3, then += 4: vanishes
        assert!(m.is_zero_column(5));
        assert_eq!(m.column(6), vec![3, 4, 5]);

        assert_eq!(stats.column_additions, 2);
        assert_eq!(stats.pivots, 3);
        assert_eq!(pivots.column_of(1), Some(3));
        assert_eq!(pivots.column_of(2), Some(4));
        assert_eq!(pivots.column_of(5), Some(6));
        assert_eq!(pivots.column_of(0), None);
        assert!(is_reduced(&m));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let mut m = build_sparse(&sphere_filtration(3), BoundaryBuilder::FaceEnumeration);
        reduce(&mut m);
        let once = m.clone();
        let (_, stats) = reduce(&mut m);
        assert_eq!(m, once);
        assert_eq!(stats.column_additions, 0);
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        let f = sphere_filtration(3);
        let mut sparse = build_sparse(&f, BoundaryBuilder::FaceEnumeration);
        let mut dense = build_dense(&f, BoundaryBuilder::SubsetScan);
        let (ps, ss) = reduce(&mut sparse);
        let (pd, sd) = reduce(&mut dense);
        assert_eq!(ps, pd);
        assert_eq!(ss, sd);
        assert_eq!(dense.to_sparse(), sparse);
    }

    #[test]
    fn test_unreduced_detected() {
        assert!(!is_reduced(&filled_triangle()));
        assert!(is_reduced(&DenseBoundaryMatrix::zeros(3)));
    }

    #[test]
    fn test_empty_matrix() {
        let mut m = SparseBoundaryMatrix::zeros(0);
        let (pivots, stats) = reduce(&mut m);
        assert!(pivots.is_empty());
        assert_eq!(stats, ReductionStats::default());
    }
}

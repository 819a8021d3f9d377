//! Sparse Column Representation
//!
//! Each column stores its nonzero row indices in strictly ascending
//! order, so `low` is the last element and column addition is a linear
//! two-pointer merge.

use std::cmp::Ordering;

use super::BoundaryColumns;

/// Boundary matrix as n sorted row-index columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseBoundaryMatrix {
    columns: Vec<Vec<usize>>,
}

impl SparseBoundaryMatrix {
    /// An all-zero n×n matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            columns: vec![Vec::new(); n],
        }
    }

    /// Build from columns, sorting each and cancelling repeated rows in pairs
    pub fn from_columns(columns: Vec<Vec<usize>>) -> Self {
        let columns = columns
            .into_iter()
            .map(|mut col| {
                col.sort_unstable();
                let mut out: Vec<usize> = Vec::with_capacity(col.len());
                for row in col {
                    if out.last() == Some(&row) {
                        out.pop();
                    } else {
                        out.push(row);
                    }
                }
                out
            })
            .collect();
        Self { columns }
    }

    /// Set column `j`; `rows` must be strictly ascending
    pub(crate) fn set_column(&mut self, j: usize, rows: Vec<usize>) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        self.columns[j] = rows;
    }

    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Vec<usize>> {
        self.columns
    }
}

impl BoundaryColumns for SparseBoundaryMatrix {
    fn n_columns(&self) -> usize {
        self.columns.len()
    }

    fn low(&self, j: usize) -> Option<usize> {
        self.columns[j].last().copied()
    }

    fn contains(&self, row: usize, j: usize) -> bool {
        self.columns[j].binary_search(&row).is_ok()
    }

    fn add_column(&mut self, source: usize, target: usize) {
        let merged = symmetric_difference(&self.columns[target], &self.columns[source]);
        self.columns[target] = merged;
    }

    fn column(&self, j: usize) -> Vec<usize> {
        self.columns[j].clone()
    }

    fn is_zero_column(&self, j: usize) -> bool {
        self.columns[j].is_empty()
    }

    fn nnz(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// Symmetric difference of two strictly ascending lists (GF(2) addition),
/// in O(|a| + |b|). The result is strictly ascending.
pub fn symmetric_difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

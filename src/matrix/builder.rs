//! Boundary Matrix Construction
//!
//! Two strategies with identical output on filtrations closed under
//! taking faces:
//!
//! - Subset scan: test every pair i < j for
//!   `dim(i) + 1 == dim(j)` and `vertices(i) ⊂ vertices(j)`.
//!   O(n²) pairs; the reference.
//!
//! - Face enumeration: look up the dim+1 codimension-1 faces of each
//!   simplex in a vertex-set index. O(n · dim) lookups. A face that is
//!   absent, or that does not precede its coface, contributes no entry.

use clap::ValueEnum;
use log::trace;

use super::dense::DenseBoundaryMatrix;
use super::sparse::SparseBoundaryMatrix;
use crate::topology::Filtration;

/// Boundary matrix construction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BoundaryBuilder {
    /// Pairwise subset tests
    SubsetScan,
    /// Vertex-set lookup of each simplex's faces
    #[default]
    FaceEnumeration,
}

impl BoundaryBuilder {
    /// Ascending row indices of every column
    pub fn columns(self, filtration: &Filtration) -> Vec<Vec<usize>> {
        match self {
            Self::SubsetScan => subset_scan(filtration),
            Self::FaceEnumeration => face_enumeration(filtration),
        }
    }
}

fn subset_scan(filtration: &Filtration) -> Vec<Vec<usize>> {
    let simplices = filtration.simplices();
    simplices
        .iter()
        .enumerate()
        .map(|(j, sj)| {
            simplices[..j]
                .iter()
                .enumerate()
                .filter(|(_, si)| si.is_face_of(sj))
                .map(|(i, _)| i)
                .collect()
        })
        .collect()
}

fn face_enumeration(filtration: &Filtration) -> Vec<Vec<usize>> {
    let index = filtration.index();

    filtration
        .iter()
        .enumerate()
        .map(|(j, simplex)| {
            let mut rows: Vec<usize> = simplex
                .faces()
                .filter_map(|face| match index.get(face.as_slice()) {
                    Some(&i) if i < j => Some(i),
                    _ => {
                        trace!("face {:?} of simplex {} not found before it", face, j);
                        None
                    }
                })
                .collect();
            rows.sort_unstable();
            rows
        })
        .collect()
}

/// Sparse boundary matrix of a filtration
pub fn build_sparse(filtration: &Filtration, builder: BoundaryBuilder) -> SparseBoundaryMatrix {
    let mut matrix = SparseBoundaryMatrix::zeros(filtration.len());
    for (j, rows) in builder.columns(filtration).into_iter().enumerate() {
        matrix.set_column(j, rows);
    }
    matrix
}

/// Dense boundary matrix of a filtration
pub fn build_dense(filtration: &Filtration, builder: BoundaryBuilder) -> DenseBoundaryMatrix {
    let mut matrix = DenseBoundaryMatrix::zeros(filtration.len());
    for (j, rows) in builder.columns(filtration).into_iter().enumerate() {
        for i in rows {
            matrix.set(i, j);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::BoundaryColumns;
    use crate::topology::{sphere_filtration, Simplex};

    fn filled_triangle() -> Filtration {
        Filtration::from_simplices(vec![
            Simplex::new(0.0, [0]).unwrap(),
            Simplex::new(0.0, [1]).unwrap(),
            Simplex::new(0.0, [2]).unwrap(),
            Simplex::new(1.0, [0, 1]).unwrap(),
            Simplex::new(1.0, [0, 2]).unwrap(),
            Simplex::new(1.0, [1, 2]).unwrap(),
            Simplex::new(2.0, [0, 1, 2]).unwrap(),
        ])
    }

    #[test]
    fn test_triangle_boundary() {
        let m = build_sparse(&filled_triangle(), BoundaryBuilder::FaceEnumeration);
        assert_eq!(m.column(0), Vec::<usize>::new());
        assert_eq!(m.column(3), vec![0, 1]);
        assert_eq!(m.column(4), vec![0, 2]);
        assert_eq!(m.column(5), vec![1, 2]);
        assert_eq!(m.column(6), vec![3, 4, 5]);
    }

    #[test]
    fn test_strategies_agree_on_closed_complexes() {
        for d in 0..5 {
            let f = sphere_filtration(d);
            let fast = build_sparse(&f, BoundaryBuilder::FaceEnumeration);
            let slow = build_sparse(&f, BoundaryBuilder::SubsetScan);
            assert_eq!(fast, slow, "sphere {}", d);
        }
    }

    #[test]
    fn test_dense_matches_sparse() {
        let f = filled_triangle();
        let dense = build_dense(&f, BoundaryBuilder::SubsetScan);
        let sparse = build_sparse(&f, BoundaryBuilder::FaceEnumeration);
        assert_eq!(dense.to_sparse(), sparse);
    }

    #[test]
    fn test_missing_face_is_skipped() {
        let f = Filtration::from_simplices(vec![
            Simplex::new(0.0, [0]).unwrap(),
            Simplex::new(0.0, [1]).unwrap(),
            Simplex::new(1.0, [0, 1]).unwrap(),
            Simplex::new(2.0, [0, 1, 2]).unwrap(),
        ]);
        let m = build_sparse(&f, BoundaryBuilder::FaceEnumeration);
        assert_eq!(m.column(3), vec![2]);
    }

    #[test]
    fn test_vertices_only() {
        let f = Filtration::from_simplices(
            (0..4).map(|v| Simplex::new(0.0, [v]).unwrap()).collect(),
        );
        let m = build_dense(&f, BoundaryBuilder::FaceEnumeration);
        assert_eq!(m.nnz(), 0);
    }
}

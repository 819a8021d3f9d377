//! Filtered Simplices
//!
//! A simplex is identified by its vertex set; its dimension is the
//! vertex count minus one. The filtration value is the time at which
//! the simplex enters the complex.

use std::cmp::Ordering;

/// Vertex identifier
pub type VertexId = usize;

/// A simplex with its birth time
#[derive(Debug, Clone, PartialEq)]
pub struct Simplex {
    /// Vertex indices (strictly ascending)
    vertices: Vec<VertexId>,
    /// Filtration value when the simplex appears
    value: f64,
}

impl Simplex {
    /// Build a simplex from an unordered vertex list.
    ///
    /// Returns `None` for an empty list or one holding a repeated vertex.
    pub fn new(value: f64, vertices: impl IntoIterator<Item = VertexId>) -> Option<Self> {
        let mut vertices: Vec<VertexId> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return None;
        }
        vertices.sort_unstable();
        if vertices.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }
        Some(Self { vertices, value })
    }

    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Codimension-1 faces, obtained by deleting one vertex at a time
    /// in vertex order. Empty for a vertex.
    pub fn faces(&self) -> impl Iterator<Item = Vec<VertexId>> + '_ {
        let n = if self.vertices.len() > 1 { self.vertices.len() } else { 0 };
        (0..n).map(move |skip| {
            self.vertices
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &v)| v)
                .collect()
        })
    }

    /// Is `self` a codimension-1 face of `other`?
    pub fn is_face_of(&self, other: &Simplex) -> bool {
        self.dimension() + 1 == other.dimension() && is_subset(&self.vertices, &other.vertices)
    }

    /// Total filtration order: value, then dimension, then vertices
    /// lexicographically.
    pub fn filtration_cmp(&self, other: &Simplex) -> Ordering {
        self.value
            .total_cmp(&other.value)
            .then(self.dimension().cmp(&other.dimension()))
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

/// Subset test on two ascending vertex lists, linear in their lengths
fn is_subset(small: &[VertexId], large: &[VertexId]) -> bool {
    let mut it = large.iter();
    small.iter().all(|v| it.any(|w| w == v))
}

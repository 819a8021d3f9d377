//! Vietoris-Rips Filtration Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! As a filtration, every vertex enters at 0 and every higher simplex at
//! the largest pairwise distance among its vertices, so faces never
//! enter after their cofaces.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use super::filtration::Filtration;
use super::simplex::Simplex;

/// Vietoris-Rips filtration builder
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
    /// Maximum filtration value
    max_epsilon: f64,
    /// Largest simplex dimension to generate
    max_dimension: usize,
}

impl VietorisRips {
    /// Create a new VR filtration from a distance matrix
    pub fn new(distances: Array2<f64>, max_epsilon: f64, max_dimension: usize) -> Self {
        Self {
            distances,
            max_epsilon,
            max_dimension,
        }
    }

    /// Create from a borrowed distance matrix
    pub fn from_distance_matrix(
        distances: &Array2<f64>,
        max_epsilon: f64,
        max_dimension: usize,
    ) -> Self {
        Self::new(distances.clone(), max_epsilon, max_dimension)
    }

    /// Create from point cloud (computes distance matrix)
    pub fn from_points(points: &Array2<f64>, max_epsilon: f64, max_dimension: usize) -> Self {
        Self::new(Self::compute_distance_matrix(points), max_epsilon, max_dimension)
    }

    /// Compute Euclidean distance matrix
    fn compute_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let dist = points
                    .row(i)
                    .iter()
                    .zip(points.row(j).iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
                    .sqrt();
                dm[[i, j]] = dist;
                dm[[j, i]] = dist;
            }
        }

        dm
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    /// Build the clique filtration up to `max_dimension` and `max_epsilon`
    pub fn filtration(&self) -> Filtration {
        let n = self.n_points();
        let mut simplices: Vec<Simplex> = Vec::new();

        // Each entry: (vertices, birth). Extended only by larger vertex ids
        // so every clique is generated once.
        let mut frontier: Vec<(Vec<usize>, f64)> = (0..n).map(|v| (vec![v], 0.0)).collect();

        for dim in 0..=self.max_dimension {
            let mut next = Vec::new();
            for (vertices, birth) in &frontier {
                if let Some(s) = Simplex::new(*birth, vertices.iter().copied()) {
                    simplices.push(s);
                }
                if dim == self.max_dimension {
                    continue;
                }
                let last = *vertices.last().unwrap_or(&0);
                for w in last + 1..n {
                    let reach = vertices
                        .iter()
                        .map(|&v| self.distances[[v, w]])
                        .fold(*birth, f64::max);
                    if reach <= self.max_epsilon {
                        let mut grown = vertices.clone();
                        grown.push(w);
                        next.push((grown, reach));
                    }
                }
            }
            frontier = next;
        }

        Filtration::from_simplices(simplices)
    }

    /// Count connected components of the 1-skeleton at scale `epsilon`
    pub fn count_components_at(&self, epsilon: f64) -> usize {
        let n = self.n_points();
        let mut parent: Vec<usize> = (0..n).collect();

        fn find(parent: &mut [usize], mut i: usize) -> usize {
            let mut root = i;
            while parent[root] != root {
                root = parent[root];
            }
            while parent[i] != root {
                let next = parent[i];
                parent[i] = root;
                i = next;
            }
            root
        }

        let mut components = n;
        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] <= epsilon {
                    let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
                    if ri != rj {
                        parent[ri.max(rj)] = ri.min(rj);
                        components -= 1;
                    }
                }
            }
        }
        components
    }
}

/// Sample `n` points on a circle of the given radius with Gaussian noise
pub fn sample_circle(n: usize, radius: f64, noise: f64, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Normal::new(0.0, noise.max(f64::MIN_POSITIVE)).ok();

    let mut points = Array2::<f64>::zeros((n, 2));
    for i in 0..n {
        let theta: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let (dx, dy) = match &jitter {
            Some(normal) => (normal.sample(&mut rng), normal.sample(&mut rng)),
            None => (0.0, 0.0),
        };
        points[[i, 0]] = radius * theta.cos() + dx;
        points[[i, 1]] = radius * theta.sin() + dy;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_triangle() {
        // Equilateral triangle with side 1
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.5, 0.866]
        ];

        let vr = VietorisRips::from_points(&points, 2.0, 2);

        // At ε < 1, three components
        assert_eq!(vr.count_components_at(0.8), 3);

        // At ε ≥ 1, one component
        assert_eq!(vr.count_components_at(1.2), 1);

        let f = vr.filtration();
        assert_eq!(f.len(), 7);
        assert!(f.is_closed());
    }

    #[test]
    fn test_square_births() {
        let s2 = 2.0_f64.sqrt();
        let dm = array![
            [0.0, 1.0, s2,  1.0],
            [1.0, 0.0, 1.0, s2 ],
            [s2,  1.0, 0.0, 1.0],
            [1.0, s2,  1.0, 0.0]
        ];

        let f = VietorisRips::from_distance_matrix(&dm, 2.0, 2).filtration();
        // 4 vertices, 6 edges, 4 triangles
        assert_eq!(f.len(), 14);
        let tri = f.index_of(&[0, 1, 2]).unwrap();
        assert!((f.get(tri).unwrap().value() - s2).abs() < 1e-12);
        assert!(f.is_closed());
    }

    #[test]
    fn test_max_epsilon_cuts_edges() {
        let dm = array![
            [0.0, 1.0, 5.0],
            [1.0, 0.0, 5.0],
            [5.0, 5.0, 0.0]
        ];
        let f = VietorisRips::new(dm, 2.0, 1).filtration();
        assert_eq!(f.len(), 4);
    }

    #[test]
    fn test_sample_circle_is_deterministic() {
        let a = sample_circle(16, 1.0, 0.05, 7);
        let b = sample_circle(16, 1.0, 0.05, 7);
        assert_eq!(a, b);
        for row in a.rows() {
            let r = (row[0] * row[0] + row[1] * row[1]).sqrt();
            assert!((r - 1.0).abs() < 0.5);
        }
    }
}

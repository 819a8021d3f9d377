//! Sphere Filtrations
//!
//! The d-sphere is triangulated as the boundary of the (d+1)-simplex:
//! every non-empty subset of the d+2 vertices except the full set.
//! Each simplex enters at its own dimension, so the complex grows one
//! skeleton at a time.
//!
//! Expected barcode: one essential class in dimension 0 and one in
//! dimension d (for d = 0, two essential classes in dimension 0); every
//! other simplex is paired.

use super::filtration::Filtration;
use super::simplex::Simplex;

/// Number of simplices in the d-sphere filtration: 2^(d+2) - 2, or `None`
/// when that does not fit in a `usize`
pub fn sphere_size(d: usize) -> Option<usize> {
    d.checked_add(2)
        .and_then(|shift| u32::try_from(shift).ok())
        .and_then(|shift| 1usize.checked_shl(shift))
        .map(|subsets| subsets - 2)
}

/// Filtration of the boundary of the (d+1)-simplex on vertices 0..=d+1
///
/// # Panics
///
/// If `sphere_size(d)` overflows, i.e. d + 2 ≥ `usize::BITS`.
pub fn sphere_filtration(d: usize) -> Filtration {
    let n_vertices = d + 2;
    assert!(
        sphere_size(d).is_some(),
        "the {d}-sphere has more simplices than fit in a usize"
    );
    let full: usize = (1 << n_vertices) - 1;

    let simplices: Vec<Simplex> = (1..full)
        .filter_map(|mask: usize| {
            let vertices = (0..n_vertices).filter(|v| mask & (1 << v) != 0);
            let dimension = mask.count_ones() as f64 - 1.0;
            Simplex::new(dimension, vertices)
        })
        .collect();

    Filtration::from_simplices(simplices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle() {
        let f = sphere_filtration(1);
        assert_eq!(f.len(), 6);
        assert_eq!(Some(f.len()), sphere_size(1));
        assert_eq!(f.max_dimension(), Some(1));
        assert!(f.is_closed());
    }

    #[test]
    fn test_two_sphere_counts() {
        let f = sphere_filtration(2);
        let dims = f.dimensions();
        assert_eq!(dims.iter().filter(|&&d| d == 0).count(), 4);
        assert_eq!(dims.iter().filter(|&&d| d == 1).count(), 6);
        assert_eq!(dims.iter().filter(|&&d| d == 2).count(), 4);
        assert!(f.is_closed());
    }

    #[test]
    fn test_size_overflow() {
        assert_eq!(sphere_size(0), Some(2));
        assert_eq!(sphere_size(24), Some((1 << 26) - 2));
        let bits = usize::BITS as usize;
        assert!(sphere_size(bits - 3).is_some());
        assert_eq!(sphere_size(bits - 2), None);
        assert_eq!(sphere_size(usize::MAX - 1), None);
    }

    #[test]
    #[should_panic]
    fn test_filtration_overflow_panics() {
        sphere_filtration(usize::BITS as usize);
    }

    #[test]
    fn test_zero_sphere() {
        let f = sphere_filtration(0);
        assert_eq!(f.len(), 2);
        assert_eq!(f.max_dimension(), Some(0));
    }
}

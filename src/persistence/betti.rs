//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a topological space:
//!
//! - β₀: Number of connected components
//! - β₁: Number of 1-dimensional loops/cycles
//! - β₂: Number of 2-dimensional voids/cavities
//!
//! At filtration value t, βₖ is the number of k-dimensional intervals
//! alive at t (birth ≤ t < death).

use super::barcode::Barcode;

/// Betti numbers at a specific filtration value
#[derive(Debug, Clone, PartialEq)]
pub struct BettiNumbers {
    /// βₖ indexed by k, up to the barcode's highest dimension
    pub betti: Vec<usize>,
    /// Filtration value
    pub value: f64,
}

impl BettiNumbers {
    /// Betti numbers of the complex at filtration value `t`
    pub fn at(barcode: &Barcode, t: f64) -> Self {
        let len = barcode.max_dimension().map_or(0, |d| d + 1);
        let mut betti = vec![0usize; len];
        for interval in barcode.iter().filter(|i| i.contains(t)) {
            betti[interval.dimension] += 1;
        }
        Self { betti, value: t }
    }

    /// βₖ, zero beyond the highest dimension
    pub fn get(&self, k: usize) -> usize {
        self.betti.get(k).copied().unwrap_or(0)
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.betti.iter().sum()
    }

    /// Euler characteristic χ = β₀ - β₁ + β₂ - ...
    pub fn euler_characteristic(&self) -> i64 {
        self.betti
            .iter()
            .enumerate()
            .map(|(k, &b)| if k % 2 == 0 { b as i64 } else { -(b as i64) })
            .sum()
    }
}

/// Betti curve: Betti numbers at every value where one can change
#[derive(Debug, Clone)]
pub struct BettiCurve {
    pub values: Vec<BettiNumbers>,
}

impl BettiCurve {
    /// Evaluate at every distinct finite birth and death value
    pub fn compute(barcode: &Barcode) -> Self {
        let mut events: Vec<f64> = barcode
            .iter()
            .flat_map(|i| [i.birth, i.death])
            .filter(|v| v.is_finite())
            .collect();
        events.sort_by(f64::total_cmp);
        events.dedup();

        let values = events.into_iter().map(|t| BettiNumbers::at(barcode, t)).collect();
        Self { values }
    }

    /// (value, βₖ) pairs
    pub fn curve(&self, k: usize) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.value, b.get(k))).collect()
    }

    /// Area under the βₖ step function up to the last event
    pub fn integrated(&self, k: usize) -> f64 {
        self.values
            .windows(2)
            .map(|w| (w[1].value - w[0].value) * w[0].get(k) as f64)
            .sum()
    }
}

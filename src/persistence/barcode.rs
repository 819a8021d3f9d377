//! Barcode Extraction
//!
//! Reads persistence intervals off a reduced boundary matrix:
//!
//! - A nonzero column j with low i pairs simplex i (birth) with
//!   simplex j (death) in dimension dim(j) - 1.
//! - A zero column j whose row was never claimed as a low is an
//!   essential class of dimension dim(j), born at j and never dying.
//!
//! Every simplex appears in exactly one interval, either as a column or
//! as a claimed row. Intervals with birth == death are kept.

use std::cmp::Ordering;
use std::io::Write;

use crate::error::Result;
use crate::matrix::BoundaryColumns;
use crate::topology::Filtration;

/// A persistence interval [birth, death)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub dimension: usize,
    pub birth: f64,
    /// `f64::INFINITY` for essential classes
    pub death: f64,
}

impl Interval {
    pub fn new(dimension: usize, birth: f64, death: f64) -> Self {
        Self { dimension, birth, death }
    }

    pub fn essential(dimension: usize, birth: f64) -> Self {
        Self::new(dimension, birth, f64::INFINITY)
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        if self.death.is_infinite() {
            f64::INFINITY
        } else {
            self.death - self.birth
        }
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }

    /// Is the feature alive at `t`, i.e. birth ≤ t < death?
    pub fn contains(&self, t: f64) -> bool {
        self.birth <= t && t < self.death
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.dimension
            .cmp(&other.dimension)
            .then(self.birth.total_cmp(&other.birth))
            .then(self.death.total_cmp(&other.death))
    }
}

/// Multiset of persistence intervals, in emission order: finite
/// intervals by column, then essential intervals by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Barcode {
    pub intervals: Vec<Interval>,
}

impl Barcode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the barcode of a reduced matrix built from `filtration`
    pub fn from_reduced<M: BoundaryColumns + ?Sized>(matrix: &M, filtration: &Filtration) -> Self {
        Self::from_reduced_parts(matrix, &filtration.dimensions(), &filtration.values())
    }

    /// Extract from per-simplex dimensions and values indexed by id
    pub fn from_reduced_parts<M: BoundaryColumns + ?Sized>(
        matrix: &M,
        dimensions: &[usize],
        values: &[f64],
    ) -> Self {
        let n = matrix.n_columns();
        debug_assert_eq!(n, dimensions.len());
        debug_assert_eq!(n, values.len());

        let mut intervals = Vec::with_capacity(n);
        let mut claimed = vec![false; n];

        for j in 0..n {
            if let Some(i) = matrix.low(j) {
                claimed[i] = true;
                intervals.push(Interval::new(dimensions[j] - 1, values[i], values[j]));
            }
        }

        for j in 0..n {
            if !claimed[j] && matrix.is_zero_column(j) {
                intervals.push(Interval::essential(dimensions[j], values[j]));
            }
        }

        Self { intervals }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Highest dimension present
    pub fn max_dimension(&self) -> Option<usize> {
        self.intervals.iter().map(|i| i.dimension).max()
    }

    /// Get intervals for dimension d
    pub fn dim(&self, d: usize) -> Vec<&Interval> {
        self.intervals.iter().filter(|i| i.dimension == d).collect()
    }

    /// Get finite intervals for dimension d
    pub fn finite_intervals(&self, d: usize) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && !i.is_essential())
            .collect()
    }

    /// Get essential intervals for dimension d
    pub fn essential_intervals(&self, d: usize) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && i.is_essential())
            .collect()
    }

    /// Total persistence for dimension d
    pub fn total_persistence(&self, d: usize) -> f64 {
        self.finite_intervals(d).iter().map(|i| i.persistence()).sum()
    }

    /// Shannon entropy of the finite lifetimes in dimension d
    pub fn persistence_entropy(&self, d: usize) -> f64 {
        let lifetimes: Vec<f64> = self
            .finite_intervals(d)
            .iter()
            .map(|i| i.persistence())
            .filter(|&p| p > 0.0)
            .collect();

        let total: f64 = lifetimes.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }

        lifetimes
            .iter()
            .map(|l| l / total)
            .filter(|&p| p > 0.0)
            .map(|p| -p * p.ln())
            .sum()
    }

    /// Copy in canonical order (dimension, birth, death), for comparing
    /// barcodes as multisets
    pub fn sorted(&self) -> Self {
        let mut intervals = self.intervals.clone();
        intervals.sort_by(Interval::canonical_cmp);
        Self { intervals }
    }

    /// Write one `<dimension> <birth> <death|inf>` line per interval,
    /// fixed-point with `precision` digits
    pub fn write_to<W: Write>(&self, mut writer: W, precision: usize) -> Result<()> {
        for interval in &self.intervals {
            if interval.is_essential() {
                writeln!(writer, "{} {:.*} inf", interval.dimension, precision, interval.birth)?;
            } else {
                writeln!(
                    writer,
                    "{} {:.*} {:.*}",
                    interval.dimension, precision, interval.birth, precision, interval.death
                )?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Barcode {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

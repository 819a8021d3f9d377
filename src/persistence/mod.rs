//! Persistence Module: Reduction and Barcodes
//!
//! - `reduction.rs`: the standard column reduction, written once against
//!   [`BoundaryColumns`](crate::matrix::BoundaryColumns)
//! - `barcode.rs`: intervals read off the reduced matrix
//! - `betti.rs`: Betti numbers and curves derived from a barcode

mod barcode;
mod betti;
mod reduction;

pub use barcode::{Barcode, Interval};
pub use betti::{BettiCurve, BettiNumbers};
pub use reduction::{is_reduced, reduce, Pivots, ReductionStats};

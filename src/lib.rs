//! # TDA-Persistence
//!
//! Persistent homology barcodes of simplicial filtrations over GF(2).
//!
//! ## Pipeline
//!
//! 1. **Filtration**: simplices sorted by (value, dimension, vertices),
//!    so every face precedes its cofaces. The sorted position is the
//!    simplex id.
//!
//! 2. **Boundary matrix**: entry (i, j) = 1 iff simplex i is a
//!    codimension-1 face of simplex j, built by subset scan or by face
//!    enumeration, stored sparse or dense.
//!
//! 3. **Reduction**: left-to-right column additions until no two
//!    nonzero columns share their lowest row.
//!
//! 4. **Barcode**: each nonzero column pairs its lowest row (birth) with
//!    itself (death); each zero column whose row is never a pivot is an
//!    essential class.
//!
//! ```
//! use tda_persistence::{compute_barcode, sphere_filtration, RunOptions};
//!
//! let circle = sphere_filtration(1);
//! let (barcode, _) = compute_barcode(&circle, &RunOptions::default());
//! assert_eq!(barcode.essential_intervals(1).len(), 1);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian & Carlsson, "Computing Persistent Homology" (2005)

pub mod config;
pub mod error;
pub mod matrix;
pub mod persistence;
pub mod pipeline;
pub mod topology;

pub use error::{PersistenceError, Result};

// Re-exports from topology
pub use topology::{
    parse_record,
    sample_circle,
    sphere_filtration,
    sphere_size,
    Filtration,
    Simplex,
    VertexId,
    VietorisRips,
};

// Re-exports from matrix
pub use matrix::{
    build_dense,
    build_sparse,
    symmetric_difference,
    BoundaryBuilder,
    BoundaryColumns,
    DenseBoundaryMatrix,
    SparseBoundaryMatrix,
};

// Re-exports from persistence
pub use persistence::{
    is_reduced,
    reduce,
    Barcode,
    BettiCurve,
    BettiNumbers,
    Interval,
    Pivots,
    ReductionStats,
};

pub use pipeline::{
    check_closure,
    compute_barcode,
    run_file,
    run_spheres,
    write_barcode,
    Representation,
    RunOptions,
    SphereRun,
};

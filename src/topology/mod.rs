//! Topology Module: Simplices and Filtrations
//!
//! A filtration orders the simplices of a complex by birth value so that
//! every face precedes its cofaces. Sources:
//!
//! - `filtration.rs`: text records, ingested and sorted
//! - `sphere.rs`: the d-sphere family used for benchmarking
//! - `vietoris_rips.rs`: clique filtrations of point clouds

mod filtration;
mod simplex;
mod sphere;
mod vietoris_rips;

pub use filtration::{parse_record, Filtration};
pub use simplex::{Simplex, VertexId};
pub use sphere::{sphere_filtration, sphere_size};
pub use vietoris_rips::{sample_circle, VietorisRips};

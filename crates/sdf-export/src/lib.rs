//! sdf-export: one-way renderers consuming a finalized graph.
//!
//! - DOT graph-description output
//! - HAPI process-network C++ skeletons

pub mod dot;
pub mod hapi;

pub use dot::write_dot;
pub use hapi::export_hapi;

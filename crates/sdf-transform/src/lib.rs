//! sdf-transform: graph-rewriting algorithms over the SDF model.
//!
//! Operates purely on the sdf-graph API:
//! - auto-concurrency modeling (bounded self-channels)
//! - HSDF-ness check (rate-homogeneity predicate)

pub mod autoconc;
pub mod hsdf;

pub use autoconc::model_auto_concurrency;
pub use hsdf::is_hsdf;

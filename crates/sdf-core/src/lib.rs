//! sdf-core: stable foundation for the SDF graph toolkit.
//!
//! Contains:
//! - ids (stable compact IDs for graph/model objects)
//! - ident (id + name value type composed into every entity)
//! - tree (generic attribute tree consumed by graph construction)
//! - error (shared error types)

pub mod error;
pub mod ident;
pub mod ids;
pub mod tree;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SdfError, SdfResult};
pub use ident::Ident;
pub use ids::*;
pub use tree::Tree;

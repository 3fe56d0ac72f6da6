//! sdf-graph: the SDF graph model.
//!
//! Provides:
//! - Core model types (Port, Actor, Channel, Graph)
//! - Graph operations: lookups, add/remove, channel creation and wiring
//! - Construction from an attribute tree (sdf-core's `Tree`)
//!
//! # Example
//!
//! ```
//! use sdf_graph::{Graph, PortKind};
//!
//! let mut graph = Graph::new("example", "sdf");
//! let a = graph.create_actor("a", "A");
//! let b = graph.create_actor("b", "B");
//! graph.create_channel(a, 3, b, 2, 0).unwrap();
//!
//! assert_eq!(graph.nr_actors(), 2);
//! assert_eq!(graph.nr_channels(), 1);
//! assert_eq!(graph.actor(a).unwrap().ports()[0].kind(), PortKind::Out);
//! ```

pub mod actor;
pub mod channel;
pub mod graph;
pub mod port;

mod construct;

// Re-exports for ergonomics
pub use actor::Actor;
pub use channel::{Channel, Endpoint};
pub use graph::Graph;
pub use port::{Port, PortKind};

//! sdf-file: canonical graph file format.
//!
//! Graphs travel as an attribute tree (sdf-core's `Tree`) serialized with
//! the serde stack, in YAML or JSON. Loading parses the carrier into a
//! tree and hands it to `Graph::from_tree`, which does all structural
//! validation; saving renders the graph back to a tree with
//! [`graph_to_tree`].

pub mod writer;

pub use writer::graph_to_tree;

use sdf_core::{SdfError, Tree};
use sdf_graph::Graph;

pub type FileResult<T> = Result<T, FileError>;

#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("Model error: {0}")]
    Model(#[from] SdfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> FileResult<Graph> {
    let content = std::fs::read_to_string(path)?;
    let tree: Tree = serde_yaml::from_str(&content)?;
    Ok(Graph::from_tree(&tree)?)
}

pub fn save_yaml(path: &std::path::Path, graph: &Graph) -> FileResult<()> {
    let content = serde_yaml::to_string(&graph_to_tree(graph))?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> FileResult<Graph> {
    let content = std::fs::read_to_string(path)?;
    let tree: Tree = serde_json::from_str(&content)?;
    Ok(Graph::from_tree(&tree)?)
}

pub fn save_json(path: &std::path::Path, graph: &Graph) -> FileResult<()> {
    let content = serde_json::to_string_pretty(&graph_to_tree(graph))?;
    std::fs::write(path, content)?;
    Ok(())
}

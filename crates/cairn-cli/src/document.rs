//! The TOML graph description the CLI reads.
//!
//! ```toml
//! [nodes.build]
//! shape = "rect"
//! label = "Build"
//! position = { x = 80, y = 40 }
//! padding = { top = 5, right = 10, bottom = 5, left = 10 }
//!
//! [nodes.ci]
//! label = "CI"
//!
//! [parents]
//! build = "ci"
//! ```
//!
//! Nodes are composed in the order they appear. A node named as a parent
//! is a group and is not drawn.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use cairn::{
    CairnError,
    graph::{Graph, Node},
};

#[derive(Debug, Error)]
#[error("Invalid graph description {path}: {message}")]
pub struct DocumentError {
    path: String,
    message: String,
}

impl From<DocumentError> for CairnError {
    fn from(err: DocumentError) -> Self {
        CairnError::Input(err.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GraphDocument {
    nodes: IndexMap<String, Node>,
    parents: IndexMap<String, String>,
}

impl GraphDocument {
    /// Parses a graph description; `path` is only used in error messages.
    pub fn parse(source: &str, path: &Path) -> Result<Self, DocumentError> {
        toml::from_str(source).map_err(|err| DocumentError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    pub fn into_graph(self) -> Graph {
        let mut graph = Graph::new();
        for (name, node) in self.nodes {
            graph.add_node(name, node);
        }
        for (child, parent) in self.parents {
            graph.set_parent(child, parent);
        }
        graph
    }
}

//! Error types for Cairn operations.
//!
//! [`RenderError`] is what a composition pass fails with; every variant
//! names the node being composed. [`CairnError`] is the facade-level error
//! that also covers I/O, export, and configuration failures.

use std::io;

use thiserror::Error;

use cairn_core::identifier::Id;

/// A label or sub-element collaborator failed to produce content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ComposeError {
    message: String,
}

impl ComposeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that abort a composition pass.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("node `{node}` uses unknown shape `{shape}`")]
    UnknownShape { node: Id, shape: String },

    #[error("node `{node}` uses unknown decoration icon `{icon}`")]
    UnknownIcon { node: Id, icon: String },

    #[error("failed to compose content of node `{node}`: {source}")]
    Compose {
        node: Id,
        #[source]
        source: ComposeError,
    },

    #[error("node `{node}` has an invalid size {width}x{height}; sizes must be finite and non-negative")]
    InvalidGeometry { node: Id, width: f32, height: f32 },

    #[error("graph lists node `{0}` but holds no record for it")]
    MissingNode(Id),
}

impl RenderError {
    /// The node the pass failed on.
    pub fn node(&self) -> Id {
        match self {
            Self::UnknownShape { node, .. }
            | Self::UnknownIcon { node, .. }
            | Self::Compose { node, .. }
            | Self::InvalidGeometry { node, .. } => *node,
            Self::MissingNode(node) => *node,
        }
    }
}

/// The main error type for Cairn operations.
///
/// `Config` and `Input` carry the message of a host that failed to load its
/// configuration or its graph.
#[derive(Debug, Error)]
pub enum CairnError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl From<crate::export::Error> for CairnError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Io(err) => Self::Io(err),
            crate::export::Error::Render(msg) => Self::Export(msg),
        }
    }
}

//! Errors raised while drawing node parts.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// A decoration named an icon that no registry entry provides
    #[error("unknown icon `{0}`")]
    UnknownIcon(String),
}

//! Error adapter for converting CairnError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use cairn::{CairnError, RenderError};

/// Adapter giving a [`CairnError`] a diagnostic code and, where the fix is
/// known, a help line.
pub struct ErrorAdapter<'a>(pub &'a CairnError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CairnError::Io(_) => "cairn::io",
            CairnError::Render(RenderError::UnknownShape { .. }) => "cairn::render::unknown_shape",
            CairnError::Render(RenderError::UnknownIcon { .. }) => "cairn::render::unknown_icon",
            CairnError::Render(RenderError::Compose { .. }) => "cairn::render::compose",
            CairnError::Render(RenderError::InvalidGeometry { .. }) => {
                "cairn::render::invalid_geometry"
            }
            CairnError::Render(RenderError::MissingNode(_)) => "cairn::render::missing_node",
            CairnError::Export(_) => "cairn::export",
            CairnError::Config(_) => "cairn::config",
            CairnError::Input(_) => "cairn::input",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CairnError::Render(RenderError::UnknownShape { .. }) => {
                "built-in shapes are circle, diamond, ellipse, rect, and stack"
            }
            CairnError::Render(RenderError::UnknownIcon { .. }) => {
                "the built-in decoration icon is arrow-right"
            }
            CairnError::Render(RenderError::InvalidGeometry { .. }) => {
                "padding and size overrides must be finite, and overrides must not be negative"
            }
            CairnError::Config(_) => {
                "check the configuration file passed with --config or found in cairn/config.toml"
            }
            CairnError::Input(_) => {
                "graph files list nodes under [nodes.<name>] and group links under [parents]"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

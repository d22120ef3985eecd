//! Cairn CLI library
//!
//! This module contains the core CLI logic for the Cairn graph renderer.

pub mod error_adapter;

mod args;
mod config;
mod document;

pub use args::Args;
pub use document::{DocumentError, GraphDocument};
pub use error_adapter::ErrorAdapter;

use std::{fs, path::Path};

use log::info;

use cairn::{CairnError, Renderer};

/// Run the Cairn CLI application
///
/// Reads the graph description, runs one composition pass, and writes the
/// resulting SVG to the output file.
///
/// # Errors
///
/// Returns `CairnError` for:
/// - File I/O errors and malformed graph descriptions
/// - Configuration loading errors
/// - Composition errors (unknown shapes or icons)
/// - Export errors
pub fn run(args: &Args) -> Result<(), CairnError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let input = Path::new(&args.input);
    let source = fs::read_to_string(input)?;
    let mut graph = GraphDocument::parse(&source, input)?.into_graph();

    let mut renderer = Renderer::new(app_config);
    let report = renderer.render(&mut graph)?;
    info!(nodes = report.composed().len(); "Graph composed");

    renderer.write_svg(Path::new(&args.output))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

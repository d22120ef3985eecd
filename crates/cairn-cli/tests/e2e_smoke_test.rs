use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use cairn::{CairnError, RenderError};
use cairn_cli::Args;

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .toml graph files from a directory
fn collect_graph_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some("toml")
                    && path.file_stem().and_then(|s| s.to_str()) != Some("config")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: &Path, config: Option<&Path>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = demos_dir().join("config.toml");

    let valid_demos = collect_graph_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        for config in [None, Some(config.as_path())] {
            match cairn_cli::run(&args_for(demo_path, &output_path, config)) {
                Ok(()) => {
                    let svg = fs::read_to_string(&output_path).unwrap();
                    assert!(svg.contains("<svg"), "{} wrote no SVG", demo_path.display());
                }
                Err(e) => failed_demos.push((demo_path.clone(), e)),
            }
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_graph_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if cairn_cli::run(&args_for(demo_path, &output_path, None)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} left an output file behind",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_unknown_shape_names_node() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("errors/unknown_shape.toml");
    let output = temp_dir.path().join("out.svg");

    let err = cairn_cli::run(&args_for(&input, &output, None)).unwrap_err();
    match err {
        CairnError::Render(RenderError::UnknownShape { node, shape }) => {
            assert_eq!(node, "b");
            assert_eq!(shape, "hexagon");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn e2e_missing_config_is_reported() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("basic.toml");
    let output = temp_dir.path().join("out.svg");
    let config = temp_dir.path().join("absent.toml");

    let err = cairn_cli::run(&args_for(&input, &output, Some(&config))).unwrap_err();
    assert!(matches!(err, CairnError::Config(msg) if msg.contains("absent.toml")));
}

#[test]
fn e2e_output_contains_nodes() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("subnodes.toml");
    let output = temp_dir.path().join("out.svg");

    cairn_cli::run(&args_for(&input, &output, None)).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("rich-node"));
    assert!(svg.contains("rich-label"));
    assert!(svg.contains("subnodes"));
    assert!(svg.contains("foreignObject"));
}

#[test]
fn e2e_malformed_graph_is_input_error() {
    let temp_dir = tempdir().unwrap();
    let input = demos_dir().join("errors/bad_color.toml");
    let output = temp_dir.path().join("out.svg");

    let err = cairn_cli::run(&args_for(&input, &output, None)).unwrap_err();
    assert!(matches!(err, CairnError::Input(msg) if msg.contains("bad_color.toml")));
}

//! Implementation of `critpath longest <file> <source>`.
//!
//! Computes the longest path from the source to the vertex farthest from it
//! and writes it to stdout.
//!
//! Output (human mode): the chain on one line with vertex IDs separated by
//! ` -> `, followed by an `edges: N` line.
//! Output (JSON mode): `{"path": [{"predecessor": ..., "vertex": ...},
//! ...], "edges": N}`.
//!
//! Exit codes: 0 = path printed, 1 = unknown source or cyclic subgraph,
//! 2 = input failure (handled before this module runs).
use critpath_core::{DagStore, PathStep, VertexId, longest_path};

use crate::OutputFormat;
use crate::cmd::{query_error_to_cli, stdout_error};
use crate::error::CliError;

/// Runs the `longest` command.
///
/// # Errors
///
/// - [`CliError`] exit code 1 if the source is unknown or its reachable
///   subgraph is not a DAG.
pub fn run(store: &DagStore, source: &VertexId, format: &OutputFormat) -> Result<(), CliError> {
    let path = longest_path(store, source.clone()).map_err(query_error_to_cli)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &path),
        OutputFormat::Json => print_json(&mut out, &path),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, path: &[PathStep]) -> std::io::Result<()> {
    let chain: Vec<String> = path.iter().map(|step| step.vertex.to_string()).collect();
    writeln!(w, "{}", chain.join(" -> "))?;
    writeln!(w, "edges: {}", path.len().saturating_sub(1))
}

fn print_json<W: std::io::Write>(w: &mut W, path: &[PathStep]) -> std::io::Result<()> {
    let steps = serde_json::to_value(path).map_err(std::io::Error::other)?;

    let mut obj = serde_json::Map::new();
    obj.insert("path".to_owned(), steps);
    obj.insert(
        "edges".to_owned(),
        serde_json::Value::Number(path.len().saturating_sub(1).into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

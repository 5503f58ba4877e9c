//! Implementation of `critpath topo <file> <source>`.
//!
//! Prints the topological order of the subgraph reachable from the source.
//!
//! Output (human mode): one vertex ID per line, source first.
//! Output (JSON mode): `{"order": [...], "count": N}`.
//!
//! Exit codes: 0 = order printed, 1 = unknown source or cyclic subgraph,
//! 2 = input failure (handled before this module runs).
use critpath_core::{DagStore, VertexId, topological_order};

use crate::OutputFormat;
use crate::cmd::{query_error_to_cli, stdout_error};
use crate::error::CliError;

/// Runs the `topo` command.
///
/// # Errors
///
/// - [`CliError`] exit code 1 if the source is unknown or its reachable
///   subgraph is not a DAG.
pub fn run(store: &DagStore, source: &VertexId, format: &OutputFormat) -> Result<(), CliError> {
    let order = topological_order(store, source.clone()).map_err(query_error_to_cli)?;

    let ids: Vec<&VertexId> = order
        .iter()
        .filter_map(|&idx| store.vertex(idx))
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &ids),
        OutputFormat::Json => print_json(&mut out, &ids),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, ids: &[&VertexId]) -> std::io::Result<()> {
    for id in ids {
        writeln!(w, "{id}")?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, ids: &[&VertexId]) -> std::io::Result<()> {
    let order: Vec<serde_json::Value> = ids
        .iter()
        .filter_map(|id| serde_json::to_value(id).ok())
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert("order".to_owned(), serde_json::Value::Array(order));
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(ids.len().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

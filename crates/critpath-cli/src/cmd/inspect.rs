//! Implementation of `critpath inspect <file>`.
//!
//! Prints summary statistics for the parsed graph: vertex and edge counts
//! (parallel edges counted individually).
use critpath_core::DagStore;

use crate::OutputFormat;
use crate::cmd::stdout_error;
use crate::error::CliError;

/// Runs the `inspect` command. Pure summary; cannot fail logically.
pub fn run(store: &DagStore, format: &OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, store),
        OutputFormat::Json => print_json(&mut out, store),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, store: &DagStore) -> std::io::Result<()> {
    writeln!(w, "vertices: {}", store.node_count())?;
    writeln!(w, "edges: {}", store.edge_count())
}

fn print_json<W: std::io::Write>(w: &mut W, store: &DagStore) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert(
        "vertices".to_owned(),
        serde_json::Value::Number(store.node_count().into()),
    );
    obj.insert(
        "edges".to_owned(),
        serde_json::Value::Number(store.edge_count().into()),
    );

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

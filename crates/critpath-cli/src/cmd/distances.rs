//! Implementation of `critpath distances <file> <source>`.
//!
//! Prints the longest distance and predecessor for every vertex reachable
//! from the source, in discovery order.
//!
//! Output (human mode): one `vertex<TAB>distance<TAB>predecessor` row per
//! vertex, `-` standing in for the source's absent predecessor.
//! Output (JSON mode): `{"distances": [{"vertex": ..., "distance": N,
//! "predecessor": ...}, ...], "count": N}`.
use critpath_core::{DagStore, VertexId, longest_distances};

use crate::OutputFormat;
use crate::cmd::{query_error_to_cli, stdout_error};
use crate::error::CliError;

/// One row of the distance table, resolved to vertex identifiers.
struct Row {
    vertex: VertexId,
    distance: i64,
    predecessor: Option<VertexId>,
}

/// Runs the `distances` command.
///
/// # Errors
///
/// - [`CliError`] exit code 1 if the source is unknown or its reachable
///   subgraph is not a DAG.
pub fn run(store: &DagStore, source: &VertexId, format: &OutputFormat) -> Result<(), CliError> {
    let dist = longest_distances(store, source.clone()).map_err(query_error_to_cli)?;

    let rows: Vec<Row> = dist
        .iter()
        .filter_map(|(idx, record)| {
            let vertex = store.vertex(idx)?.clone();
            let predecessor = record
                .predecessor
                .and_then(|p| store.vertex(p))
                .cloned();
            Some(Row {
                vertex,
                distance: record.distance,
                predecessor,
            })
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &rows),
        OutputFormat::Json => print_json(&mut out, &rows),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, rows: &[Row]) -> std::io::Result<()> {
    for row in rows {
        match &row.predecessor {
            Some(pred) => writeln!(w, "{}\t{}\t{pred}", row.vertex, row.distance)?,
            None => writeln!(w, "{}\t{}\t-", row.vertex, row.distance)?,
        }
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, rows: &[Row]) -> std::io::Result<()> {
    let entries: Vec<serde_json::Value> = rows
        .iter()
        .filter_map(|row| {
            let mut entry = serde_json::Map::new();
            entry.insert("vertex".to_owned(), serde_json::to_value(&row.vertex).ok()?);
            entry.insert("distance".to_owned(), row.distance.into());
            entry.insert(
                "predecessor".to_owned(),
                serde_json::to_value(&row.predecessor).ok()?,
            );
            Some(serde_json::Value::Object(entry))
        })
        .collect();

    let mut obj = serde_json::Map::new();
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(entries.len().into()),
    );
    obj.insert("distances".to_owned(), serde_json::Value::Array(entries));

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

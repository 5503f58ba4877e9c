//! File and stdin reading plus edge-list parsing.
//!
//! This module is the single entry point for all input I/O in the `critpath`
//! binary. `critpath-core` never touches the filesystem; all reading and
//! parsing happens here.
//!
//! # Edge-list format
//!
//! One edge per line as two whitespace-separated tokens `u v`. Blank lines
//! are skipped and `#` starts a comment that runs to the end of the line.
//! A token that parses as `i64` becomes a numeric vertex ID; anything else
//! is a textual vertex ID, so `a 1` connects the name `a` to the number `1`.
use std::io::Read as _;
use std::path::{Path, PathBuf};

use critpath_core::{DagStore, VertexId};

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file,
/// an stdin read failure, or invalid UTF-8 (with the byte offset of the
/// first bad sequence).
pub fn read_input(source: &PathOrStdin) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path),
        PathOrStdin::Stdin => read_stdin(),
    }
}

fn read_file(path: &PathBuf) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn read_stdin() -> Result<String, CliError> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;
    bytes_to_string(bytes, "-")
}

/// Validates UTF-8, reporting the offset of the first invalid byte.
fn bytes_to_string(bytes: Vec<u8>, source: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_path_buf(),
        },
        // All other I/O error kinds are wrapped in the generic IoError
        // variant. A few common ones are listed explicitly to satisfy the
        // wildcard-match lint while still routing everything unknown to
        // IoError.
        std::io::ErrorKind::NotADirectory
        | std::io::ErrorKind::IsADirectory
        | std::io::ErrorKind::InvalidInput
        | std::io::ErrorKind::InvalidData
        | std::io::ErrorKind::TimedOut
        | std::io::ErrorKind::Interrupted
        | std::io::ErrorKind::UnexpectedEof
        | std::io::ErrorKind::OutOfMemory
        | std::io::ErrorKind::Other
        | _ => CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a single vertex token: `i64` if it parses as one, name otherwise.
pub fn parse_vertex(token: &str) -> VertexId {
    match token.parse::<i64>() {
        Ok(n) => VertexId::Num(n),
        Err(_) => VertexId::Name(token.to_owned()),
    }
}

/// Parses an edge-list document into a [`DagStore`].
///
/// Edges are inserted in document order, which fixes the deterministic
/// traversal and tie-break behavior of the queries.
///
/// # Errors
///
/// Returns [`CliError::MalformedEdge`] (exit code 2) for any non-blank,
/// non-comment line that does not consist of exactly two tokens.
pub fn parse_edge_list(text: &str) -> Result<DagStore, CliError> {
    let mut store = DagStore::new();
    for (number, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let [u, v] = tokens[..] {
            store.add_edge(parse_vertex(u), parse_vertex(v));
        } else {
            return Err(CliError::MalformedEdge {
                line: number + 1,
                content: raw.to_owned(),
            });
        }
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::io::Write as _;

    use super::*;

    #[test]
    fn numeric_tokens_become_numeric_vertices() {
        assert_eq!(parse_vertex("42"), VertexId::Num(42));
        assert_eq!(parse_vertex("-7"), VertexId::Num(-7));
        assert_eq!(parse_vertex("a"), VertexId::Name("a".to_owned()));
        // Not a clean i64: falls back to a name.
        assert_eq!(parse_vertex("4x"), VertexId::Name("4x".to_owned()));
    }

    #[test]
    fn edge_list_builds_a_multigraph_in_document_order() {
        let store = parse_edge_list("a 1\na 2\n1 2\na 1\n").expect("well-formed");
        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 4);
        assert!(store.contains(&VertexId::Num(1)));
        assert!(store.contains(&VertexId::Name("a".to_owned())));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let text = "# build graph\n\na b   # first edge\n   \nb c\n";
        let store = parse_edge_list(text).expect("well-formed");
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn one_token_line_is_malformed() {
        let err = parse_edge_list("a b\nlonely\n").expect_err("missing target");
        assert!(matches!(err, CliError::MalformedEdge { line: 2, .. }));
        assert!(err.message().contains("lonely"), "message: {}", err.message());
    }

    #[test]
    fn three_token_line_is_malformed() {
        let err = parse_edge_list("a b c\n").expect_err("extra token");
        assert!(matches!(err, CliError::MalformedEdge { line: 1, .. }));
    }

    #[test]
    fn reading_a_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"a b\nb c\n").expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        let text = read_input(&source).expect("readable");
        assert_eq!(text, "a b\nb c\n");
    }

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let source = PathOrStdin::Path("no-such-file.edges".into());
        let err = read_input(&source).expect_err("missing file");
        assert!(matches!(err, CliError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn invalid_utf8_reports_the_byte_offset() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"ab\xff\xfe").expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        let err = read_input(&source).expect_err("bad UTF-8");
        assert!(matches!(err, CliError::InvalidUtf8 { byte_offset: 2, .. }));
    }
}

//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `critpath` binary. Every
//! variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
//!
//! - Exit code **2** — input failure: the tool could not read or parse the
//!   edge list at all. These errors terminate early before any graph query
//!   runs.
//! - Exit code **1** — logical failure: the tool ran to completion but the
//!   query is a well-defined failure (unknown source vertex, cyclic graph).
use std::fmt;
use std::path::PathBuf;

/// All error conditions that the `critpath` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// An edge-list line is malformed (not exactly two tokens).
    MalformedEdge {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line content.
        content: String,
    },

    // --- Exit code 1: logical failures ---
    /// The requested source vertex does not exist in the graph.
    SourceNotFound {
        /// Display form of the requested vertex.
        vertex: String,
    },

    /// The subgraph reachable from the requested source contains a cycle.
    NotADag {
        /// Description of where the cycle was observed.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, malformed edge list, etc.).
    /// - `1` — logical failure (unknown source, cyclic graph).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::MalformedEdge { .. } => 2,

            Self::SourceNotFound { .. } | Self::NotADag { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::MalformedEdge { line, content } => {
                format!("error: malformed edge on line {line}: expected `u v`, got {content:?}")
            }
            Self::SourceNotFound { vertex } => {
                format!("error: source vertex not found: {vertex}")
            }
            Self::NotADag { detail } => {
                format!("error: graph is not a DAG: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn file_not_found_is_exit_2() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("edges.txt"),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn permission_denied_is_exit_2() {
        let e = CliError::PermissionDenied {
            path: PathBuf::from("/root/edges.txt"),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn invalid_utf8_is_exit_2() {
        let e = CliError::InvalidUtf8 {
            source: "edges.txt".to_owned(),
            byte_offset: 42,
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn stdin_read_error_is_exit_2() {
        let e = CliError::StdinReadError {
            detail: "broken pipe".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn malformed_edge_is_exit_2() {
        let e = CliError::MalformedEdge {
            line: 3,
            content: "a b c".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn source_not_found_is_exit_1() {
        let e = CliError::SourceNotFound {
            vertex: "c".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn not_a_dag_is_exit_1() {
        let e = CliError::NotADag {
            detail: "cycle through vertex 6".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("graph.edges"),
        };
        let msg = e.message();
        assert!(msg.contains("graph.edges"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn malformed_edge_message_contains_line_and_content() {
        let e = CliError::MalformedEdge {
            line: 7,
            content: "lonely".to_owned(),
        };
        let msg = e.message();
        assert!(msg.contains("line 7"), "message: {msg}");
        assert!(msg.contains("lonely"), "message: {msg}");
    }

    #[test]
    fn not_a_dag_message_names_the_condition() {
        let e = CliError::NotADag {
            detail: "cycle through vertex 6".to_owned(),
        };
        let msg = e.message();
        assert!(msg.contains("not a DAG"), "message: {msg}");
        assert!(msg.contains("vertex 6"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::SourceNotFound {
            vertex: "a".to_owned(),
        };
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::NotADag {
            detail: "cycle through vertex a".to_owned(),
        });
        assert!(!e.to_string().is_empty());
    }
}

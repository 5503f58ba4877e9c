//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[cfg(test)]
mod tests;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain-text output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// Root of the `critpath` command line.
#[derive(Parser)]
#[command(name = "critpath", about = "Longest-path analysis for directed acyclic graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All top-level subcommands exposed by the `critpath` binary.
///
/// Every graph-reading subcommand takes an edge-list `FILE` (one `u v` pair
/// per line, `-` for stdin) and, except `inspect`, a `SOURCE` vertex.
#[derive(Subcommand)]
pub enum Command {
    /// Print the topological order of the subgraph reachable from SOURCE.
    Topo {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex (numeric tokens are numeric vertex IDs).
        #[arg(value_name = "SOURCE")]
        source: String,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human", value_enum)]
        format: OutputFormat,
    },

    /// Print longest distance and predecessor for every vertex reachable
    /// from SOURCE, in discovery order.
    Distances {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex.
        #[arg(value_name = "SOURCE")]
        source: String,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human", value_enum)]
        format: OutputFormat,
    },

    /// Print the longest path from SOURCE to the vertex farthest from it.
    Longest {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex.
        #[arg(value_name = "SOURCE")]
        source: String,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human", value_enum)]
        format: OutputFormat,
    },

    /// Print vertex and edge counts for the parsed graph.
    Inspect {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human", value_enum)]
        format: OutputFormat,
    },

    /// Print the critpath-core library version.
    Version,
}

//! Command modules for the `critpath` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the parsed graph and arguments and returns `Ok(())` on
//! success or a [`crate::error::CliError`] on failure.
pub mod distances;
pub mod inspect;
pub mod longest;
pub mod topo;

use critpath_core::QueryError;

use crate::error::CliError;

/// Converts a core [`QueryError`] to the appropriate [`CliError`].
pub(crate) fn query_error_to_cli(e: QueryError) -> CliError {
    match e {
        QueryError::SourceNotFound(id) => CliError::SourceNotFound {
            vertex: id.to_string(),
        },
        QueryError::NotADag { at } => CliError::NotADag {
            detail: format!("cycle through vertex {at}"),
        },
    }
}

/// Wraps an I/O failure while writing results to stdout.
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

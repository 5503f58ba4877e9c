//! Entry point for the `critpath` binary.
//!
//! Parses the command line, reads and parses the edge-list input exactly
//! once, dispatches to the subcommand module, and maps any [`CliError`] to
//! its stderr message and exit code (2 = input failure, 1 = logical
//! failure).
mod cli;
mod cmd;
mod error;
mod io;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Topo {
            file,
            source,
            format,
        } => {
            let store = load(&file)?;
            cmd::topo::run(&store, &io::parse_vertex(&source), &format)
        }
        Command::Distances {
            file,
            source,
            format,
        } => {
            let store = load(&file)?;
            cmd::distances::run(&store, &io::parse_vertex(&source), &format)
        }
        Command::Longest {
            file,
            source,
            format,
        } => {
            let store = load(&file)?;
            cmd::longest::run(&store, &io::parse_vertex(&source), &format)
        }
        Command::Inspect { file, format } => {
            let store = load(&file)?;
            cmd::inspect::run(&store, &format)
        }
        Command::Version => {
            println!("{}", critpath_core::version());
            Ok(())
        }
    }
}

/// Reads the input and parses it into a graph store.
fn load(file: &PathOrStdin) -> Result<critpath_core::DagStore, CliError> {
    let text = io::read_input(file)?;
    io::parse_edge_list(&text)
}

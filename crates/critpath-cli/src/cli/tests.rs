#![allow(clippy::expect_used)]

use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn longest_parses_file_source_and_default_format() {
    let cli = Cli::try_parse_from(["critpath", "longest", "edges.txt", "a"]).expect("valid");
    match cli.command {
        Command::Longest {
            file,
            source,
            format,
        } => {
            assert!(matches!(file, PathOrStdin::Path(p) if p == PathBuf::from("edges.txt")));
            assert_eq!(source, "a");
            assert!(matches!(format, OutputFormat::Human));
        }
        Command::Topo { .. }
        | Command::Distances { .. }
        | Command::Inspect { .. }
        | Command::Version => unreachable!("parsed the wrong subcommand"),
    }
}

#[test]
fn dash_means_stdin() {
    let cli = Cli::try_parse_from(["critpath", "topo", "-", "0"]).expect("valid");
    match cli.command {
        Command::Topo { file, .. } => assert!(matches!(file, PathOrStdin::Stdin)),
        Command::Longest { .. }
        | Command::Distances { .. }
        | Command::Inspect { .. }
        | Command::Version => unreachable!("parsed the wrong subcommand"),
    }
}

#[test]
fn json_format_flag_is_accepted() {
    let cli = Cli::try_parse_from(["critpath", "distances", "edges.txt", "6", "--format", "json"])
        .expect("valid");
    match cli.command {
        Command::Distances { format, .. } => assert!(matches!(format, OutputFormat::Json)),
        Command::Longest { .. }
        | Command::Topo { .. }
        | Command::Inspect { .. }
        | Command::Version => unreachable!("parsed the wrong subcommand"),
    }
}

#[test]
fn inspect_takes_no_source() {
    let cli = Cli::try_parse_from(["critpath", "inspect", "edges.txt"]).expect("valid");
    assert!(matches!(cli.command, Command::Inspect { .. }));
}

#[test]
fn missing_source_is_a_parse_error() {
    assert!(Cli::try_parse_from(["critpath", "longest", "edges.txt"]).is_err());
}

#[test]
fn unknown_subcommand_is_a_parse_error() {
    assert!(Cli::try_parse_from(["critpath", "shortest", "edges.txt", "a"]).is_err());
}

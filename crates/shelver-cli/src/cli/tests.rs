//! CLI parse tests.

use super::summary::sources_consumed;
use super::{unsupported_extensions, Cli};
use clap::Parser;
use shelver_core::organizer::Outcome;
use shelver_core::{Disposition, FormatRegistry, OrganizeReport};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_source_and_destination() {
    let cli = parse(&["shelver", "/media/inbox", "/media/library"]);
    assert_eq!(cli.source, PathBuf::from("/media/inbox"));
    assert_eq!(cli.destination, PathBuf::from("/media/library"));
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_config_flag() {
    let cli = parse(&["shelver", "--config", "alt.toml", "in", "out"]);
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    assert_eq!(cli.source, PathBuf::from("in"));
    assert_eq!(cli.destination, PathBuf::from("out"));
}

#[test]
fn cli_requires_both_roots() {
    assert!(Cli::try_parse_from(["shelver", "only-source"]).is_err());
    assert!(Cli::try_parse_from(["shelver"]).is_err());
}

#[test]
fn cli_rejects_extra_positional() {
    assert!(Cli::try_parse_from(["shelver", "a", "b", "c"]).is_err());
}

#[test]
fn extensions_without_parser_are_reported() {
    let registry = FormatRegistry::default();
    let exts: Vec<String> = ["epub", "EPUB", "azw3", "mobi"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(unsupported_extensions(&registry, &exts), vec!["azw3"]);
}

#[test]
fn summary_counts_sources_that_left_the_tree() {
    let report = OrganizeReport {
        outcomes: [
            Disposition::Moved,
            Disposition::SkippedStale,
            Disposition::SkippedConflict,
            Disposition::Failed,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, disposition)| Outcome {
            path: PathBuf::from(format!("{i}.epub")),
            disposition,
        })
        .collect(),
        crawl_errors: 0,
    };
    assert_eq!(sources_consumed(&report), 2);
}

use clap::Parser;
use std::path::PathBuf;

use filenest::cli::{Args, Command, FavAction};
use filenest::config::{Config, LogLevel};

#[test]
fn move_parses_sources_and_destination() {
    let args = Args::parse_from(["filenest", "move", "/tmp/a.txt", "/tmp/b.txt", "--into", "/tmp/dest"]);
    match args.command {
        Command::Move { sources, into } => {
            assert_eq!(
                sources,
                vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")]
            );
            assert_eq!(into, PathBuf::from("/tmp/dest"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn move_requires_at_least_one_source() {
    assert!(Args::try_parse_from(["filenest", "move", "--into", "/tmp/dest"]).is_err());
}

#[test]
fn search_takes_term_and_optional_limit() {
    let args = Args::parse_from(["filenest", "search", "invoice", "--limit", "50"]);
    match args.command {
        Command::Search { term, limit } => {
            assert_eq!(term, "invoice");
            assert_eq!(limit, Some(50));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn fav_subcommands_parse() {
    let args = Args::parse_from(["filenest", "fav", "add", "/tmp/keep"]);
    assert!(matches!(
        args.command,
        Command::Fav {
            action: FavAction::Add { .. }
        }
    ));

    let args = Args::parse_from(["filenest", "fav", "prune"]);
    assert!(matches!(
        args.command,
        Command::Fav {
            action: FavAction::Prune
        }
    ));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["filenest", "--debug", "--log-level", "quiet", "fav", "list"]);
    assert_eq!(args.effective_log_level().unwrap(), LogLevel::Debug); // --debug wins

    let args = Args::parse_from(["filenest", "--log-level", "info", "fav", "list"]);
    assert_eq!(args.effective_log_level().unwrap(), LogLevel::Info);
}

#[test]
fn apply_overrides_sets_fields() {
    let args = Args::parse_from([
        "filenest",
        "--root",
        "/srv/files",
        "--favorites-file",
        "/srv/favs.json",
        "--log-level",
        "info",
        "search",
        "x",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.root, PathBuf::from("/srv/files"));
    assert_eq!(cfg.favorites_file, PathBuf::from("/srv/favs.json"));
    assert_eq!(cfg.log_level, LogLevel::Info);
}

#[test]
fn overrides_are_no_ops_when_flags_absent() {
    let args = Args::parse_from(["filenest", "fav", "list"]);
    let mut cfg = Config::default();
    let before = cfg.clone();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.root, before.root);
    assert_eq!(cfg.favorites_file, before.favorites_file);
    assert_eq!(cfg.log_level, before.log_level);
}

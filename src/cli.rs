//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Global flags override config values (which are loaded from XML if present).
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// CLI wrapper for the filenest library: the stand-in presentation layer that
/// issues move batches, searches, and favorites calls.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Desktop file browser engine (CLI front-end)")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Override the browse/search root directory.
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Override the favorites record location.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub favorites_file: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file in addition to stdout.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Move files or directories into a destination folder (collision-safe)
    Move {
        /// Sources to move
        #[arg(required = true, value_hint = ValueHint::AnyPath)]
        sources: Vec<PathBuf>,
        /// Destination folder
        #[arg(long = "into", short = 't', value_hint = ValueHint::DirPath)]
        into: PathBuf,
    },
    /// Search file and folder names under the root
    Search {
        /// Case-insensitive substring to match against names
        term: String,
        /// Stop after this many matches
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Manage the favorites list
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Create a new folder
    NewFolder {
        #[arg(value_hint = ValueHint::DirPath)]
        parent: PathBuf,
        name: String,
    },
    /// Rename an entry within its folder
    Rename {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
        new_name: String,
    },
    /// Delete a file or directory tree
    Delete {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// Show details for an entry
    Info {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// Print the config file location used by filenest and exit
    PrintConfig,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavAction {
    /// Add a path to the favorites list
    Add {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// Remove a path from the favorites list
    Remove {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },
    /// Print all favorites
    List,
    /// Drop favorites whose paths no longer exist
    Prune,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = &self.root {
            cfg.root = root.clone();
        }
        if let Some(fav) = &self.favorites_file {
            cfg.favorites_file = fav.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

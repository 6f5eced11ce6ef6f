//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use anyhow::{Result, bail};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::SEARCH_LIMIT_DEFAULT;
use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for the browser engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default root for browsing and searching
    pub root: PathBuf,
    /// Location of the favorites record
    pub favorites_file: PathBuf,
    /// Default cap on search results
    pub search_limit: usize,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: paths::default_root(),
            favorites_file: paths::default_favorites_path()
                .unwrap_or_else(|| PathBuf::from("favorites.json")),
            search_limit: SEARCH_LIMIT_DEFAULT,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }
}

impl Config {
    /// Validate settings for sanity before the app acts on them.
    ///
    /// - root must exist and be a directory.
    /// - search_limit must be positive.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            bail!(
                "Configured root is not an existing directory: {}",
                self.root.display()
            );
        }
        if self.search_limit == 0 {
            bail!("search_limit must be greater than zero");
        }
        Ok(())
    }
}

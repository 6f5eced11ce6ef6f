//! Application orchestrator.
//! Loads/merges config, initializes logging, installs signal handlers, and
//! dispatches the parsed subcommand against the library engines, rendering
//! per-item results the way a browser view would.

use anyhow::{Result, bail};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use filenest::cli::{Args, Command, FavAction};
use filenest::config::{Config, load_config_from_xml};
use filenest::fs_ops::{self, EntryKind, MoveRequest};
use filenest::output as out;
use filenest::search::{SearchEvent, SearchQuery, spawn_search_with};
use filenest::{FavoritesStore, default_config_path};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle print-config before logging init
    if matches!(args.command, Command::PrintConfig) {
        return print_config_location();
    }

    // Build config: XML file first (template created on first run), CLI wins.
    let mut cfg = Config::default();
    if let Some((root, favorites_file, search_limit, log_level, log_file)) = load_config_from_xml()
    {
        if let Some(r) = root {
            cfg.root = r;
        }
        if let Some(f) = favorites_file {
            cfg.favorites_file = f;
        }
        if let Some(n) = search_limit {
            cfg.search_limit = n;
        }
        if let Some(l) = log_level {
            cfg.log_level = l;
        }
        if log_file.is_some() {
            cfg.log_file = log_file;
        }
    }
    args.apply_overrides(&mut cfg);

    // Initialize logging and capture the guard so logs flush on exit/signal.
    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {}", e)))?;
    let guard_slot = Arc::new(Mutex::new(guard_opt));

    // Ctrl-C cancels a running search (and flushes logs); other commands are
    // short-lived enough to simply finish.
    let search_cancel = filenest::CancelToken::new();
    {
        let guard_slot = Arc::clone(&guard_slot);
        let search_cancel = search_cancel.clone();
        ctrlc::set_handler(move || {
            search_cancel.cancel();
            out::print_warn("Received interrupt; finishing up...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .expect("failed to install signal handler");
    }

    debug!("Starting filenest: {:?}", args);

    let result = dispatch(&args, &cfg, &search_cancel);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    result
}

fn print_config_location() -> Result<()> {
    if let Ok(cfg_env) = std::env::var("FILENEST_CONFIG") {
        out::print_info(&format!("Using FILENEST_CONFIG (explicit):\n  {}\n", cfg_env));
        out::print_info("To override, unset FILENEST_CONFIG or set it to another file.");
        return Ok(());
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default filenest config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Running any command will create a template.");
            }
        }
        None => {
            out::print_error("Could not determine a default config path on this system.");
        }
    }
    Ok(())
}

fn dispatch(args: &Args, cfg: &Config, search_cancel: &filenest::CancelToken) -> Result<()> {
    match &args.command {
        Command::Move { sources, into } => run_move(sources, into),
        Command::Search { term, limit } => {
            cfg.validate()?;
            run_search(cfg, term, limit.unwrap_or(cfg.search_limit), search_cancel)
        }
        Command::Fav { action } => run_fav(cfg, action),
        Command::NewFolder { parent, name } => {
            let made = fs_ops::create_folder(parent, name)?;
            out::print_success(&format!("Created '{}'", made.display()));
            Ok(())
        }
        Command::Rename { path, new_name } => {
            let renamed = fs_ops::rename_entry(path, new_name)?;
            out::print_success(&format!(
                "Renamed '{}' -> '{}'",
                path.display(),
                renamed.display()
            ));
            Ok(())
        }
        Command::Delete { path } => {
            fs_ops::delete_entry(path)?;
            out::print_success(&format!("Deleted '{}'", path.display()));
            Ok(())
        }
        Command::Info { path } => run_info(path),
        Command::PrintConfig => unreachable!("handled before dispatch"),
    }
}

fn run_move(sources: &[std::path::PathBuf], into: &std::path::Path) -> Result<()> {
    let requests: Vec<MoveRequest> = sources
        .iter()
        .map(|src| MoveRequest::new(src.clone(), into))
        .collect();

    let reports = fs_ops::move_many(&requests);
    let mut failures = 0usize;
    for report in &reports {
        match &report.outcome {
            Ok(dest) => {
                out::print_user(&format!(
                    "Moved '{}' -> '{}'",
                    report.source.display(),
                    dest.display()
                ));
            }
            Err(e) => {
                failures += 1;
                out::print_error(&format!("{}", e));
            }
        }
    }
    info!(total = reports.len(), failures, "move batch finished");
    if failures > 0 {
        bail!("{failures} of {} moves failed", reports.len());
    }
    Ok(())
}

fn run_search(
    cfg: &Config,
    term: &str,
    limit: usize,
    cancel: &filenest::CancelToken,
) -> Result<()> {
    let query = SearchQuery::new(cfg.root.clone(), term, limit);
    // The signal handler holds a clone of `cancel`, so Ctrl-C stops the walk
    // at its next checkpoint and the event stream completes normally.
    let handle = spawn_search_with(query, cancel.clone())?;

    let mut outcome = None;
    for event in handle.events() {
        match event {
            SearchEvent::Match(m) => out::print_user(&format!("{}", m.path.display())),
            SearchEvent::Progress { count } => {
                out::print_info(&format!("{count} matches so far..."));
            }
            SearchEvent::Completed(o) => outcome = Some(o),
        }
    }

    if let Some(o) = outcome {
        let note = if o.cancelled { " (cancelled)" } else { "" };
        out::print_info(&format!(
            "{} match(es){}{}",
            o.matches.len(),
            note,
            if o.skipped > 0 {
                format!(", {} unreadable director(ies) skipped", o.skipped)
            } else {
                String::new()
            }
        ));
    }
    Ok(())
}

fn run_fav(cfg: &Config, action: &FavAction) -> Result<()> {
    let mut store = FavoritesStore::open(&cfg.favorites_file);
    match action {
        FavAction::Add { path } => {
            if store.add(path) {
                save_reporting(&store);
                out::print_success(&format!("Added '{}' to favorites", path.display()));
            } else {
                out::print_info(&format!("'{}' is already a favorite", path.display()));
            }
        }
        FavAction::Remove { path } => {
            if store.remove(path) {
                save_reporting(&store);
                out::print_success(&format!("Removed '{}' from favorites", path.display()));
            } else {
                out::print_info(&format!("'{}' is not a favorite", path.display()));
            }
        }
        FavAction::List => {
            if store.is_empty() {
                out::print_info("No favorites yet.");
            }
            for entry in store.entries() {
                out::print_user(&format!("{}", entry.display()));
            }
        }
        FavAction::Prune => {
            let removed = store.prune();
            if removed.is_empty() {
                out::print_info("All favorites still exist.");
            } else {
                save_reporting(&store);
                for stale in &removed {
                    out::print_user(&format!("Pruned {}", stale.display()));
                }
            }
        }
    }
    Ok(())
}

/// Save the store, reporting failure without aborting: a failed save loses
/// only the pending write, never the previous record.
fn save_reporting(store: &FavoritesStore) {
    if let Err(e) = store.save() {
        warn!(error = %e, "favorites save failed");
        out::print_warn(&format!("{}", e));
    }
}

fn run_info(path: &std::path::Path) -> Result<()> {
    let info = fs_ops::entry_info(path)?;
    let kind = match info.kind {
        EntryKind::Dir => "Folder",
        EntryKind::File => "File",
        EntryKind::Other => "Special",
    };
    out::print_user(&format!("Name: {}", info.name));
    out::print_user(&format!("Type: {}", kind));
    out::print_user(&format!("Path: {}", info.path.display()));
    let size = if info.kind == EntryKind::File {
        fs_ops::readable_size(info.size)
    } else {
        "-".to_string()
    };
    out::print_user(&format!("Size: {}", size));
    if let Some(modified) = info.modified {
        let dt: chrono::DateTime<chrono::Local> = modified.into();
        out::print_user(&format!("Modified: {}", dt.format("%d/%m/%y %H:%M:%S")));
    }
    Ok(())
}

//! Core library for `filenest`.
//!
//! The engine behind a desktop file browser, minus the chrome: collision-safe
//! moves with per-item outcomes, a cancellable recursive name search, a
//! self-healing favorites list, and the management operations a browser's
//! menus invoke. The presentation layer supplies requests and renders the
//! results; nothing here notifies views or opens files.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod errors;
pub mod favorites;
pub mod fs_ops;
pub mod output;
pub mod search;

pub use cancel::CancelToken;
pub use config::{Config, LogLevel, default_config_path, default_favorites_path, default_log_path};
pub use errors::FileNestError;
pub use favorites::FavoritesStore;
pub use fs_ops::{MoveReport, MoveRequest, move_entry, move_many, resolve_destination};
pub use search::{
    SearchEvent, SearchHandle, SearchMatch, SearchOutcome, SearchQuery, SearchSlot, spawn_search,
    spawn_search_with,
};

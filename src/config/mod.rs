//! Config module (modularized).
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{
    default_config_path, default_favorites_path, default_log_path, default_root,
    path_has_symlink_ancestor,
};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config_from_xml};

/// Default cap on search results when neither config nor CLI sets one.
pub const SEARCH_LIMIT_DEFAULT: usize = 1000;

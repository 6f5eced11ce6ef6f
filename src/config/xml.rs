//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a secure template if missing (unless FILENEST_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; validation happens
//!   elsewhere.
//! - Unknown XML fields cause a hard failure (panic) to surface
//!   misconfigurations early.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::SEARCH_LIMIT_DEFAULT;
use super::paths::default_config_path;
use crate::config::types::LogLevel;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "root")]
    root: Option<String>,
    #[serde(rename = "favorites_file")]
    favorites_file: Option<String>,
    #[serde(rename = "search_limit", default, deserialize_with = "de_usize_trimmed_opt")]
    search_limit: Option<usize>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

// Reduce visual complexity of the return type used by load_config_from_xml().
type LoadedConfig = (
    Option<PathBuf>,  // root
    Option<PathBuf>,  // favorites_file
    Option<usize>,    // search_limit
    Option<LogLevel>, // log_level
    Option<PathBuf>,  // log_file
);

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<usize>().ok()))
}

/// Read config from XML. OS-aware default path used if FILENEST_CONFIG not set.
/// Returns None if no meaningful settings are present or the file doesn't exist.
pub fn load_config_from_xml() -> Option<LoadedConfig> {
    let env_set = env::var_os("FILENEST_CONFIG").is_some();
    let cfg_path = default_config_path()?;

    // If missing: create a template (only when using the default path), then
    // report nothing loaded.
    if !cfg_path.exists() {
        if !env_set {
            let _ = create_template_config(&cfg_path);
        }
        return None;
    }

    let content = fs::read_to_string(&cfg_path).ok()?;
    let parsed: XmlConfig = match from_xml_str(&content) {
        Ok(x) => x,
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("unknown field") {
                panic!(
                    "Unknown field in filenest config {}: {}. Refusing to start.",
                    cfg_path.display(),
                    msg
                );
            }
            debug!(
                "Failed to parse config.xml at {}: {}",
                cfg_path.display(),
                msg
            );
            return None;
        }
    };

    let root = parsed.root.as_deref().map(|s| PathBuf::from(s.trim()));
    let favorites_file = parsed
        .favorites_file
        .as_deref()
        .map(|s| PathBuf::from(s.trim()));
    let log_level = parsed.log_level.as_deref().and_then(LogLevel::parse);
    let log_file = parsed
        .log_file
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    debug!(path = %cfg_path.display(), "loaded config from XML");
    Some((
        root,
        favorites_file,
        parsed.search_limit,
        log_level,
        log_file,
    ))
}

/// Create parent directory and write a small secure template config file.
///
/// On Unix this will attempt to set conservative permissions:
///  - dir: 0o700
///  - file: 0o600
pub fn create_template_config(path: &Path) -> Result<()> {
    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        #[cfg(unix)]
        {
            // Best-effort; creation still succeeds on filesystems without modes.
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let content = format!(
        "<config>\n  <root>{}</root>\n  <search_limit>{}</search_limit>\n  <log_level>normal</log_level>\n</config>\n",
        super::paths::default_root().display(),
        SEARCH_LIMIT_DEFAULT
    );

    fs::write(path, content)
        .with_context(|| format!("write config template '{}'", path.display()))?;
    #[cfg(unix)]
    {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}

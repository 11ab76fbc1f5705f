//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a secure template on request (`--init-config`).
//!
//! Notes:
//! - A missing file means defaults; a malformed file or an unknown field is an error.
//! - Values are trimmed; empty values count as unset.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::validate::validate_staging_name;

use crate::condition::MatchCondition;
use crate::config::types::{Config, LogLevel};
use crate::fs_ops::STAGING_DIR_NAME;
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    staging_dir_name: Option<String>,
    /// Comma-separated list, e.g. "jpg,png"
    extensions: Option<String>,
    pattern: Option<String>,
    ignore: Option<bool>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.staging_dir_name.as_deref()) {
        validate_staging_name(s)?;
        cfg.staging_dir_name = s.to_string();
    }

    cfg.condition = MatchCondition {
        extensions: non_empty(parsed.extensions.as_deref())
            .map(MatchCondition::parse_extension_list)
            .unwrap_or_default(),
        pattern: non_empty(parsed.pattern.as_deref()).map(str::to_string),
        ignore: parsed.ignore.unwrap_or(false),
    };

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Load the config from `$RENFLS_CONFIG` or the default location.
/// Returns Ok(None) when no file exists there.
pub fn load_config() -> Result<Option<Config>> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}

/// Create a template config file and its parent directory (best-effort permissions).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/renfls.log".into());

    let content = format!(
        "<!--\n  renfls configuration (XML)\n\n    log_level         -> quiet | normal | info | debug\n    log_file          -> path to log file (optional; leave empty for console only)\n    staging_dir_name  -> reserved directory created inside each root while promoting\n    extensions        -> comma-separated extensions to rename (empty = all)\n    pattern           -> regular expression matched against file names (empty = none)\n    ignore            -> true to rename everything that does NOT match\n\n  Suggested log_file: {}\n  CLI flags override these values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <staging_dir_name>{}</staging_dir_name>\n  <extensions></extensions>\n  <pattern></pattern>\n  <ignore>false</ignore>\n</config>\n",
        suggested_log, STAGING_DIR_NAME
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}

/// Write a template at the default location unless a file already exists there.
/// Returns the path written, or None if one was already present.
pub fn ensure_default_config_exists() -> Result<Option<PathBuf>> {
    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return Ok(None);
    }
    create_template_config(&cfg_path)?;
    Ok(Some(cfg_path))
}

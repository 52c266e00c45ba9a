//! Site configuration loading and validation
//!
//! Lookup order for `resolve_site_config`:
//! 1. Explicit path (CLI flag or `ERGOHEADER_CONFIG`), which must exist
//! 2. `./ergoheader.toml`
//! 3. `<config_dir>/ergoheader/config.toml`
//! 4. Built-in defaults

use crate::error::CoreError;
use ergoheader_types::SiteConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "ergoheader.toml";

/// Per-user config location, if the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ergoheader").join("config.toml"))
}

/// Load and validate a config file
pub fn load_site_config(path: &Path) -> Result<SiteConfig, CoreError> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: SiteConfig = toml::from_str(&content).map_err(|source| CoreError::TomlParse {
        path: path.to_path_buf(),
        message: source.message().to_string(),
        source,
    })?;

    validate(&config)?;
    debug!(path = %path.display(), nav = config.nav.len(), "loaded site config");
    Ok(config)
}

/// Find a config file and load it, falling back to defaults when none exists
pub fn resolve_site_config(explicit: Option<&Path>) -> Result<SiteConfig, CoreError> {
    if let Some(path) = explicit {
        return load_site_config(path);
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return load_site_config(&local);
    }

    if let Some(user) = user_config_path().filter(|p| p.exists()) {
        return load_site_config(&user);
    }

    debug!("no config file found, using defaults");
    Ok(SiteConfig::default())
}

/// Reject values the header cannot work with
pub fn validate(config: &SiteConfig) -> Result<(), CoreError> {
    let header = &config.header;

    for (name, value) in [
        ("header.scroll_up_threshold", header.scroll_up_threshold),
        ("header.minimize_margin", header.minimize_margin),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::invalid(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }

    for (index, item) in config.nav.iter().enumerate() {
        if item.label.trim().is_empty() {
            return Err(CoreError::invalid(format!("nav[{}] has an empty label", index)));
        }
        if item.href.trim().is_empty() {
            return Err(CoreError::invalid(format!(
                "nav[{}] ('{}') has an empty href",
                index, item.label
            )));
        }
    }

    if config.title.text.trim().is_empty() {
        return Err(CoreError::invalid("title.text must not be empty"));
    }

    Ok(())
}

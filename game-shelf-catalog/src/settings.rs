//! Site configuration (`site.toml`) loading and resolution.

use std::path::{Path, PathBuf};

use game_shelf_core::SiteConfig;

use crate::error::CatalogError;

/// User-level fallback: `~/.config/game-shelf/site.toml`.
pub fn user_config_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("game-shelf").join("site.toml")
}

/// Read a `site.toml`. `Ok(None)` when the file does not exist.
pub fn load_site_config(path: &Path) -> Result<Option<SiteConfig>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let config = toml::from_str(&contents).map_err(|e| CatalogError::Config {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(Some(config))
}

/// Resolve the site configuration using a priority chain:
///
/// 1. Explicit path (if `Some`); it must exist
/// 2. `site.toml` in the catalog directory
/// 3. The user config file
/// 4. Built-in defaults
///
/// Returns the config and the file it came from, if any.
pub fn resolve_site_config(
    explicit: Option<&Path>,
    catalog_dir: &Path,
) -> Result<(SiteConfig, Option<PathBuf>), CatalogError> {
    if let Some(path) = explicit {
        return match load_site_config(path)? {
            Some(config) => Ok((config, Some(path.to_path_buf()))),
            None => Err(CatalogError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            )),
        };
    }

    for candidate in [catalog_dir.join("site.toml"), user_config_path()] {
        if let Some(config) = load_site_config(&candidate)? {
            log::debug!("Using site config {}", candidate.display());
            return Ok((config, Some(candidate)));
        }
    }

    Ok((SiteConfig::default(), None))
}

/// Pretty-printed TOML for display.
pub fn config_to_string(config: &SiteConfig) -> Result<String, CatalogError> {
    Ok(toml::to_string_pretty(config)?)
}

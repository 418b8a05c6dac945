use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::{config_to_string, user_config_path};

use super::Shelf;
use crate::CliError;

/// Show the resolved site configuration and where it came from.
pub(crate) fn run_config(shelf: &Shelf) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Site Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    match &shelf.catalog.config_source {
        Some(path) => log::info!(
            "  Source: {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  Source: {} (no site.toml in {} or {})",
            "defaults".if_supports_color(Stdout, |t| t.dimmed()),
            shelf.root.display(),
            user_config_path().display(),
        ),
    }
    crate::log_blank();
    for line in config_to_string(&shelf.catalog.config)?.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

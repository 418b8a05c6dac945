use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::{entry_path, select_main_entry};

use super::Shelf;
use crate::CliError;

/// Run the featured-entry gate over the whole catalog and print the result.
pub(crate) fn run_featured(shelf: &Shelf) -> Result<(), CliError> {
    let config = &shelf.catalog.config;
    let main = select_main_entry(&shelf.catalog.entries, config)?;

    match main {
        Some(entry) => {
            log::info!(
                "{} {}",
                "Featured:".if_supports_color(Stdout, |t| t.bold()),
                entry.title.if_supports_color(Stdout, |t| t.green()),
            );
            log::info!("  Path:     {}", entry_path(entry));
            log::info!("  Category: {}", shelf.catalog.labels.label(&entry.category));
            if let Some(description) = &entry.description {
                log::info!("  {}", description);
            }
            if !shelf.visibility.is_visible(entry) {
                log::warn!("Featured game '{}' is not visible in this build", entry.title);
            }
        }
        None => {
            log::info!(
                "{} none (single_featured_mode = {})",
                "Featured:".if_supports_color(Stdout, |t| t.bold()),
                config.single_featured_mode,
            );
        }
    }
    Ok(())
}

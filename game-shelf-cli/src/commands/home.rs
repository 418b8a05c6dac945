use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::{
    Entry, category_path, category_sections, new_arrivals, popular, recent, select_main_entry,
};

use super::{Shelf, log_entry_line};
use crate::CliError;

fn log_section(title: &str, entries: &[&Entry]) {
    crate::log_blank();
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    if entries.is_empty() {
        log::info!("  (empty)");
    }
    for entry in entries {
        log_entry_line(entry);
    }
}

/// Print the index page sections in the order the site shows them.
pub(crate) fn run_home(shelf: &Shelf) -> Result<(), CliError> {
    let config = &shelf.catalog.config;
    let visible = shelf.visible();

    log::info!(
        "{}",
        config.title.if_supports_color(Stdout, |t| t.bold()),
    );

    if config.show_featured {
        let main = select_main_entry(&shelf.catalog.entries, config)?;
        let main: Vec<&Entry> = main
            .into_iter()
            .filter(|e| shelf.visibility.is_visible(e))
            .collect();
        log_section("Featured", &main);
    }

    let carousel = popular(visible.iter().copied(), config.featured_carousel_size);
    log_section("Popular", &carousel);
    log_section(
        "New",
        &new_arrivals(visible.iter().copied(), config.recent_games_count),
    );
    log_section(
        "Recently added",
        &recent(visible.iter().copied(), config.recent_games_count),
    );

    if config.show_categories {
        for section in category_sections(&visible, &shelf.catalog.labels, config.games_per_index) {
            let title = format!(
                "{} ({} of {}, {})",
                section.category.label,
                section.entries.len(),
                section.total,
                category_path(&section.category.slug),
            );
            log_section(&title, &section.entries);
        }
    }
    Ok(())
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::related_entries;

use super::{Shelf, log_entry_line};
use crate::CliError;

pub(crate) fn run_related(shelf: &Shelf, slug: &str, limit: Option<usize>) -> Result<(), CliError> {
    let visible = shelf.visible();
    let target = visible
        .iter()
        .find(|e| e.slug == slug)
        .copied()
        .ok_or_else(|| CliError::unknown_game(slug))?;

    let limit = limit.unwrap_or(shelf.catalog.config.related_limit);
    let related = related_entries(visible.iter().copied(), target, limit);

    log::info!(
        "{} {}",
        "Related to".if_supports_color(Stdout, |t| t.bold()),
        target.title.if_supports_color(Stdout, |t| t.green()),
    );
    if related.is_empty() {
        log::info!("  (no other visible games)");
    }
    for entry in &related {
        log_entry_line(entry);
    }
    Ok(())
}

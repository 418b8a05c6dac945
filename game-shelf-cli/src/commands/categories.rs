use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::{category_path, count_by_category, derive_categories};

use super::Shelf;
use crate::CliError;

pub(crate) fn run_categories(shelf: &Shelf) -> Result<(), CliError> {
    let visible = shelf.visible();
    let categories = derive_categories(visible.iter().copied(), &shelf.catalog.labels);
    let counts = count_by_category(visible.iter().copied());

    if categories.is_empty() {
        log::warn!("No visible games in {}", shelf.root.display());
        return Ok(());
    }

    log::info!(
        "{}",
        "Categories".if_supports_color(Stdout, |t| t.bold()),
    );
    for category in &categories {
        let count = counts.get(&category.slug).copied().unwrap_or(0);
        log::info!(
            "  {:<16} {:<28} {:>4}  {}",
            category.slug,
            category.label,
            count,
            category_path(&category.slug).if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}

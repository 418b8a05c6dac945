use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::{filter_by_category, paginate, sort_for_display};

use super::{Shelf, log_entry_line};
use crate::CliError;

pub(crate) fn run_list(shelf: &Shelf, category: Option<&str>, page: usize) -> Result<(), CliError> {
    let visible = shelf.visible();
    let ordered = match category {
        Some(c) => filter_by_category(visible.iter().copied(), c),
        None => sort_for_display(visible.iter().copied()),
    };

    let heading = match category {
        Some(c) => shelf.catalog.labels.label(c),
        None => "All Games".to_string(),
    };

    let page = paginate(&ordered, shelf.catalog.config.games_per_page, page);
    log::info!(
        "{} {}",
        heading.if_supports_color(Stdout, |t| t.bold()),
        format!(
            "(page {}/{}, {} games)",
            page.number, page.total_pages, page.total_items
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );

    if page.items.is_empty() {
        log::info!("  (nothing to show)");
        return Ok(());
    }
    for entry in &page.items {
        log_entry_line(entry);
    }
    if page.has_next() {
        crate::log_blank();
        log::info!("  More: --page {}", page.number + 1);
    }
    Ok(())
}

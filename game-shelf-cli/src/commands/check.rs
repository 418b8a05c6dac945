use std::collections::HashMap;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::{date_anomalies, select_main_entry};

use super::Shelf;
use crate::CliError;

/// What an unparsable date does to an entry in the current mode.
fn anomaly_effect(preview: bool) -> &'static str {
    if preview {
        "shown in this preview, hidden in production"
    } else {
        "hidden in production"
    }
}

/// Validate the catalog.
///
/// Malformed dates and shared slugs are warnings. A featured-flag violation
/// fails the command.
pub(crate) fn run_check(shelf: &Shelf) -> Result<(), CliError> {
    let entries = &shelf.catalog.entries;
    let mut warnings = 0usize;

    for anomaly in date_anomalies(entries) {
        warnings += 1;
        log::warn!(
            "'{}' ({}): unparsable publish date '{}', {}",
            anomaly.title,
            anomaly.id,
            anomaly.raw,
            anomaly_effect(shelf.visibility.preview),
        );
    }

    let mut slugs: HashMap<&str, &str> = HashMap::new();
    for entry in entries {
        if let Some(other) = slugs.insert(entry.slug.as_str(), entry.id.as_str()) {
            warnings += 1;
            log::warn!(
                "Slug '{}' is used by both '{}' and '{}'",
                entry.slug,
                other,
                entry.id,
            );
        }
    }

    let main = select_main_entry(entries, &shelf.catalog.config)
        .map_err(|e| CliError::check(format!("Catalog check failed: {e}")))?;

    let visible = shelf.visible().len();
    let drafts = entries.iter().filter(|e| e.draft).count();
    log::info!(
        "{} {} entries, {} visible, {} drafts, featured: {}",
        "Catalog OK:".if_supports_color(Stdout, |t| t.green()),
        entries.len(),
        visible,
        drafts,
        main.map(|e| e.title.as_str()).unwrap_or("none"),
    );
    if warnings > 0 {
        log::info!("  {} warning(s)", warnings);
    }
    Ok(())
}

pub(crate) mod categories;
pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod featured;
pub(crate) mod home;
pub(crate) mod list;
pub(crate) mod related;

use std::path::PathBuf;

use chrono::Utc;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::{Catalog, load_catalog};
use game_shelf_core::{Entry, Visibility, entry_path};

use crate::CliError;
use crate::cli_types::Cli;

/// A loaded catalog plus the visibility settings of this run.
pub(crate) struct Shelf {
    pub root: PathBuf,
    pub catalog: Catalog,
    pub visibility: Visibility,
}

impl Shelf {
    pub(crate) fn load(cli: &Cli) -> Result<Self, CliError> {
        let catalog = load_catalog(&cli.root, cli.config.as_deref())?;

        let now = cli.now.unwrap_or_else(Utc::now);
        let visibility = Visibility::new(now, cli.preview);
        log::debug!(
            "Catalog {}: {} entries, preview={}, now={}",
            cli.root.display(),
            catalog.entries.len(),
            visibility.preview,
            visibility.now.to_rfc3339(),
        );

        Ok(Self {
            root: cli.root.clone(),
            catalog,
            visibility,
        })
    }

    /// Entries visible in this run, in catalog order.
    pub(crate) fn visible(&self) -> Vec<&Entry> {
        self.visibility.filter(&self.catalog.entries)
    }
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

/// One listing line: date, title, category, path.
pub(crate) fn log_entry_line(entry: &Entry) {
    let date = entry
        .published_at()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".to_string());
    let date = format!("{date:<10}");
    let title = format!("{:<32}", truncate_str(&entry.title, 32));
    log::info!(
        "  {}  {}  {:<12}  {}",
        date.if_supports_color(Stdout, |t| t.dimmed()),
        title.if_supports_color(Stdout, |t| t.bold()),
        entry.category_slug(),
        entry_path(entry).if_supports_color(Stdout, |t| t.cyan()),
    );
}

//! The catalog entry: one game as handed over by the loader.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One game in the catalog.
///
/// Entries are built once per catalog build and never mutated afterwards.
/// `publish_at` is kept as the raw text from the source file so that a
/// malformed value reaches the visibility rules instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier. The loader fills it from the file stem when absent.
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Route segment used by [`crate::routes::entry_path`].
    pub slug: String,
    /// Free-form category; compare through [`Entry::category_slug`].
    pub category: String,
    #[serde(default, alias = "pub_datetime", alias = "pubDatetime")]
    pub publish_at: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// The main-entry flag. Exclusive across the catalog.
    #[serde(default, alias = "is_main_game", alias = "isMainGame")]
    pub featured: bool,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "gameUrl")]
    pub game_url: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    /// Star rating, 0 to 5.
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub new: bool,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_publish_at(mut self, publish_at: impl Into<String>) -> Self {
        self.publish_at = Some(publish_at.into());
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_popular(mut self, popular: bool) -> Self {
        self.popular = popular;
        self
    }

    pub fn with_new(mut self, new: bool) -> Self {
        self.new = new;
        self
    }

    /// Lower-cased category used for grouping and comparison.
    pub fn category_slug(&self) -> String {
        normalize_category(&self.category)
    }

    /// Whether this entry belongs to `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category_slug() == normalize_category(category)
    }

    /// Parsed publish time, or `None` when absent or malformed.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_at.as_deref().and_then(parse_publish_at)
    }

    /// True when `publish_at` is present but cannot be parsed.
    pub fn has_malformed_date(&self) -> bool {
        self.publish_at.is_some() && self.published_at().is_none()
    }
}

/// Normalize a category string for comparison and storage.
pub fn normalize_category(category: &str) -> String {
    category.to_lowercase()
}

/// Parse a publish timestamp.
///
/// Accepts RFC 3339, a naive date-time (`T` or space separated, read as UTC),
/// or a bare date (midnight UTC).
pub fn parse_publish_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

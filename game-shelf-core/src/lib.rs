//! Curation rules for a game catalog.
//!
//! Given the entries produced by a loader, this crate decides which are
//! visible, how they group into categories, how lists are ordered, which entry
//! is the featured one, and which entries are related to a given one.
//! Everything here is a pure function over borrowed entries; no I/O.

pub mod category;
pub mod config;
pub mod entry;
pub mod error;
pub mod featured;
pub mod ordering;
pub mod related;
pub mod routes;
pub mod sections;
pub mod visibility;

pub use category::{
    CategoryLabel, CategoryLabels, count_by_category, derive_categories, filter_by_category,
    format_category_label,
};
pub use config::SiteConfig;
pub use entry::{Entry, normalize_category, parse_publish_at};
pub use error::ConfigurationError;
pub use featured::select_main_entry;
pub use ordering::{display_order, sort_for_display};
pub use related::{DEFAULT_RELATED_LIMIT, related_entries};
pub use routes::{category_path, entry_path};
pub use sections::{CategorySection, Page, category_sections, new_arrivals, paginate, popular, recent};
pub use visibility::{DateAnomaly, Visibility, date_anomalies, is_visible};

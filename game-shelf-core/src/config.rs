//! Site-wide configuration read by the curation operations.
//!
//! The loader fills this from `site.toml`; operations take it by reference
//! rather than reading any global state.
//!
//! ```
//! use game_shelf_core::SiteConfig;
//!
//! let config = SiteConfig::default().single_featured_mode(true);
//! assert!(config.single_featured_mode);
//! assert_eq!(config.games_per_page, 12);
//! ```

use serde::{Deserialize, Serialize};

/// Site-wide toggles, passed explicitly to the operations that read them.
///
/// Every field has a default, so a partial `site.toml` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Require exactly one featured entry instead of at most one.
    pub single_featured_mode: bool,
    pub games_per_page: usize,
    /// Entries per category section on the index page.
    pub games_per_index: usize,
    pub recent_games_count: usize,
    pub featured_carousel_size: usize,
    pub related_limit: usize,
    pub show_categories: bool,
    pub show_featured: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Game Shelf".to_string(),
            single_featured_mode: false,
            games_per_page: 12,
            games_per_index: 8,
            recent_games_count: 8,
            featured_carousel_size: 5,
            related_limit: crate::related::DEFAULT_RELATED_LIMIT,
            show_categories: true,
            show_featured: true,
        }
    }
}

impl SiteConfig {
    pub fn single_featured_mode(mut self, enabled: bool) -> Self {
        self.single_featured_mode = enabled;
        self
    }
}

//! Site paths for entry pages and category listings.
//!
//! Category segments are normalized, so every spelling of a category links
//! to the same listing.
//!
//! ```
//! use game_shelf_core::{Entry, category_path, entry_path};
//!
//! let entry = Entry::new("agent-j", "Agent J", "agent-j", "Action");
//! assert_eq!(entry_path(&entry), "/game/agent-j/");
//! assert_eq!(category_path("ACTION"), "/category/action/");
//! ```

use crate::entry::{Entry, normalize_category};

/// Site path of an entry page, e.g. `/game/agent-j/`.
pub fn entry_path(entry: &Entry) -> String {
    format!("/game/{}/", entry.slug)
}

/// Site path of a category listing, e.g. `/category/action/`.
pub fn category_path(category: &str) -> String {
    format!("/category/{}/", normalize_category(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let e = Entry::new("agent-j.md", "Agent J", "agent-j", "Action");
        assert_eq!(entry_path(&e), "/game/agent-j/");
        assert_eq!(category_path(&e.category), "/category/action/");
    }
}

//! Catalog loading for game-shelf: entry YAML files, category labels, and
//! `site.toml`.
//!
//! This crate plays the loader role for `game-shelf-core`. It guarantees that
//! every entry has an id, a title, a slug, and a category, and hands the
//! entries over untouched otherwise.

pub mod error;
pub mod settings;
pub mod yaml;

pub use error::CatalogError;
pub use settings::{config_to_string, load_site_config, resolve_site_config, user_config_path};
pub use yaml::{Catalog, load_catalog, load_entries, load_labels};

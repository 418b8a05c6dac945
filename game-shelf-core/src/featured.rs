//! The main (featured) entry gate.
//!
//! Runs once per build. A violation is reported as an error for the caller
//! to abort on; the catalog is never coerced into a valid shape.

use crate::config::SiteConfig;
use crate::entry::Entry;
use crate::error::ConfigurationError;

/// Select the featured entry, enforcing the exclusivity invariant.
///
/// With `single_featured_mode` exactly one featured entry is required.
/// Without it, zero is fine and more than one is still an error.
pub fn select_main_entry<'a>(
    entries: &'a [Entry],
    config: &SiteConfig,
) -> Result<Option<&'a Entry>, ConfigurationError> {
    let featured: Vec<&Entry> = entries.iter().filter(|e| e.featured).collect();

    match (featured.as_slice(), config.single_featured_mode) {
        ([], true) => Err(ConfigurationError::MissingFeatured),
        ([], false) => Ok(None),
        ([main], _) => Ok(Some(*main)),
        (many, single) => {
            let count = many.len();
            let titles = many.iter().map(|e| e.title.clone()).collect();
            if single {
                Err(ConfigurationError::AmbiguousFeatured { count, titles })
            } else {
                Err(ConfigurationError::FeaturedNotExclusive { count, titles })
            }
        }
    }
}

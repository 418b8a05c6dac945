use thiserror::Error;

/// A catalog authoring mistake around the featured flag.
///
/// These abort the build; nothing in the core recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Single-featured mode is on but no entry carries the flag.
    #[error(
        "single-featured mode requires exactly one featured entry, found none; \
         set `featured: true` on one entry"
    )]
    MissingFeatured,

    /// Single-featured mode is on and several entries carry the flag.
    #[error(
        "single-featured mode requires exactly one featured entry, found {count}: {}",
        .titles.join(", ")
    )]
    AmbiguousFeatured { count: usize, titles: Vec<String> },

    /// The flag is exclusive even when single-featured mode is off.
    #[error(
        "at most one entry may be featured, found {count}: {}",
        .titles.join(", ")
    )]
    FeaturedNotExclusive { count: usize, titles: Vec<String> },
}

impl ConfigurationError {
    /// Titles of the offending entries, in catalog order.
    pub fn titles(&self) -> &[String] {
        match self {
            Self::MissingFeatured => &[],
            Self::AmbiguousFeatured { titles, .. } | Self::FeaturedNotExclusive { titles, .. } => {
                titles
            }
        }
    }
}

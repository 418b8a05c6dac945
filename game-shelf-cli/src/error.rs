use thiserror::Error;

use game_shelf_catalog::CatalogError;
use game_shelf_core::ConfigurationError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog could not be loaded
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Featured-flag rules violated
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// No entry with the requested slug
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Validation found problems
    #[error("{0}")]
    Check(String),
}

impl CliError {
    pub(crate) fn unknown_game(msg: impl Into<String>) -> Self {
        Self::UnknownGame(msg.into())
    }

    pub(crate) fn check(msg: impl Into<String>) -> Self {
        Self::Check(msg.into())
    }
}

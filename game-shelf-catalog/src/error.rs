use thiserror::Error;

/// Errors raised while loading a catalog directory.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Directory not found: {0}")]
    DirNotFound(String),

    /// A required entry field is empty.
    #[error("{path}: required field `{field}` is empty")]
    MissingField { path: String, field: &'static str },

    #[error("Duplicate entry id '{id}' in {path} (first seen in {first})")]
    DuplicateId {
        id: String,
        path: String,
        first: String,
    },
}

impl CatalogError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

//! YAML loading for entries and category labels.
//!
//! Loads one game per file from `games/` and the slug-to-label mapping from
//! `labels.yaml`. Only field presence is checked here; date semantics are
//! left to the visibility rules.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use game_shelf_core::{CategoryLabels, Entry, SiteConfig};

use crate::error::CatalogError;
use crate::settings::resolve_site_config;

/// Everything a build needs, loaded from one catalog directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<Entry>,
    pub labels: CategoryLabels,
    pub config: SiteConfig,
    /// The `site.toml` the config came from; `None` means built-in defaults.
    pub config_source: Option<PathBuf>,
}

/// Load all entries from the `.yaml`/`.yml` files in `dir`, sorted by file name.
///
/// An entry without an `id` takes its file stem. A missing directory yields
/// an empty list.
pub fn load_entries(dir: &Path) -> Result<Vec<Entry>, CatalogError> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in yaml_files(dir)? {
        let contents = std::fs::read_to_string(&path).map_err(|e| CatalogError::io(&path, e))?;
        let mut entry: Entry = serde_yml::from_str(&contents).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        if entry.id.trim().is_empty() {
            entry.id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        validate(&entry, &path)?;

        if let Some(first) = seen.get(&entry.id) {
            return Err(CatalogError::DuplicateId {
                id: entry.id,
                path: path.display().to_string(),
                first: first.display().to_string(),
            });
        }
        seen.insert(entry.id.clone(), path.clone());

        log::debug!("Loaded entry '{}' from {}", entry.id, path.display());
        entries.push(entry);
    }

    Ok(entries)
}

/// Load the category label mapping. A missing file yields an empty mapping.
///
/// ```yaml
/// action: Action Games
/// io: IO Games
/// ```
pub fn load_labels(path: &Path) -> Result<CategoryLabels, CatalogError> {
    if !path.exists() {
        return Ok(CategoryLabels::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    if contents.trim().is_empty() {
        return Ok(CategoryLabels::new());
    }
    serde_yml::from_str(&contents).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a catalog from the standard directory layout.
///
/// Expected structure:
/// ```text
/// catalog_dir/
///   site.toml
///   labels.yaml
///   games/
///     agent-j.yaml
///     ...
/// ```
///
/// `config` overrides the site configuration; when given, `site.toml` in
/// the catalog directory is never read. See [`resolve_site_config`].
pub fn load_catalog(catalog_dir: &Path, config: Option<&Path>) -> Result<Catalog, CatalogError> {
    if !catalog_dir.is_dir() {
        return Err(CatalogError::DirNotFound(catalog_dir.display().to_string()));
    }
    let entries = load_entries(&catalog_dir.join("games"))?;
    let labels = load_labels(&catalog_dir.join("labels.yaml"))?;
    let (config, config_source) = resolve_site_config(config, catalog_dir)?;
    log::debug!(
        "Loaded {} entries and {} labels from {}",
        entries.len(),
        labels.len(),
        catalog_dir.display(),
    );
    Ok(Catalog {
        entries,
        labels,
        config,
        config_source,
    })
}

fn validate(entry: &Entry, path: &Path) -> Result<(), CatalogError> {
    let required = [
        ("title", &entry.title),
        ("slug", &entry.slug),
        ("category", &entry.category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField {
                path: path.display().to_string(),
                field,
            });
        }
    }
    Ok(())
}

/// YAML files directly inside `dir`, sorted by file name.
fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(CatalogError::DirNotFound(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| CatalogError::io(dir, e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    files.sort();
    Ok(files)
}

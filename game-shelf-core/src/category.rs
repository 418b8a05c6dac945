//! Category derivation and display labels.

use std::collections::hash_map::Entry as Slot;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entry::{Entry, normalize_category};
use crate::ordering::sort_for_display;

/// A category slug paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLabel {
    pub slug: String,
    pub label: String,
}

/// Display labels keyed by category slug, loaded from the site's text file.
///
/// Keys are normalized on insert and on lookup, so `"Action"` and `"action"`
/// address the same label. When a file spells one slug several ways, the
/// first spelling in document order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLabels {
    labels: HashMap<String, String>,
}

impl FromIterator<(String, String)> for CategoryLabels {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut labels = Self::default();
        for (slug, label) in iter {
            labels.insert(slug, label);
        }
        labels
    }
}

impl<'de> Deserialize<'de> for CategoryLabels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LabelsVisitor)
    }
}

struct LabelsVisitor;

impl<'de> Visitor<'de> for LabelsVisitor {
    type Value = CategoryLabels;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category slug to label")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut labels = CategoryLabels::new();
        while let Some((slug, label)) = map.next_entry::<String, String>()? {
            if !labels.insert_first(&slug, label) {
                log::warn!(
                    "Duplicate category label key '{}' (same slug as an earlier key); keeping the first",
                    slug,
                );
            }
        }
        Ok(labels)
    }
}

impl CategoryLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl AsRef<str>, label: impl Into<String>) {
        self.labels
            .insert(normalize_category(slug.as_ref()), label.into());
    }

    /// Insert unless the normalized slug already has a label.
    ///
    /// Returns `false` when the slug was taken and nothing changed.
    pub fn insert_first(&mut self, slug: impl AsRef<str>, label: impl Into<String>) -> bool {
        match self.labels.entry(normalize_category(slug.as_ref())) {
            Slot::Occupied(_) => false,
            Slot::Vacant(vacant) => {
                vacant.insert(label.into());
                true
            }
        }
    }

    /// The configured label, if any, without fallback.
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.labels
            .get(&normalize_category(slug))
            .map(String::as_str)
            .filter(|l| !l.trim().is_empty())
    }

    /// Human-readable label for a category. Never empty.
    pub fn label(&self, slug: &str) -> String {
        match self.get(slug) {
            Some(label) => label.to_string(),
            None => format_category_label(slug),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Default label for a slug: `"action"` becomes `"Action Games"`.
pub fn format_category_label(slug: &str) -> String {
    let slug = normalize_category(slug.trim());
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => format!("{}{} Games", first.to_uppercase(), chars.as_str()),
        None => "Games".to_string(),
    }
}

/// Distinct normalized categories, sorted by slug, with their labels.
pub fn derive_categories<'a, I>(entries: I, labels: &CategoryLabels) -> Vec<CategoryLabel>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let slugs: BTreeSet<String> = entries.into_iter().map(Entry::category_slug).collect();
    slugs
        .into_iter()
        .map(|slug| CategoryLabel {
            label: labels.label(&slug),
            slug,
        })
        .collect()
}

/// Entries in `category` (case-insensitive), in display order.
pub fn filter_by_category<'a, I>(entries: I, category: &str) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    sort_for_display(entries.into_iter().filter(|e| e.in_category(category)))
}

/// Number of entries per normalized category.
pub fn count_by_category<'a, I>(entries: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.category_slug()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;

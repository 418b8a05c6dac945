//! Homepage building blocks: recent, flagged, per-category and paged lists.
//!
//! All helpers order through [`sort_for_display`] and leave visibility to the
//! caller, like the rest of the crate.

use crate::category::{CategoryLabel, CategoryLabels, derive_categories, filter_by_category};
use crate::entry::Entry;
use crate::ordering::sort_for_display;

/// The newest `limit` entries.
pub fn recent<'a, I>(entries: I, limit: usize) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut sorted = sort_for_display(entries);
    sorted.truncate(limit);
    sorted
}

/// Entries flagged `popular`, newest first.
pub fn popular<'a, I>(entries: I, limit: usize) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    recent(entries.into_iter().filter(|e| e.popular), limit)
}

/// Entries flagged `new`, newest first.
pub fn new_arrivals<'a, I>(entries: I, limit: usize) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    recent(entries.into_iter().filter(|e| e.new), limit)
}

/// One category block on the index page.
#[derive(Debug, Clone)]
pub struct CategorySection<'a> {
    pub category: CategoryLabel,
    pub entries: Vec<&'a Entry>,
    /// Entries in the category before truncation.
    pub total: usize,
}

/// A section per category, in slug order, each capped at `per_category`.
pub fn category_sections<'a>(
    entries: &[&'a Entry],
    labels: &CategoryLabels,
    per_category: usize,
) -> Vec<CategorySection<'a>> {
    derive_categories(entries.iter().copied(), labels)
        .into_iter()
        .map(|category| {
            let mut members = filter_by_category(entries.iter().copied(), &category.slug);
            let total = members.len();
            members.truncate(per_category);
            CategorySection {
                category,
                entries: members,
                total,
            }
        })
        .collect()
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Entry>,
    /// 1-based.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice an already ordered list into page `page` (1-based).
///
/// An empty list still has one (empty) page. A page past the end yields no
/// items. `per_page` of zero is treated as one.
pub fn paginate<'a>(entries: &[&'a Entry], per_page: usize, page: usize) -> Page<'a> {
    let per_page = per_page.max(1);
    let total_items = entries.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let number = page.max(1);
    let start = (number - 1).saturating_mul(per_page);
    let items = entries
        .iter()
        .skip(start)
        .take(per_page)
        .copied()
        .collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
#[path = "tests/sections_tests.rs"]
mod tests;

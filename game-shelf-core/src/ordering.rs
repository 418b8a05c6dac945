//! Display order for entry lists: newest first, undated last.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::entry::Entry;

/// Compare two entries for display.
///
/// Dated entries come first, newest to oldest. Entries without a usable
/// publish date follow. Remaining ties break on `id` ascending.
pub fn display_order(a: &Entry, b: &Entry) -> Ordering {
    compare_keyed(&(a.published_at(), a), &(b.published_at(), b))
}

/// Sort entries for display. Stable, and does not filter.
pub fn sort_for_display<'a, I>(entries: I) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    // Parse each date once rather than once per comparison.
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Entry)> = entries
        .into_iter()
        .map(|e| (e.published_at(), e))
        .collect();
    keyed.sort_by(compare_keyed);
    keyed.into_iter().map(|(_, e)| e).collect()
}

fn compare_keyed(
    (da, a): &(Option<DateTime<Utc>>, &Entry),
    (db, b): &(Option<DateTime<Utc>>, &Entry),
) -> Ordering {
    match (da, db) {
        (Some(da), Some(db)) => db.cmp(da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id.cmp(&b.id))
}

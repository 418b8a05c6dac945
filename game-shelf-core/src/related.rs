//! "More like this" recommendations for an entry page.

use crate::entry::Entry;
use crate::ordering::sort_for_display;

/// Number of related entries shown when the caller has no preference.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Up to `limit` entries related to `target`.
///
/// Same-category entries come first, in display order. If there are not
/// enough, the rest of the catalog backfills in display order. `target`
/// itself (matched by id) is never included. Visibility is not applied here;
/// pass an already filtered catalog when related items should honor it.
pub fn related_entries<'a, I>(catalog: I, target: &Entry, limit: usize) -> Vec<&'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let category = target.category_slug();
    let candidates = sort_for_display(catalog.into_iter().filter(|e| e.id != target.id));

    let (same, other): (Vec<&Entry>, Vec<&Entry>) = candidates
        .into_iter()
        .partition(|e| e.category_slug() == category);

    same.into_iter().chain(other).take(limit).collect()
}

//! Publication rules: drafts, scheduled entries, and preview mode.
//!
//! An entry whose publish time is missing or malformed is a data anomaly.
//! It stays visible while authoring (preview) so it can be spotted and
//! fixed, and is hidden in production so bad data never reaches readers.

use chrono::{DateTime, Utc};

use crate::entry::Entry;

/// Decide whether `entry` should be shown at `now`.
pub fn is_visible(entry: &Entry, now: DateTime<Utc>, preview: bool) -> bool {
    if entry.draft {
        return false;
    }

    match entry.published_at() {
        Some(publish_at) => preview || now >= publish_at,
        None => {
            if preview {
                if let Some(raw) = entry.publish_at.as_deref() {
                    log::warn!(
                        "Entry '{}' has an unparsable publish date '{}'; shown in preview only",
                        entry.id,
                        raw,
                    );
                }
            }
            preview
        }
    }
}

/// The inputs of a visibility decision, captured once per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub now: DateTime<Utc>,
    pub preview: bool,
}

impl Visibility {
    pub fn new(now: DateTime<Utc>, preview: bool) -> Self {
        Self { now, preview }
    }

    pub fn production(now: DateTime<Utc>) -> Self {
        Self::new(now, false)
    }

    pub fn preview(now: DateTime<Utc>) -> Self {
        Self::new(now, true)
    }

    pub fn is_visible(&self, entry: &Entry) -> bool {
        is_visible(entry, self.now, self.preview)
    }

    /// Keep the visible entries, in input order.
    pub fn filter<'a, I>(&self, entries: I) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries.into_iter().filter(|e| self.is_visible(e)).collect()
    }
}

/// An entry whose `publish_at` is present but cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAnomaly {
    pub id: String,
    pub title: String,
    pub raw: String,
}

/// List every entry with a malformed publish date, in input order.
pub fn date_anomalies<'a, I>(entries: I) -> Vec<DateAnomaly>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .filter(|e| e.has_malformed_date())
        .map(|e| DateAnomaly {
            id: e.id.clone(),
            title: e.title.clone(),
            raw: e.publish_at.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;

use chrono::{DateTime, TimeZone, Utc};
use game_shelf_core::{
    CategoryLabels, Entry, SiteConfig, Visibility, derive_categories, filter_by_category,
    related_entries, select_main_entry, sort_for_display,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn game(id: &str, category: &str, publish_at: &str) -> Entry {
    Entry::new(id, format!("Title {id}"), id, category).with_publish_at(publish_at)
}

/// 5 action entries (one scheduled, one draft) and 3 puzzle entries.
fn catalog() -> Vec<Entry> {
    vec![
        game("action-1", "Action", "2024-03-01"),
        game("action-2", "action", "2024-09-01"),
        game("action-3", "action", "2024-06-01").with_featured(true),
        game("action-future", "action", "2030-01-01"),
        game("action-draft", "action", "2024-01-01").with_draft(true),
        game("puzzle-1", "Puzzle", "2024-02-01"),
        game("puzzle-2", "puzzle", "2024-04-01"),
        game("puzzle-3", "puzzle", "2024-05-01"),
    ]
}

fn ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn production_build_end_to_end() {
    let entries = catalog();
    let visible = Visibility::production(now()).filter(&entries);
    assert_eq!(visible.len(), 6);

    let categories = derive_categories(visible.iter().copied(), &CategoryLabels::new());
    let slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["action", "puzzle"]);

    let action = filter_by_category(visible.iter().copied(), "action");
    assert_eq!(ids(&action), ["action-2", "action-3", "action-1"]);

    let main = select_main_entry(&entries, &SiteConfig::default().single_featured_mode(true))
        .expect("one featured entry");
    assert_eq!(main.map(|e| e.id.as_str()), Some("action-3"));

    let target = visible.iter().find(|e| e.id == "action-1").unwrap();
    let related = related_entries(visible.iter().copied(), target, 4);
    assert_eq!(
        ids(&related),
        ["action-2", "action-3", "puzzle-3", "puzzle-2"]
    );
}

#[test]
fn preview_build_shows_scheduled_but_not_drafts() {
    let entries = catalog();
    let visible = Visibility::preview(now()).filter(&entries);
    assert_eq!(visible.len(), 7);
    assert!(visible.iter().all(|e| !e.draft));

    let action = filter_by_category(visible.iter().copied(), "ACTION");
    assert_eq!(action[0].id, "action-future");
}

#[test]
fn related_backfill_fills_to_limit() {
    let entries = catalog();
    let visible = Visibility::production(now()).filter(&entries);
    let target = visible.iter().find(|e| e.id == "puzzle-1").unwrap();

    let related = related_entries(visible.iter().copied(), target, 4);
    assert_eq!(related.len(), 4);
    assert_eq!(
        ids(&related),
        ["puzzle-3", "puzzle-2", "action-2", "action-3"]
    );
    assert!(related.iter().all(|e| e.id != target.id));
}

#[test]
fn operations_share_a_snapshot_across_threads() {
    let entries = catalog();
    let labels = CategoryLabels::new();
    let expected = ids(&sort_for_display(&entries));
    let (entries, labels) = (&entries, &labels);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    let sorted = ids(&sort_for_display(entries));
                    let categories = derive_categories(entries, labels);
                    (sorted, categories.len())
                })
            })
            .collect();
        for handle in handles {
            let (sorted, categories) = handle.join().unwrap();
            assert_eq!(sorted, expected);
            assert_eq!(categories, 2);
        }
    });
}

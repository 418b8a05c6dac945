use game_shelf_catalog::{CatalogError, load_catalog, load_entries, load_labels};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn games_dir(tmp: &TempDir) -> std::path::PathBuf {
    let dir = tmp.path().join("games");
    fs::create_dir(&dir).unwrap();
    dir
}

#[test]
fn load_entry_from_yaml() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);

    write_file(
        &games,
        "agent-j.yaml",
        r#"
id: agent-j
title: "Agent J"
slug: agent-j
category: Action
description: "Stealth platformer"
game_url: "https://example.com/play/agent-j"
developer: Gamepix
rating: 4.5
popular: true
publish_at: "2024-03-01T10:00:00Z"
is_main_game: true
"#,
    );

    let entries = load_entries(&games).unwrap();
    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.id, "agent-j");
    assert_eq!(e.title, "Agent J");
    assert_eq!(e.category_slug(), "action");
    assert_eq!(e.rating, Some(4.5));
    assert!(e.popular);
    assert!(!e.new);
    assert!(!e.draft);
    assert!(e.featured);
    assert!(e.published_at().is_some());
}

#[test]
fn id_defaults_to_file_stem_and_files_load_in_name_order() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);

    write_file(&games, "b-game.yml", "title: B\nslug: b\ncategory: puzzle\n");
    write_file(&games, "a-game.yaml", "title: A\nslug: a\ncategory: action\n");
    write_file(&games, "notes.txt", "not an entry");

    let entries = load_entries(&games).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a-game", "b-game"]);
}

#[test]
fn malformed_dates_still_load() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);

    write_file(
        &games,
        "soon.yaml",
        "title: Soon\nslug: soon\ncategory: action\npublish_at: someday\n",
    );
    write_file(
        &games,
        "plain.yaml",
        "title: Plain\nslug: plain\ncategory: action\npublish_at: 2024-01-15\n",
    );

    let entries = load_entries(&games).unwrap();
    let plain = entries.iter().find(|e| e.id == "plain").unwrap();
    assert!(plain.published_at().is_some());
    let soon = entries.iter().find(|e| e.id == "soon").unwrap();
    assert_eq!(soon.publish_at.as_deref(), Some("someday"));
    assert!(soon.has_malformed_date());
}

#[test]
fn empty_required_field_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);
    write_file(&games, "x.yaml", "title: X\nslug: x\ncategory: \"  \"\n");

    match load_entries(&games) {
        Err(CatalogError::MissingField { field, .. }) => assert_eq!(field, "category"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);
    write_file(&games, "one.yaml", "id: same\ntitle: One\nslug: one\ncategory: a\n");
    write_file(&games, "two.yaml", "id: same\ntitle: Two\nslug: two\ncategory: a\n");

    let err = load_entries(&games).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id, .. } if id == "same"));
}

#[test]
fn broken_yaml_reports_path() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);
    write_file(&games, "bad.yaml", "title: [unterminated\n");

    let err = load_entries(&games).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn missing_dir_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let result = load_entries(&tmp.path().join("nonexistent")).unwrap();
    assert!(result.is_empty());
}

#[test]
fn labels_load_and_normalize() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "labels.yaml",
        "Action: Action Games\nio: IO Games\n",
    );

    let labels = load_labels(&tmp.path().join("labels.yaml")).unwrap();
    assert_eq!(labels.label("action"), "Action Games");
    assert_eq!(labels.label("IO"), "IO Games");
    assert_eq!(labels.label("racing"), "Racing Games");

    let missing = load_labels(&tmp.path().join("missing.yaml")).unwrap();
    assert!(missing.is_empty());
}

#[test]
fn camel_case_keys_load() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);
    write_file(
        &games,
        "agent-j.yaml",
        r#"
title: "Agent J"
slug: agent-j
category: Action
pubDatetime: "2024-03-01T10:00:00Z"
isMainGame: true
gameUrl: "https://example.com/play/agent-j"
"#,
    );

    let entries = load_entries(&games).unwrap();
    let e = &entries[0];
    assert_eq!(e.publish_at.as_deref(), Some("2024-03-01T10:00:00Z"));
    assert!(e.published_at().is_some());
    assert!(e.featured);
    assert_eq!(e.game_url.as_deref(), Some("https://example.com/play/agent-j"));
}

#[test]
fn case_colliding_label_keys_keep_the_first() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "labels.yaml",
        "Action: Upper\naction: Lower\nACTION: Caps\nAcTion: Mixed\n",
    );

    for _ in 0..30 {
        let labels = load_labels(&tmp.path().join("labels.yaml")).unwrap();
        assert_eq!(labels.label("action"), "Upper");
        assert_eq!(labels.len(), 1);
    }
}

#[test]
fn load_full_catalog() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);
    write_file(&games, "a.yaml", "title: A\nslug: a\ncategory: action\n");
    write_file(tmp.path(), "labels.yaml", "action: Fast Stuff\n");
    write_file(
        tmp.path(),
        "site.toml",
        "title = \"Arcade\"\nsingle_featured_mode = true\n",
    );

    let catalog = load_catalog(tmp.path(), None).unwrap();
    assert_eq!(catalog.entries.len(), 1);
    assert_eq!(catalog.labels.label("action"), "Fast Stuff");
    assert_eq!(catalog.config.title, "Arcade");
    assert!(catalog.config.single_featured_mode);
    assert_eq!(catalog.config.games_per_page, 12);
    assert_eq!(catalog.config_source, Some(tmp.path().join("site.toml")));
}

#[test]
fn explicit_config_skips_catalog_site_toml() {
    let tmp = TempDir::new().unwrap();
    let games = games_dir(&tmp);
    write_file(&games, "a.yaml", "title: A\nslug: a\ncategory: action\n");
    write_file(tmp.path(), "site.toml", "title = [broken\n");
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "title = \"Override\"\n").unwrap();

    let catalog = load_catalog(tmp.path(), Some(&explicit)).unwrap();
    assert_eq!(catalog.config.title, "Override");
    assert_eq!(catalog.config_source.as_deref(), Some(explicit.as_path()));
    assert_eq!(catalog.entries.len(), 1);

    let err = load_catalog(tmp.path(), None).unwrap_err();
    assert!(matches!(err, CatalogError::Config { .. }));
}

#[test]
fn load_catalog_requires_directory() {
    let tmp = TempDir::new().unwrap();
    let err = load_catalog(&tmp.path().join("nope"), None).unwrap_err();
    assert!(matches!(err, CatalogError::DirNotFound(_)));
}

use couplecard_core::{JsonPrefsStore, PrefsError, WidgetPrefs, WidgetState};
use std::fs;

#[test]
fn missing_snapshot_yields_default_state() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let store = JsonPrefsStore::new(dir.path().join("HomeWidgetPreferences.json"));

    let state = store.snapshot().expect("missing file is the empty state");
    assert_eq!(state, WidgetState::default());
    assert!(state.is_unconfigured());
}

#[test]
fn snapshot_parses_host_key_names() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("HomeWidgetPreferences.json");
    fs::write(
        &path,
        r#"{
            "name1": "Ana",
            "name2": "Ben",
            "startDate": 1700000000000,
            "avatar1Path": "avatars/ana.jpg",
            "avatar2Path": "/abs/ben.jpg",
            "days": "42",
            "initial1": "A"
        }"#,
    )
    .expect("snapshot should be writable");

    let state = JsonPrefsStore::new(&path)
        .snapshot()
        .expect("well-formed snapshot should parse");
    assert_eq!(state.name1, "Ana");
    assert_eq!(state.name2, "Ben");
    assert_eq!(state.start_date_ms, Some(1_700_000_000_000));
    assert_eq!(state.avatar1_path.as_deref(), Some("avatars/ana.jpg"));
    assert_eq!(state.avatar2_path.as_deref(), Some("/abs/ben.jpg"));
    assert_eq!(state.days_fallback.as_deref(), Some("42"));
    assert_eq!(state.initial1.as_deref(), Some("A"));
    assert_eq!(state.initial2, None);
}

#[test]
fn unknown_keys_and_missing_keys_are_tolerated() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r##"{"name1": "Ana", "themeColor": "#FF6B6B"}"##)
        .expect("snapshot should be writable");

    let state = JsonPrefsStore::new(&path)
        .snapshot()
        .expect("partial snapshot should parse");
    assert_eq!(state.name1, "Ana");
    assert_eq!(state.name2, "");
    assert_eq!(state.start_date_ms, None);
}

#[test]
fn malformed_snapshot_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, "{ definitely not json").expect("snapshot should be writable");

    let err = JsonPrefsStore::new(&path)
        .snapshot()
        .expect_err("malformed snapshot must not parse");
    assert!(matches!(err, PrefsError::Parse { .. }));
    assert!(err.to_string().contains("snapshot.json"), "error: {err}");
}

#[test]
fn resolver_prefers_existing_direct_path() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let direct = dir.path().join("ana.jpg");
    fs::write(&direct, b"jpg").expect("fixture should be writable");

    let store =
        JsonPrefsStore::with_container_dir(dir.path().join("snapshot.json"), dir.path());
    let resolved = store
        .resolver()
        .resolve(direct.to_str().expect("tempdir path should be UTF-8"))
        .expect("existing absolute path should resolve");
    assert_eq!(resolved, direct);
}

#[test]
fn resolver_falls_back_to_container_relative_lookup() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let avatars = dir.path().join("avatars");
    fs::create_dir(&avatars).expect("container subdir should be creatable");
    fs::write(avatars.join("ben.jpg"), b"jpg").expect("fixture should be writable");

    let store =
        JsonPrefsStore::with_container_dir(dir.path().join("snapshot.json"), dir.path());
    let resolver = store.resolver();

    assert_eq!(
        resolver.resolve("avatars/ben.jpg"),
        Some(avatars.join("ben.jpg"))
    );
    assert_eq!(resolver.resolve("avatars/ana.jpg"), None);
    assert_eq!(resolver.resolve(""), None);
}

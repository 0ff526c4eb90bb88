use watchbill_engine::{JsonFileStorage, KeyValueStorage};

#[tokio::test]
async fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path().to_path_buf());

    let value = storage.get("watchlist:v1").await.expect("get");
    assert_eq!(value, None);
}

#[tokio::test]
async fn set_then_get_roundtrips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path().to_path_buf());

    storage.set("watchlist:v1", r#"{"a":1}"#).await.expect("set");
    let value = storage.get("watchlist:v1").await.expect("get");
    assert_eq!(value.as_deref(), Some(r#"{"a":1}"#));
}

#[tokio::test]
async fn set_replaces_previous_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path().to_path_buf());

    storage.set("watchlist:v1", "first").await.expect("set");
    storage.set("watchlist:v1", "second").await.expect("set");
    let value = storage.get("watchlist:v1").await.expect("get");
    assert_eq!(value.as_deref(), Some("second"));
}

#[tokio::test]
async fn keys_with_unsafe_characters_map_to_distinct_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = JsonFileStorage::new(dir.path().to_path_buf());

    storage.set("watchlist:v1", "a").await.expect("set");
    storage.set("settings:v1", "b").await.expect("set");

    assert_eq!(
        storage.get("watchlist:v1").await.expect("get").as_deref(),
        Some("a")
    );
    assert_eq!(
        storage.get("settings:v1").await.expect("get").as_deref(),
        Some("b")
    );
}

#[tokio::test]
async fn storage_dir_is_created_on_first_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("data");
    let storage = JsonFileStorage::new(nested.clone());

    storage.set("watchlist:v1", "{}").await.expect("set");
    assert!(nested.is_dir());
}

use std::sync::Arc;

use led_scroller::Error;
use led_scroller::store::{FileStore, PreferenceStore, PreferenceValue};
use tempfile::tempdir;

#[tokio::test]
async fn test_missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("preferences.json")).unwrap();
    assert!(store.snapshot().is_empty());
    // Nothing is written until the first edit.
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_edit_persists_and_reopens() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let store = FileStore::open(&path).unwrap();
    store
        .edit("scroller text", PreferenceValue::String("ABC".into()))
        .await
        .unwrap();
    store.edit("used speed", PreferenceValue::Float(2.0)).await.unwrap();
    store
        .edit("used text color", PreferenceValue::Long(0xFFF4_4336))
        .await
        .unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    let prefs = reopened.snapshot();
    assert_eq!(prefs.get_string("scroller text"), Some("ABC"));
    assert_eq!(prefs.get_float("used speed"), Some(2.0));
    assert_eq!(prefs.get_long("used text color"), Some(0xFFF4_4336));
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_file_layout_is_tagged_scalars() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let store = FileStore::open(&path).unwrap();
    store.edit("used speed", PreferenceValue::Float(3.0)).await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "used speed": { "float": 3.0 } }));
}

#[tokio::test]
async fn test_existing_file_with_bom_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "\u{feff}{\"scroller text\":{\"string\":\"hi\"}}").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.snapshot().get_string("scroller text"), Some("hi"));
}

#[tokio::test]
async fn test_malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(FileStore::open(&path), Err(Error::Json(_))));
}

#[tokio::test]
async fn test_failed_rename_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let store = FileStore::open(&path).unwrap();
    // A non-empty directory where the file should go makes the rename fail.
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("occupied"), "").unwrap();

    let result = store.edit("used speed", PreferenceValue::Float(2.0)).await;

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.with_extension("json.tmp").exists());
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn test_edit_notifies_subscribers() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("preferences.json")).unwrap();
    let mut rx = store.subscribe();
    rx.borrow_and_update();

    store
        .edit("used background color", PreferenceValue::Long(0xFF00_0000))
        .await
        .unwrap();

    assert!(rx.has_changed().unwrap());
    assert_eq!(
        rx.borrow().get_long("used background color"),
        Some(0xFF00_0000)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_edits_keep_every_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let store = Arc::new(FileStore::open(&path).unwrap());

    let keys = ["scroller text", "used text color", "used background color", "used speed"];
    let tasks: Vec<_> = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let store = Arc::clone(&store);
            let key = key.to_string();
            tokio::spawn(async move { store.edit(&key, PreferenceValue::Long(i as i64)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.snapshot().len(), keys.len());
}

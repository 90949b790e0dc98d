use clarifier_storage::error::StorageError;
use clarifier_storage::state::{load_state, save_state, try_load_state};
use clarifier_storage::store::LocalStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Toggle {
    open: bool,
}

#[test]
fn missing_file_is_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::open_in(dir.path()).unwrap();
    assert_eq!(store.keys().count(), 0);
    assert!(store.get("anything").is_none());
    assert!(!store.path().exists());
}

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested").join("data");

    let mut store = LocalStore::open_in(&nested).unwrap();
    store.set("slp:more:dysphagia-more", "1");
    store.set("other", "value");
    store.save().unwrap();

    let mut reopened = LocalStore::open_in(&nested).unwrap();
    assert_eq!(reopened.get("slp:more:dysphagia-more"), Some("1"));
    assert_eq!(reopened.remove("other").as_deref(), Some("value"));
    reopened.save().unwrap();

    let again = LocalStore::open_in(&nested).unwrap();
    assert_eq!(again.keys().collect::<Vec<_>>(), ["slp:more:dysphagia-more"]);
    assert!(!nested.join("store.json.tmp").exists());
}

#[test]
fn corrupt_store_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json").unwrap();

    let err = LocalStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
}

#[test]
fn typed_state_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::open_in(dir.path()).unwrap();

    save_state(&mut store, "toggle", &Toggle { open: true }).unwrap();
    assert_eq!(store.get("toggle"), Some(r#"{"open":true}"#));

    let reopened = LocalStore::open_in(dir.path()).unwrap();
    let toggle: Toggle = load_state(&reopened, "toggle");
    assert_eq!(toggle, Toggle { open: true });
}

#[test]
fn unreadable_state_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LocalStore::open_in(dir.path()).unwrap();
    store.set("toggle", "{oops");

    assert!(try_load_state::<Toggle>(&store, "toggle").is_err());
    assert_eq!(load_state::<Toggle>(&store, "toggle"), Toggle::default());
    assert_eq!(load_state::<Toggle>(&store, "absent"), Toggle::default());
    assert!(try_load_state::<Toggle>(&store, "absent").unwrap().is_none());
}

//! Object store persistence contract.

use roost::{composite_key, EntityRegistry, ObjectStore};

use crate::common::{create, Workspace};

#[test]
fn missing_document_is_an_empty_store() {
    let ws = Workspace::new();
    let store = ObjectStore::open(ws.config(), EntityRegistry::builtin());
    assert_eq!(store.count(None), 0);
    assert!(!ws.document().exists());
}

#[test]
fn corrupt_document_is_an_empty_store() {
    let ws = Workspace::new();
    std::fs::write(ws.document(), b"\x00\x01 not json").unwrap();
    let store = ObjectStore::open(ws.config(), EntityRegistry::builtin());
    assert_eq!(store.count(None), 0);
}

#[test]
fn unknown_type_tag_is_skipped() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let id = create(&mut executor, "User");

    let mut doc = ws.read_document();
    doc["Ghost.1"] = serde_json::json!({
        "id": "1",
        "created_at": "2017-09-28T21:03:54.052298",
        "updated_at": "2017-09-28T21:03:54.052302",
        "__class__": "Ghost"
    });
    std::fs::write(ws.document(), doc.to_string()).unwrap();

    let reloaded = ws.executor();
    assert_eq!(reloaded.store().count(None), 1);
    assert!(reloaded.store().contains("User", &id));
}

#[test]
fn document_keys_match_records() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let ids: Vec<(&str, String)> = ["User", "City", "Review"]
        .into_iter()
        .map(|kind| (kind, create(&mut executor, kind)))
        .collect();

    let doc = ws.read_document();
    let object = doc.as_object().unwrap();
    assert_eq!(object.len(), ids.len());
    for (kind, id) in &ids {
        let record = &object[&composite_key(kind, id)];
        assert_eq!(record["__class__"], *kind);
        assert_eq!(record["id"], id.as_str());
    }
}

#[test]
fn no_temp_file_left_after_flush() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    create(&mut executor, "Amenity");

    let leftovers: Vec<_> = std::fs::read_dir(ws.dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|name| name != "file.json")
        .collect();
    assert!(leftovers.is_empty(), "unexpected files: {:?}", leftovers);
}

#[test]
fn timestamps_are_iso_with_microseconds() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let id = create(&mut executor, "State");

    let doc = ws.read_document();
    let created = doc[composite_key("State", &id)]["created_at"].as_str().unwrap().to_string();
    // 2017-09-28T21:03:54.052298
    assert_eq!(created.len(), 26);
    assert_eq!(&created[10..11], "T");
    assert_eq!(&created[19..20], ".");
}

#[test]
fn bad_timestamps_reload_without_failing() {
    let ws = Workspace::new();
    std::fs::write(
        ws.document(),
        r#"{"City.42": {"id": "42", "created_at": "yesterday", "__class__": "City", "name": "Akron"}}"#,
    )
    .unwrap();

    let executor = ws.executor();
    let city = executor.store().get("City", "42").unwrap();
    assert_eq!(city.get("name"), Some(roost::Value::from("Akron")));
    assert!(city.updated_at() >= city.created_at());
}

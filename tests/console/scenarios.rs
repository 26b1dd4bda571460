//! End-to-end command scenarios.

use roost::{Output, Value};

use crate::common::{create, diagnostic, show, Workspace};

#[test]
fn create_then_show_renders_that_entity() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let id = create(&mut executor, "User");

    let rendered = show(&mut executor, "User", &id);
    assert!(rendered.starts_with(&format!("[User] ({}) ", id)));
}

#[test]
fn diagnostics_for_show() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    assert_eq!(diagnostic(&mut executor, "show User"), "instance id missing");
    assert_eq!(diagnostic(&mut executor, "show Bar 1234"), "class doesn't exist");
    assert_eq!(diagnostic(&mut executor, "show User 1234"), "no instance found");
    assert_eq!(diagnostic(&mut executor, "show"), "class name missing");
}

#[test]
fn update_restores_embedded_space() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let id = create(&mut executor, "User");

    executor
        .execute_line(&format!(r#"update User {} first_name "Betty Holberton""#, id))
        .unwrap();
    assert!(show(&mut executor, "User", &id).contains("'first_name': 'Betty Holberton'"));
}

#[test]
fn method_call_update_with_mapping_flushes_both_pairs() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let id = create(&mut executor, "User");

    executor
        .execute_line(&format!(
            r#"User.update("{}", {{'first_name': "John", 'age': 89}})"#,
            id
        ))
        .unwrap();

    let record = &ws.read_document()[format!("User.{}", id)];
    assert_eq!(record["first_name"], "John");
    assert_eq!(record["age"], 89);
}

#[test]
fn destroy_removes_from_all_and_count_drops_by_one() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let a = create(&mut executor, "Place");
    let b = create(&mut executor, "Place");

    let Output::Count(before) = executor.execute_line("count Place").unwrap() else {
        panic!("Expected Output::Count");
    };
    executor.execute_line(&format!("destroy Place {}", a)).unwrap();
    let Output::Count(after) = executor.execute_line("Place.count()").unwrap() else {
        panic!("Expected Output::Count");
    };
    assert_eq!(before - after, 1);

    let Output::RenderedList(listed) = executor.execute_line("all Place").unwrap() else {
        panic!("Expected Output::RenderedList");
    };
    assert!(listed.iter().all(|r| !r.contains(&a)));
    assert!(listed.iter().any(|r| r.contains(&b)));
}

#[test]
fn create_with_typed_params() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let Output::Id(id) = executor
        .execute_line(r#"create Place city_id="0001" name="My_little_house" number_rooms=4 price_by_night=300 latitude=37.773972 longitude=-122.431297"#)
        .unwrap()
    else {
        panic!("Expected Output::Id");
    };

    let place = executor.store().get("Place", &id).unwrap();
    assert_eq!(place.get("city_id"), Some(Value::from("0001")));
    assert_eq!(place.get("name"), Some(Value::from("My little house")));
    assert_eq!(place.get("number_rooms"), Some(Value::Int(4)));
    assert_eq!(place.get("price_by_night"), Some(Value::Int(300)));
    assert_eq!(place.get("latitude"), Some(Value::Float(37.773972)));
    assert_eq!(place.get("longitude"), Some(Value::Float(-122.431297)));
    // Unset declared attributes read as their defaults
    assert_eq!(place.get("max_guest"), Some(Value::Int(0)));
    assert_eq!(place.get("amenity_ids"), Some(Value::Array(vec![])));
}

#[test]
fn literal_coercion_never_evaluates() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    let id = create(&mut executor, "User");

    executor
        .execute_line(&format!("update User {} note __import__('os')", id))
        .unwrap();
    let user = executor.store().get("User", &id).unwrap();
    assert_eq!(user.get("note"), Some(Value::from("__import__('os')")));
}

#[test]
fn unknown_verb_in_method_syntax_is_unknown_syntax() {
    let ws = Workspace::new();
    let mut executor = ws.executor();
    assert_eq!(
        diagnostic(&mut executor, "User.launch()"),
        "unknown syntax: User.launch()"
    );
}

//! Serialize/reconstruct round trips across every built-in kind.

use proptest::prelude::*;
use roost::{EntityRegistry, Value, BUILTIN_SCHEMAS};

use crate::common::{create, show, Workspace};

#[test]
fn reload_reproduces_rendered_form_for_every_kind() {
    let ws = Workspace::new();
    let mut executor = ws.executor();

    let mut before = Vec::new();
    for schema in BUILTIN_SCHEMAS {
        let id = create(&mut executor, schema.name);
        executor
            .execute_line(&format!(r#"update {} {} name "Holberton School""#, schema.name, id))
            .unwrap();
        before.push((schema.name, id.clone(), show(&mut executor, schema.name, &id)));
    }

    let mut reloaded = ws.executor();
    for (kind, id, rendered) in before {
        assert_eq!(show(&mut reloaded, kind, &id), rendered);
    }
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
    ]
}

proptest! {
    #[test]
    fn serialize_then_reconstruct_is_identity(
        kind_index in 0..BUILTIN_SCHEMAS.len(),
        extra in proptest::collection::btree_map("x_[a-z]{1,8}", scalar(), 0..6),
    ) {
        let registry = EntityRegistry::builtin();
        let kind = BUILTIN_SCHEMAS[kind_index].name;
        let mut entity = registry.construct(kind, None).unwrap();
        for (name, value) in extra {
            entity.set(&name, value);
        }

        let record = entity.serialize();
        let back = registry.reconstruct(record).unwrap();
        prop_assert_eq!(back.id(), entity.id());
        prop_assert_eq!(back.kind(), entity.kind());
        prop_assert_eq!(back.created_at(), entity.created_at());
        prop_assert_eq!(back.updated_at(), entity.updated_at());
        prop_assert_eq!(back.attributes(), entity.attributes());
    }
}

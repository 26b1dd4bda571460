//! Entity: one record of a registered kind.
//!
//! An entity has an opaque id, two lifecycle timestamps and a bag of
//! attributes. It converts to and from the flat record stored in the
//! persisted document.
//!
//! ## Construction
//!
//! There is exactly one construction path, [`Entity::construct`]. Fresh
//! creation passes no attributes; reload passes the record read from disk.
//! Both go through the same attribute handling, so a record written by
//! [`Entity::serialize`] reconstructs to an equal entity.

use std::collections::BTreeMap;

use roost_core::{EntitySchema, Timestamp, Value};
use tracing::warn;
use uuid::Uuid;

/// Attribute mapping handed to construction.
pub type Attributes = BTreeMap<String, Value>;

/// Field of a serialized record that names the entity's kind.
pub const TYPE_TAG: &str = "__class__";

/// Identity field.
pub const ID: &str = "id";
/// Creation timestamp field.
pub const CREATED_AT: &str = "created_at";
/// Last-save timestamp field.
pub const UPDATED_AT: &str = "updated_at";

/// Attribute names that assignment never touches.
pub const RESERVED_ATTRIBUTES: &[&str] = &[ID, CREATED_AT, UPDATED_AT, TYPE_TAG];

/// Whether `name` is an identity, timestamp or type-tag field.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES.contains(&name)
}

/// A live record of some registered kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    schema: EntitySchema,
    id: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    attributes: Attributes,
}

impl Entity {
    /// Build an entity of `schema`'s kind.
    ///
    /// With `None`, a fresh id is generated and both timestamps are set to
    /// now. With `Some(attrs)` (the reconstruction path), every attribute is
    /// taken from `attrs` except the type tag; timestamp text is parsed, and
    /// a missing or unparsable id/timestamp is replaced by a generated value
    /// so the entity is always fully initialized.
    pub fn construct(schema: EntitySchema, attrs: Option<Attributes>) -> Self {
        let Some(attrs) = attrs else {
            let now = Timestamp::now();
            return Self {
                schema,
                id: new_id(),
                created_at: now,
                updated_at: now,
                attributes: Attributes::new(),
            };
        };

        let mut id = None;
        let mut created_at = None;
        let mut updated_at = None;
        let mut attributes = Attributes::new();

        for (name, value) in attrs {
            match name.as_str() {
                TYPE_TAG => {}
                ID => id = Some(id_text(value)),
                CREATED_AT => created_at = Some(parse_timestamp(schema.name, CREATED_AT, &value)),
                UPDATED_AT => updated_at = Some(parse_timestamp(schema.name, UPDATED_AT, &value)),
                _ => {
                    let value = schema.coerce(&name, value);
                    attributes.insert(name, value);
                }
            }
        }

        let created_at = created_at.unwrap_or_else(Timestamp::now);
        Self {
            schema,
            id: id.unwrap_or_else(new_id),
            created_at,
            updated_at: updated_at.unwrap_or(created_at),
            attributes,
        }
    }

    /// Kind name, e.g. `User`.
    pub fn kind(&self) -> &'static str {
        self.schema.name
    }

    /// Schema this entity was built from.
    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    /// Opaque unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Store key, `<Kind>.<id>`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.schema.name, self.id)
    }

    /// Creation instant.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Instant of the last save.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Attributes set on this instance (excluding identity and timestamps).
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Read an attribute, falling back to the schema default when unset.
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            ID => Some(Value::String(self.id.clone())),
            CREATED_AT => Some(Value::String(self.created_at.to_iso())),
            UPDATED_AT => Some(Value::String(self.updated_at.to_iso())),
            _ => self
                .attributes
                .get(name)
                .cloned()
                .or_else(|| self.schema.attribute(name).map(|a| a.ty.default_value())),
        }
    }

    /// Assign an attribute, coercing it to the declared type if any.
    ///
    /// Reserved names are refused and `false` is returned. This does not
    /// bump `updated_at`; the store does that when the entity is saved.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        if is_reserved(name) {
            return false;
        }
        let value = self.schema.coerce(name, value);
        self.attributes.insert(name.to_string(), value);
        true
    }

    /// Set `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now().max(self.created_at);
    }

    /// Flat record: every attribute, identity, ISO timestamps and the type tag.
    pub fn serialize(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut record = serde_json::Map::new();
        for (name, value) in &self.attributes {
            record.insert(name.clone(), value.clone().into());
        }
        record.insert(ID.to_string(), self.id.clone().into());
        record.insert(CREATED_AT.to_string(), self.created_at.to_iso().into());
        record.insert(UPDATED_AT.to_string(), self.updated_at.to_iso().into());
        record.insert(TYPE_TAG.to_string(), self.schema.name.into());
        record
    }

    /// Display form: `[<Kind>] (<id>) {<attribute mapping>}`.
    pub fn render(&self) -> String {
        let mut shown: Vec<(&str, Value)> = vec![
            (ID, Value::String(self.id.clone())),
            (CREATED_AT, Value::String(self.created_at.to_iso())),
            (UPDATED_AT, Value::String(self.updated_at.to_iso())),
        ];
        shown.extend(self.attributes.iter().map(|(k, v)| (k.as_str(), v.clone())));

        let body = shown
            .iter()
            .map(|(k, v)| format!("{}: {}", Value::from(*k).repr(), v.repr()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}] ({}) {{{}}}", self.schema.name, self.id, body)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn id_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Int(i) => i.to_string(),
        other => other.repr(),
    }
}

fn parse_timestamp(kind: &str, field: &str, value: &Value) -> Timestamp {
    if let Some(ts) = value.as_str().and_then(Timestamp::parse_iso) {
        return ts;
    }
    warn!(
        kind = kind,
        field = field,
        value = %value.repr(),
        "unparsable timestamp, defaulting to now"
    );
    Timestamp::now()
}

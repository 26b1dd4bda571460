//! Entity kind registry.
//!
//! Maps type names to the schema used to construct them. The registry is
//! built explicitly at startup; reload selects a kind by the textual type
//! tag stored in each record and hands the record to the same construction
//! path used for fresh entities.

use std::collections::BTreeMap;

use roost_core::{EntitySchema, Value, BUILTIN_SCHEMAS};
use tracing::warn;

use crate::entity::{Attributes, Entity, TYPE_TAG};

/// Registered entity kinds, keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    kinds: BTreeMap<&'static str, EntitySchema>,
}

impl EntityRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in kind.
    pub fn builtin() -> Self {
        BUILTIN_SCHEMAS
            .iter()
            .fold(Self::new(), |registry, schema| registry.with_schema(*schema))
    }

    /// Register `schema` under its name, replacing any previous entry.
    pub fn with_schema(mut self, schema: EntitySchema) -> Self {
        self.kinds.insert(schema.name, schema);
        self
    }

    /// Whether `name` is a registered kind.
    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Schema registered under `name`.
    pub fn schema(&self, name: &str) -> Option<&EntitySchema> {
        self.kinds.get(name)
    }

    /// Registered kind names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    /// Construct an entity of kind `name`; `None` if the kind is unknown.
    pub fn construct(&self, name: &str, attrs: Option<Attributes>) -> Option<Entity> {
        self.schema(name)
            .map(|schema| Entity::construct(*schema, attrs))
    }

    /// Rebuild an entity from a persisted record.
    ///
    /// Returns `None` (after logging) when the record has no type tag or the
    /// tag names an unregistered kind.
    pub fn reconstruct(&self, record: serde_json::Map<String, serde_json::Value>) -> Option<Entity> {
        let attrs: Attributes = record
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect();

        let Some(tag) = attrs.get(TYPE_TAG).and_then(Value::as_str) else {
            warn!("record without a type tag skipped");
            return None;
        };
        let Some(schema) = self.schema(tag).copied() else {
            warn!(kind = tag, "record of unregistered kind skipped");
            return None;
        };
        Some(Entity::construct(schema, Some(attrs)))
    }
}

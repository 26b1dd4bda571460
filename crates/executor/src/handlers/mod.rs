//! Command handlers organized by effect on the store.
//!
//! | Module | Commands | Store access |
//! |--------|----------|--------------|
//! | `lifecycle` | create, update, destroy | mutating, flushes |
//! | `query` | show, all, count | read-only |
//!
//! Every handler that addresses a single entity runs the same ladder through
//! [`require_instance`]: type present, type known, id present, instance
//! found. The first failing check becomes the command's error.

pub mod lifecycle;
pub mod query;

use roost_core::EntitySchema;
use roost_engine::ObjectStore;

use crate::{Error, Result};

/// Ladder steps 1 and 2: a type name was given and is registered.
pub(crate) fn require_kind(store: &ObjectStore, kind: Option<String>) -> Result<EntitySchema> {
    let kind = kind.ok_or(Error::ClassNameMissing)?;
    store
        .registry()
        .schema(&kind)
        .copied()
        .ok_or(Error::ClassDoesNotExist)
}

/// Ladder steps 1 to 4: resolves to the kind name and id of a live entity.
pub(crate) fn require_instance(
    store: &ObjectStore,
    kind: Option<String>,
    id: Option<String>,
) -> Result<(&'static str, String)> {
    let schema = require_kind(store, kind)?;
    let id = id.ok_or(Error::InstanceIdMissing)?;
    if !store.contains(schema.name, &id) {
        return Err(Error::NoInstanceFound);
    }
    Ok((schema.name, id))
}

//! Create, update and destroy handlers.
//!
//! Each successful call flushes the document once. A flush failure is
//! returned as [`Error::Storage`](crate::Error::Storage).

use roost_core::Value;
use roost_engine::{Entity, ObjectStore};
use tracing::debug;

use super::{require_instance, require_kind};
use crate::parse::Assignment;
use crate::{Error, Output, Result};

/// Handle `create`.
///
/// Reserved names among `params` are skipped; everything else is assigned
/// through the schema before the first save.
pub fn create(
    store: &mut ObjectStore,
    kind: Option<String>,
    params: Vec<(String, Value)>,
) -> Result<Output> {
    let schema = require_kind(store, kind)?;
    let mut entity = Entity::construct(schema, None);
    for (name, value) in params {
        if !entity.set(&name, value) {
            debug!(kind = schema.name, attribute = %name, "skipping reserved parameter");
        }
    }

    let id = entity.id().to_string();
    store.save(entity)?;
    debug!(kind = schema.name, %id, "created entity");
    Ok(Output::Id(id))
}

/// Handle `update`.
pub fn update(
    store: &mut ObjectStore,
    kind: Option<String>,
    id: Option<String>,
    assignment: Assignment,
) -> Result<Output> {
    let (kind, id) = require_instance(store, kind, id)?;

    let pairs: Vec<(String, Value)> = match assignment {
        Assignment::Missing => return Err(Error::AttributeNameMissing),
        Assignment::NameOnly(_) => return Err(Error::ValueMissing),
        Assignment::Single { name, value } => vec![(name, value)],
        Assignment::Many(map) => map.into_iter().collect(),
    };

    store.update_with(kind, &id, |entity| {
        for (name, value) in pairs {
            if !entity.set(&name, value) {
                debug!(kind, attribute = %name, "skipping reserved attribute");
            }
        }
    })?;
    Ok(Output::Unit)
}

/// Handle `destroy`.
pub fn destroy(store: &mut ObjectStore, kind: Option<String>, id: Option<String>) -> Result<Output> {
    let (kind, id) = require_instance(store, kind, id)?;
    store.remove(kind, &id)?;
    debug!(kind, %id, "destroyed entity");
    Ok(Output::Unit)
}

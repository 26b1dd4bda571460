//! Show, all and count handlers. None of them touch the document.

use roost_engine::ObjectStore;

use super::{require_instance, require_kind};
use crate::{Error, Output, Result};

/// Handle `show`.
pub fn show(store: &ObjectStore, kind: Option<String>, id: Option<String>) -> Result<Output> {
    let (kind, id) = require_instance(store, kind, id)?;
    let entity = store.get(kind, &id).ok_or(Error::NoInstanceFound)?;
    Ok(Output::Rendered(entity.render()))
}

/// Handle `all`. Without a type, every entity is listed.
pub fn all(store: &ObjectStore, kind: Option<String>) -> Result<Output> {
    let filter = match kind {
        Some(kind) => Some(require_kind(store, Some(kind))?.name),
        None => None,
    };
    let rendered = store
        .all(filter)
        .into_iter()
        .map(|entity| entity.render())
        .collect();
    Ok(Output::RenderedList(rendered))
}

/// Handle `count`.
pub fn count(store: &ObjectStore, kind: Option<String>) -> Result<Output> {
    let schema = require_kind(store, kind)?;
    Ok(Output::Count(store.count(Some(schema.name)) as u64))
}

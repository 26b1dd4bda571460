//! Object store: the registry of live entities and its persisted document.
//!
//! ## Document format
//!
//! A single JSON object mapping `"<Kind>.<id>"` to the entity's flat record
//! (see [`Entity::serialize`]).
//!
//! ## Durability
//!
//! Every mutating operation flushes the whole registry. A flush writes a
//! sibling temp file, fsyncs it and renames it over the document, so a
//! reader never observes a half-written document. Flush failures propagate.
//!
//! Loading is the opposite: a missing or corrupt document yields an empty
//! store, and records that cannot be reconstructed are skipped. Cold start
//! is not an error.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use roost_core::Result;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::entity::Entity;
use crate::registry::EntityRegistry;

/// Build the store key of an entity.
pub fn composite_key(kind: &str, id: &str) -> String {
    format!("{}.{}", kind, id)
}

/// In-memory registry of entities backed by a JSON document.
///
/// The store exclusively owns its entities; callers read through
/// [`ObjectStore::get`] and mutate through [`ObjectStore::save`],
/// [`ObjectStore::update_with`] and [`ObjectStore::remove`], all of which
/// persist.
#[derive(Debug)]
pub struct ObjectStore {
    path: PathBuf,
    registry: EntityRegistry,
    objects: BTreeMap<String, Entity>,
}

impl ObjectStore {
    /// Empty store persisting to `config.document`. Nothing is read.
    pub fn new(config: StoreConfig, registry: EntityRegistry) -> Self {
        Self {
            path: config.document,
            registry,
            objects: BTreeMap::new(),
        }
    }

    /// Construct and load from the configured document.
    pub fn open(config: StoreConfig, registry: EntityRegistry) -> Self {
        let mut store = Self::new(config, registry);
        store.load();
        store
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Kinds this store can construct.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Insert or overwrite the entry at `entity.key()`. Does not flush.
    pub fn register(&mut self, entity: Entity) {
        self.objects.insert(entity.key(), entity);
    }

    /// Live entities, optionally restricted to one kind, in key order.
    pub fn all(&self, kind: Option<&str>) -> Vec<&Entity> {
        self.objects
            .values()
            .filter(|e| kind.map_or(true, |k| e.kind() == k))
            .collect()
    }

    /// Number of live entities, optionally restricted to one kind.
    pub fn count(&self, kind: Option<&str>) -> usize {
        match kind {
            None => self.objects.len(),
            Some(k) => self.objects.values().filter(|e| e.kind() == k).count(),
        }
    }

    /// Look up an entity by kind and id.
    pub fn get(&self, kind: &str, id: &str) -> Option<&Entity> {
        self.objects.get(&composite_key(kind, id))
    }

    /// Whether `<kind>.<id>` is present.
    pub fn contains(&self, kind: &str, id: &str) -> bool {
        self.objects.contains_key(&composite_key(kind, id))
    }

    /// Mark `entity` updated, upsert it, and flush.
    pub fn save(&mut self, mut entity: Entity) -> Result<()> {
        entity.touch();
        self.register(entity);
        self.flush()
    }

    /// Mutate a resident entity in place, mark it updated, and flush.
    ///
    /// Returns `Ok(false)` without flushing when the entity is absent.
    pub fn update_with<F>(&mut self, kind: &str, id: &str, f: F) -> Result<bool>
    where
        F: FnOnce(&mut Entity),
    {
        let Some(entity) = self.objects.get_mut(&composite_key(kind, id)) else {
            return Ok(false);
        };
        f(entity);
        entity.touch();
        self.flush()?;
        Ok(true)
    }

    /// Delete `<kind>.<id>` and flush.
    ///
    /// Absent entries are a no-op returning `Ok(false)`.
    pub fn remove(&mut self, kind: &str, id: &str) -> Result<bool> {
        if self.objects.remove(&composite_key(kind, id)).is_none() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Serialize every entity and atomically replace the document.
    pub fn flush(&self) -> Result<()> {
        let document: serde_json::Map<String, serde_json::Value> = self
            .objects
            .iter()
            .map(|(key, entity)| (key.clone(), serde_json::Value::Object(entity.serialize())))
            .collect();
        let payload = serde_json::to_vec(&document)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }

        // Atomic write: temp + fsync + rename
        let tmp_path = temp_path(&self.path);
        {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(&payload)?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;

        debug!(
            path = %self.path.display(),
            entities = self.objects.len(),
            "flushed store"
        );
        Ok(())
    }

    /// Read the document and register every record that reconstructs.
    ///
    /// Never fails: absence, unreadable files, malformed JSON and unknown
    /// kinds are logged and otherwise ignored.
    pub fn load(&mut self) {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no document, starting empty");
                return;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable document ignored");
                return;
            }
        };

        let document: serde_json::Map<String, serde_json::Value> =
            match serde_json::from_str(&content) {
                Ok(document) => document,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "malformed document ignored");
                    return;
                }
            };

        let mut loaded = 0usize;
        for (key, record) in document {
            let serde_json::Value::Object(record) = record else {
                warn!(key = %key, "non-object record skipped");
                continue;
            };
            let Some(entity) = self.registry.reconstruct(record) else {
                continue;
            };
            if entity.key() != key {
                warn!(key = %key, actual = %entity.key(), "record key rewritten to match its identity");
            }
            self.register(entity);
            loaded += 1;
        }
        info!(path = %self.path.display(), entities = loaded, "loaded store");
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

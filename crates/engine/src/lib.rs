//! Entity and object store layer for roost
//!
//! - [`Entity`]: a record with generated identity, lifecycle timestamps and
//!   attributes, convertible to a flat record
//! - [`EntityRegistry`]: type-name to schema mapping used for construction
//!   and for reload by type tag
//! - [`ObjectStore`]: the keyed registry of live entities and its
//!   whole-document JSON persistence
//! - [`StoreConfig`]: where the document lives

#![warn(missing_docs)]

pub mod config;
pub mod entity;
pub mod registry;
pub mod store;

pub use config::{read_toml, parse_toml, StoreConfig, CONFIG_FILE_NAME, DEFAULT_DOCUMENT};
pub use entity::{is_reserved, Attributes, Entity, RESERVED_ATTRIBUTES, TYPE_TAG};
pub use registry::EntityRegistry;
pub use store::{composite_key, ObjectStore};

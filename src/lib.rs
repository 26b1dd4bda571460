//! Roost - a command console over a small file-backed object store
//!
//! Users issue verb-first commands (`create User`, `show User <id>`) or the
//! method-call form (`User.show("<id>")`); both reach the same handlers, and
//! every mutation rewrites one JSON document.
//!
//! # Quick Start
//!
//! ```ignore
//! use roost::{Executor, Output, StoreConfig};
//!
//! let mut executor = Executor::open(StoreConfig::with_document("file.json"));
//!
//! let Output::Id(id) = executor.execute_line("create User")? else { unreachable!() };
//! executor.execute_line(&format!("User.update(\"{id}\", {{'first_name': \"Betty\"}})"))?;
//! println!("{:?}", executor.execute_line(&format!("show User {id}"))?);
//! ```
//!
//! # Architecture
//!
//! All commands go through the [`Executor`], which owns the [`ObjectStore`].
//! Entity construction and persistence live in `roost-engine`; values,
//! timestamps and schemas in `roost-core`.

// Re-export the public API from roost-executor
pub use roost_executor::*;

pub use roost_core::{AttrType, AttributeSpec, EntitySchema, Timestamp, BUILTIN_SCHEMAS};
pub use roost_engine::{composite_key, Entity, EntityRegistry, ObjectStore, StoreConfig};

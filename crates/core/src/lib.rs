//! Core types for roost
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum for entity attributes
//! - Timestamp: Microsecond UTC instant with its ISO-8601 text form
//! - Schema: Declared attributes of the built-in entity kinds
//! - Error: Error type for persistence and configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod schema;
pub mod timestamp;
pub mod value;

pub use error::{Error, Result};
pub use schema::{AttrType, AttributeSpec, EntitySchema, BUILTIN_SCHEMAS};
pub use timestamp::{Timestamp, ISO_FORMAT};
pub use value::Value;

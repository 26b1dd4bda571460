//! # Roost Executor
//!
//! Command interpreter over the roost object store.
//!
//! - [`Executor`] - owns the store and executes lines or commands
//! - [`Command`]/[`Output`] - parsed command and its result
//! - [`normalize`] - rewrites `Type.verb(args)` into `verb Type args`
//! - [`parse`] - tokenizer, literal grammar and argument coercion
//!
//! ## Quick Start
//!
//! ```text
//! use roost_executor::{Executor, Output};
//!
//! let mut executor = Executor::open(StoreConfig::default());
//! let Output::Id(id) = executor.execute_line("create User")? else { unreachable!() };
//! executor.execute_line(&format!("update User {id} first_name \"Betty\""))?;
//! let shown = executor.execute_line(&format!("User.show(\"{id}\")"))?;
//! ```
//!
//! ## Diagnostics
//!
//! User-input problems are [`Error`] values with fixed messages and never
//! leave the store modified. Only [`Error::Storage`] is fatal.

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod handlers;
pub mod normalize;
mod output;
pub mod parse;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use normalize::normalize;
pub use output::Output;
pub use parse::Assignment;

pub use roost_core::Value;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

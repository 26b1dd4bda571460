//! Console Integration Tests
//!
//! Drives the public `roost` API against a document in a temp dir:
//! - command scenarios through `Executor::execute_line`
//! - the store's persistence contract
//! - serialize/reconstruct round trips

mod common;

mod round_trip;
mod scenarios;
mod store_contract;

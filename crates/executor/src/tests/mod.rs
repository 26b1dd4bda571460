//! Scenario tests for the executor crate.


use roost_engine::StoreConfig;
use tempfile::TempDir;

use crate::{Executor, Output};

/// Executor over an empty document in a fresh temp dir.
///
/// The `TempDir` must outlive the executor.
pub(crate) fn create_test_executor() -> (TempDir, Executor) {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::with_document(dir.path().join("file.json"));
    (dir, Executor::open(config))
}

/// Run `create <kind>` and return the new id.
pub(crate) fn create(executor: &mut Executor, kind: &str) -> String {
    match executor.execute_line(&format!("create {kind}")).unwrap() {
        Output::Id(id) => id,
        other => panic!("expected Id, got {other:?}"),
    }
}

/// Run `show <kind> <id>` and return the rendered form.
pub(crate) fn show(executor: &mut Executor, kind: &str, id: &str) -> String {
    match executor.execute_line(&format!("show {kind} {id}")).unwrap() {
        Output::Rendered(text) => text,
        other => panic!("expected Rendered, got {other:?}"),
    }
}

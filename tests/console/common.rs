//! Common test utilities for console tests

use std::path::PathBuf;

use roost::{Executor, Output, StoreConfig};
use tempfile::TempDir;

/// A temp dir with a document path inside it.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn document(&self) -> PathBuf {
        self.dir.path().join("file.json")
    }

    pub fn config(&self) -> StoreConfig {
        StoreConfig::with_document(self.document())
    }

    /// A fresh executor that loads whatever is on disk now.
    pub fn executor(&self) -> Executor {
        Executor::open(self.config())
    }

    /// The document as parsed JSON.
    pub fn read_document(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.document()).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

/// Run a line and expect `Output::Id`.
pub fn create(executor: &mut Executor, kind: &str) -> String {
    match executor.execute_line(&format!("create {kind}")).unwrap() {
        Output::Id(id) => id,
        other => panic!("Expected Output::Id, got {:?}", other),
    }
}

/// Run a line and expect `Output::Rendered`.
pub fn show(executor: &mut Executor, kind: &str, id: &str) -> String {
    match executor.execute_line(&format!("show {kind} {id}")).unwrap() {
        Output::Rendered(text) => text,
        other => panic!("Expected Output::Rendered, got {:?}", other),
    }
}

/// Run a line and return its diagnostic text.
pub fn diagnostic(executor: &mut Executor, line: &str) -> String {
    executor.execute_line(line).unwrap_err().to_string()
}

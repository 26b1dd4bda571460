//! The Executor - single entry point to the object store.
//!
//! The Executor owns the [`ObjectStore`] and routes each command to its
//! handler. Lines are normalized first, so the method-call syntax and the
//! canonical syntax reach the same handlers.

use roost_engine::{EntityRegistry, ObjectStore, StoreConfig};
use tracing::debug;

use crate::normalize::normalize;
use crate::{handlers, Command, Error, Output, Result};

/// The command executor.
///
/// # Example
///
/// ```ignore
/// use roost_executor::{Executor, Output};
/// use roost_engine::StoreConfig;
///
/// let mut executor = Executor::open(StoreConfig::with_document("file.json"));
///
/// let Output::Id(id) = executor.execute_line("create User")? else {
///     unreachable!("create always returns Id");
/// };
/// executor.execute_line(&format!("User.update(\"{id}\", {{'age': 89}})"))?;
/// ```
#[derive(Debug)]
pub struct Executor {
    store: ObjectStore,
}

impl Executor {
    /// Create an executor over an existing store.
    pub fn new(store: ObjectStore) -> Self {
        Self { store }
    }

    /// Open the configured document with the built-in kinds and load it.
    pub fn open(config: StoreConfig) -> Self {
        Self::new(ObjectStore::open(config, EntityRegistry::builtin()))
    }

    /// Normalize, parse and execute one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Output> {
        let canonical = normalize(line);
        if canonical != line {
            debug!(from = line.trim(), to = %canonical, "rewrote method-call syntax");
        }

        let cmd = Command::parse(&canonical).map_err(|e| match e {
            Error::UnknownSyntax { .. } => Error::UnknownSyntax {
                line: line.trim().to_string(),
            },
            other => other,
        })?;
        self.execute(cmd)
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(?cmd, "executing");
        match cmd {
            Command::Create { kind, params } => {
                handlers::lifecycle::create(&mut self.store, kind, params)
            }
            Command::Update {
                kind,
                id,
                assignment,
            } => handlers::lifecycle::update(&mut self.store, kind, id, assignment),
            Command::Destroy { kind, id } => handlers::lifecycle::destroy(&mut self.store, kind, id),

            Command::Show { kind, id } => handlers::query::show(&self.store, kind, id),
            Command::All { kind } => handlers::query::all(&self.store, kind),
            Command::Count { kind } => handlers::query::count(&self.store, kind),

            Command::Quit => Ok(Output::Quit {
                trailing_newline: false,
            }),
            Command::Eof => Ok(Output::Quit {
                trailing_newline: true,
            }),
            Command::Empty => Ok(Output::Unit),
        }
    }

    /// Execute multiple lines sequentially.
    ///
    /// Execution continues after a failed line; stopping on `quit` is up to
    /// the caller.
    pub fn execute_many<I, S>(&mut self, lines: I) -> Vec<Result<Output>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.execute_line(line.as_ref()))
            .collect()
    }

    /// The underlying store.
    pub fn store(&self) -> &ObjectStore {
        &self.store
    }
}

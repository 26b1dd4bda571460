//! Session wrapper around the executor.
//!
//! Every mode (REPL, pipe, shell) feeds lines through
//! [`SessionState::run_line`], so output and diagnostics look the same
//! everywhere.

use std::io::Write;

use anyhow::Context;
use roost_executor::{Executor, Output};

use crate::format::{format_error, format_output, OutputMode};

/// Prompt shown in interactive mode.
pub const PROMPT: &str = "(hbnb) ";

/// Whether the command loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Holds the executor and the output mode.
pub struct SessionState {
    executor: Executor,
    mode: OutputMode,
}

impl SessionState {
    /// Create a new SessionState.
    pub fn new(executor: Executor, mode: OutputMode) -> Self {
        Self { executor, mode }
    }

    /// Kind names for completion.
    pub fn kind_names(&self) -> Vec<String> {
        self.executor
            .store()
            .registry()
            .names()
            .map(str::to_string)
            .collect()
    }

    /// Execute one line and write its result to `out`.
    ///
    /// User errors are written as diagnostics and the loop continues. A
    /// storage failure is returned.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Step> {
        if line.trim().is_empty() {
            return Ok(Step::Continue);
        }

        match self.executor.execute_line(line) {
            Ok(Output::Quit { trailing_newline }) => {
                if trailing_newline {
                    writeln!(out)?;
                }
                Ok(Step::Quit)
            }
            Ok(output) => {
                let formatted = format_output(&output, self.mode);
                if !formatted.is_empty() {
                    writeln!(out, "{}", formatted)?;
                }
                Ok(Step::Continue)
            }
            Err(e) if e.is_fatal() => Err(e).with_context(|| {
                format!(
                    "failed to write {}",
                    self.executor.store().path().display()
                )
            }),
            Err(e) => {
                writeln!(out, "{}", format_error(&e, self.mode))?;
                Ok(Step::Continue)
            }
        }
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> &'static str {
        PROMPT
    }
}

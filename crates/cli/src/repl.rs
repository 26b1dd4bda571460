//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, history, TAB completion of verbs and kinds.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

use roost_executor::normalize::VERBS;

use crate::state::{SessionState, Step};

/// Commands that end the loop.
const TERMINAL_COMMANDS: &[&str] = &["quit", "EOF"];

/// Run the interactive REPL.
///
/// Ctrl-C discards the current line. Ctrl-D behaves like `EOF`.
pub fn run_repl(state: &mut SessionState) -> anyhow::Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let helper = RoostHelper::new(state.kind_names());
    let mut rl: Editor<RoostHelper, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path, error = %e, "no history loaded");
        }
    }

    let stdout = io::stdout();
    let result = loop {
        match rl.readline(state.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match state.run_line(&line, &mut stdout.lock()) {
                    Ok(Step::Continue) => {}
                    Ok(Step::Quit) => break Ok(()),
                    Err(e) => break Err(e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                break state.run_line("EOF", &mut stdout.lock()).map(|_| ());
            }
            Err(err) => break Err(err).context("failed to read input"),
        }
    };

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
    result
}

/// Run in pipe mode: execute each line of `input` without a prompt.
///
/// Running out of input behaves like `EOF`. Bytes that are not UTF-8 are
/// replaced, so such a line reports unknown syntax instead of ending the
/// session.
pub fn run_pipe<R: BufRead, W: Write>(
    state: &mut SessionState,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for raw in input.split(b'\n') {
        let raw = raw.context("failed to read input")?;
        let line = String::from_utf8_lossy(raw.strip_suffix(b"\r").unwrap_or(&raw));
        if state.run_line(&line, out)? == Step::Quit {
            return Ok(());
        }
    }
    state.run_line("EOF", out)?;
    Ok(())
}

/// Run one command line and return.
pub fn run_shell<W: Write>(state: &mut SessionState, line: &str, out: &mut W) -> anyhow::Result<()> {
    state.run_line(line, out)?;
    Ok(())
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.roost_history", h))
}

// =========================================================================
// Tab completion
// =========================================================================

struct RoostHelper {
    kinds: Vec<String>,
}

impl RoostHelper {
    fn new(kinds: Vec<String>) -> Self {
        Self { kinds }
    }

    /// Candidates for the word at `index` (0 = verb position).
    fn candidates(&self, index: usize, prefix: &str) -> Vec<Pair> {
        let words: Vec<&str> = if index == 0 {
            VERBS
                .iter()
                .chain(TERMINAL_COMMANDS)
                .copied()
                .chain(self.kinds.iter().map(String::as_str))
                .collect()
        } else if index == 1 {
            self.kinds.iter().map(String::as_str).collect()
        } else {
            Vec::new()
        };

        words
            .into_iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect()
    }
}

impl Helper for RoostHelper {}
impl Validator for RoostHelper {}
impl Highlighter for RoostHelper {}
impl Hinter for RoostHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for RoostHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(char::is_whitespace);

        if trailing_space || parts.is_empty() {
            Ok((pos, self.candidates(parts.len(), "")))
        } else {
            let prefix = parts[parts.len() - 1];
            Ok((pos - prefix.len(), self.candidates(parts.len() - 1, prefix)))
        }
    }
}

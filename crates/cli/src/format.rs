//! Output → terminal string formatting.
//!
//! Two modes:
//! - **Human** (default): ids, rendered entities and counts as bare lines,
//!   lists as `["...", "..."]`, diagnostics as `** message **`
//! - **JSON** (`--json`): `serde_json::to_string` of the output or error

use roost_executor::{Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output. Empty means print nothing.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => match output {
            Output::Unit | Output::Quit { .. } => String::new(),
            _ => serde_json::to_string(output).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}")),
        },
        OutputMode::Human => format_human(output),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit | Output::Quit { .. } => String::new(),
        Output::Id(id) => id.clone(),
        Output::Rendered(text) => text.clone(),
        Output::RenderedList(items) => {
            serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
        }
        Output::Count(n) => n.to_string(),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": err.to_string() }).to_string(),
        OutputMode::Human => match err {
            Error::UnknownSyntax { line } => format!("*** Unknown syntax: {line}"),
            other => format!("** {other} **"),
        },
    }
}

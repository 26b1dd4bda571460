//! Command enum for the interpreter's instruction set.
//!
//! A command is the parsed form of one canonical line. Parsing only splits
//! and coerces arguments; the validation ladder (type present, type known,
//! id present, instance found) runs in the handlers, so every field that
//! the ladder checks is optional here.

use serde::{Deserialize, Serialize};
use roost_core::Value;

use crate::parse::{parse_assignment, parse_params, tokenize, unquote, Assignment};
use crate::{Error, Result};

/// A self-contained interpreter operation.
///
/// | Verb | Variant | Returns |
/// |------|---------|---------|
/// | `create` | `Create` | `Output::Id` |
/// | `show` | `Show` | `Output::Rendered` |
/// | `destroy` | `Destroy` | `Output::Unit` |
/// | `all` | `All` | `Output::RenderedList` |
/// | `update` | `Update` | `Output::Unit` |
/// | `count` | `Count` | `Output::Count` |
/// | `quit` / `EOF` | `Quit` / `Eof` | `Output::Quit` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Construct and persist a fresh entity.
    Create {
        kind: Option<String>,
        /// `key=value` seeds, in the order given
        #[serde(default)]
        params: Vec<(String, Value)>,
    },

    /// Render one entity.
    Show {
        kind: Option<String>,
        id: Option<String>,
    },

    /// Remove one entity.
    Destroy {
        kind: Option<String>,
        id: Option<String>,
    },

    /// Render every entity, optionally of one type.
    All {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },

    /// Assign one or many attributes.
    Update {
        kind: Option<String>,
        id: Option<String>,
        assignment: Assignment,
    },

    /// Count entities of one type.
    Count {
        kind: Option<String>,
    },

    /// Leave the interpreter.
    Quit,

    /// End of input; leave after a newline.
    Eof,

    /// Blank line.
    Empty,
}

impl Command {
    /// Parse one canonical line.
    ///
    /// Verbs are case-sensitive. An unrecognized verb is
    /// [`Error::UnknownSyntax`] carrying the trimmed line.
    pub fn parse(line: &str) -> Result<Command> {
        let tokens = tokenize(line);
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(Command::Empty);
        };

        let kind = args.first().map(|t| unquote(t));
        let id = args.get(1).map(|t| unquote(t));

        let command = match verb.as_str() {
            "create" => Command::Create {
                kind,
                params: parse_params(args.get(1..).unwrap_or(&[])),
            },
            "show" => Command::Show { kind, id },
            "destroy" => Command::Destroy { kind, id },
            "all" => Command::All { kind },
            "update" => Command::Update {
                kind,
                id,
                assignment: parse_assignment(args.get(2..).unwrap_or(&[])),
            },
            "count" => Command::Count { kind },
            "quit" => Command::Quit,
            "EOF" => Command::Eof,
            _ => {
                return Err(Error::UnknownSyntax {
                    line: line.trim().to_string(),
                })
            }
        };
        Ok(command)
    }
}

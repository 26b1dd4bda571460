//! Argument parsing for interpreter commands.
//!
//! Raw tokens come from [`tokenize`]; values are coerced with [`coerce`]:
//! a quoted token is a string (underscores read as spaces), anything else is
//! tried as a literal and falls back to the bare text.

mod literal;
mod tokenize;

pub use literal::{parse_literal, LiteralError};
pub use tokenize::tokenize;

use std::collections::BTreeMap;

use roost_core::Value;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The quote character wrapping `token`, if any.
fn enclosing_quote(token: &str) -> Option<char> {
    let first = token.chars().next()?;
    if token.len() >= 2 && (first == '"' || first == '\'') && token.ends_with(first) {
        Some(first)
    } else {
        None
    }
}

fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Strip one pair of matching quotes and resolve backslash escapes.
///
/// Used for type names, ids and attribute names. Text without enclosing
/// quotes is returned as is.
pub fn unquote(token: &str) -> String {
    match enclosing_quote(token) {
        Some(_) => unescape(&token[1..token.len() - 1]),
        None => token.to_string(),
    }
}

/// Turn one argument token into a value.
pub fn coerce(token: &str) -> Value {
    if enclosing_quote(token).is_some() {
        return Value::String(unquote(token).replace('_', " "));
    }
    match parse_literal(token) {
        Ok(value) => value,
        Err(_) => Value::String(token.to_string()),
    }
}

/// Parse `key=value` tokens of a `create` line.
///
/// Splits at the first `=`. Tokens without `=` or with an empty key are
/// skipped.
pub fn parse_params<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, Value)> {
    tokens
        .iter()
        .filter_map(|token| {
            let token = token.as_ref();
            match token.split_once('=') {
                Some((key, raw)) if !key.is_empty() => Some((key.to_string(), coerce(raw))),
                _ => {
                    debug!(token, "skipping malformed parameter");
                    None
                }
            }
        })
        .collect()
}

/// Parse a `{...}` token as a mapping of attribute updates.
///
/// String values get the same underscore handling as quoted tokens.
pub fn parse_mapping(token: &str) -> Result<BTreeMap<String, Value>, LiteralError> {
    let map = literal::parse_mapping(token)?;
    Ok(map
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, Value::String(s.replace('_', " "))),
            other => (key, other),
        })
        .collect())
}

/// What an `update` line asks to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Assignment {
    /// Nothing after the id
    Missing,
    /// An attribute name with no value
    NameOnly(String),
    /// One attribute
    Single {
        /// Attribute name
        name: String,
        /// New value
        value: Value,
    },
    /// Every pair of a mapping
    Many(BTreeMap<String, Value>),
}

/// Interpret the tokens following `update <Type> <id>`.
///
/// A single token shaped like `{...}` that parses as a mapping applies
/// every pair. Otherwise the first token names the attribute and the second
/// holds its value; anything further is ignored.
pub fn parse_assignment<S: AsRef<str>>(rest: &[S]) -> Assignment {
    let Some(first) = rest.first().map(AsRef::as_ref) else {
        return Assignment::Missing;
    };

    if first.starts_with('{') && first.ends_with('}') {
        match parse_mapping(first) {
            Ok(map) => return Assignment::Many(map),
            Err(e) => debug!(error = %e, "not a mapping, reading positionally"),
        }
    }

    let name = unquote(first);
    match rest.get(1) {
        Some(raw) => Assignment::Single {
            name,
            value: coerce(raw.as_ref()),
        },
        None => Assignment::NameOnly(name),
    }
}

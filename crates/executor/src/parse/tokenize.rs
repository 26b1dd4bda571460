//! Whitespace tokenizer for command arguments.
//!
//! Tokens are separated by whitespace, except that:
//! - a double-quoted span is part of one token, wherever it starts
//!   (`name="My house"` is a single token);
//! - a `{...}` or `[...]` span is one token, and inside it both quote kinds
//!   group, so mapping literals survive intact.
//!
//! Quote characters are kept in the token text; [`super::coerce`] needs
//! them to tell string literals from bare words.

/// Split `input` into raw tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            current.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' => {
                quote = Some(c);
                current.push(c);
                in_token = true;
            }
            '\'' if depth > 0 => {
                quote = Some(c);
                current.push(c);
            }
            '{' | '[' => {
                depth += 1;
                current.push(c);
                in_token = true;
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
                in_token = true;
            }
            c if c.is_whitespace() && depth == 0 => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            _ => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}

//! Closed-form literal grammar.
//!
//! ```text
//! value   := string | number | keyword | list | mapping
//! string  := '...' | "..."            (backslash escapes)
//! number  := [+-]? digits [. digits] [(e|E) [+-]? digits]
//! keyword := True | False | None | true | false | null
//! list    := '[' [value (',' value)* [',']] ']'
//! mapping := '{' [key ':' value (',' key ':' value)* [',']] '}'
//! key     := string | number | keyword
//! ```
//!
//! Nothing here evaluates expressions; any input outside the grammar is an
//! error and callers fall back to treating the text as a plain string.

use std::collections::BTreeMap;

use roost_core::Value;

const MAX_DEPTH: usize = 32;

/// Input was not a literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid literal at byte {offset}: {reason}")]
pub struct LiteralError {
    /// Byte offset where parsing stopped
    pub offset: usize,
    /// What was expected
    pub reason: &'static str,
}

/// Parse the whole of `text` as one literal.
pub fn parse_literal(text: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser { src: text, pos: 0 };
    parser.skip_ws();
    let value = parser.value(0)?;
    parser.skip_ws();
    if parser.pos != text.len() {
        return Err(parser.error("trailing characters"));
    }
    Ok(value)
}

/// Parse `text` as a mapping literal.
pub fn parse_mapping(text: &str) -> Result<BTreeMap<String, Value>, LiteralError> {
    match parse_literal(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(LiteralError {
            offset: 0,
            reason: "expected a mapping",
        }),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, reason: &'static str) -> LiteralError {
        LiteralError {
            offset: self.pos,
            reason,
        }
    }

    fn value(&mut self, depth: usize) -> Result<Value, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('"' | '\'') => self.string().map(Value::String),
            Some('[') => self.list(depth),
            Some('{') => self.mapping(depth),
            Some(c) if c == '+' || c == '-' || c == '.' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.keyword(),
            Some(_) => Err(self.error("unexpected character")),
        }
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        let quote = self.bump().ok_or_else(|| self.error("expected a quote"))?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(c) => out.push(c),
                    None => return Err(self.error("unterminated escape")),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn digits(&mut self) -> usize {
        let mut n = 0;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            n += 1;
        }
        n
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        let int_digits = self.digits();
        let mut is_float = false;
        let mut frac_digits = 0;
        if self.eat('.') {
            is_float = true;
            frac_digits = self.digits();
        }
        if int_digits + frac_digits == 0 {
            return Err(self.error("malformed number"));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.bump();
            is_float = true;
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.digits() == 0 {
                return Err(self.error("malformed exponent"));
            }
        }

        let text = &self.src[start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(f)),
                Ok(_) => Err(self.error("float out of range")),
                Err(_) => Err(self.error("malformed float")),
            }
        } else {
            text.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.error("integer out of range"))
        }
    }

    fn keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            "None" | "null" => Ok(Value::Null),
            _ => Err(LiteralError {
                offset: start,
                reason: "names are not literals",
            }),
        }
    }

    fn list(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump();
        let mut items = Vec::new();
        self.skip_ws();
        if self.eat(']') {
            return Ok(Value::Array(items));
        }
        loop {
            self.skip_ws();
            items.push(self.value(depth + 1)?);
            self.skip_ws();
            if self.eat(',') {
                self.skip_ws();
                if self.eat(']') {
                    break;
                }
                continue;
            }
            if self.eat(']') {
                break;
            }
            return Err(self.error("expected ',' or ']'"));
        }
        Ok(Value::Array(items))
    }

    fn mapping(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.bump();
        let mut map = BTreeMap::new();
        self.skip_ws();
        if self.eat('}') {
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_ws();
            let key = self.key(depth + 1)?;
            self.skip_ws();
            if !self.eat(':') {
                return Err(self.error("expected ':'"));
            }
            self.skip_ws();
            let value = self.value(depth + 1)?;
            map.insert(key, value);
            self.skip_ws();
            if self.eat(',') {
                self.skip_ws();
                if self.eat('}') {
                    break;
                }
                continue;
            }
            if self.eat('}') {
                break;
            }
            return Err(self.error("expected ',' or '}'"));
        }
        Ok(Value::Object(map))
    }

    fn key(&mut self, depth: usize) -> Result<String, LiteralError> {
        let start = self.pos;
        match self.value(depth)? {
            Value::String(s) => Ok(s),
            Value::Int(i) => Ok(i.to_string()),
            scalar @ (Value::Float(_) | Value::Bool(_) | Value::Null) => Ok(scalar.repr()),
            _ => Err(LiteralError {
                offset: start,
                reason: "mapping keys must be scalars",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_literal("89"), Ok(Value::Int(89)));
        assert_eq!(parse_literal("-7"), Ok(Value::Int(-7)));
        assert_eq!(parse_literal("+3"), Ok(Value::Int(3)));
        assert_eq!(parse_literal("3.5"), Ok(Value::Float(3.5)));
        assert_eq!(parse_literal(".5"), Ok(Value::Float(0.5)));
        assert_eq!(parse_literal("1e3"), Ok(Value::Float(1000.0)));
        assert_eq!(parse_literal("-122.431297"), Ok(Value::Float(-122.431297)));
    }

    #[test]
    fn test_float_overflow_is_rejected() {
        assert!(parse_literal("1e999").is_err());
        assert!(parse_literal("-1e999").is_err());
        assert!(parse_literal("[1, 1e999]").is_err());
        assert_eq!(parse_literal("1e-999"), Ok(Value::Float(0.0)));
    }

    #[test]
    fn test_strings_and_escapes() {
        assert_eq!(parse_literal("'John'"), Ok(Value::from("John")));
        assert_eq!(parse_literal(r#""a \"b\"""#), Ok(Value::from(r#"a "b""#)));
        assert_eq!(parse_literal(r"'it\'s'"), Ok(Value::from("it's")));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_literal("True"), Ok(Value::Bool(true)));
        assert_eq!(parse_literal("false"), Ok(Value::Bool(false)));
        assert_eq!(parse_literal("None"), Ok(Value::Null));
    }

    #[test]
    fn test_collections() {
        assert_eq!(
            parse_literal("[1, 'a', [2.5]]"),
            Ok(Value::Array(vec![
                Value::Int(1),
                Value::from("a"),
                Value::Array(vec![Value::Float(2.5)]),
            ]))
        );
        let map = parse_mapping(r#"{'first_name': "John", 'age': 89,}"#).unwrap();
        assert_eq!(map.get("first_name"), Some(&Value::from("John")));
        assert_eq!(map.get("age"), Some(&Value::Int(89)));
        assert_eq!(parse_mapping("{}").unwrap().len(), 0);
    }

    #[test]
    fn test_rejects_non_literals() {
        assert!(parse_literal("John").is_err());
        assert!(parse_literal("__import__('os')").is_err());
        assert!(parse_literal("1 + 2").is_err());
        assert!(parse_literal("3.14.15").is_err());
        assert!(parse_literal("99999999999999999999").is_err());
        assert!(parse_literal("{'a' 1}").is_err());
        assert!(parse_literal("[1, 2").is_err());
        assert!(parse_literal("'open").is_err());
        assert!(parse_literal("").is_err());
        assert!(parse_mapping("[1]").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}{}", "[".repeat(MAX_DEPTH + 2), "]".repeat(MAX_DEPTH + 2));
        assert!(parse_literal(&deep).is_err());
    }

    proptest! {
        #[test]
        fn integers_parse_exactly(i in any::<i64>()) {
            prop_assert_eq!(parse_literal(&i.to_string()), Ok(Value::Int(i)));
        }

        #[test]
        fn arbitrary_text_never_panics(s in "\\PC{0,40}") {
            let _ = parse_literal(&s);
        }
    }
}

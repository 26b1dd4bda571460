//! Rewrites the method-call syntax into the canonical verb-first form.
//!
//! `User.show("1234")` becomes `show User 1234`, and
//! `User.update("1234", {'age': 89})` becomes `update User 1234 {'age': 89}`.
//! Lines that do not match, or that name a verb outside [`VERBS`], come back
//! unchanged so normal dispatch can report them.

use std::borrow::Cow;

/// Verbs accepted in `<Type>.<verb>(<args>)` form.
pub const VERBS: &[&str] = &["create", "show", "destroy", "all", "update", "count"];

/// Rewrite `line` into canonical form if it uses the method-call syntax.
pub fn normalize(line: &str) -> Cow<'_, str> {
    match rewrite(line.trim()) {
        Some(canonical) => Cow::Owned(canonical),
        None => Cow::Borrowed(line),
    }
}

fn rewrite(line: &str) -> Option<String> {
    let body = line.strip_suffix(')')?;
    let open = body.find('(')?;
    let dot = body[..open].find('.')?;

    let kind = &body[..dot];
    let verb = &body[dot + 1..open];
    if kind.chars().any(char::is_whitespace) || !VERBS.contains(&verb) {
        return None;
    }

    let parts = split_args(&body[open + 1..]);
    let mut words = vec![verb.to_string()];
    if !kind.is_empty() {
        words.push(kind.to_string());
    }

    let mut parts = parts.into_iter();
    if let Some(id) = parts.next() {
        words.push(requote(strip_quotes(id)));
    }
    let rest: Vec<&str> = parts.collect();
    match rest.as_slice() {
        [mapping] if mapping.starts_with('{') && mapping.ends_with('}') => {
            words.push(mapping.to_string());
        }
        _ => words.extend(rest.iter().map(|part| requote(strip_quotes(part)))),
    }

    Some(words.join(" "))
}

/// Split on commas outside quotes and brackets, trimming and dropping empty
/// parts.
fn split_args(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in args.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&args[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn strip_quotes(part: &str) -> Cow<'_, str> {
    let first = part.chars().next();
    match first {
        Some(q @ ('"' | '\'')) if part.len() >= 2 && part.ends_with(q) => {
            Cow::Owned(crate::parse::unquote(part))
        }
        _ => Cow::Borrowed(part),
    }
}

/// Quote `word` again when the tokenizer would otherwise split or drop it.
fn requote(word: Cow<'_, str>) -> String {
    let bracketed = word.starts_with('{') || word.starts_with('[');
    let needs_quotes =
        word.is_empty() || word.contains('"') || (!bracketed && word.contains(char::is_whitespace));
    if !needs_quotes {
        return word.into_owned();
    }
    let mut out = String::with_capacity(word.len() + 2);
    out.push('"');
    for c in word.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_lines_pass_through() {
        assert_eq!(normalize("show User 1234"), "show User 1234");
        assert!(matches!(normalize("all"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(normalize("User.all()"), "all User");
        assert_eq!(normalize("User.count()"), "count User");
        assert_eq!(normalize("User.create()"), "create User");
        assert_eq!(normalize(r#"User.show("1234-abcd")"#), "show User 1234-abcd");
        assert_eq!(normalize("User.destroy('1234')"), "destroy User 1234");
        assert_eq!(normalize("  Place.all()  "), "all Place");
    }

    #[test]
    fn test_update_positional() {
        assert_eq!(
            normalize(r#"User.update("1234", "first_name", "John")"#),
            "update User 1234 first_name John"
        );
        assert_eq!(
            normalize(r#"User.update("1234", "age", 89)"#),
            "update User 1234 age 89"
        );
    }

    #[test]
    fn test_update_value_with_spaces_stays_one_token() {
        assert_eq!(
            normalize(r#"User.update("1234", "first_name", "Betty Holberton")"#),
            r#"update User 1234 first_name "Betty Holberton""#
        );
    }

    #[test]
    fn test_update_mapping_kept_whole() {
        assert_eq!(
            normalize(r#"User.update("1234", {'first_name': "John", 'age': 89})"#),
            r#"update User 1234 {'first_name': "John", 'age': 89}"#
        );
    }

    #[test]
    fn test_commas_inside_quotes_do_not_split() {
        assert_eq!(
            normalize(r#"Place.update("9", "description", "big, bright")"#),
            r#"update Place 9 description "big, bright""#
        );
    }

    #[test]
    fn test_unknown_verb_left_unchanged() {
        assert_eq!(normalize("User.fly()"), "User.fly()");
        assert_eq!(normalize("User.all"), "User.all");
    }

    #[test]
    fn test_missing_type_keeps_verb_only() {
        assert_eq!(normalize(".all()"), "all");
    }

    #[test]
    fn test_canonical_line_ending_in_paren_is_untouched() {
        let line = "update User 1 motto smile.now()";
        assert_eq!(normalize(line), line);
    }

    #[test]
    fn test_split_args() {
        assert_eq!(split_args(r#" "a", 'b' , , [1, 2] "#), vec![r#""a""#, "'b'", "[1, 2]"]);
        assert!(split_args("").is_empty());
    }
}

//! Text manipulation utilities for working with source code.

/// Check if the text contains a line break (`\n` or `\r`).
#[inline]
pub fn has_line_breaks(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// Decode the value of a string literal token.
///
/// Handles the spellings the lexer produces:
/// - `"..."` and `'...'` with backslash escapes
/// - `@"..."` and `@'...'` verbatim strings, where a doubled quote is a quote
/// - `h"..."` / `H"..."` obfuscated strings (the prefix is dropped)
///
/// Text that is not a quoted literal is returned unchanged.
///
/// # Example
/// ```
/// use kql_rules::base::string_literal_value;
///
/// assert_eq!(string_literal_value(r#""a\"b""#), "a\"b");
/// assert_eq!(string_literal_value("@'c:\\dir'"), "c:\\dir");
/// assert_eq!(string_literal_value("plain"), "plain");
/// ```
pub fn string_literal_value(text: &str) -> String {
    let (verbatim, rest) = match text.as_bytes().first() {
        Some(b'@') => (true, &text[1..]),
        Some(b'h' | b'H') if text.len() > 1 && matches!(text.as_bytes()[1], b'"' | b'\'') => {
            (false, &text[1..])
        }
        _ => (false, text),
    };

    let mut chars = rest.chars();
    let quote = match chars.next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return text.to_string(),
    };

    let mut value = String::with_capacity(rest.len());
    let mut chars = chars.peekable();
    while let Some(c) = chars.next() {
        if c == quote {
            if verbatim && chars.peek() == Some(&quote) {
                chars.next();
                value.push(quote);
                continue;
            }
            break;
        }
        if c == '\\' && !verbatim {
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some(other) => value.push(other),
                None => break,
            }
            continue;
        }
        value.push(c);
    }
    value
}

/// Content of a bracketed-string spelling such as `[a.b]`.
///
/// The closing bracket is optional; whitespace just inside either bracket
/// is not part of the value.
pub fn bracketed_string_content(text: &str) -> &str {
    let inner = text.strip_prefix('[').unwrap_or(text);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner.trim()
}

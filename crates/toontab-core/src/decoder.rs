//! TOON decoder — recursive descent over a flat line list.
//!
//! Input is split on line breaks, each line trimmed, and blank lines
//! discarded before parsing starts; the grammar is blank-insensitive. Every
//! production takes `(lines, cursor)` and returns `(Value, next_cursor)`, so
//! a caller always knows exactly how far a nested block reached.
//!
//! Dispatch on the current line, in order:
//!
//! 1. `name[count]{` — array block (table rows under a shared key header,
//!    or one element per production without one)
//! 2. trailing `;` — object (keys line, then values)
//! 3. a `,` without either of the above — malformed keys line, hard error
//! 4. anything else — a single scalar
//!
//! # Key design decisions
//!
//! - **Original line numbers**: lines keep their 1-based position from
//!   before blank-line filtering, so error locations match the user's file.
//! - **Cursor always advances**: every non-error path consumes at least one
//!   line, which bounds the decoder on any input — a never-closing block
//!   exhausts the list and reports [`ToonError::UnclosedBlock`] rather than
//!   looping.
//! - **No partial output**: every malformed condition raises immediately
//!   with the line number, block name, or counts needed to display it.

use crate::error::{Result, ToonError};
use crate::types::Value;

/// One trimmed, non-blank input line with its original 1-based position.
struct Line<'a> {
    no: usize,
    text: &'a str,
}

/// Decode TOON text into a [`Value`] tree.
///
/// Lines past the first complete top-level production are ignored.
///
/// # Example
/// ```
/// use toontab_core::decode;
///
/// let value = decode("id, name, price;\n1, Test Product, 99.99").unwrap();
/// assert_eq!(value.get("id").and_then(|v| v.as_i64()), Some(1));
/// ```
pub fn decode(toon: &str) -> Result<Value> {
    let lines: Vec<Line> = toon
        .split('\n')
        .enumerate()
        .map(|(i, raw)| Line {
            no: i + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ToonError::EmptyInput);
    }

    let (value, _next) = parse_value(&lines, 0)?;
    Ok(value)
}

/// Decode TOON text and re-serialize the result as compact JSON.
pub fn decode_to_json(toon: &str) -> Result<String> {
    let value = decode(toon)?;
    Ok(serde_json::to_string(&value)?)
}

/// Top-of-production dispatch. Callers guarantee `cursor` is in bounds.
fn parse_value(lines: &[Line], cursor: usize) -> Result<(Value, usize)> {
    let line = &lines[cursor];

    if let Some((name, count)) = block_header(line.text) {
        return parse_block(lines, cursor, name, count);
    }
    if line.text.ends_with(';') {
        return parse_object(lines, cursor);
    }
    if line.text.contains(',') {
        return Err(ToonError::MalformedHeader { line: line.no });
    }
    Ok((parse_scalar(line.text), cursor + 1))
}

/// Match `name[count]{` exactly: word characters, digits, a closing `{` at
/// the end of the line, nothing else.
fn block_header(text: &str) -> Option<(&str, usize)> {
    let open = text.find('[')?;
    if open == 0 {
        return None;
    }
    let name = &text[..open];
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return None;
    }
    let rest = &text[open + 1..];
    let close = rest.find(']')?;
    let digits = &rest[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if &rest[close + 1..] != "{" {
        return None;
    }
    let count = digits.parse().ok()?;
    Some((name, count))
}

/// Array-block production, entered at the `name[count]{` line.
///
/// With a shared key header (next line ends with `;`), each following line
/// is one row: split quote-aware on commas, zipped positionally with the
/// header keys. Without one, elements are dispatched recursively one
/// production at a time. Both forms run until the closing `}` and then check
/// the element count against the declared `[count]`.
fn parse_block(
    lines: &[Line],
    cursor: usize,
    name: &str,
    declared: usize,
) -> Result<(Value, usize)> {
    let mut cur = cursor + 1;
    let unclosed = || ToonError::UnclosedBlock {
        block: name.to_string(),
    };

    let has_header = cur < lines.len() && lines[cur].text.ends_with(';');
    let elements = if has_header {
        let keys = split_keys(lines[cur].text);
        cur += 1;
        let mut rows = Vec::new();
        loop {
            let line = lines.get(cur).ok_or_else(unclosed)?;
            if line.text == "}" {
                cur += 1;
                break;
            }
            if let Some((inner, _)) = block_header(line.text) {
                return Err(ToonError::NestedBlockInRow {
                    block: inner.to_string(),
                    line: line.no,
                });
            }
            let tokens = split_row(line.text);
            if tokens.len() != keys.len() {
                return Err(ToonError::KeyValueCountMismatch {
                    line: line.no,
                    keys: keys.len(),
                    values: tokens.len(),
                });
            }
            let row = keys
                .iter()
                .cloned()
                .zip(tokens.iter().map(|token| parse_scalar(token)))
                .collect();
            rows.push(Value::Object(row));
            cur += 1;
        }
        rows
    } else {
        let mut items = Vec::new();
        loop {
            let line = lines.get(cur).ok_or_else(unclosed)?;
            if line.text == "}" {
                cur += 1;
                break;
            }
            let (item, next) = parse_value(lines, cur)?;
            items.push(item);
            cur = next;
        }
        items
    };

    if elements.len() != declared {
        return Err(ToonError::ArrayCountMismatch {
            block: name.to_string(),
            declared,
            actual: elements.len(),
        });
    }
    Ok((Value::Array(elements), cur))
}

/// Object production, entered at the keys line.
///
/// Keys fill in order. An array-valued key appears as a block whose name
/// matches the key; a lone remaining key takes the whole next line as one
/// scalar; otherwise a line is either one packed row covering every
/// remaining key, or — when it holds a single token — the value for the next
/// key alone, which is what allows one-value-per-line objects.
fn parse_object(lines: &[Line], cursor: usize) -> Result<(Value, usize)> {
    let keys = split_keys(lines[cursor].text);
    let mut cur = cursor + 1;
    let mut entries: Vec<(String, Value)> = Vec::with_capacity(keys.len());

    while entries.len() < keys.len() {
        let line = match lines.get(cur) {
            Some(line) => line,
            None => {
                return Err(ToonError::UnexpectedEndOfInput {
                    expected: keys.len(),
                    filled: entries.len(),
                });
            }
        };
        let key = &keys[entries.len()];

        if let Some((block_name, block_count)) = block_header(line.text) {
            if block_name == key.as_str() {
                let (value, next) = parse_block(lines, cur, block_name, block_count)?;
                entries.push((key.clone(), value));
                cur = next;
                continue;
            }
        }

        let remaining = keys.len() - entries.len();
        if remaining == 1 {
            entries.push((key.clone(), parse_scalar(line.text)));
            cur += 1;
            continue;
        }

        let tokens = split_row(line.text);
        if tokens.len() == remaining {
            let start = entries.len();
            for (k, token) in keys[start..].iter().zip(tokens.iter()) {
                entries.push((k.clone(), parse_scalar(token)));
            }
            cur += 1;
        } else if tokens.len() == 1 {
            entries.push((key.clone(), parse_scalar(&tokens[0])));
            cur += 1;
        } else {
            return Err(ToonError::KeyValueCountMismatch {
                line: line.no,
                keys: remaining,
                values: tokens.len(),
            });
        }
    }

    Ok((Value::Object(entries), cur))
}

/// Split a keys line: drop the trailing `;`, split on commas, trim. Any
/// spacing around the comma is tolerated.
fn split_keys(text: &str) -> Vec<String> {
    let body = text.strip_suffix(';').unwrap_or(text);
    body.split(',').map(|key| key.trim().to_string()).collect()
}

/// Split a row line into raw value tokens. A backslash escapes the next
/// character, an unescaped `"` toggles the in-quotes state, and an unescaped
/// `,` outside quotes ends the current token. Escapes and quotes stay in the
/// token for [`parse_scalar`] to interpret.
fn split_row(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                current.push('\\');
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push('"');
            }
            ',' if !in_quotes => {
                tokens.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    tokens.push(current.trim().to_string());
    tokens
}

/// Interpret one scalar token. Unquoted free text is a valid string,
/// internal spaces included; only `null`, booleans, numeric literals, and a
/// full `"…"` wrap mean anything else.
fn parse_scalar(token: &str) -> Value {
    let t = token.trim();
    match t {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if t.len() >= 2 && t.starts_with('"') && t.ends_with('"') {
        return Value::String(unescape(&t[1..t.len() - 1]));
    }
    if let Some(number) = parse_number(t) {
        return number;
    }
    Value::String(t.to_string())
}

/// A numeric literal: optional leading `-`, digits, at most one interior
/// `.`. A `.` makes it a float; anything else (exponents, hex, stray
/// characters) stays free text. Integers too wide for `i64` fall back to
/// `f64`.
fn parse_number(t: &str) -> Option<Value> {
    let digits = t.strip_prefix('-').unwrap_or(t);
    if digits.is_empty() || digits.starts_with('.') || digits.ends_with('.') {
        return None;
    }
    let mut dots = 0;
    for b in digits.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' => dots += 1,
            _ => return None,
        }
    }
    if dots > 1 {
        return None;
    }
    if dots == 1 {
        t.parse::<f64>().ok().map(Value::Float)
    } else {
        match t.parse::<i64>() {
            Ok(i) => Some(Value::Integer(i)),
            Err(_) => t.parse::<f64>().ok().map(Value::Float),
        }
    }
}

/// Reverse the encoder's escaping: `\X` becomes `X` for any character.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

//! TOON encoder — renders a [`Value`] tree as keys-line / block notation.
//!
//! The encoder walks the value tree recursively and emits complete output
//! lines, joined at the end with the configured line terminator:
//!
//! - **Objects** become one keys line (`key, key;`) followed by a single
//!   packed value line when every value is scalar, or by one value per
//!   output unit — with array values expanded into named blocks — when any
//!   value is array-shaped. Output order always follows key order.
//! - **Arrays** become a size-tagged block (`name[N]{` … `}`). Uniform
//!   arrays of scalar-valued objects share one key header and emit one row
//!   per element; anything else emits elements one at a time, nested arrays
//!   under the default name `array`.
//! - **Strings** are only quoted when they contain a structural delimiter
//!   (`, ; { } [ ]`); spaces alone never force quoting.
//!
//! # Example
//! ```
//! use toontab_core::{encode_json, FormatConfig};
//!
//! let json = r#"{"id":1,"name":"Test Product","price":99.99}"#;
//! let toon = encode_json(json, &FormatConfig::default()).unwrap();
//! assert_eq!(toon, "id, name, price;\n1, Test Product, 99.99");
//! ```

use crate::config::FormatConfig;
use crate::error::Result;
use crate::types::Value;

/// Characters that force a string into quoted form.
const DELIMITERS: &[char] = &[',', ';', '{', '}', '[', ']'];

/// Encode a value as TOON text under the given formatting options.
///
/// Never fails: every `Value` has a text rendering.
pub fn encode(value: &Value, config: &FormatConfig) -> String {
    let mut lines = Vec::new();
    encode_node(value, 0, None, config, &mut lines);
    lines.join(&config.line_break)
}

/// Parse a JSON document and encode the resulting tree.
///
/// Returns [`crate::ToonError::InvalidJson`] when the input is not JSON;
/// encoding itself cannot fail.
pub fn encode_json(json: &str, config: &FormatConfig) -> Result<String> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(encode(&Value::from(parsed), config))
}

/// Dispatch one node: non-empty objects, array-shaped values (arrays and
/// empty objects), or a scalar on its own indented line.
fn encode_node(
    value: &Value,
    level: usize,
    name: Option<&str>,
    config: &FormatConfig,
    out: &mut Vec<String>,
) {
    match value {
        Value::Object(entries) if !entries.is_empty() => {
            encode_object(entries, level, config, out);
        }
        _ if value.is_block() => {
            encode_array(value.block_items(), level, name, config, out);
        }
        scalar => {
            out.push(format!(
                "{}{}",
                config.indent(level),
                inline_value(scalar, level, config)
            ));
        }
    }
}

/// Emit an object: keys line, then values.
///
/// With no array-shaped values everything packs onto a single line. With at
/// least one, values are emitted one per output unit in key order so that
/// each array block lands directly under its key — the decoder re-associates
/// blocks with keys by name.
fn encode_object(
    entries: &[(String, Value)],
    level: usize,
    config: &FormatConfig,
    out: &mut Vec<String>,
) {
    let indent = config.indent(level);
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    out.push(format!("{}{};", indent, keys.join(config.separator())));

    if entries.iter().any(|(_, v)| v.is_block()) {
        for (key, value) in entries {
            if value.is_block() {
                encode_array(value.block_items(), level, Some(key.as_str()), config, out);
            } else {
                encode_node(value, level, None, config, out);
            }
        }
    } else {
        let values: Vec<String> = entries
            .iter()
            .map(|(_, v)| inline_value(v, level, config))
            .collect();
        out.push(format!("{}{}", indent, values.join(config.separator())));
    }
}

/// Emit an array block: `name[N]{`, interior one indent level deeper, `}`.
fn encode_array(
    items: &[Value],
    level: usize,
    name: Option<&str>,
    config: &FormatConfig,
    out: &mut Vec<String>,
) {
    let name = name.unwrap_or("array");
    out.push(format!(
        "{}{}[{}]{{",
        config.indent(level),
        name,
        items.len()
    ));
    let interior = config.indent(level + 1);

    if let Some(keys) = table_keys(items) {
        // shared key header from element 0, then one row per element
        out.push(format!("{}{};", interior, keys.join(config.separator())));
        for item in items {
            let cells: Vec<String> = keys
                .iter()
                .map(|&key| match item.get(key) {
                    Some(value) => inline_value(value, level, config),
                    None => "null".to_string(),
                })
                .collect();
            out.push(format!("{}{}", interior, cells.join(config.separator())));
        }
    } else {
        for item in items {
            encode_node(item, level + 1, None, config, out);
        }
    }

    out.push(format!("{}}}", config.indent(level)));
}

/// Shared-header table detection: every element must be a non-empty object
/// with scalar-only values. Keys come from element 0; later rows fill
/// missing keys with `null`, and keys absent from element 0 are not emitted.
fn table_keys(items: &[Value]) -> Option<Vec<&str>> {
    let first = match items.first() {
        Some(Value::Object(entries)) if !entries.is_empty() => entries,
        _ => return None,
    };
    for item in items {
        match item {
            Value::Object(entries) if !entries.is_empty() => {
                if entries
                    .iter()
                    .any(|(_, v)| matches!(v, Value::Array(_) | Value::Object(_)))
                {
                    return None;
                }
            }
            _ => return None,
        }
    }
    Some(first.iter().map(|(k, _)| k.as_str()).collect())
}

/// Render a value as an inline fragment. Scalars become a single token; a
/// non-empty object value embeds its own lines (it interleaves with the
/// surrounding output exactly as its block form would); an array-shaped
/// value embeds an anonymous block.
fn inline_value(value: &Value, level: usize, config: &FormatConfig) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) => escape(s),
        Value::Object(entries) if !entries.is_empty() => {
            let mut lines = Vec::new();
            encode_object(entries, level, config, &mut lines);
            lines.join(&config.line_break)
        }
        Value::Array(_) | Value::Object(_) => {
            let mut lines = Vec::new();
            encode_array(value.block_items(), level, None, config, &mut lines);
            lines.join(&config.line_break)
        }
    }
}

/// Canonical decimal text for a float: `-0` normalizes to `0`, non-finite
/// values have no literal and render as `null`. `Display` on `f64` already
/// avoids exponents and trailing fractional zeros.
fn format_float(f: f64) -> String {
    if f.is_nan() || f.is_infinite() {
        return "null".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    format!("{}", f)
}

/// Quote a string only when it contains a structural delimiter, escaping
/// `\` and `"` with a backslash. Leading and trailing spaces survive
/// unquoted.
fn escape(s: &str) -> String {
    if !s.contains(DELIMITERS) {
        return s.to_string();
    }
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        if ch == '\\' || ch == '"' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

//! Canonical re-serialization of a document tree.
//!
//! Objects and arrays are laid out with 2-space indentation per nesting
//! depth, comma-separated with no trailing comma; empty collections render
//! as `{}` / `[]` on one line. Strings are emitted verbatim between quotes
//! (the parser keeps raw spans, so nothing is re-escaped). Floats always
//! carry a fraction or exponent so the float kind survives a re-parse.

use crate::types::{JsonArray, JsonObject, JsonValue};
use std::fmt;

/// Render a value as canonical formatted text.
pub fn print(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

/// Render an object as canonical formatted text.
pub fn print_object(object: &JsonObject) -> String {
    let mut out = String::new();
    write_object(object, 0, &mut out);
    out
}

/// Render an array as canonical formatted text.
pub fn print_array(array: &JsonArray) -> String {
    let mut out = String::new();
    write_array(array, 0, &mut out);
    out
}

fn write_value(value: &JsonValue, depth: usize, out: &mut String) {
    match value {
        JsonValue::Object(object) => write_object(object, depth, out),
        JsonValue::Array(array) => write_array(array, depth, out),
        JsonValue::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        JsonValue::Integer(n) => out.push_str(&n.to_string()),
        JsonValue::Float(f) => out.push_str(&format_float(*f)),
        JsonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        JsonValue::Null => out.push_str("null"),
    }
}

fn write_object(object: &JsonObject, depth: usize, out: &mut String) {
    if object.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{\n");
    let inner = make_indent(depth + 1);
    for (i, member) in object.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&inner);
        out.push('"');
        out.push_str(&member.key);
        out.push_str("\": ");
        write_value(&member.value, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(depth));
    out.push('}');
}

fn write_array(array: &JsonArray, depth: usize, out: &mut String) {
    if array.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    let inner = make_indent(depth + 1);
    for (i, value) in array.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&inner);
        write_value(value, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(depth));
    out.push(']');
}

/// Floats keep a fraction or exponent so a re-parse classifies them as
/// floats again; non-finite values have no JSON spelling and render as null.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let s = f.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{s}.0")
    }
}

/// 2-space-per-level indentation.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print(self))
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_object(self))
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_array(self))
    }
}

//! Recursive-descent parser for JSON documents.
//!
//! The grammar is driven one significant character at a time over the
//! [`Cursor`]: the value rule peeks a single character and routes to the
//! object, array, string, number, or literal sub-parser, with no
//! backtracking across alternatives.
//!
//! # Grammar notes
//!
//! - The root of a document must be an object; after it closes, only
//!   whitespace may remain (`Excess characters` otherwise).
//! - `true`/`false`/`null` are matched by exact character count; a mismatch
//!   is an error, never an attempt at a different literal.
//! - A string is the raw span strictly between two quote characters.
//!   Escape sequences are not decoded, so a backslash has no special
//!   meaning and `\"` ends the scan at the quote.
//! - Object members are re-ordered into ascending key order once the
//!   member loop finishes; arrays keep source order.
//!
//! Errors abort the whole parse and propagate as [`JsonError`] with the
//! 1-based line where parsing stopped. Partially built collections on the
//! failing path are released by ownership before the error reaches the
//! caller.

use crate::cursor::Cursor;
use crate::error::{JsonError, Result};
use crate::number;
use crate::types::{JsonArray, JsonMember, JsonObject, JsonValue};
use std::path::Path;

/// Read and parse a JSON document file.
///
/// Fails on open/read failure, any syntax error, or non-whitespace trailing
/// content. Diagnostics carry the file path and the line where parsing
/// stopped.
pub fn read(path: impl AsRef<Path>) -> Result<JsonObject> {
    let path = path.as_ref().display().to_string();
    let text = std::fs::read_to_string(&path).map_err(|source| JsonError::Io {
        path: path.clone(),
        source,
    })?;
    parse(&text).map_err(|e| e.in_file(&path))
}

/// Parse a JSON document from an in-memory string.
///
/// Same contract as [`read`]: the root must be an object and nothing but
/// whitespace may follow it.
pub fn parse(input: &str) -> Result<JsonObject> {
    let mut cursor = Cursor::new(input);
    let object = parse_object(&mut cursor)?;
    if cursor.next_nonspace().is_some() {
        return Err(syntax(&cursor, "Excess characters"));
    }
    Ok(object)
}

fn parse_object(cursor: &mut Cursor<'_>) -> Result<JsonObject> {
    match cursor.next_nonspace() {
        Some('{') => {}
        None => return Err(syntax(cursor, "Expected '{'")),
        Some('}') => return Err(syntax(cursor, "Missing '{'")),
        Some(_) => return Err(syntax(cursor, "Unexpected character before '{'")),
    }

    // The empty object short-circuits before the member loop.
    if cursor.peek_nonspace() == Some('}') {
        cursor.next_nonspace();
        return Ok(JsonObject::default());
    }

    let mut members = Vec::new();
    loop {
        members.push(parse_member(cursor)?);
        match cursor.next_nonspace() {
            Some(',') => continue,
            Some('}') => break,
            Some(_) => return Err(syntax(cursor, "Expected ',' or '}'")),
            None => return Err(syntax(cursor, "Expected '}'")),
        }
    }

    Ok(JsonObject::from_members(members))
}

fn parse_member(cursor: &mut Cursor<'_>) -> Result<JsonMember> {
    let key = parse_string(cursor)?;
    match cursor.next_nonspace() {
        Some(':') => {}
        _ => return Err(syntax(cursor, "Missing colon")),
    }
    let value = parse_value(cursor)?;
    Ok(JsonMember { key, value })
}

fn parse_array(cursor: &mut Cursor<'_>) -> Result<JsonArray> {
    match cursor.next_nonspace() {
        Some('[') => {}
        _ => return Err(syntax(cursor, "Expected '['")),
    }

    if cursor.peek_nonspace() == Some(']') {
        cursor.next_nonspace();
        return Ok(JsonArray::default());
    }

    let mut values = Vec::new();
    loop {
        values.push(parse_value(cursor)?);
        match cursor.next_nonspace() {
            Some(',') => continue,
            Some(']') => break,
            Some(_) => return Err(syntax(cursor, "Expected ',' or ']'")),
            None => return Err(syntax(cursor, "Expected ']'")),
        }
    }

    Ok(JsonArray::from_values(values))
}

/// Dispatch on the next significant character.
fn parse_value(cursor: &mut Cursor<'_>) -> Result<JsonValue> {
    match cursor.peek_nonspace() {
        Some('{') => Ok(JsonValue::Object(parse_object(cursor)?)),
        Some('[') => Ok(JsonValue::Array(parse_array(cursor)?)),
        Some('"') => Ok(JsonValue::String(parse_string(cursor)?)),
        Some('-') | Some('0'..='9') => number::scan(cursor),
        Some('t') => parse_literal(cursor, "true", JsonValue::Bool(true)),
        Some('f') => parse_literal(cursor, "false", JsonValue::Bool(false)),
        Some('n') => parse_literal(cursor, "null", JsonValue::Null),
        _ => Err(syntax(cursor, "Invalid value")),
    }
}

fn parse_string(cursor: &mut Cursor<'_>) -> Result<String> {
    match cursor.next_nonspace() {
        Some('"') => {}
        _ => return Err(syntax(cursor, "Expected '\"'")),
    }
    let mut text = String::new();
    loop {
        match cursor.next() {
            Some('"') => return Ok(text),
            Some(c) => text.push(c),
            None => return Err(syntax(cursor, "Missing closing quote")),
        }
    }
}

fn parse_literal(cursor: &mut Cursor<'_>, literal: &str, value: JsonValue) -> Result<JsonValue> {
    for expected in literal.chars() {
        match cursor.next() {
            Some(c) if c == expected => {}
            _ => return Err(syntax(cursor, "Invalid literal")),
        }
    }
    Ok(value)
}

fn syntax(cursor: &Cursor<'_>, message: &str) -> JsonError {
    JsonError::Syntax {
        line: cursor.line(),
        message: message.to_string(),
    }
}

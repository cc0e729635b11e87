//! # jtree-core
//!
//! Parser and canonical printer for JSON documents, built around a
//! character-level cursor with line tracking, an explicit finite-state
//! scanner for number tokens, and a recursive-descent grammar parser.
//!
//! A parsed document is an immutable tree: objects hold their members
//! sorted by key so lookup is a binary search, arrays preserve source
//! order, and integers and floats are distinct kinds. Dropping the root
//! releases the whole tree.
//!
//! ## Quick start
//!
//! ```rust
//! use jtree_core::{parse, JsonKind};
//!
//! let doc = parse(r#"{"name": "Alice", "scores": [95, 87, 92]}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(doc.get("scores").map(|v| v.kind()), Some(JsonKind::Array));
//!
//! let scores = doc.get("scores").and_then(|v| v.as_array()).unwrap();
//! assert_eq!(scores.get(0).and_then(|v| v.as_int()), Some(95));
//!
//! // Failures carry the 1-based line of the diagnostic.
//! let err = parse("{\n\"a\": 1").unwrap_err();
//! assert_eq!(err.line(), Some(2));
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — [`read`] (file) and [`parse`] (string) entry points
//! - [`printer`] — canonical text rendering
//! - [`types`] — the [`JsonValue`] document tree
//! - [`error`] — diagnostics with line numbers

mod cursor;
mod number;
mod ser;

pub mod error;
pub mod parser;
pub mod printer;
pub mod types;

pub use error::{JsonError, Result};
pub use parser::{parse, read};
pub use printer::{print, print_array, print_object};
pub use types::{JsonArray, JsonKind, JsonMember, JsonObject, JsonValue};

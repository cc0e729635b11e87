//! `jtree` CLI — parse, check, and query JSON document files.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a document and print its canonical form (keys sorted)
//! jtree print -i data.json
//!
//! # Canonicalize stdin to a file
//! cat data.json | jtree print -o canonical.json
//!
//! # Re-emit through serde_json as pretty-printed JSON
//! jtree print -i data.json --json
//!
//! # Validate a document; non-zero exit and a line diagnostic on failure
//! jtree check -i data.json
//!
//! # Look up a dotted path of object keys and array indices
//! jtree get users.0.name -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jtree_core::{JsonObject, JsonValue};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jtree",
    version,
    about = "JSON document parser and query tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print its canonical form
    Print {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Re-emit through serde_json as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a document and report success or the diagnostic
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Look up a dotted path and print the value found there
    Get {
        /// Path of object keys and array indices, e.g. `users.0.name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            input,
            output,
            json,
        } => {
            let doc = load_document(input.as_deref())?;
            let rendered = if json {
                serde_json::to_string_pretty(&doc).context("Failed to re-emit document as JSON")?
            } else {
                jtree_core::print_object(&doc)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let doc = load_document(input.as_deref())?;
            println!("ok: root object with {} member(s)", doc.len());
        }
        Commands::Get { path, input } => {
            let doc = load_document(input.as_deref())?;
            let value = lookup_path(&doc, &path)?;
            println!("{}", value);
        }
    }

    Ok(())
}

/// Parse from a file path (so diagnostics carry the path) or from stdin.
fn load_document(input: Option<&str>) -> Result<JsonObject> {
    match input {
        Some(path) => {
            jtree_core::read(path).with_context(|| format!("Failed to parse {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            jtree_core::parse(&buf).context("Failed to parse stdin")
        }
    }
}

/// Walk a dotted path: each segment is an object key, or an array index
/// when the current value is an array and the segment parses as one.
fn lookup_path<'a>(root: &'a JsonObject, path: &str) -> Result<&'a JsonValue> {
    let mut current: Option<&JsonValue> = None;
    for segment in path.split('.') {
        let next = match current {
            None => root.get(segment),
            Some(JsonValue::Object(object)) => object.get(segment),
            Some(JsonValue::Array(array)) => match segment.parse::<usize>() {
                Ok(idx) => array.get(idx),
                Err(_) => None,
            },
            Some(_) => None,
        };
        current =
            Some(next.with_context(|| format!("No value at path segment '{}'", segment))?);
    }
    current.context("Empty path")
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

//! Error types for document reading and parsing.

use thiserror::Error;

/// Errors produced while reading or parsing a JSON document.
///
/// Syntax diagnostics carry the 1-based line number where parsing stopped
/// and a short fixed message naming the violated expectation. A failure at
/// any nesting level aborts the whole parse; there is no recovery or retry.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The document file could not be opened or read.
    #[error("error reading json file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A syntax error in an in-memory document.
    #[error("[{line}]: {message}")]
    Syntax { line: usize, message: String },

    /// A syntax error in a named document file.
    #[error("{path} [{line}]: {message}")]
    File {
        path: String,
        line: usize,
        message: String,
    },
}

impl JsonError {
    /// Attach a file path to a bare syntax diagnostic. `Io` and `File`
    /// already carry their path and pass through unchanged.
    pub(crate) fn in_file(self, path: &str) -> Self {
        match self {
            JsonError::Syntax { line, message } => JsonError::File {
                path: path.to_string(),
                line,
                message,
            },
            other => other,
        }
    }

    /// The 1-based line number of a syntax diagnostic, if there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            JsonError::Syntax { line, .. } | JsonError::File { line, .. } => Some(*line),
            JsonError::Io { .. } => None,
        }
    }
}

/// Convenience alias used throughout jtree-core.
pub type Result<T> = std::result::Result<T, JsonError>;

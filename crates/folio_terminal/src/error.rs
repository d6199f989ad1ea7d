//! Error types for the portfolio terminal.
//!
//! Interpreter outcomes (unknown commands, wrong puzzle answers) are never
//! errors. These types cover the edges only: loading a catalog, talking to
//! the line editor, and parsing command-line arguments.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for terminal operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an invalid catalog error.
    #[must_use]
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCatalog(reason.into()))
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates a command-line usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid TOML or does not match the schema.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// A catalog parsed but violates a structural rule.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::new(ErrorKind::CatalogParse(err))
    }
}

/// Result type alias for terminal operations.
pub type Result<T> = std::result::Result<T, Error>;

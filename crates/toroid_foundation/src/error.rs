//! Error types for the Toroid system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! These errors cover host-level failures only (loading files, decoding
//! source, parsing session commands). A Funge program never sees them:
//! language-level failures are expressed by reflecting the offending
//! instruction pointer.

use std::fmt;

use thiserror::Error;

use crate::vector::Vector;

/// The main error type for Toroid operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an encoding error.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encoding(message.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a host file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Source text could not be decoded or encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// State could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An interactive session command was not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command or configuration argument was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file being processed.
    pub source: Option<String>,
    /// FungeSpace position involved, if any.
    pub position: Option<Vector>,
    /// Instruction pointer id involved, if any.
    pub ip: Option<u64>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the FungeSpace position.
    #[must_use]
    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the instruction pointer id.
    #[must_use]
    pub fn with_ip(mut self, ip: u64) -> Self {
        self.ip = Some(ip);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        if let Some(ip) = self.ip {
            write!(f, " (ip {ip})")?;
        }
        Ok(())
    }
}

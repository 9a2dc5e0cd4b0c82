//! Error types for the Tealeaf system.
//!
//! Uses `thiserror` for ergonomic error definition. A failed evaluation
//! unwinds to the nearest caller that catches it; the engine performs no
//! retries and no partial recovery.

use thiserror::Error;

use crate::types::Type;
use crate::value::Value;

/// The main error type for Tealeaf operations.
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

    /// Creates the recoverable "nothing to evaluate" error for blank input.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates a parse error at a source position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates an unbound symbol error.
    #[must_use]
    pub fn unbound_symbol(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundSymbol(name.into()))
    }

    /// Creates a type mismatch error.
    ///
    /// `expected` is a description such as `"number"` or `"list or vector"`.
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected: expected.into(),
            actual,
        })
    }

    /// Creates an arity error for a form or builtin given the wrong
    /// number of elements.
    #[must_use]
    pub fn arity(what: impl Into<String>, expected: impl Into<String>, actual: usize) -> Self {
        Self::new(ErrorKind::Arity {
            what: what.into(),
            expected: expected.into(),
            actual,
        })
    }

    /// Creates a not-callable error for application of a non-function.
    #[must_use]
    pub fn not_callable(actual: Type) -> Self {
        Self::new(ErrorKind::NotCallable(actual))
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: i64, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an error carrying a user-thrown value.
    #[must_use]
    pub fn thrown(value: Value) -> Self {
        Self::new(ErrorKind::Thrown(value))
    }

    /// Creates an I/O error from a host-environment failure.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this is the recoverable empty-input case.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyInput)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Tokenization yielded zero tokens (blank line at a prompt).
    ///
    /// Distinct from [`ErrorKind::Parse`] so callers can treat it as a
    /// silent no-op instead of a real mistake.
    #[error("empty input")]
    EmptyInput,

    /// Malformed token stream, unterminated string, unbalanced brackets.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// Symbol resolved against the environment chain and missed.
    #[error("'{0}' not found")]
    UnboundSymbol(String),

    /// Operation received a value of the wrong variant.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Description of the expected variant(s).
        expected: String,
        /// The actual type encountered.
        actual: Type,
    },

    /// Special form or builtin given too few (or too many) elements.
    #[error("{what}: expected {expected}, got {actual}")]
    Arity {
        /// The form or function name.
        what: String,
        /// Description of the expected arity.
        expected: String,
        /// Actual number of arguments.
        actual: usize,
    },

    /// Application targeted a non-function.
    #[error("not callable: {0}")]
    NotCallable(Type),

    /// Sequence index out of range.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: i64,
        /// The actual length of the sequence.
        length: usize,
    },

    /// A value raised by the `throw` builtin.
    #[error("uncaught exception: {0}")]
    Thrown(Value),

    /// Host-environment I/O failure (e.g. `slurp`).
    #[error("io error: {0}")]
    Io(String),
}

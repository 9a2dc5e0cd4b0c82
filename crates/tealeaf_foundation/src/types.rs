//! Runtime type descriptors.
//!
//! Every type-mismatch error names the variant it got and the variant it
//! expected; [`Type`] is the vocabulary those messages are written in.

use std::fmt;

/// The runtime type of a [`crate::Value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// The nil value.
    Nil,
    /// Boolean value.
    Boolean,
    /// Double-precision number.
    Number,
    /// String value.
    String,
    /// Interned symbol.
    Symbol,
    /// Interned keyword (`:name`).
    Keyword,
    /// Proper list `(a b c)`.
    List,
    /// Vector `[a b c]`.
    Vector,
    /// Hash-map with string and keyword keys.
    Map,
    /// Native builtin or user closure.
    Function,
    /// Mutable reference cell.
    Atom,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Keyword => "keyword",
            Self::List => "list",
            Self::Vector => "vector",
            Self::Map => "hash-map",
            Self::Function => "function",
            Self::Atom => "atom",
        };
        write!(f, "{name}")
    }
}

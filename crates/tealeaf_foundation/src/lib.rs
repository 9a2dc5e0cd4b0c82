//! Core value model, interning, environments, and errors for Tealeaf.
//!
//! This crate provides:
//! - [`Value`] - The tagged value type produced by the reader and evaluator
//! - [`SymbolId`] / [`KeywordId`] - Process-wide interned identifiers
//! - [`Env`] - Chained lexical scope frames with variadic binding
//! - [`Error`] - The error taxonomy shared by every layer
//! - [`ValueMap`] - The dual string/keyword keyed hash-map value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod env;
mod error;
mod intern;
mod map;
mod types;
mod value;

pub use env::Env;
pub use error::{Error, ErrorKind};
pub use intern::{
    KeywordId, SymbolId, intern_keyword, intern_symbol, keyword_name, symbol_name,
};
pub use map::ValueMap;
pub use types::Type;
pub use value::{Closure, Function, NativeFn, Value, ValueKind, format_number};

/// Standard result type for Tealeaf operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Tealeaf - a small Lisp-family language engine
//!
//! This crate re-exports all layers of the Tealeaf system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: tealeaf_runtime    — REPL and line editing
//!          tealeaf_stdlib     — Builtin library and registration
//! Layer 2: tealeaf_engine     — Tree-walking evaluator
//! Layer 1: tealeaf_language   — Lexer, reader, printer
//! Layer 0: tealeaf_foundation — Core types (Value, Env, Error, interning)
//! ```

pub use tealeaf_engine as engine;
pub use tealeaf_foundation as foundation;
pub use tealeaf_language as language;
pub use tealeaf_runtime as runtime;
pub use tealeaf_stdlib as stdlib;

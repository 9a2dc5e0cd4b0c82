//! REPL and CLI for Tealeaf.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over the global environment
//! - [`LineEditor`] - Swappable line-editing abstraction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod editor;
mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;

//! Tree-walking evaluator for the Tealeaf language.
//!
//! This crate provides:
//! - [`eval`] - Evaluation of a form against an environment
//! - [`apply_function`] - Function application, shared with host builtins

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod eval;

pub use eval::{apply_function, eval};

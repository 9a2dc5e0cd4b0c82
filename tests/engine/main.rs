//! Integration tests for the evaluation layer.
//!
//! Tests for environments and the evaluator.

mod env;
mod eval;

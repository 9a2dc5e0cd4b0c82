//! Integration tests for the language layer.
//!
//! Tests for lexer, reader, and printer.

mod lexer;
mod printer;
mod reader;

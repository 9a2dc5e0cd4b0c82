//! Lexer, reader, and printer for the Tealeaf language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of Tealeaf source
//! - [`read`] - Reading a token stream into a [`tealeaf_foundation::Value`]
//! - [`pr_str`] - Rendering values back to source text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod printer;
pub mod reader;
pub mod span;
pub mod token;


pub use lexer::Lexer;
pub use printer::{pr_seq, pr_str};
pub use reader::read;
pub use span::Span;
pub use token::{Token, TokenKind};

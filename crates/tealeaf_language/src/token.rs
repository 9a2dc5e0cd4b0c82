//! Token types for the Tealeaf language.
//!
//! Tokens are the output of the lexer and input to the reader. The lexer
//! keeps bare tokens unclassified; the reader decides whether a bare
//! token is a number, a keyword, a named literal, or a symbol.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for the Tealeaf language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Reader-macro prefixes
    /// `'` for quote
    Quote,
    /// `` ` `` for quasiquote
    Quasiquote,
    /// `~` for unquote
    Unquote,
    /// `~@` for splice-unquote
    SpliceUnquote,
    /// `@` for deref
    Deref,
    /// `^` for metadata attachment
    Caret,

    /// String literal with escapes already processed.
    ///
    /// `terminated` is false when input ended before the closing quote;
    /// the reader turns that into a precise parse error.
    Str {
        /// The decoded string contents.
        value: String,
        /// Whether the closing `"` was present.
        terminated: bool,
    },

    /// A maximal run of bare characters; classified by the reader.
    Bare(String),

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Quote => "quote",
            Self::Quasiquote => "quasiquote",
            Self::Unquote => "unquote",
            Self::SpliceUnquote => "splice-unquote",
            Self::Deref => "deref",
            Self::Caret => "metadata marker",
            Self::Str { .. } => "string",
            Self::Bare(_) => "token",
            Self::Eof => "end of input",
        }
    }
}

//! Lexer for the Tealeaf language.
//!
//! The lexer converts source text into a stream of tokens in a single
//! forward scan. Whitespace and commas separate tokens and are dropped;
//! comments run from `;` to end of line and produce no tokens.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for Tealeaf source code.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '[' => {
                self.advance();
                TokenKind::LBracket
            }
            ']' => {
                self.advance();
                TokenKind::RBracket
            }
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            '\'' => {
                self.advance();
                TokenKind::Quote
            }
            '`' => {
                self.advance();
                TokenKind::Quasiquote
            }
            '~' => {
                // `~@` wins over `~` when both match.
                self.advance();
                if self.peek_char() == Some('@') {
                    self.advance();
                    TokenKind::SpliceUnquote
                } else {
                    TokenKind::Unquote
                }
            }
            '@' => {
                self.advance();
                TokenKind::Deref
            }
            '^' => {
                self.advance();
                TokenKind::Caret
            }
            '"' => self.scan_string(),
            _ => self.scan_bare(),
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// The end-of-input sentinel is not included, so blank or
    /// comment-only source yields an empty vector.
    #[must_use]
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace, commas, and comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || c == ',' {
                // Commas are whitespace in Lisp-family syntax.
                self.advance();
            } else if c == ';' {
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Scans a string literal, decoding escapes as it goes.
    ///
    /// `\n` becomes a newline, `\"` a quote, `\\` a backslash; any other
    /// escaped character stands for itself. If input ends before the
    /// closing quote the token is marked unterminated.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return TokenKind::Str {
                        value,
                        terminated: false,
                    };
                }
                Some('"') => {
                    self.advance();
                    return TokenKind::Str {
                        value,
                        terminated: true,
                    };
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        None => {
                            return TokenKind::Str {
                                value,
                                terminated: false,
                            };
                        }
                        Some('n') => {
                            value.push('\n');
                            self.advance();
                        }
                        Some(c) => {
                            value.push(c);
                            self.advance();
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Scans a maximal run of bare characters.
    fn scan_bare(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if is_bare_terminator(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Bare(text)
    }
}

/// Returns true if the character ends a bare token.
///
/// `~`, `^`, and `@` start their own tokens but are legal inside a bare
/// run once it has begun.
fn is_bare_terminator(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, ',' | '(' | ')' | '[' | ']' | '{' | '}' | '\'' | '"' | '`' | ';')
}

//! Reader: tokens to values.
//!
//! The reader classifies bare tokens, assembles composite forms, and
//! desugars reader macros into plain list forms. There is no separate
//! syntax tree; the reader produces the same values the evaluator
//! consumes, so code is data from the first step.

use tealeaf_foundation::{
    Error, Result, Value, ValueMap, intern_keyword, intern_symbol,
};

use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Reads a single form from source text.
///
/// Trailing tokens after the first complete form are ignored.
///
/// # Errors
///
/// Fails with the recoverable empty-input error when the source holds no
/// tokens (blank or comment-only), and with a parse error for malformed
/// input: unterminated strings, unbalanced brackets, or a reader-macro
/// prefix with nothing to apply to.
pub fn read(source: &str) -> Result<Value> {
    let tokens = Lexer::tokenize(source);
    if tokens.is_empty() {
        return Err(Error::empty_input());
    }
    Reader::new(tokens).read_form()
}

/// Cursor over a token stream.
struct Reader {
    tokens: Vec<Token>,
    position: usize,
}

impl Reader {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Span to report when the stream runs out mid-form.
    fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map_or_else(Span::at_start, |token| token.span)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Reads one complete form.
    fn read_form(&mut self) -> Result<Value> {
        let Some(token) = self.next() else {
            let span = self.end_span();
            return Err(Error::parse(
                "unexpected end of input",
                span.line,
                span.column,
            ));
        };
        match token.kind {
            TokenKind::LParen => {
                let items = self.read_seq(&TokenKind::RParen)?;
                Ok(Value::list(items))
            }
            TokenKind::LBracket => {
                let items = self.read_seq(&TokenKind::RBracket)?;
                Ok(Value::vector(items))
            }
            TokenKind::LBrace => {
                let items = self.read_seq(&TokenKind::RBrace)?;
                Ok(Value::map(ValueMap::from_flat(items)?))
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => Err(Error::parse(
                format!("unexpected {}", token.kind.name()),
                token.span.line,
                token.span.column,
            )),
            TokenKind::Quote => self.read_wrapped("quote"),
            TokenKind::Quasiquote => self.read_wrapped("quasiquote"),
            TokenKind::Unquote => self.read_wrapped("unquote"),
            TokenKind::SpliceUnquote => self.read_wrapped("splice-unquote"),
            TokenKind::Deref => self.read_wrapped("deref"),
            TokenKind::Caret => {
                // ^meta form desugars with the operands swapped.
                let meta = self.read_form()?;
                let target = self.read_form()?;
                Ok(Value::list([
                    Value::symbol(intern_symbol("with-meta")),
                    target,
                    meta,
                ]))
            }
            TokenKind::Str { value, terminated } => {
                if terminated {
                    Ok(Value::string(value))
                } else {
                    Err(Error::parse(
                        "unterminated string",
                        token.span.line,
                        token.span.column,
                    ))
                }
            }
            TokenKind::Bare(text) => Ok(classify_bare(&text)),
            TokenKind::Eof => unreachable!("eof sentinel is never collected"),
        }
    }

    /// Reads forms until the closing delimiter.
    fn read_seq(&mut self, close: &TokenKind) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                let span = self.end_span();
                return Err(Error::parse(
                    format!("expected {}, got end of input", close.name()),
                    span.line,
                    span.column,
                ));
            };
            if token.kind == *close {
                self.position += 1;
                return Ok(items);
            }
            items.push(self.read_form()?);
        }
    }

    /// Reads one form and wraps it as `(name form)`.
    fn read_wrapped(&mut self, name: &str) -> Result<Value> {
        let form = self.read_form()?;
        Ok(Value::list([Value::symbol(intern_symbol(name)), form]))
    }
}

/// Classifies a bare token into a scalar value.
///
/// Number classification is deliberately narrow: an optional leading `-`
/// followed by digits, with at most one interior `.` (digits required on
/// both sides). Everything else that is not a keyword or named literal
/// reads as a symbol, so `+5` and `1.2.3` are symbols.
fn classify_bare(text: &str) -> Value {
    if let Some(n) = parse_number(text) {
        return Value::number(n);
    }
    if let Some(name) = text.strip_prefix(':') {
        return Value::keyword(intern_keyword(name));
    }
    match text {
        "nil" => Value::nil(),
        "true" => Value::bool(true),
        "false" => Value::bool(false),
        _ => Value::symbol(intern_symbol(text)),
    }
}

/// Parses an integer or decimal literal; `None` means "not a number".
fn parse_number(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }
    text.parse().ok()
}

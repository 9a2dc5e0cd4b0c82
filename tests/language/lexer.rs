//! Integration tests for the lexer.

use tealeaf_language::{Lexer, TokenKind};

// =============================================================================
// Token Counts
// =============================================================================

#[test]
fn nested_call_has_nine_tokens() {
    assert_eq!(Lexer::tokenize("(+ 2 (* 3 4))").len(), 9);
}

#[test]
fn splice_unquote_is_a_single_token() {
    let tokens = Lexer::tokenize("  ~@");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::SpliceUnquote);
}

#[test]
fn comment_only_input_has_zero_tokens() {
    assert_eq!(Lexer::tokenize("; nothing here").len(), 0);
    assert_eq!(Lexer::tokenize("").len(), 0);
    assert_eq!(Lexer::tokenize("  \t\n").len(), 0);
}

// =============================================================================
// Token Classes
// =============================================================================

#[test]
fn every_bracket_is_its_own_token() {
    let kinds: Vec<TokenKind> = Lexer::tokenize("()[]{}")
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn reader_macro_prefixes() {
    let kinds: Vec<TokenKind> = Lexer::tokenize("' ` ~ ~@ @ ^")
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Quote,
            TokenKind::Quasiquote,
            TokenKind::Unquote,
            TokenKind::SpliceUnquote,
            TokenKind::Deref,
            TokenKind::Caret,
        ]
    );
}

#[test]
fn bare_tokens_are_maximal_runs() {
    let tokens = Lexer::tokenize("foo-bar? :kw 12.5");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Bare("foo-bar?".to_string()));
    assert_eq!(tokens[1].kind, TokenKind::Bare(":kw".to_string()));
    assert_eq!(tokens[2].kind, TokenKind::Bare("12.5".to_string()));
}

#[test]
fn strings_keep_decoded_value() {
    let tokens = Lexer::tokenize(r#""line one\nline two""#);
    assert_eq!(
        tokens[0].kind,
        TokenKind::Str {
            value: "line one\nline two".to_string(),
            terminated: true,
        }
    );
}

#[test]
fn unterminated_string_is_flagged_not_dropped() {
    let tokens = Lexer::tokenize("(\"never ends");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(
        &tokens[1].kind,
        TokenKind::Str { terminated: false, .. }
    ));
}

#[test]
fn spans_report_positions() {
    let tokens = Lexer::tokenize("(foo\n bar)");
    assert_eq!(tokens[1].span.line, 1);
    assert_eq!(tokens[1].span.column, 2);
    assert_eq!(tokens[2].span.line, 2);
    assert_eq!(tokens[2].span.column, 2);
}

//! Integration tests for the reader.

use tealeaf_foundation::{ErrorKind, Value, ValueKind, intern_keyword, intern_symbol};
use tealeaf_language::read;

// =============================================================================
// Literal Classification
// =============================================================================

#[test]
fn reads_integers_and_decimals() {
    assert_eq!(read("0").unwrap(), Value::number(0.0));
    assert_eq!(read("-42").unwrap(), Value::number(-42.0));
    assert_eq!(read("3.125").unwrap(), Value::number(3.125));
    assert_eq!(read("-0.5").unwrap(), Value::number(-0.5));
}

#[test]
fn leading_plus_is_a_symbol() {
    assert_eq!(
        read("+5").unwrap(),
        Value::symbol(intern_symbol("+5"))
    );
}

#[test]
fn reads_named_literals() {
    assert!(read("nil").unwrap().is_nil());
    assert_eq!(read("true").unwrap(), Value::bool(true));
    assert_eq!(read("false").unwrap(), Value::bool(false));
}

#[test]
fn reads_keywords_without_colon_in_name() {
    let v = read(":current/page").unwrap();
    assert_eq!(v.as_keyword(), Some(intern_keyword("current/page")));
}

#[test]
fn interned_symbols_are_canonical() {
    let a = read("shared-name").unwrap();
    let b = read("shared-name").unwrap();
    assert_eq!(a.as_symbol(), b.as_symbol());
}

// =============================================================================
// Composite Forms
// =============================================================================

#[test]
fn reads_nested_composites() {
    let v = read("(a [1 2] {:k \"v\"})").unwrap();
    let items = v.as_seq().unwrap();
    assert_eq!(items.len(), 3);
    assert!(matches!(items[1].kind(), ValueKind::Vector(_)));
    assert!(matches!(items[2].kind(), ValueKind::Map(_)));
}

#[test]
fn strict_equality_distinguishes_list_and_vector() {
    let list = read("(1 2)").unwrap();
    let vector = read("[1 2]").unwrap();
    assert!(list.equals(&vector, false));
    assert!(!list.equals(&vector, true));
}

#[test]
fn map_equality_ignores_entry_order() {
    let a = read("{:x 1 :y 2}").unwrap();
    let b = read("{:y 2 :x 1}").unwrap();
    assert!(a.equals(&b, true));
}

#[test]
fn reader_macros_desugar_to_lists() {
    let quote = read("'(1 2)").unwrap();
    let items = quote.as_seq().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_symbol(), Some(intern_symbol("quote")));

    let meta = read("^{:m 1} [1]").unwrap();
    let items = meta.as_seq().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_symbol(), Some(intern_symbol("with-meta")));
    assert!(matches!(items[1].kind(), ValueKind::Vector(_)));
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn blank_input_is_the_recoverable_case() {
    let err = read("   ").unwrap_err();
    assert!(err.is_empty_input());
}

#[test]
fn syntax_errors_are_not_empty_input() {
    for source in ["(1 2", "[1", "{:a", "\"oops", "'"] {
        let err = read(source).unwrap_err();
        assert!(!err.is_empty_input(), "{source} should be a parse error");
        assert!(matches!(err.kind, ErrorKind::Parse { .. }));
    }
}

#[test]
fn parse_errors_carry_positions() {
    let err = read("\n\n  \"open").unwrap_err();
    match err.kind {
        ErrorKind::Parse { line, column, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, 3);
        }
        other => panic!("expected parse error, got {other}"),
    }
}

//! Integration tests for lexical environments.

use tealeaf_foundation::{Env, ErrorKind, SymbolId, Value, intern_symbol};

// =============================================================================
// Scope Chain
// =============================================================================

#[test]
fn lookup_walks_to_the_root() {
    let root = Env::new();
    let x = intern_symbol("deep-x");
    root.set(x, Value::number(1.0));

    let leaf = root.child().child().child();
    assert_eq!(leaf.get(x).unwrap().as_number(), Some(1.0));
}

#[test]
fn set_is_always_local() {
    let outer = Env::new();
    let x = intern_symbol("local-x");
    outer.set(x, Value::number(1.0));

    let inner = outer.child();
    inner.set(x, Value::number(2.0));

    // The outer binding is shadowed, not replaced.
    assert_eq!(outer.get(x).unwrap().as_number(), Some(1.0));
    assert_eq!(inner.get(x).unwrap().as_number(), Some(2.0));
}

#[test]
fn find_reports_the_defining_frame() {
    let outer = Env::new();
    let x = intern_symbol("find-x");
    outer.set(x, Value::nil());
    let inner = outer.child();

    let frame = inner.find(x).unwrap();
    assert!(frame.get(x).is_ok());
    assert!(inner.find(intern_symbol("find-absent")).is_none());
}

#[test]
fn missing_symbols_fail_with_unbound() {
    let env = Env::new();
    let err = env.get(intern_symbol("never-defined")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundSymbol(_)));
    assert_eq!(format!("{err}"), "'never-defined' not found");
}

// =============================================================================
// Parameter Binding
// =============================================================================

#[test]
fn positional_binding() {
    let outer = Env::new();
    let a = intern_symbol("a");
    let b = intern_symbol("b");
    let env = Env::bind(
        &outer,
        &[a, b],
        &[Value::number(1.0), Value::number(2.0)],
    )
    .unwrap();
    assert_eq!(env.get(a).unwrap().as_number(), Some(1.0));
    assert_eq!(env.get(b).unwrap().as_number(), Some(2.0));
}

#[test]
fn rest_marker_collects_a_list() {
    let outer = Env::new();
    let a = intern_symbol("a");
    let rest = intern_symbol("rest");
    let env = Env::bind(
        &outer,
        &[a, SymbolId::REST, rest],
        &[
            Value::number(1.0),
            Value::number(2.0),
            Value::number(3.0),
        ],
    )
    .unwrap();

    let collected = env.get(rest).unwrap();
    assert!(collected.equals(
        &Value::list([Value::number(2.0), Value::number(3.0)]),
        true
    ));
}

#[test]
fn missing_positional_argument_fails() {
    let outer = Env::new();
    let err = Env::bind(&outer, &[intern_symbol("needed")], &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Arity { .. }));
}

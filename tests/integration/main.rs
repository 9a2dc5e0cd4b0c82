//! End-to-end tests: source text through the REPL pipeline.
//!
//! These tests drive the same read-eval-print path the CLI uses, with a
//! scripted editor instead of a terminal.

use tealeaf_foundation::{ErrorKind, Result, Value};
use tealeaf_runtime::{LineEditor, ReadResult, Repl};

/// Editor that never reads anything; tests call `rep` directly.
struct NullEditor;

impl LineEditor for NullEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}
}

fn repl() -> Repl<NullEditor> {
    Repl::with_editor(NullEditor).without_banner()
}

// =============================================================================
// Read-Eval-Print
// =============================================================================

#[test]
fn arithmetic_end_to_end() {
    let repl = repl();
    assert_eq!(repl.rep("(+ 2 (* 3 4))").unwrap(), "14");
}

#[test]
fn printed_results_are_readable() {
    let repl = repl();
    assert_eq!(repl.rep("(list 1 \"two\" :three)").unwrap(), "(1 \"two\" :three)");
    assert_eq!(repl.rep("{:a [1 2]}").unwrap(), "{:a [1 2]}");
}

#[test]
fn state_accumulates_across_lines() {
    let repl = repl();
    repl.rep("(def! base 10)").unwrap();
    repl.rep("(def! bump (fn* (n) (+ n base)))").unwrap();
    assert_eq!(repl.rep("(bump 5)").unwrap(), "15");
}

#[test]
fn blank_lines_are_silent_no_ops() {
    let repl = repl();
    assert!(repl.rep("").unwrap_err().is_empty_input());
    assert!(repl.rep("; thinking out loud").unwrap_err().is_empty_input());
}

// =============================================================================
// Library Behavior Through the Full Stack
// =============================================================================

#[test]
fn swap_twice_counts_to_two() {
    let repl = repl();
    repl.rep("(def! counter (atom 0))").unwrap();
    repl.rep("(swap! counter + 1)").unwrap();
    repl.rep("(swap! counter + 1)").unwrap();
    assert_eq!(repl.rep("(deref counter)").unwrap(), "2");
    // Another reference to the same atom observes the same value.
    repl.rep("(def! alias counter)").unwrap();
    assert_eq!(repl.rep("@alias").unwrap(), "2");
}

#[test]
fn assoc_never_mutates_the_receiver() {
    let repl = repl();
    repl.rep("(def! m {:a 1})").unwrap();
    assert_eq!(repl.rep("(assoc m \"k\" \"v\")").unwrap(), "{:a 1 \"k\" \"v\"}");
    assert_eq!(repl.rep("(contains? m \"k\")").unwrap(), "false");
}

#[test]
fn sequence_pipeline() {
    let repl = repl();
    repl.rep("(def! squares (map (fn* (n) (* n n)) [1 2 3 4]))").unwrap();
    assert_eq!(repl.rep("(take squares 2)").unwrap(), "(1 4)");
    assert_eq!(repl.rep("(reduce + squares 0)").unwrap(), "30");
    assert_eq!(
        repl.rep("(sort squares (fn* (a b) (- b a)))").unwrap(),
        "(16 9 4 1)"
    );
}

#[test]
fn metadata_survives_the_pipeline() {
    let repl = repl();
    repl.rep("(def! tagged ^{:source \"repl\"} [1 2])").unwrap();
    assert_eq!(repl.rep("(meta tagged)").unwrap(), "{:source \"repl\"}");
    assert_eq!(repl.rep("tagged").unwrap(), "[1 2]");
}

#[test]
fn thrown_values_surface_as_errors() {
    let repl = repl();
    let err = repl.rep("(throw {:code 7})").unwrap_err();
    match err.kind {
        ErrorKind::Thrown(v) => {
            assert!(v.as_map().is_some());
        }
        other => panic!("expected thrown value, got {other}"),
    }
}

// =============================================================================
// Host Extension Point
// =============================================================================

#[test]
fn hosts_register_builtins_like_the_core_does() {
    let repl = repl();
    tealeaf_stdlib::register(repl.env(), "twice", |args| {
        let n = args[0].as_number().unwrap_or(0.0);
        Ok(Value::number(n * 2.0))
    });
    assert_eq!(repl.rep("(twice 21)").unwrap(), "42");
}

#[test]
fn registered_extensions_compose_with_the_core() {
    let repl = repl();
    tealeaf_stdlib::register(repl.env(), "shout", |args| {
        let text = args[0].as_str().unwrap_or_default();
        Ok(Value::string(text.to_uppercase()))
    });
    assert_eq!(
        repl.rep("(map shout (split \"a,b\" \",\"))").unwrap(),
        "(\"A\" \"B\")"
    );
}

// =============================================================================
// Files and Scripts
// =============================================================================

#[test]
fn load_file_runs_every_form() {
    let dir = std::env::temp_dir().join("tealeaf-integration");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("lib.tl");
    std::fs::write(
        &path,
        "(def! greeting (fn* (name) (str \"hello \" name)))\n\
         (def! default-name \"world\")\n",
    )
    .unwrap();

    let repl = repl();
    repl.load_file(&path.display().to_string()).unwrap();
    assert_eq!(
        repl.rep("(greeting default-name)").unwrap(),
        "\"hello world\""
    );
}

#[test]
fn argv_reaches_scripts() {
    let repl = Repl::with_editor(NullEditor)
        .without_banner()
        .with_args(["alpha".to_string(), "beta".to_string()]);
    assert_eq!(repl.rep("(count *ARGV*)").unwrap(), "2");
    assert_eq!(repl.rep("(first *ARGV*)").unwrap(), "\"alpha\"");
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use proptest::prelude::*;

    use super::repl;

    proptest! {
        #[test]
        fn integer_sums_print_without_decimals(
            a in -100_000i64..100_000,
            b in -100_000i64..100_000,
        ) {
            let repl = repl();
            prop_assert_eq!(
                repl.rep(&format!("(+ {a} {b})")).unwrap(),
                (a + b).to_string()
            );
        }

        #[test]
        fn definitions_print_back_verbatim(n in -1_000_000i64..1_000_000) {
            let repl = repl();
            repl.rep(&format!("(def! seed {n})")).unwrap();
            prop_assert_eq!(repl.rep("seed").unwrap(), n.to_string());
        }
    }
}

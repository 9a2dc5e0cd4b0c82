//! Integration tests for the evaluator over the full builtin table.

use tealeaf_engine::eval;
use tealeaf_foundation::{Env, ErrorKind, Result, Value};
use tealeaf_language::{pr_str, read};

fn env() -> Env {
    let env = Env::new();
    tealeaf_stdlib::install(&env);
    env
}

fn eval_str(source: &str, env: &Env) -> Result<Value> {
    eval(&read(source).unwrap(), env)
}

fn printed(source: &str, env: &Env) -> String {
    pr_str(&eval_str(source, env).unwrap(), true)
}

// =============================================================================
// Special Forms
// =============================================================================

#[test]
fn def_binds_globally() {
    let env = env();
    assert_eq!(printed("(def! x 5)", &env), "5");
    assert_eq!(printed("x", &env), "5");
}

#[test]
fn let_later_bindings_see_earlier_ones() {
    let env = env();
    assert_eq!(printed("(let* (a 1 b (+ a 1)) (+ a b))", &env), "3");
}

#[test]
fn if_branch_selection() {
    let env = env();
    assert_eq!(printed("(if false 1 2)", &env), "2");
    assert_eq!(printed("(if nil 1)", &env), "nil");
    assert_eq!(printed("(if 0 1 2)", &env), "1");
}

#[test]
fn variadic_closure_binds_rest() {
    let env = env();
    eval_str("(def! keep-rest (fn* (a & b) b))", &env).unwrap();
    assert_eq!(printed("(keep-rest 1 2 3)", &env), "(2 3)");
}

#[test]
fn closures_share_their_defining_scope() {
    let env = env();
    eval_str(
        "(def! pair (let* (n (atom 0)) \
           (list (fn* (x) (reset! n x)) (fn* () (deref n)))))",
        &env,
    )
    .unwrap();
    eval_str("((first pair) 42)", &env).unwrap();
    assert_eq!(printed("((first (rest pair)))", &env), "42");
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn wrong_arity_special_forms_fail() {
    let env = env();
    for source in ["(def! x)", "(let* (a 1))", "(do)", "(if true)", "(fn* (a))"] {
        let err = eval_str(source, &env).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Arity { .. }),
            "{source} should be an arity error, got {}",
            err.kind
        );
    }
}

#[test]
fn type_mismatched_builtins_fail() {
    let env = env();
    let err = eval_str("(+ 1 \"one\")", &env).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let err = eval_str("(first 9)", &env).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn unbound_symbols_fail() {
    let env = env();
    let err = eval_str("(no-such-fn 1)", &env).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundSymbol(_)));
}

#[test]
fn applying_a_number_is_not_callable() {
    let env = env();
    let err = eval_str("((+ 1 2) 3)", &env).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotCallable(_)));
}

#[test]
fn failed_form_leaves_prior_definitions_intact() {
    let env = env();
    eval_str("(def! stable 1)", &env).unwrap();
    assert!(eval_str("(def! other (boom))", &env).is_err());
    assert_eq!(printed("stable", &env), "1");
    assert!(eval_str("other", &env).is_err());
}

// =============================================================================
// Evaluation of Composites
// =============================================================================

#[test]
fn vectors_and_maps_evaluate_children() {
    let env = env();
    assert_eq!(printed("[(+ 1 1) (+ 2 2)]", &env), "[2 4]");
    assert_eq!(printed("{:sum (+ 1 2)}", &env), "{:sum 3}");
}

#[test]
fn keyword_head_is_map_lookup() {
    let env = env();
    eval_str("(def! conf {:port 80})", &env).unwrap();
    assert_eq!(printed("(:port conf)", &env), "80");
    assert_eq!(printed("(:host conf)", &env), "nil");
}

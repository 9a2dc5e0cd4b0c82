//! Integration tests for the printer.
//!
//! The contract under test: readable printing of any read form yields
//! canonical text that re-reads to a structurally equal value.

use tealeaf_foundation::Value;
use tealeaf_language::{pr_str, read};

fn canonical(source: &str) -> String {
    pr_str(&read(source).unwrap(), true)
}

#[test]
fn literals_round_trip_canonically() {
    let cases = [
        ("42", "42"),
        ("-17", "-17"),
        ("3.5", "3.5"),
        ("nil", "nil"),
        ("true", "true"),
        ("false", "false"),
        (":kw", ":kw"),
        ("sym", "sym"),
        ("\"text\"", "\"text\""),
        (r#""tab\\here""#, r#""tab\\here""#),
    ];
    for (source, expected) in cases {
        let printed = canonical(source);
        assert_eq!(printed, expected, "printing {source}");
        // Second pass is a fixpoint.
        assert_eq!(canonical(&printed), printed);
    }
}

#[test]
fn composites_round_trip() {
    for source in [
        "(+ 1 (- 2 3))",
        "[1 [2] []]",
        "{:a 1}",
        "(fn* (a & rest) rest)",
        "'(quoted form)",
    ] {
        let printed = canonical(source);
        let reread = read(&printed).unwrap();
        assert!(
            read(source).unwrap().equals(&reread, true),
            "{source} -> {printed} must re-read equal"
        );
    }
}

#[test]
fn escapes_survive_the_round_trip() {
    let v = read(r#""quote:\" backslash:\\ newline:\n""#).unwrap();
    assert_eq!(v, Value::string("quote:\" backslash:\\ newline:\n"));
    let printed = pr_str(&v, true);
    assert_eq!(read(&printed).unwrap(), v);
}

#[test]
fn display_printing_is_raw() {
    let v = read("\"a\\nb\"").unwrap();
    assert_eq!(pr_str(&v, false), "a\nb");
}

#[test]
fn whitespace_is_normalized() {
    assert_eq!(canonical("(  1 ,2,   3 )"), "(1 2 3)");
}

//! Printer: values back to source text.
//!
//! Readable printing produces text the reader can re-read: strings are
//! quoted with `"`, `\`, and newline escaped. Display printing renders
//! strings raw for user-facing output. Printing a read form reproduces
//! canonical whitespace, not the original spelling.

use std::fmt::Write;

use tealeaf_foundation::{Value, ValueKind, format_number, keyword_name, symbol_name};

/// Renders a value as text.
///
/// When `readably` is true, strings print quoted with escapes; otherwise
/// they print raw. Everything else renders the same either way.
#[must_use]
pub fn pr_str(value: &Value, readably: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, value, readably);
    out
}

/// Renders a sequence of values joined by a separator.
#[must_use]
pub fn pr_seq(values: &[Value], readably: bool, separator: &str) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_value(&mut out, value, readably);
    }
    out
}

fn write_value(out: &mut String, value: &Value, readably: bool) {
    match value.kind() {
        ValueKind::Nil => out.push_str("nil"),
        ValueKind::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        ValueKind::Number(n) => out.push_str(&format_number(*n)),
        ValueKind::String(s) => {
            if readably {
                out.push('"');
                for c in s.chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        _ => out.push(c),
                    }
                }
                out.push('"');
            } else {
                out.push_str(s);
            }
        }
        ValueKind::Symbol(id) => out.push_str(&symbol_name(*id)),
        ValueKind::Keyword(id) => {
            out.push(':');
            out.push_str(&keyword_name(*id));
        }
        ValueKind::List(items) => write_delimited(out, items, readably, '(', ')'),
        ValueKind::Vector(items) => write_delimited(out, items, readably, '[', ']'),
        ValueKind::Map(map) => {
            out.push('{');
            for (i, (k, v)) in map.entries().iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_value(out, k, readably);
                out.push(' ');
                write_value(out, v, readably);
            }
            out.push('}');
        }
        ValueKind::Fn(func) => {
            let _ = write!(out, "{func:?}");
        }
        ValueKind::Atom(cell) => {
            out.push_str("(atom ");
            write_value(out, &cell.borrow(), readably);
            out.push(')');
        }
    }
}

fn write_delimited(
    out: &mut String,
    items: &im::Vector<Value>,
    readably: bool,
    open: char,
    close: char,
) {
    out.push(open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_value(out, item, readably);
    }
    out.push(close);
}

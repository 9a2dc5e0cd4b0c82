//! String builtins.

use tealeaf_foundation::{Env, Result, Value};
use tealeaf_language::pr_seq;

use crate::{exact, register, string};

pub(crate) fn install(env: &Env) {
    register(env, "pr-str", |args| {
        Ok(Value::string(pr_seq(args, true, " ")))
    });
    register(env, "str", |args| {
        Ok(Value::string(pr_seq(args, false, "")))
    });
    register(env, "trim", |args| {
        exact("trim", args, 1)?;
        Ok(Value::string(string(&args[0])?.trim()))
    });
    register(env, "split", |args| {
        exact("split", args, 2)?;
        let text = string(&args[0])?;
        let pattern = string(&args[1])?;
        // An empty pattern splits into individual characters.
        let parts: Vec<Value> = if pattern.is_empty() {
            text.chars().map(|c| Value::string(c.to_string())).collect()
        } else {
            text.split(pattern).map(Value::string).collect()
        };
        Ok(Value::list(parts))
    });
    register(env, "to-int", |args| {
        exact("to-int", args, 1)?;
        // Non-strings coerce to zero rather than erroring.
        let Some(text) = args[0].as_str() else {
            return Ok(Value::number(0.0));
        };
        Ok(Value::number(parse_integer_prefix(text)))
    });
}

/// Parses the longest leading integer, ignoring whatever follows.
///
/// `"12abc"` parses as 12; input with no leading integer yields NaN.
fn parse_integer_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if end == 0 {
        return f64::NAN;
    }
    digits[..end].parse::<f64>().map_or(f64::NAN, |n| sign * n)
}

//! Arithmetic, comparison, and boolean builtins.
//!
//! All of these are strict binary operators on numbers (booleans for
//! `and`). Division follows IEEE 754, so dividing by zero yields an
//! infinity rather than an error.

use tealeaf_foundation::{Env, Error, Result, Value, ValueKind};

use crate::{exact, number, register};

pub(crate) fn install(env: &Env) {
    register(env, "+", |args| binary_number("+", args, |a, b| a + b));
    register(env, "-", |args| binary_number("-", args, |a, b| a - b));
    register(env, "*", |args| binary_number("*", args, |a, b| a * b));
    register(env, "/", |args| binary_number("/", args, |a, b| a / b));
    register(env, "<", |args| binary_compare("<", args, |a, b| a < b));
    register(env, "<=", |args| binary_compare("<=", args, |a, b| a <= b));
    register(env, ">", |args| binary_compare(">", args, |a, b| a > b));
    register(env, ">=", |args| binary_compare(">=", args, |a, b| a >= b));
    register(env, "and", |args| {
        exact("and", args, 2)?;
        let a = boolean(&args[0])?;
        let b = boolean(&args[1])?;
        Ok(Value::bool(a && b))
    });
}

fn binary_number(name: &str, args: &[Value], op: impl Fn(f64, f64) -> f64) -> Result<Value> {
    exact(name, args, 2)?;
    Ok(Value::number(op(number(&args[0])?, number(&args[1])?)))
}

fn binary_compare(name: &str, args: &[Value], op: impl Fn(f64, f64) -> bool) -> Result<Value> {
    exact(name, args, 2)?;
    Ok(Value::bool(op(number(&args[0])?, number(&args[1])?)))
}

fn boolean(value: &Value) -> Result<bool> {
    match value.kind() {
        ValueKind::Bool(b) => Ok(*b),
        _ => Err(Error::type_mismatch("boolean", value.value_type())),
    }
}

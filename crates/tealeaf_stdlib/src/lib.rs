//! Builtin function library for the Tealeaf language.
//!
//! Builtins are ordinary native functions bound into an environment by
//! name. [`install`] populates an environment with the full core table;
//! [`register`] is the extension point through which host collaborators
//! add their own vocabularies before evaluation starts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
mod atom;
mod collection;
mod io;
mod predicates;
mod reflect;
mod string;

use std::cell::RefCell;
use std::rc::Rc;

use tealeaf_foundation::{
    Env, Error, Function, Result, Value, ValueMap, intern_symbol,
};

/// Binds a native function into the environment under the given name.
///
/// This is the only sanctioned extension point: external vocabularies
/// register their builtins here exactly like the core table does.
pub fn register<F>(env: &Env, name: &str, func: F)
where
    F: Fn(&[Value]) -> Result<Value> + 'static,
{
    env.set(intern_symbol(name), Value::native(name, func));
}

/// Installs the full core builtin table into the environment.
pub fn install(env: &Env) {
    arithmetic::install(env);
    atom::install(env);
    collection::install(env);
    io::install(env);
    predicates::install(env);
    reflect::install(env);
    string::install(env);
}

// ==========================================================================
// Shared operand validation
// ==========================================================================

/// Fails unless exactly `n` arguments were supplied.
pub(crate) fn exact(name: &str, args: &[Value], n: usize) -> Result<()> {
    if args.len() == n {
        Ok(())
    } else {
        let expected = match n {
            1 => "1 argument".to_string(),
            _ => format!("{n} arguments"),
        };
        Err(Error::arity(name, expected, args.len()))
    }
}

/// Fails unless at least `n` arguments were supplied.
pub(crate) fn at_least(name: &str, args: &[Value], n: usize) -> Result<()> {
    if args.len() >= n {
        Ok(())
    } else {
        let expected = match n {
            1 => "at least 1 argument".to_string(),
            _ => format!("at least {n} arguments"),
        };
        Err(Error::arity(name, expected, args.len()))
    }
}

pub(crate) fn number(value: &Value) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| Error::type_mismatch("number", value.value_type()))
}

pub(crate) fn string(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::type_mismatch("string", value.value_type()))
}

pub(crate) fn seq(value: &Value) -> Result<&im::Vector<Value>> {
    value
        .as_seq()
        .ok_or_else(|| Error::type_mismatch("list or vector", value.value_type()))
}

pub(crate) fn map(value: &Value) -> Result<&ValueMap> {
    value
        .as_map()
        .ok_or_else(|| Error::type_mismatch("hash-map", value.value_type()))
}

pub(crate) fn function(value: &Value) -> Result<&Function> {
    value
        .as_fn()
        .ok_or_else(|| Error::type_mismatch("function", value.value_type()))
}

pub(crate) fn atom_cell(value: &Value) -> Result<&Rc<RefCell<Value>>> {
    value
        .as_atom()
        .ok_or_else(|| Error::type_mismatch("atom", value.value_type()))
}

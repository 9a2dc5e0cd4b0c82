//! Atom builtins: the only mutable storage in the value model.

use tealeaf_foundation::{Env, Value};

use crate::{at_least, atom_cell, exact, function, register};
use tealeaf_engine::apply_function;

pub(crate) fn install(env: &Env) {
    register(env, "atom", |args| {
        exact("atom", args, 1)?;
        Ok(Value::atom(args[0].clone()))
    });
    register(env, "deref", |args| {
        exact("deref", args, 1)?;
        Ok(atom_cell(&args[0])?.borrow().clone())
    });
    register(env, "reset!", |args| {
        exact("reset!", args, 2)?;
        *atom_cell(&args[0])?.borrow_mut() = args[1].clone();
        Ok(args[1].clone())
    });
    register(env, "swap!", |args| {
        at_least("swap!", args, 2)?;
        let cell = atom_cell(&args[0])?;
        function(&args[1])?;
        // Snapshot the current value before applying; the function may
        // itself dereference the same atom.
        let mut call_args = Vec::with_capacity(args.len() - 1);
        call_args.push(cell.borrow().clone());
        call_args.extend(args[2..].iter().cloned());
        let next = apply_function(&args[1], &call_args)?;
        *cell.borrow_mut() = next.clone();
        Ok(next)
    });
}

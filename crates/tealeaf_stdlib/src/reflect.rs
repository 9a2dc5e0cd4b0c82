//! Reflective builtins: metadata, name construction, application, throw.

use tealeaf_engine::apply_function;
use tealeaf_foundation::{Env, Error, Value, ValueKind, intern_keyword, intern_symbol};

use crate::{at_least, exact, function, register, seq, string};

pub(crate) fn install(env: &Env) {
    register(env, "throw", |args| {
        exact("throw", args, 1)?;
        // Raises the value itself; it unwinds to the nearest catcher.
        Err(Error::thrown(args[0].clone()))
    });
    register(env, "symbol", |args| {
        exact("symbol", args, 1)?;
        Ok(Value::symbol(intern_symbol(string(&args[0])?)))
    });
    register(env, "keyword", |args| {
        exact("keyword", args, 1)?;
        match args[0].kind() {
            ValueKind::Keyword(_) => Ok(args[0].clone()),
            ValueKind::String(s) => Ok(Value::keyword(intern_keyword(s))),
            _ => Err(Error::type_mismatch("string", args[0].value_type())),
        }
    });
    register(env, "meta", |args| {
        exact("meta", args, 1)?;
        Ok(args[0].meta())
    });
    register(env, "with-meta", |args| {
        exact("with-meta", args, 2)?;
        args[0].with_meta(args[1].clone())
    });
    register(env, "apply", |args| {
        at_least("apply", args, 2)?;
        function(&args[0])?;
        let tail = seq(&args[args.len() - 1])?;
        let mut call_args: Vec<Value> = args[1..args.len() - 1].to_vec();
        call_args.extend(tail.iter().cloned());
        apply_function(&args[0], &call_args)
    });
}

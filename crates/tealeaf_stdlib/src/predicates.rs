//! Equality and type predicates.

use tealeaf_foundation::{Env, Value, ValueKind};

use crate::{exact, register};

pub(crate) fn install(env: &Env) {
    register(env, "=", |args| {
        exact("=", args, 2)?;
        // Loose equality: a list and a vector with equal elements match.
        Ok(Value::bool(args[0].equals(&args[1], false)))
    });
    type_predicate(env, "nil?", |kind| matches!(kind, ValueKind::Nil));
    register(env, "true?", |args| {
        exact("true?", args, 1)?;
        Ok(Value::bool(matches!(args[0].kind(), ValueKind::Bool(true))))
    });
    register(env, "false?", |args| {
        exact("false?", args, 1)?;
        Ok(Value::bool(matches!(args[0].kind(), ValueKind::Bool(false))))
    });
    type_predicate(env, "string?", |kind| matches!(kind, ValueKind::String(_)));
    type_predicate(env, "symbol?", |kind| matches!(kind, ValueKind::Symbol(_)));
    type_predicate(env, "keyword?", |kind| matches!(kind, ValueKind::Keyword(_)));
    type_predicate(env, "number?", |kind| matches!(kind, ValueKind::Number(_)));
    type_predicate(env, "list?", |kind| matches!(kind, ValueKind::List(_)));
    type_predicate(env, "vector?", |kind| matches!(kind, ValueKind::Vector(_)));
    type_predicate(env, "map?", |kind| matches!(kind, ValueKind::Map(_)));
    type_predicate(env, "atom?", |kind| matches!(kind, ValueKind::Atom(_)));
    type_predicate(env, "sequential?", |kind| {
        matches!(kind, ValueKind::List(_) | ValueKind::Vector(_))
    });
    register(env, "fn?", |args| {
        exact("fn?", args, 1)?;
        Ok(Value::bool(
            args[0].as_fn().is_some_and(|f| !f.is_macro()),
        ))
    });
    register(env, "macro?", |args| {
        exact("macro?", args, 1)?;
        Ok(Value::bool(
            args[0].as_fn().is_some_and(tealeaf_foundation::Function::is_macro),
        ))
    });
}

fn type_predicate(env: &Env, name: &'static str, test: fn(&ValueKind) -> bool) {
    register(env, name, move |args| {
        exact(name, args, 1)?;
        Ok(Value::bool(test(args[0].kind())))
    });
}

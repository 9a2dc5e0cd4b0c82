//! The evaluator.
//!
//! Evaluation is a recursive walk over values: scalars evaluate to
//! themselves, symbols resolve against the environment, vectors and
//! hash-maps evaluate element-wise, and lists either dispatch to a
//! special form or evaluate to a function application. The recursion
//! depth is bounded by the host stack; deep recursion in user code can
//! exhaust it.

use std::sync::LazyLock;

use tealeaf_foundation::{
    Closure, Env, Error, Function, Result, SymbolId, Value, ValueKind, intern_symbol,
};

/// Interned ids for the special form head symbols.
///
/// Interned once at startup so dispatch is an id comparison, not a
/// string comparison.
struct Specials {
    def: SymbolId,
    let_: SymbolId,
    do_: SymbolId,
    if_: SymbolId,
    fn_: SymbolId,
}

static SPECIALS: LazyLock<Specials> = LazyLock::new(|| Specials {
    def: intern_symbol("def!"),
    let_: intern_symbol("let*"),
    do_: intern_symbol("do"),
    if_: intern_symbol("if"),
    fn_: intern_symbol("fn*"),
});

/// Evaluates a form in the given environment.
///
/// # Errors
///
/// Fails on unbound symbols, malformed special forms, application of a
/// non-function, or any error raised by the applied function.
pub fn eval(form: &Value, env: &Env) -> Result<Value> {
    match form.kind() {
        ValueKind::Symbol(id) => env.get(*id),
        ValueKind::List(items) => {
            if items.is_empty() {
                // The empty list is self-evaluating.
                return Ok(form.clone());
            }
            eval_list(items, env)
        }
        ValueKind::Vector(items) => {
            let mut out = im::Vector::new();
            for item in items {
                out.push_back(eval(item, env)?);
            }
            Ok(ValueKind::Vector(out).into())
        }
        ValueKind::Map(map) => {
            // Keys are literal; only the values evaluate.
            let mut out = map.clone();
            for (key, value) in map.entries() {
                out = out.insert(&key, eval(&value, env)?)?;
            }
            Ok(Value::map(out))
        }
        _ => Ok(form.clone()),
    }
}

/// Evaluates a non-empty list: special form, keyword lookup, or
/// function application.
fn eval_list(items: &im::Vector<Value>, env: &Env) -> Result<Value> {
    let head = &items[0];

    if let Some(id) = head.as_symbol() {
        let specials = &*SPECIALS;
        if id == specials.def {
            return eval_def(items, env);
        }
        if id == specials.let_ {
            return eval_let(items, env);
        }
        if id == specials.do_ {
            return eval_do(items, env);
        }
        if id == specials.if_ {
            return eval_if(items, env);
        }
        if id == specials.fn_ {
            return eval_fn(items, env);
        }
    }

    // A keyword in head position looks itself up in its map argument.
    if let Some(id) = head.as_keyword() {
        if items.len() != 2 {
            return Err(Error::arity("keyword lookup", "1 argument", items.len() - 1));
        }
        let target = eval(&items[1], env)?;
        let Some(map) = target.as_map() else {
            return Err(Error::type_mismatch("hash-map", target.value_type()));
        };
        return Ok(map.get_keyword(id).unwrap_or_else(Value::nil));
    }

    let callee = eval(head, env)?;
    let mut args = Vec::with_capacity(items.len() - 1);
    for item in items.iter().skip(1) {
        args.push(eval(item, env)?);
    }
    apply_function(&callee, &args)
}

/// `(def! name expr)` - evaluate and bind in the current scope.
fn eval_def(items: &im::Vector<Value>, env: &Env) -> Result<Value> {
    if items.len() != 3 {
        return Err(Error::arity("def!", "a name and a value", items.len() - 1));
    }
    let Some(name) = items[1].as_symbol() else {
        return Err(Error::type_mismatch("symbol", items[1].value_type()));
    };
    let value = eval(&items[2], env)?;
    env.set(name, value.clone());
    Ok(value)
}

/// `(let* (n1 e1 n2 e2 ...) body)` - sequential bindings in a fresh
/// scope; later bindings see earlier ones.
fn eval_let(items: &im::Vector<Value>, env: &Env) -> Result<Value> {
    if items.len() != 3 {
        return Err(Error::arity("let*", "bindings and a body", items.len() - 1));
    }
    let Some(bindings) = items[1].as_seq() else {
        return Err(Error::type_mismatch("list or vector", items[1].value_type()));
    };
    if bindings.len() % 2 != 0 {
        return Err(Error::arity(
            "let* bindings",
            "an even number of forms",
            bindings.len(),
        ));
    }
    let scope = env.child();
    let mut iter = bindings.iter();
    while let (Some(name), Some(expr)) = (iter.next(), iter.next()) {
        let Some(symbol) = name.as_symbol() else {
            return Err(Error::type_mismatch("symbol", name.value_type()));
        };
        let value = eval(expr, &scope)?;
        scope.set(symbol, value);
    }
    eval(&items[2], &scope)
}

/// `(do f1 f2 ... fn)` - evaluate in order, yield the last result.
fn eval_do(items: &im::Vector<Value>, env: &Env) -> Result<Value> {
    if items.len() < 2 {
        return Err(Error::arity("do", "at least 1 form", items.len() - 1));
    }
    let mut result = Value::nil();
    for item in items.iter().skip(1) {
        result = eval(item, env)?;
    }
    Ok(result)
}

/// `(if cond then else?)` - only the taken branch evaluates.
fn eval_if(items: &im::Vector<Value>, env: &Env) -> Result<Value> {
    if items.len() < 3 || items.len() > 4 {
        return Err(Error::arity("if", "2 or 3 forms", items.len() - 1));
    }
    let condition = eval(&items[1], env)?;
    if condition.is_truthy() {
        eval(&items[2], env)
    } else if let Some(alternative) = items.get(3) {
        eval(alternative, env)
    } else {
        Ok(Value::nil())
    }
}

/// `(fn* (params...) body)` - capture the defining environment.
fn eval_fn(items: &im::Vector<Value>, env: &Env) -> Result<Value> {
    if items.len() != 3 {
        return Err(Error::arity("fn*", "parameters and a body", items.len() - 1));
    }
    let Some(param_forms) = items[1].as_seq() else {
        return Err(Error::type_mismatch("list or vector", items[1].value_type()));
    };
    let mut params = Vec::with_capacity(param_forms.len());
    for form in param_forms {
        let Some(symbol) = form.as_symbol() else {
            return Err(Error::type_mismatch("symbol", form.value_type()));
        };
        params.push(symbol);
    }
    Ok(Value::closure(Closure {
        params,
        body: items[2].clone(),
        env: env.clone(),
        is_macro: false,
    }))
}

/// Applies a function value to already-evaluated arguments.
///
/// Native functions run directly; closures evaluate their body in a
/// fresh scope binding parameters to arguments over the captured
/// environment. Builtins that take functions as data route back
/// through here.
///
/// # Errors
///
/// Fails if `callee` is not a function, if binding fails, or if the
/// body (or native implementation) fails.
pub fn apply_function(callee: &Value, args: &[Value]) -> Result<Value> {
    let Some(function) = callee.as_fn() else {
        return Err(Error::not_callable(callee.value_type()));
    };
    match function {
        Function::Native(native) => (native.func)(args),
        Function::Closure(closure) => {
            let scope = Env::bind(&closure.env, &closure.params, args)?;
            eval(&closure.body, &scope)
        }
    }
}

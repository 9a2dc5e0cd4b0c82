//! Sequence and hash-map builtins.
//!
//! Sequence builtins accept lists and vectors interchangeably and
//! produce lists; hash-map builtins are pure and return new maps,
//! never mutating the receiver.

use std::cmp::Ordering;

use tealeaf_engine::apply_function;
use tealeaf_foundation::{Env, Error, Result, Value, ValueKind, ValueMap};

use crate::{at_least, exact, function, map, number, register, seq};

pub(crate) fn install(env: &Env) {
    register(env, "list", |args| Ok(Value::list(args.iter().cloned())));
    register(env, "vector", |args| Ok(Value::vector(args.iter().cloned())));
    register(env, "hash-map", |args| {
        Ok(Value::map(ValueMap::from_flat(args.iter().cloned())?))
    });
    register(env, "assoc", |args| {
        at_least("assoc", args, 1)?;
        let base = map(&args[0])?;
        Ok(Value::map(base.assoc(args[1..].iter().cloned())?))
    });
    register(env, "dissoc", |args| {
        at_least("dissoc", args, 1)?;
        let base = map(&args[0])?;
        Ok(Value::map(base.dissoc(&args[1..])?))
    });
    register(env, "get", |args| {
        exact("get", args, 2)?;
        if args[0].is_nil() {
            return Ok(Value::nil());
        }
        map(&args[0])?.get(&args[1])
    });
    register(env, "contains?", |args| {
        exact("contains?", args, 2)?;
        if args[0].is_nil() {
            return Ok(Value::nil());
        }
        Ok(Value::bool(map(&args[0])?.contains(&args[1])?))
    });
    register(env, "keys", |args| {
        exact("keys", args, 1)?;
        Ok(Value::list(map(&args[0])?.keys()))
    });
    register(env, "vals", |args| {
        exact("vals", args, 1)?;
        Ok(Value::list(map(&args[0])?.vals()))
    });
    register(env, "cons", |args| {
        exact("cons", args, 2)?;
        let mut items = seq(&args[1])?.clone();
        items.push_front(args[0].clone());
        Ok(ValueKind::List(items).into())
    });
    register(env, "concat", |args| {
        let mut items = im::Vector::new();
        for arg in args {
            items.append(seq(arg)?.clone());
        }
        Ok(ValueKind::List(items).into())
    });
    register(env, "vec", |args| {
        exact("vec", args, 1)?;
        match args[0].kind() {
            ValueKind::List(items) => Ok(ValueKind::Vector(items.clone()).into()),
            ValueKind::Vector(_) => Ok(args[0].clone()),
            _ => Err(Error::type_mismatch("list or vector", args[0].value_type())),
        }
    });
    register(env, "nth", |args| {
        exact("nth", args, 2)?;
        let items = seq(&args[0])?;
        let index = number(&args[1])?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        if index < 0.0 || index.fract() != 0.0 || index as usize >= items.len() {
            Err(Error::index_out_of_bounds(index as i64, items.len()))
        } else {
            Ok(items[index as usize].clone())
        }
    });
    register(env, "first", |args| {
        exact("first", args, 1)?;
        if args[0].is_nil() {
            return Ok(Value::nil());
        }
        Ok(seq(&args[0])?.front().cloned().unwrap_or_else(Value::nil))
    });
    register(env, "rest", |args| {
        exact("rest", args, 1)?;
        if args[0].is_nil() {
            return Ok(Value::list([]));
        }
        let items = seq(&args[0])?;
        Ok(Value::list(items.iter().skip(1).cloned()))
    });
    register(env, "empty?", |args| {
        exact("empty?", args, 1)?;
        // Not a type error: anything that is not a sequence is not empty.
        Ok(Value::bool(
            args[0].as_seq().is_some_and(im::Vector::is_empty),
        ))
    });
    register(env, "count", |args| {
        exact("count", args, 1)?;
        if let Some(items) = args[0].as_seq() {
            #[allow(clippy::cast_precision_loss)]
            return Ok(Value::number(items.len() as f64));
        }
        if args[0].is_nil() {
            return Ok(Value::number(0.0));
        }
        Err(Error::type_mismatch(
            "list, vector, or nil",
            args[0].value_type(),
        ))
    });
    register(env, "map", |args| {
        exact("map", args, 2)?;
        function(&args[0])?;
        let mut out = im::Vector::new();
        for item in seq(&args[1])? {
            out.push_back(apply_function(&args[0], &[item.clone()])?);
        }
        Ok(ValueKind::List(out).into())
    });
    register(env, "reduce", |args| {
        exact("reduce", args, 3)?;
        function(&args[0])?;
        let items = seq(&args[1])?;
        // Only string and number seeds fold; any other seed yields nil.
        if !matches!(
            args[2].kind(),
            ValueKind::String(_) | ValueKind::Number(_)
        ) {
            return Ok(Value::nil());
        }
        let mut acc = args[2].clone();
        for item in items {
            acc = apply_function(&args[0], &[acc, item.clone()])?;
        }
        Ok(acc)
    });
    register(env, "sort", |args| {
        exact("sort", args, 2)?;
        let items = seq(&args[0])?;
        function(&args[1])?;
        sort_with(items, &args[1])
    });
    register(env, "take", |args| {
        exact("take", args, 2)?;
        let items = seq(&args[0])?;
        let n = number(&args[1])?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = if n <= 0.0 { 0 } else { n as usize };
        Ok(Value::list(items.iter().take(n).cloned()))
    });
    register(env, "conj", |args| {
        at_least("conj", args, 1)?;
        match args[0].kind() {
            ValueKind::List(items) => {
                let mut out = items.clone();
                for arg in &args[1..] {
                    out.push_front(arg.clone());
                }
                Ok(ValueKind::List(out).into())
            }
            ValueKind::Vector(items) => {
                let mut out = items.clone();
                out.extend(args[1..].iter().cloned());
                Ok(ValueKind::Vector(out).into())
            }
            _ => Err(Error::type_mismatch("list or vector", args[0].value_type())),
        }
    });
    register(env, "seq", |args| {
        exact("seq", args, 1)?;
        match args[0].kind() {
            ValueKind::Nil => Ok(Value::nil()),
            ValueKind::List(items) => {
                if items.is_empty() {
                    Ok(Value::nil())
                } else {
                    Ok(args[0].clone())
                }
            }
            ValueKind::Vector(items) => {
                if items.is_empty() {
                    Ok(Value::nil())
                } else {
                    Ok(ValueKind::List(items.clone()).into())
                }
            }
            ValueKind::String(s) => {
                if s.is_empty() {
                    Ok(Value::nil())
                } else {
                    Ok(Value::list(s.chars().map(|c| Value::string(c.to_string()))))
                }
            }
            _ => Err(Error::type_mismatch(
                "list, vector, or string",
                args[0].value_type(),
            )),
        }
    });
}

/// Sorts a sequence with a user comparator.
///
/// The comparator result is interpreted numerically: negative sorts the
/// first operand earlier, positive later, anything else (including a
/// non-number result) counts as equal. A comparator error aborts the
/// sort and propagates.
fn sort_with(items: &im::Vector<Value>, comparator: &Value) -> Result<Value> {
    let mut out: Vec<Value> = items.iter().cloned().collect();
    let mut failure: Option<Error> = None;
    out.sort_by(|a, b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        match apply_function(comparator, &[a.clone(), b.clone()]) {
            Ok(result) => match result.as_number() {
                Some(n) if n < 0.0 => Ordering::Less,
                Some(n) if n > 0.0 => Ordering::Greater,
                _ => Ordering::Equal,
            },
            Err(err) => {
                failure = Some(err);
                Ordering::Equal
            }
        }
    });
    match failure {
        Some(err) => Err(err),
        None => Ok(Value::list(out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tealeaf_engine::eval;
    use tealeaf_foundation::ErrorKind;
    use tealeaf_language::{pr_str, read};

    fn env() -> Env {
        let env = Env::new();
        crate::install(&env);
        env
    }

    fn eval_str(source: &str, env: &Env) -> Result<Value> {
        eval(&read(source).unwrap(), env)
    }

    fn printed(source: &str) -> String {
        pr_str(&eval_str(source, &env()).unwrap(), true)
    }

    #[test]
    fn list_and_vector_constructors() {
        assert_eq!(printed("(list 1 2 3)"), "(1 2 3)");
        assert_eq!(printed("(vector 1 2)"), "[1 2]");
        assert_eq!(printed("(list)"), "()");
    }

    #[test]
    fn cons_and_concat() {
        assert_eq!(printed("(cons 1 (list 2 3))"), "(1 2 3)");
        assert_eq!(printed("(cons 1 [2 3])"), "(1 2 3)");
        assert_eq!(printed("(concat (list 1) [2 3] (list))"), "(1 2 3)");
        assert_eq!(printed("(concat)"), "()");
    }

    #[test]
    fn nth_bounds() {
        assert_eq!(printed("(nth (list 10 20 30) 1)"), "20");
        let err = eval_str("(nth (list 1) 5)", &env()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IndexOutOfBounds { .. }));
        let err = eval_str("(nth (list 1) -1)", &env()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IndexOutOfBounds { .. }));
    }

    #[test]
    fn first_and_rest() {
        assert_eq!(printed("(first (list 1 2))"), "1");
        assert_eq!(printed("(first (list))"), "nil");
        assert_eq!(printed("(first nil)"), "nil");
        assert_eq!(printed("(rest (list 1 2 3))"), "(2 3)");
        assert_eq!(printed("(rest (list))"), "()");
        assert_eq!(printed("(rest nil)"), "()");
    }

    #[test]
    fn count_and_empty() {
        assert_eq!(printed("(count (list 1 2 3))"), "3");
        assert_eq!(printed("(count nil)"), "0");
        assert_eq!(printed("(empty? (list))"), "true");
        assert_eq!(printed("(empty? 5)"), "false");
        assert!(eval_str("(count 5)", &env()).is_err());
    }

    #[test]
    fn map_applies_in_order() {
        let env = env();
        eval_str("(def! double (fn* (x) (* x 2)))", &env).unwrap();
        let v = eval_str("(map double [1 2 3])", &env).unwrap();
        assert_eq!(pr_str(&v, true), "(2 4 6)");
    }

    #[test]
    fn reduce_folds_number_and_string_seeds() {
        assert_eq!(printed("(reduce + (list 1 2 3) 0)"), "6");
        assert_eq!(printed("(reduce str (list \"a\" \"b\") \"\")"), "\"ab\"");
        assert_eq!(printed("(reduce + (list 1) nil)"), "nil");
    }

    #[test]
    fn sort_uses_comparator() {
        assert_eq!(printed("(sort (list 3 1 2) -)"), "(1 2 3)");
        assert_eq!(printed("(sort [2 1] (fn* (a b) (- b a)))"), "(2 1)");
    }

    #[test]
    fn take_clamps() {
        assert_eq!(printed("(take (list 1 2 3) 2)"), "(1 2)");
        assert_eq!(printed("(take (list 1) 9)"), "(1)");
        assert_eq!(printed("(take (list 1) 0)"), "()");
    }

    #[test]
    fn conj_prepends_to_lists_appends_to_vectors() {
        assert_eq!(printed("(conj (list 1 2) 3 4)"), "(4 3 1 2)");
        assert_eq!(printed("(conj [1 2] 3 4)"), "[1 2 3 4]");
    }

    #[test]
    fn seq_normalizes() {
        assert_eq!(printed("(seq (list 1 2))"), "(1 2)");
        assert_eq!(printed("(seq [1 2])"), "(1 2)");
        assert_eq!(printed("(seq \"ab\")"), "(\"a\" \"b\")");
        assert_eq!(printed("(seq (list))"), "nil");
        assert_eq!(printed("(seq \"\")"), "nil");
        assert_eq!(printed("(seq nil)"), "nil");
    }

    #[test]
    fn map_builtins_are_pure() {
        let env = env();
        eval_str("(def! m {:a 1})", &env).unwrap();
        assert_eq!(
            pr_str(&eval_str("(assoc m \"k\" \"v\")", &env).unwrap(), true),
            "{:a 1 \"k\" \"v\"}"
        );
        // The original is untouched.
        assert_eq!(pr_str(&eval_str("m", &env).unwrap(), true), "{:a 1}");
        assert_eq!(
            pr_str(&eval_str("(dissoc m :a)", &env).unwrap(), true),
            "{}"
        );
        assert_eq!(pr_str(&eval_str("m", &env).unwrap(), true), "{:a 1}");
    }

    #[test]
    fn get_and_contains() {
        let env = env();
        eval_str("(def! m {:a 1 \"b\" 2})", &env).unwrap();
        assert_eq!(printed("(get {:a 1} :a)"), "1");
        assert_eq!(eval_str("(get m \"b\")", &env).unwrap(), Value::number(2.0));
        assert!(eval_str("(get m :zz)", &env).unwrap().is_nil());
        assert!(eval_str("(get nil :a)", &env).unwrap().is_nil());
        assert_eq!(
            eval_str("(contains? m :a)", &env).unwrap(),
            Value::bool(true)
        );
        assert!(eval_str("(contains? nil :a)", &env).unwrap().is_nil());
        // Map keys must be strings or keywords.
        assert!(eval_str("(get m 1)", &env).is_err());
    }

    #[test]
    fn keys_and_vals() {
        assert_eq!(printed("(keys {:a 1 \"b\" 2})"), "(:a \"b\")");
        assert_eq!(printed("(vals {:a 1 \"b\" 2})"), "(1 2)");
    }

    #[test]
    fn vec_converts() {
        assert_eq!(printed("(vec (list 1 2))"), "[1 2]");
        assert_eq!(printed("(vec [1 2])"), "[1 2]");
        assert!(eval_str("(vec 1)", &env()).is_err());
    }
}

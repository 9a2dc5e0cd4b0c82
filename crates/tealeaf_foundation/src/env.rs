//! Lexical environments.
//!
//! An environment is a chain of mutable scope frames. Closures capture
//! their defining environment by handle, so a frame stays alive as long as
//! any closure (or child scope) still references it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Error;
use crate::intern::{SymbolId, symbol_name};
use crate::value::Value;
use crate::Result;

/// A lexical scope handle.
///
/// Cloning is cheap and aliases the same frame: bindings added through one
/// handle are visible through every clone. This is what lets sibling
/// closures over the same `let*` scope observe each other's state.
#[derive(Clone, Debug)]
pub struct Env {
    frame: Rc<Frame>,
}

/// One scope frame: local bindings plus an optional enclosing scope.
#[derive(Debug)]
struct Frame {
    data: RefCell<HashMap<SymbolId, Value>>,
    outer: Option<Env>,
}

impl Env {
    /// Creates a root environment with no enclosing scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: Rc::new(Frame {
                data: RefCell::new(HashMap::new()),
                outer: None,
            }),
        }
    }

    /// Creates an empty child scope enclosed by this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            frame: Rc::new(Frame {
                data: RefCell::new(HashMap::new()),
                outer: Some(self.clone()),
            }),
        }
    }

    /// Creates a child scope of `outer` with parameters bound to arguments
    /// pairwise.
    ///
    /// A `&` in the parameter list binds the parameter after it to a list
    /// of all remaining arguments (possibly empty) and ends binding.
    /// Surplus arguments beyond the positional parameters are ignored.
    ///
    /// # Errors
    ///
    /// Fails if a positional parameter has no corresponding argument, or
    /// if `&` is not followed by exactly one parameter.
    pub fn bind(outer: &Env, params: &[SymbolId], args: &[Value]) -> Result<Self> {
        let env = outer.child();
        let mut i = 0;
        while i < params.len() {
            if params[i] == SymbolId::REST {
                let Some(&rest) = params.get(i + 1) else {
                    return Err(Error::arity(
                        "parameter list",
                        "a parameter after '&'",
                        params.len(),
                    ));
                };
                let remaining = args.get(i..).unwrap_or(&[]);
                env.set(rest, Value::list(remaining.iter().cloned()));
                return Ok(env);
            }
            let Some(arg) = args.get(i) else {
                return Err(Error::arity(
                    symbol_name(params[i]).to_string(),
                    "an argument for every parameter",
                    args.len(),
                ));
            };
            env.set(params[i], arg.clone());
            i += 1;
        }
        Ok(env)
    }

    /// Binds a symbol in this frame, shadowing any outer binding of the
    /// same name. Rebinding in the same frame replaces the old value.
    pub fn set(&self, symbol: SymbolId, value: Value) {
        self.frame.data.borrow_mut().insert(symbol, value);
    }

    /// Finds the innermost scope that binds the symbol, if any.
    #[must_use]
    pub fn find(&self, symbol: SymbolId) -> Option<Env> {
        if self.frame.data.borrow().contains_key(&symbol) {
            return Some(self.clone());
        }
        self.frame.outer.as_ref().and_then(|outer| outer.find(symbol))
    }

    /// Resolves a symbol through the scope chain.
    ///
    /// # Errors
    ///
    /// Fails with an unbound-symbol error if no enclosing scope binds it.
    pub fn get(&self, symbol: SymbolId) -> Result<Value> {
        let mut scope = Some(self.clone());
        while let Some(env) = scope {
            if let Some(value) = env.frame.data.borrow().get(&symbol) {
                return Ok(value.clone());
            }
            scope = env.frame.outer.clone();
        }
        Err(Error::unbound_symbol(symbol_name(symbol).to_string()))
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

//! The tagged value type for all Tealeaf data.
//!
//! Values are immutable and cheaply cloneable; composite payloads use
//! structural sharing via persistent data structures. The single mutable
//! exception is [`ValueKind::Atom`], a reference cell whose identity is
//! stable across mutation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::env::Env;
use crate::error::Error;
use crate::intern::{KeywordId, SymbolId, keyword_name, symbol_name};
use crate::map::ValueMap;
use crate::types::Type;
use crate::Result;

/// A Tealeaf value: a tagged payload plus optional attached metadata.
///
/// Attaching metadata is a pure copy-construct: the result shares the same
/// payload but is a distinct value, and the original is never mutated.
/// Equality, hashing, and ordering ignore metadata.
#[derive(Clone)]
pub struct Value {
    kind: ValueKind,
    meta: Option<Rc<Value>>,
}

/// The closed set of value variants.
#[derive(Clone)]
pub enum ValueKind {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number (integer and decimal literals share it).
    Number(f64),
    /// String value.
    String(Rc<str>),
    /// Interned symbol (identity equality).
    Symbol(SymbolId),
    /// Interned keyword (identity equality).
    Keyword(KeywordId),
    /// Proper list.
    List(im::Vector<Value>),
    /// Vector.
    Vector(im::Vector<Value>),
    /// Hash-map with string and keyword partitions.
    Map(ValueMap),
    /// Native builtin or user closure.
    Fn(Function),
    /// Mutable reference cell; the only mutable storage in the model.
    Atom(Rc<RefCell<Value>>),
}

impl Value {
    /// The nil value.
    #[must_use]
    pub fn nil() -> Self {
        ValueKind::Nil.into()
    }

    /// A boolean value.
    #[must_use]
    pub fn bool(b: bool) -> Self {
        ValueKind::Bool(b).into()
    }

    /// A number value.
    #[must_use]
    pub fn number(n: f64) -> Self {
        ValueKind::Number(n).into()
    }

    /// A string value.
    #[must_use]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        ValueKind::String(s.into()).into()
    }

    /// An interned symbol value.
    #[must_use]
    pub fn symbol(id: SymbolId) -> Self {
        ValueKind::Symbol(id).into()
    }

    /// An interned keyword value.
    #[must_use]
    pub fn keyword(id: KeywordId) -> Self {
        ValueKind::Keyword(id).into()
    }

    /// A list of the given items.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        ValueKind::List(items.into_iter().collect()).into()
    }

    /// A vector of the given items.
    #[must_use]
    pub fn vector<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        ValueKind::Vector(items.into_iter().collect()).into()
    }

    /// A hash-map value.
    #[must_use]
    pub fn map(map: ValueMap) -> Self {
        ValueKind::Map(map).into()
    }

    /// A named native function.
    #[must_use]
    pub fn native<F>(name: impl Into<Rc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        ValueKind::Fn(Function::Native(NativeFn {
            name: name.into(),
            func: Rc::new(func),
        }))
        .into()
    }

    /// A user closure.
    #[must_use]
    pub fn closure(closure: Closure) -> Self {
        ValueKind::Fn(Function::Closure(Rc::new(closure))).into()
    }

    /// A fresh atom holding the given value.
    #[must_use]
    pub fn atom(value: Value) -> Self {
        ValueKind::Atom(Rc::new(RefCell::new(value))).into()
    }

    /// Returns the variant payload of this value.
    #[must_use]
    pub fn kind(&self) -> &ValueKind {
        &self.kind
    }

    /// Returns the runtime type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match &self.kind {
            ValueKind::Nil => Type::Nil,
            ValueKind::Bool(_) => Type::Boolean,
            ValueKind::Number(_) => Type::Number,
            ValueKind::String(_) => Type::String,
            ValueKind::Symbol(_) => Type::Symbol,
            ValueKind::Keyword(_) => Type::Keyword,
            ValueKind::List(_) => Type::List,
            ValueKind::Vector(_) => Type::Vector,
            ValueKind::Map(_) => Type::Map,
            ValueKind::Fn(_) => Type::Function,
            ValueKind::Atom(_) => Type::Atom,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.kind, ValueKind::Nil)
    }

    /// Returns true if this value is truthy.
    ///
    /// Only `nil` and `false` are falsy; numeric zero and empty
    /// sequences are truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self.kind, ValueKind::Nil | ValueKind::Bool(false))
    }

    /// Attempts to extract a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            ValueKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a symbol id.
    #[must_use]
    pub fn as_symbol(&self) -> Option<SymbolId> {
        match self.kind {
            ValueKind::Symbol(id) => Some(id),
            _ => None,
        }
    }

    /// Attempts to extract a keyword id.
    #[must_use]
    pub fn as_keyword(&self) -> Option<KeywordId> {
        match self.kind {
            ValueKind::Keyword(id) => Some(id),
            _ => None,
        }
    }

    /// Attempts to extract the items of a list or vector.
    #[must_use]
    pub fn as_seq(&self) -> Option<&im::Vector<Value>> {
        match &self.kind {
            ValueKind::List(items) | ValueKind::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract a map reference.
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match &self.kind {
            ValueKind::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a function reference.
    #[must_use]
    pub fn as_fn(&self) -> Option<&Function> {
        match &self.kind {
            ValueKind::Fn(f) => Some(f),
            _ => None,
        }
    }

    /// Attempts to extract an atom cell reference.
    #[must_use]
    pub fn as_atom(&self) -> Option<&Rc<RefCell<Value>>> {
        match &self.kind {
            ValueKind::Atom(cell) => Some(cell),
            _ => None,
        }
    }

    /// Structural equality.
    ///
    /// Under `strict`, differing variants are never equal; otherwise a
    /// list and a vector with equal elements in equal order compare
    /// equal. Hash-maps compare by key/value sets irrespective of
    /// insertion order. Functions and atoms never compare equal.
    #[must_use]
    pub fn equals(&self, other: &Value, strict: bool) -> bool {
        if strict
            && std::mem::discriminant(&self.kind) != std::mem::discriminant(&other.kind)
        {
            return false;
        }
        match (&self.kind, &other.kind) {
            (ValueKind::Nil, ValueKind::Nil) => true,
            (
                ValueKind::List(a) | ValueKind::Vector(a),
                ValueKind::List(b) | ValueKind::Vector(b),
            ) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y, strict))
            }
            (ValueKind::Map(a), ValueKind::Map(b)) => a.equals(b),
            (ValueKind::Number(a), ValueKind::Number(b)) => a == b,
            (ValueKind::Bool(a), ValueKind::Bool(b)) => a == b,
            (ValueKind::String(a), ValueKind::String(b)) => a == b,
            (ValueKind::Symbol(a), ValueKind::Symbol(b)) => a == b,
            (ValueKind::Keyword(a), ValueKind::Keyword(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the attached metadata, or nil if none.
    #[must_use]
    pub fn meta(&self) -> Value {
        self.meta
            .as_deref()
            .cloned()
            .unwrap_or_else(Value::nil)
    }

    /// Returns a new value sharing this payload with the metadata
    /// attached. The receiver is never mutated.
    ///
    /// # Errors
    ///
    /// Fails for `nil`, symbols, and keywords, which are canonical
    /// instances and do not carry metadata.
    pub fn with_meta(&self, meta: Value) -> Result<Value> {
        match self.kind {
            ValueKind::Nil | ValueKind::Symbol(_) | ValueKind::Keyword(_) => Err(
                Error::type_mismatch("value supporting metadata", self.value_type()),
            ),
            _ => Ok(Self {
                kind: self.kind.clone(),
                meta: Some(Rc::new(meta)),
            }),
        }
    }
}

impl From<ValueKind> for Value {
    fn from(kind: ValueKind) -> Self {
        Self { kind, meta: None }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::string(s)
    }
}

// Strict structural equality for tests and collection membership.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, true)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Nil => write!(f, "nil"),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Number(n) => write!(f, "{}", format_number(*n)),
            ValueKind::String(s) => write!(f, "{s:?}"),
            ValueKind::Symbol(id) => write!(f, "{}", symbol_name(*id)),
            ValueKind::Keyword(id) => write!(f, ":{}", keyword_name(*id)),
            ValueKind::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, ")")
            }
            ValueKind::Vector(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            }
            ValueKind::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.entries().iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{k:?} {v:?}")?;
                }
                write!(f, "}}")
            }
            ValueKind::Fn(func) => write!(f, "{func:?}"),
            ValueKind::Atom(cell) => write!(f, "(atom {:?})", cell.borrow()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::String(s) => write!(f, "{s}"),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

/// Formats a number the way the printer renders it: fraction-free
/// numbers print without a decimal point.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// A callable value.
///
/// Functions are either native builtins or user closures. A macro flag on
/// closures distinguishes macro functions; their invocation currently
/// follows ordinary function application (no expand-before-eval step).
#[derive(Clone)]
pub enum Function {
    /// Native function registered from the host.
    Native(NativeFn),
    /// User closure produced by `fn*`.
    Closure(Rc<Closure>),
}

impl Function {
    /// Returns true if this is a closure flagged as a macro.
    #[must_use]
    pub fn is_macro(&self) -> bool {
        match self {
            Self::Native(_) => false,
            Self::Closure(c) => c.is_macro,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(func) => write!(f, "#<builtin {}>", func.name),
            Self::Closure(c) if c.is_macro => write!(f, "#<macro>"),
            Self::Closure(_) => write!(f, "#<fn>"),
        }
    }
}

/// Native function callable from Tealeaf.
#[derive(Clone)]
pub struct NativeFn {
    /// Function name for rendering and error messages.
    pub name: Rc<str>,
    /// The callable itself. Boxed as a trait object so host collaborators
    /// can register closures capturing their own state.
    pub func: Rc<dyn Fn(&[Value]) -> Result<Value>>,
}

/// A user closure: captured defining environment, ordered parameter
/// symbols (with an optional `&` rest tail), and an unevaluated body.
#[derive(Clone)]
pub struct Closure {
    /// Parameter symbols in order.
    pub params: Vec<SymbolId>,
    /// The unevaluated body form.
    pub body: Value,
    /// The environment captured at definition time.
    pub env: Env,
    /// Macro flag; macros share the data shape of ordinary closures.
    pub is_macro: bool,
}

impl Closure {
    /// Returns a copy of this closure flagged as a macro.
    #[must_use]
    pub fn to_macro(&self) -> Self {
        Self {
            params: self.params.clone(),
            body: self.body.clone(),
            env: self.env.clone(),
            is_macro: true,
        }
    }
}

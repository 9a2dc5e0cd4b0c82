//! Process-wide string interning for symbols and keywords.
//!
//! Symbols and keywords are canonicalized to at most one id per distinct
//! name for the lifetime of the process. Equality and hashing are by
//! identity; environment lookup and hash-map keying rely on this.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex};

/// Interned symbol identifier.
///
/// Symbols are identifiers like `foo`, `+`, `some?`. They are interned for
/// fast identity comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Returns the raw index of this symbol.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Reserved rest-marker symbol `&`, always interned at startup with a
    /// fixed index. A parameter list containing it binds the following
    /// parameter to a list of all remaining arguments.
    pub const REST: SymbolId = SymbolId(0);
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// Interned keyword identifier.
///
/// Keywords are identifiers prefixed with `:`, like `:title`. The stored
/// name does not include the leading `:`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct KeywordId(u32);

impl KeywordId {
    /// Returns the raw index of this keyword.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeywordId({})", self.0)
    }
}

/// Interner mapping names to ids and back.
#[derive(Debug, Default)]
struct Interner {
    /// Symbol names by index.
    symbols: Vec<Arc<str>>,
    /// Map from symbol name to `SymbolId`.
    symbol_map: HashMap<Arc<str>, SymbolId>,
    /// Keyword names by index.
    keywords: Vec<Arc<str>>,
    /// Map from keyword name to `KeywordId`.
    keyword_map: HashMap<Arc<str>, KeywordId>,
}

impl Interner {
    /// Reserved symbols that are pre-interned at startup.
    const RESERVED_SYMBOLS: &'static [&'static str] = &[
        "&", // SymbolId(0) = REST
    ];

    fn new() -> Self {
        let mut interner = Self::default();
        for (i, &sym) in Self::RESERVED_SYMBOLS.iter().enumerate() {
            let id = interner.symbol(sym);
            debug_assert_eq!(
                id.0 as usize, i,
                "reserved symbol '{}' should have index {}, got {}",
                sym, i, id.0
            );
        }
        interner
    }

    fn symbol(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.symbol_map.get(name) {
            return id;
        }
        let idx = u32::try_from(self.symbols.len()).expect("too many symbols");
        let arc: Arc<str> = name.into();
        self.symbols.push(arc.clone());
        let id = SymbolId(idx);
        self.symbol_map.insert(arc, id);
        id
    }

    fn keyword(&mut self, name: &str) -> KeywordId {
        if let Some(&id) = self.keyword_map.get(name) {
            return id;
        }
        let idx = u32::try_from(self.keywords.len()).expect("too many keywords");
        let arc: Arc<str> = name.into();
        self.keywords.push(arc.clone());
        let id = KeywordId(idx);
        self.keyword_map.insert(arc, id);
        id
    }
}

/// The global intern table. Entries live for the process lifetime.
static INTERNER: LazyLock<Mutex<Interner>> = LazyLock::new(|| Mutex::new(Interner::new()));

/// Interns a symbol name, returning its canonical [`SymbolId`].
///
/// # Panics
///
/// Panics if the global intern table lock is poisoned.
#[must_use]
pub fn intern_symbol(name: &str) -> SymbolId {
    INTERNER.lock().expect("intern table poisoned").symbol(name)
}

/// Interns a keyword name (without the leading `:`), returning its
/// canonical [`KeywordId`].
///
/// # Panics
///
/// Panics if the global intern table lock is poisoned.
#[must_use]
pub fn intern_keyword(name: &str) -> KeywordId {
    INTERNER.lock().expect("intern table poisoned").keyword(name)
}

/// Returns the name of an interned symbol.
///
/// # Panics
///
/// Panics if the global intern table lock is poisoned, or if `id` did not
/// come from [`intern_symbol`] (ids are only ever minted by the table).
#[must_use]
pub fn symbol_name(id: SymbolId) -> Arc<str> {
    INTERNER.lock().expect("intern table poisoned").symbols[id.0 as usize].clone()
}

/// Returns the name of an interned keyword (without the leading `:`).
///
/// # Panics
///
/// Panics if the global intern table lock is poisoned, or if `id` did not
/// come from [`intern_keyword`].
#[must_use]
pub fn keyword_name(id: KeywordId) -> Arc<str> {
    INTERNER.lock().expect("intern table poisoned").keywords[id.0 as usize].clone()
}

//! The hash-map value with its dual string/keyword key space.
//!
//! Keywords are reference-identity keys and strings are value keys, so the
//! entries live in two partitions internally. The API exposes a unified
//! view: `get`/`contains`/`keys`/`vals`/`entries` operate across both.
//! All modifications are pure and share structure via `im`.

use std::rc::Rc;

use crate::error::Error;
use crate::intern::KeywordId;
use crate::value::{Value, ValueKind};
use crate::Result;

/// A persistent hash-map keyed by strings and keywords.
///
/// Cloning is O(1); `assoc`/`dissoc` return a new map and never mutate
/// the receiver. Partitions are ordered so rendering is deterministic.
#[derive(Clone, Debug, Default)]
pub struct ValueMap {
    /// Keyword-keyed partition (identity keys).
    keywords: im::OrdMap<KeywordId, Value>,
    /// String-keyed partition (value keys).
    strings: im::OrdMap<Rc<str>, Value>,
}

impl ValueMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a flat alternating key/value sequence.
    ///
    /// # Errors
    ///
    /// Fails if the sequence has odd length or a key is neither a string
    /// nor a keyword.
    pub fn from_flat<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut map = Self::new();
        let mut iter = items.into_iter();
        let mut count = 0usize;
        while let Some(key) = iter.next() {
            count += 1;
            let Some(value) = iter.next() else {
                return Err(Error::arity("hash-map", "an even number of forms", count));
            };
            count += 1;
            map = map.insert(&key, value)?;
        }
        Ok(map)
    }

    /// Returns the total number of entries across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len() + self.strings.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.strings.is_empty()
    }

    /// Returns the number of keyword-keyed entries.
    #[must_use]
    pub fn keyword_len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns the number of string-keyed entries.
    #[must_use]
    pub fn string_len(&self) -> usize {
        self.strings.len()
    }

    /// Returns a new map with the key bound to the value.
    ///
    /// # Errors
    ///
    /// Fails if the key is neither a string nor a keyword.
    pub fn insert(&self, key: &Value, value: Value) -> Result<Self> {
        match key.kind() {
            ValueKind::Keyword(id) => Ok(Self {
                keywords: self.keywords.update(*id, value),
                strings: self.strings.clone(),
            }),
            ValueKind::String(s) => Ok(Self {
                keywords: self.keywords.clone(),
                strings: self.strings.update(s.clone(), value),
            }),
            _ => Err(Error::type_mismatch("string or keyword", key.value_type())),
        }
    }

    /// Looks up a key across both partitions.
    ///
    /// Returns `nil` for an absent key.
    ///
    /// # Errors
    ///
    /// Fails if the key is neither a string nor a keyword.
    pub fn get(&self, key: &Value) -> Result<Value> {
        match key.kind() {
            ValueKind::Keyword(id) => Ok(self.get_keyword(*id).unwrap_or_else(Value::nil)),
            ValueKind::String(s) => Ok(self
                .strings
                .get(s)
                .cloned()
                .unwrap_or_else(Value::nil)),
            _ => Err(Error::type_mismatch("string or keyword", key.value_type())),
        }
    }

    /// Looks up a keyword key in the keyword partition.
    #[must_use]
    pub fn get_keyword(&self, id: KeywordId) -> Option<Value> {
        self.keywords.get(&id).cloned()
    }

    /// Returns true if the key is present in either partition.
    ///
    /// # Errors
    ///
    /// Fails if the key is neither a string nor a keyword.
    pub fn contains(&self, key: &Value) -> Result<bool> {
        match key.kind() {
            ValueKind::Keyword(id) => Ok(self.keywords.contains_key(id)),
            ValueKind::String(s) => Ok(self.strings.contains_key(s)),
            _ => Err(Error::type_mismatch("string or keyword", key.value_type())),
        }
    }

    /// Returns a new map with the given flat key/value pairs added.
    ///
    /// The receiver is never mutated.
    ///
    /// # Errors
    ///
    /// Fails on an odd pair sequence or a non-key value.
    pub fn assoc<I>(&self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut map = self.clone();
        let mut iter = pairs.into_iter();
        let mut count = 0usize;
        while let Some(key) = iter.next() {
            count += 1;
            let Some(value) = iter.next() else {
                return Err(Error::arity("assoc", "an even number of forms", count));
            };
            count += 1;
            map = map.insert(&key, value)?;
        }
        Ok(map)
    }

    /// Returns a new map with the given keys removed.
    ///
    /// The receiver is never mutated; absent keys are ignored.
    ///
    /// # Errors
    ///
    /// Fails if a key is neither a string nor a keyword.
    pub fn dissoc<'a, I>(&self, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut keywords = self.keywords.clone();
        let mut strings = self.strings.clone();
        for key in keys {
            match key.kind() {
                ValueKind::Keyword(id) => {
                    keywords = keywords.without(id);
                }
                ValueKind::String(s) => {
                    strings = strings.without(s);
                }
                _ => {
                    return Err(Error::type_mismatch("string or keyword", key.value_type()));
                }
            }
        }
        Ok(Self { keywords, strings })
    }

    /// Returns every key, keyword entries before string entries.
    #[must_use]
    pub fn keys(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.keywords.keys().map(|&id| Value::keyword(id)));
        out.extend(self.strings.keys().map(|s| Value::string(s.clone())));
        out
    }

    /// Returns every value, keyword entries before string entries.
    #[must_use]
    pub fn vals(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.keywords.values().cloned());
        out.extend(self.strings.values().cloned());
        out
    }

    /// Returns every entry as key/value pairs, keyword entries first.
    #[must_use]
    pub fn entries(&self) -> Vec<(Value, Value)> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(
            self.keywords
                .iter()
                .map(|(&id, v)| (Value::keyword(id), v.clone())),
        );
        out.extend(
            self.strings
                .iter()
                .map(|(s, v)| (Value::string(s.clone()), v.clone())),
        );
        out
    }

    /// Structural equality: equal key/value sets irrespective of
    /// insertion order. Values are compared non-strictly.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        if self.keywords.len() != other.keywords.len()
            || self.strings.len() != other.strings.len()
        {
            return false;
        }
        for (id, value) in &self.keywords {
            match other.keywords.get(id) {
                Some(v) if value.equals(v, false) => {}
                _ => return false,
            }
        }
        for (key, value) in &self.strings {
            match other.strings.get(key) {
                Some(v) if value.equals(v, false) => {}
                _ => return false,
            }
        }
        true
    }
}

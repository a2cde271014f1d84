//! Keyed and unique-element collections with arbitrary `Value` members.
//!
//! Unlike [`VObject`](crate::VObject), these accept any value as a key or
//! member, including NaN and nested structures, so they cannot be hashed and
//! use linear lookup. Membership is decided by [`Value`] equality, which
//! treats NaN as equal to itself.
//!
//! A walk reports maps and sets as single leaves and never descends into them.

use core::fmt::{self, Debug, Formatter};

use crate::value::Value;

/// An insertion-ordered map from `Value` keys to `Value`s.
#[derive(Clone, Default)]
pub struct VMap {
    entries: Vec<(Value, Value)>,
}

impl VMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Gets the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Inserts an entry, returning the previous value for an equal key.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(core::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl PartialEq for VMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for VMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Debug for VMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Map ")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An insertion-ordered collection of unique `Value`s.
#[derive(Clone, Default)]
pub struct VSet {
    members: Vec<Value>,
}

impl VSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if an equal value is a member.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.members.iter().any(|m| m == value)
    }

    /// Adds a value. Returns `false` if an equal value was already present.
    pub fn insert(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.members.push(value);
        true
    }

    /// Iterates over the members in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.members.iter()
    }
}

impl PartialEq for VSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.members.iter().all(|m| other.contains(m))
    }
}

impl<T: Into<Value>> FromIterator<T> for VSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = VSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl Debug for VSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Set ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

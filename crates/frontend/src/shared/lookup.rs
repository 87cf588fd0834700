//! Named key → value store used to resolve panels by fragment.
//!
//! Presence is tracked by the ordered key list, so a stored value is always
//! distinguishable from a key that was never stored, whatever the value is.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Lookup<V> {
    keys: Vec<String>,
    values: HashMap<String, V>,
}

impl<V> Default for Lookup<V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<V> Lookup<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value.
    pub fn store(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        if !self.values.contains_key(&name) {
            self.keys.push(name.clone());
        }
        self.values.insert(name, value);
    }

    pub fn lookup(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    /// True only for keys stored on this instance.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Visit every stored pair once, in insertion order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&str, &V),
    {
        for name in &self.keys {
            if let Some(value) = self.values.get(name) {
                action(name, value);
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Lookup<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Lookup::new();
        for (name, value) in iter {
            lookup.store(name, value);
        }
        lookup
    }
}

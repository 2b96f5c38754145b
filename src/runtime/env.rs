use std::collections::HashMap;

/// Variable bindings consulted when evaluating an expression.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    entries: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, k: &str) -> Option<i64> {
        self.entries.get(k).copied()
    }

    /// Binds `k` to `v`, returning the previous value if `k` was already bound.
    pub fn insert(&mut self, k: impl Into<String>, v: i64) -> Option<i64> {
        self.entries.insert(k.into(), v)
    }

    pub fn contains_key(&self, k: &str) -> bool {
        self.entries.contains_key(k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, i64)> for Environment {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

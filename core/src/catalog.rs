/// Key/value catalog model shared by both platform formats
use std::collections::HashMap;

/// A key to localized-string mapping for one language.
///
/// Lookup order is irrelevant; the serialized form of a catalog lives in
/// [`crate::formats::strings::StringsDocument`], which preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Convenience constructor used heavily by tests and fixtures.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Build the reverse value index for this catalog.
    ///
    /// Key lists are sorted so value joins resolve the same way no matter
    /// what order the entries were inserted in.
    pub fn value_index(&self) -> ValueIndex {
        let mut by_value: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in self.iter() {
            by_value
                .entry(value.to_string())
                .or_default()
                .push(key.to_string());
        }
        for keys in by_value.values_mut() {
            keys.sort();
        }
        ValueIndex { by_value }
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Reverse index from a value to every key that holds it.
#[derive(Debug, Clone, Default)]
pub struct ValueIndex {
    by_value: HashMap<String, Vec<String>>,
}

impl ValueIndex {
    /// All keys mapping to `value`, lexicographically sorted.
    pub fn keys_for(&self, value: &str) -> &[String] {
        self.by_value.get(value).map(Vec::as_slice).unwrap_or(&[])
    }
}

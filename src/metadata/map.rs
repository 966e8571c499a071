use serde::{Deserialize, Serialize};

use super::value::AttributeValue;
use super::MetadataError;

/// Insertion-ordered map of attribute names to scalar values.
///
/// Re-inserting an existing key replaces its value in place, so the
/// position of a key is the position at which it was first inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Vec<(String, AttributeValue)>",
    into = "Vec<(String, AttributeValue)>"
)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no attributes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// True if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Iterate over entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Serialize to JSON (ordered array of `[name, {type, value}]`)
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON produced by [`AttributeMap::to_json`]
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<(String, AttributeValue)>> for AttributeMap {
    fn from(entries: Vec<(String, AttributeValue)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<AttributeMap> for Vec<(String, AttributeValue)> {
    fn from(map: AttributeMap) -> Self {
        map.entries
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> Extend<(K, V)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, AttributeValue);
    type IntoIter = std::vec::IntoIter<(String, AttributeValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

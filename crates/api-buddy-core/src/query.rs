//! Aggregated query parameters.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Value(s) collected for one query key.
///
/// A key seen once stays `Single`; a repeated key becomes `Multiple` with the
/// values in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// All values for the key, in arrival order.
    pub fn values(&self) -> &[String] {
        match self {
            ParamValue::Single(v) => std::slice::from_ref(v),
            ParamValue::Multiple(vs) => vs,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(prev) => {
                let prev = std::mem::take(prev);
                *self = ParamValue::Multiple(vec![prev, value]);
            }
            ParamValue::Multiple(vs) => vs.push(value),
        }
    }
}

/// Query parameters keyed by name. Key order is not significant and is kept
/// sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, ParamValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`, promoting an existing single value to a list.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(key.into()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(ParamValue::Single(value));
            }
            btree_map::Entry::Occupied(mut slot) => slot.get_mut().push(value),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Flattened `(key, value)` pairs: keys in sorted order, repeated values
    /// in arrival order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, value)| {
            value
                .values()
                .iter()
                .map(move |v| (key.as_str(), v.as_str()))
        })
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

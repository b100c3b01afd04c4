//! Extracted route parameters.
//!
//! Captures are keyed by the name declared in the pattern (`:id` → `id`).
//! Captures beyond the declared names, including every capture of a raw
//! expression, are keyed by their zero-based capture index.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Key of a single captured parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    /// Positional capture without a declared name.
    Index(usize),
    /// Capture declared as `:name` in the pattern.
    Name(String),
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Index(i) => write!(f, "{}", i),
            ParamKey::Name(name) => f.write_str(name),
        }
    }
}

impl Serialize for ParamKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::Name(name.to_string())
    }
}

impl From<usize> for ParamKey {
    fn from(index: usize) -> Self {
        ParamKey::Index(index)
    }
}

/// Parameter mapping populated while matching a path.
///
/// Later inserts under an existing key overwrite the earlier value, so a
/// pattern such as `/a/:id/:id` keeps the last capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<ParamKey, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a named capture.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&ParamKey::Name(name.to_string()))
            .map(String::as_str)
    }

    /// Value of a positional capture.
    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.0.get(&ParamKey::Index(index)).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<ParamKey>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }
}

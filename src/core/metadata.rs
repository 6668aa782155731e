//! Key-value metadata attached to log events
//!
//! Kept ordered so rendering is deterministic across runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered string-to-string metadata carried by handlers and log calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    fields: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Space-joined `key=value` rendering; `None` when empty.
    pub fn prettify(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        Some(
            self.fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Merge where `other` wins on key conflicts.
    pub fn merged_with(&self, other: &Metadata) -> Metadata {
        let mut fields = self.fields.clone();
        for (key, value) in &other.fields {
            fields.insert(key.clone(), value.clone());
        }
        Metadata { fields }
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prettify().as_deref().unwrap_or(""))
    }
}

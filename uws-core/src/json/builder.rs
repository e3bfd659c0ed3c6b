//! Ordered JSON object construction

use serde_json::Value;

use super::Document;
use crate::error::{JsonError, Result};

/// Builds a [`Document`], refusing blank and duplicate keys
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; `None`-like values become JSON `null`
    pub fn put(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self> {
        if key.trim().is_empty() {
            return Err(JsonError::InvalidKey(key.to_string()));
        }
        if self.doc.contains_key(key) {
            return Err(JsonError::DuplicateKey(key.to_string()));
        }

        self.doc.insert(key.to_string(), value.into());
        Ok(self)
    }

    /// Add an entry only when a value is present
    pub fn put_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) -> Result<&mut Self> {
        match value {
            Some(value) => self.put(key, value),
            None => Ok(self),
        }
    }

    pub fn build(self) -> Document {
        self.doc
    }
}

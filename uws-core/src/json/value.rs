//! Single key/value documents

use super::Document;
use super::builder::DocumentBuilder;
use crate::error::Result;

fn usable_key(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.trim().is_empty())
}

/// `{key: value}`, or `{}` when the key is missing or blank
pub fn long_json(key: Option<&str>, value: i64) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    if let Some(key) = usable_key(key) {
        doc.put(key, value)?;
    }
    Ok(doc.build())
}

/// `{key: value}`, or `{}` when the key is missing or blank or the value is absent
pub fn string_json(key: Option<&str>, value: Option<&str>) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    if let Some(key) = usable_key(key) {
        doc.put_opt(key, value)?;
    }
    Ok(doc.build())
}

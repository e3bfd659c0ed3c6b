//! Job information documents

use serde_json::Value;

use super::Document;
use super::builder::DocumentBuilder;
use crate::domain::{InfoEntry, InfoValue, JobInfo};
use crate::error::Result;
use crate::time::format_timestamp;

/// JSON value of the job information
///
/// Array and map content is returned untouched; every other kind goes
/// through [`JobInfo::to_json`]. Absent information (or a conversion
/// yielding `null`) gives `None`.
pub fn job_info_json(info: Option<&JobInfo>) -> Result<Option<Value>> {
    let value = match info {
        None => return Ok(None),
        Some(JobInfo::Array(items)) => Value::Array(items.clone()),
        Some(JobInfo::Map(map)) => Value::Object(map.clone()),
        Some(other) => other.to_json()?,
    };
    Ok((!value.is_null()).then_some(value))
}

/// JSON document of named job information values
///
/// Null values are skipped and timestamps use the UWS time format.
pub fn job_info_entries_json<'a, I>(entries: Option<I>) -> Result<Document>
where
    I: IntoIterator<Item = &'a InfoEntry>,
{
    let mut doc = DocumentBuilder::new();
    for entry in entries.into_iter().flatten() {
        match &entry.value {
            InfoValue::Null | InfoValue::Value(Value::Null) => continue,
            InfoValue::Time(time) => doc.put(&entry.key, format_timestamp(*time))?,
            InfoValue::Value(value) => doc.put(&entry.key, value.clone())?,
        };
    }
    Ok(doc.build())
}

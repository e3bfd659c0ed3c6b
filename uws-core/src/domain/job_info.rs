//! Additional job information domain types

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::json;

/// Job information able to convert itself to JSON
pub trait JobInfoContent: fmt::Debug + Send + Sync {
    fn to_json(&self) -> crate::Result<Value>;
}

/// Extra information attached to a job by the service
///
/// `Array` and `Map` already hold JSON fragments. Every other variant
/// converts itself through [`JobInfo::to_json`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum JobInfo {
    Array(Vec<Value>),
    Map(Map<String, Value>),
    /// Named values, possibly timestamps
    Entries(Vec<InfoEntry>),
    #[serde(skip_deserializing)]
    Custom(Arc<dyn JobInfoContent>),
}

/// One named value of [`JobInfo::Entries`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoEntry {
    pub key: String,
    pub value: InfoValue,
}

impl InfoEntry {
    pub fn new(key: impl Into<String>, value: InfoValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoValue {
    Null,
    Time(DateTime<Utc>),
    Value(Value),
}

impl JobInfo {
    /// Conversion used for every variant that is not already JSON
    pub fn to_json(&self) -> crate::Result<Value> {
        match self {
            JobInfo::Array(items) => Ok(Value::Array(items.clone())),
            JobInfo::Map(map) => Ok(Value::Object(map.clone())),
            JobInfo::Entries(entries) => {
                json::job_info_entries_json(Some(entries.iter())).map(Value::Object)
            }
            JobInfo::Custom(content) => content.to_json(),
        }
    }

    /// Whether the content is passed through untouched
    pub fn is_structured(&self) -> bool {
        matches!(self, JobInfo::Array(_) | JobInfo::Map(_))
    }
}

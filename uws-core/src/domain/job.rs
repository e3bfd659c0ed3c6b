//! Job domain types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error_summary::ErrorSummary;
use super::job_info::JobInfo;
use super::owner::Owner;
use super::result::JobResult;
use crate::error::FilterError;

/// Execution phase of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionPhase {
    Pending,
    Queued,
    Executing,
    Completed,
    Error,
    Aborted,
    Unknown,
    Held,
    Suspended,
    Archived,
}

impl ExecutionPhase {
    pub const ALL: [ExecutionPhase; 10] = [
        ExecutionPhase::Pending,
        ExecutionPhase::Queued,
        ExecutionPhase::Executing,
        ExecutionPhase::Completed,
        ExecutionPhase::Error,
        ExecutionPhase::Aborted,
        ExecutionPhase::Unknown,
        ExecutionPhase::Held,
        ExecutionPhase::Suspended,
        ExecutionPhase::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionPhase::Pending => "PENDING",
            ExecutionPhase::Queued => "QUEUED",
            ExecutionPhase::Executing => "EXECUTING",
            ExecutionPhase::Completed => "COMPLETED",
            ExecutionPhase::Error => "ERROR",
            ExecutionPhase::Aborted => "ABORTED",
            ExecutionPhase::Unknown => "UNKNOWN",
            ExecutionPhase::Held => "HELD",
            ExecutionPhase::Suspended => "SUSPENDED",
            ExecutionPhase::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ExecutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionPhase {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownPhase(name.to_string()))
    }
}

/// Value of an additional job parameter
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Multi-valued parameter
    Array(Vec<Value>),
    Single(Value),
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => ParamValue::Array(items),
            other => ParamValue::Single(other),
        }
    }
}

/// A UWS job
///
/// Snapshot of the job as seen by the job engine at read time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub phase: ExecutionPhase,
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Estimated execution time in seconds
    #[serde(default)]
    pub quote: Option<i64>,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub destruction_time: Option<DateTime<Utc>>,
    /// Maximum duration in seconds, 0 for unlimited
    #[serde(default)]
    pub execution_duration: i64,
    /// Additional parameters in declaration order
    #[serde(default, deserialize_with = "ordered_parameters")]
    pub parameters: Vec<(String, ParamValue)>,
    /// `None` when this job does not report results at all
    #[serde(default)]
    pub results: Option<Vec<JobResult>>,
    #[serde(default)]
    pub error_summary: Option<ErrorSummary>,
    #[serde(default)]
    pub job_info: Option<JobInfo>,
}

fn ordered_parameters<'de, D>(deserializer: D) -> Result<Vec<(String, ParamValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
    Ok(map.into_iter().map(|(k, v)| (k, ParamValue::from(v))).collect())
}

impl Job {
    /// Create a pending job with no parameters and an empty result list
    pub fn new(id: impl Into<String>, creation_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            phase: ExecutionPhase::Pending,
            run_id: None,
            owner: None,
            quote: None,
            creation_time,
            start_time: None,
            end_time: None,
            destruction_time: None,
            execution_duration: 0,
            parameters: Vec::new(),
            results: Some(Vec::new()),
            error_summary: None,
            job_info: None,
        }
    }

    pub fn with_phase(mut self, phase: ExecutionPhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_quote(mut self, quote: i64) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_destruction_time(mut self, destruction_time: DateTime<Utc>) -> Self {
        self.destruction_time = Some(destruction_time);
        self
    }

    pub fn with_execution_duration(mut self, seconds: i64) -> Self {
        self.execution_duration = seconds;
        self
    }

    /// Append an additional parameter
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    pub fn with_results(mut self, results: Option<Vec<JobResult>>) -> Self {
        self.results = results;
        self
    }

    pub fn with_error_summary(mut self, error: ErrorSummary) -> Self {
        self.error_summary = Some(error);
        self
    }

    pub fn with_job_info(mut self, info: JobInfo) -> Self {
        self.job_info = Some(info);
        self
    }

    pub fn has_job_info(&self) -> bool {
        self.job_info.is_some()
    }
}

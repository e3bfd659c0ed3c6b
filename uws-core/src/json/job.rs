//! Job documents

use serde_json::Value;

use super::builder::DocumentBuilder;
use super::job_info::job_info_json;
use super::{Document, UWS_VERSION};
use crate::domain::{ErrorSummary, Job, JobListUrl, JobResult, Owner, ParamValue};
use crate::error::Result;
use crate::time::format_timestamp;

/// JSON document of a job
///
/// In reference mode (`reference = true`) only the fields needed to list
/// the job are written: `href` (when `list_url` is given), `runId` and
/// `owner` when set, and `creationTime`. The full form always writes
/// `runId` (possibly `null`) and `errorSummary` (possibly empty).
pub fn job_json(
    job: Option<&Job>,
    list_url: Option<&JobListUrl>,
    reference: bool,
) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    let Some(job) = job else {
        return Ok(doc.build());
    };

    doc.put("version", UWS_VERSION)?
        .put("jobId", job.id.as_str())?
        .put("phase", job.phase.as_str())?;

    let owner = job.owner.as_ref().map(Owner::display_name);

    if reference {
        doc.put_opt("href", list_url.map(|url| url.job_url(&job.id)))?
            .put_opt("runId", job.run_id.as_deref())?
            .put_opt("owner", owner)?
            .put("creationTime", format_timestamp(job.creation_time))?;
    } else {
        doc.put("runId", job.run_id.as_deref())?
            .put_opt("owner", owner)?
            .put("quote", job.quote)?
            .put("creationTime", format_timestamp(job.creation_time))?
            .put_opt("startTime", job.start_time.map(format_timestamp))?
            .put_opt("endTime", job.end_time.map(format_timestamp))?
            .put_opt("destruction", job.destruction_time.map(format_timestamp))?
            .put("executionDuration", job.execution_duration)?
            .put("parameters", job_params_json(Some(job))?)?
            .put_opt("results", job_results_json(Some(job))?)?
            .put("errorSummary", error_summary_json(job.error_summary.as_ref())?)?;

        if job.has_job_info() {
            doc.put_opt("jobInfo", job_info_json(job.job_info.as_ref())?)?;
        }
    }

    Ok(doc.build())
}

/// Additional parameters of a job, in declaration order
///
/// Multi-valued parameters become arrays of strings without their null
/// items. Any other value is copied as is.
pub fn job_params_json(job: Option<&Job>) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    if let Some(job) = job {
        for (name, value) in &job.parameters {
            doc.put(name, param_json(value))?;
        }
    }
    Ok(doc.build())
}

fn param_json(value: &ParamValue) -> Value {
    match value {
        ParamValue::Array(items) => items
            .iter()
            .filter_map(text_value)
            .map(Value::String)
            .collect(),
        ParamValue::Single(value) => value.clone(),
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Results of a job
///
/// Returns `None` when the job does not report results at all, which is
/// not the same as a job with zero results.
pub fn job_results_json(job: Option<&Job>) -> Result<Option<Vec<Value>>> {
    let Some(job) = job else {
        return Ok(Some(Vec::new()));
    };
    let Some(results) = &job.results else {
        return Ok(None);
    };

    results
        .iter()
        .map(|r| job_result_json(Some(r)).map(Value::Object))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// JSON document of one result; an unknown (negative) size is left out
pub fn job_result_json(result: Option<&JobResult>) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    if let Some(r) = result {
        doc.put("id", r.id.as_str())?
            .put("type", r.result_type.as_str())?
            .put_opt("href", r.href.as_deref())?
            .put_opt("mime", r.mime_type.as_deref())?
            .put_opt("size", r.known_size())?
            .put("redirection", r.redirection)?;
    }
    Ok(doc.build())
}

/// JSON document of an error summary
pub fn error_summary_json(error: Option<&ErrorSummary>) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    if let Some(error) = error {
        doc.put("type", error.error_type.as_str())?
            .put("hasDetail", error.has_detail())?
            .put_opt("detailsRef", error.details.as_deref())?
            .put("message", error.message.as_str())?;
    }
    Ok(doc.build())
}

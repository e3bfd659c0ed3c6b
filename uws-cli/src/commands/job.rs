//! Job command handlers
//!
//! Builds job list documents (with the viewer's filters) and single job
//! documents.

use anyhow::{Context, Result, anyhow};
use colored::*;
use uws_core::domain::{JobList, Service};
use uws_core::filter::{AfterFilter, JobFilter, JobListFilter, PhaseFilter};
use uws_core::json::{Document, job_json, job_list_json};

use crate::config::Config;

fn find_list<'a>(service: &'a Service, name: &str) -> Result<&'a JobList> {
    service
        .job_list(name)
        .ok_or_else(|| anyhow!("Job list not found: {}", name))
}

/// Filters requested on the command line
pub fn build_filter(after: Option<&str>, phases: &[String]) -> Result<JobListFilter> {
    let mut filter = JobListFilter::new();

    if let Some(after) = after {
        let after: AfterFilter = after
            .parse()
            .with_context(|| format!("Invalid --after value {:?}", after))?;
        filter.push(after);
    }

    if !phases.is_empty() {
        filter.push(PhaseFilter::parse(phases).context("Invalid --phase value")?);
    }

    Ok(filter)
}

/// Build the document of a job list as seen by the configured viewer
pub fn job_list_document(
    service: &Service,
    config: &Config,
    list: &str,
    after: Option<&str>,
    phases: &[String],
) -> Result<Document> {
    let job_list = find_list(service, list)?;
    let filter = build_filter(after, phases)?;
    let user_filter: Option<&dyn JobFilter> = if filter.is_empty() {
        None
    } else {
        Some(&filter)
    };

    let doc = job_list_json(Some(job_list), config.viewer.as_ref(), user_filter)
        .with_context(|| format!("Failed to build document of job list {}", list))?;

    let count = doc
        .get("jobs")
        .and_then(|jobs| jobs.as_array())
        .map_or(0, Vec::len);
    if count == 0 {
        eprintln!("{}", "No jobs visible.".yellow());
    } else {
        tracing::info!(list, jobs = count, filters = filter.len(), "Listed jobs");
    }

    Ok(doc)
}

/// Build the document of one job
pub fn job_document(service: &Service, list: &str, id: &str, reference: bool) -> Result<Document> {
    let job_list = find_list(service, list)?;
    let job = job_list
        .find_job(id)
        .ok_or_else(|| anyhow!("Job not found: {} in list {}", id, list))?;

    job_json(Some(job), job_list.url.as_ref(), reference)
        .with_context(|| format!("Failed to build document of job {}", id))
}

//! Service and job list documents

use serde_json::Value;

use super::builder::DocumentBuilder;
use super::job::job_json;
use super::{Document, UWS_VERSION};
use crate::domain::{JobList, Owner, Service};
use crate::error::Result;
use crate::filter::{JobFilter, list_jobs};

/// JSON document of a service and the location of its job lists
pub fn service_json(service: Option<&Service>) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    let Some(service) = service else {
        return Ok(doc.build());
    };

    let job_lists = service
        .job_lists
        .iter()
        .map(|jl| -> Result<Value> {
            let mut entry = DocumentBuilder::new();
            entry
                .put("name", jl.name.as_str())?
                .put_opt("href", jl.url.as_ref().map(|url| url.request_uri()))?;
            Ok(Value::Object(entry.build()))
        })
        .collect::<Result<Vec<_>>>()?;

    doc.put("name", service.name.as_str())?
        .put("version", UWS_VERSION)?
        .put_opt("description", service.description.as_deref())?
        .put("jobLists", job_lists)?;

    Ok(doc.build())
}

/// JSON document of the jobs of a list that `viewer` may see
///
/// Jobs go through the list's security selection, then through `filter`
/// when one is given, and are written in reference mode. An absent list
/// gives an empty document without a `jobs` key.
pub fn job_list_json(
    job_list: Option<&JobList>,
    viewer: Option<&Owner>,
    filter: Option<&dyn JobFilter>,
) -> Result<Document> {
    let mut doc = DocumentBuilder::new();
    let Some(job_list) = job_list else {
        return Ok(doc.build());
    };

    let url = job_list.url.as_ref();
    let jobs = list_jobs(job_list, viewer, filter)
        .map(|job| job_json(Some(job), url, true).map(Value::Object))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        list = %job_list.name,
        viewer = viewer.map(|o| o.id.as_str()).unwrap_or("<anonymous>"),
        jobs = jobs.len(),
        "Serialized job list"
    );

    doc.put("name", job_list.name.as_str())?
        .put("version", UWS_VERSION)?
        .put("jobs", jobs)?;

    Ok(doc.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Job, JobListUrl};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_absent_entities_give_empty_documents() {
        assert!(service_json(None).unwrap().is_empty());
        let doc = job_list_json(None, Some(&Owner::new("alice")), None).unwrap();
        assert!(doc.is_empty());
        assert!(!doc.contains_key("jobs"));
    }

    #[test]
    fn test_service_lists_job_list_locations() {
        let service = Service::new("TAPService")
            .with_job_list(
                JobList::new("async").with_url(JobListUrl::new("http://localhost/tap/async")),
            )
            .with_job_list(JobList::new("scratch"));

        let doc = service_json(Some(&service)).unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({
                "name": "TAPService",
                "version": "1.1",
                "jobLists": [
                    { "name": "async", "href": "/tap/async" },
                    { "name": "scratch" }
                ]
            })
        );
    }

    #[test]
    fn test_job_list_for_empty_list_has_empty_jobs() {
        let doc = job_list_json(Some(&JobList::new("async")), None, None).unwrap();
        assert_eq!(
            Value::Object(doc),
            json!({ "name": "async", "version": "1.1", "jobs": [] })
        );
    }

    #[test]
    fn test_job_list_writes_references() {
        let list = JobList::new("async")
            .with_url(JobListUrl::new("http://localhost/tap/async"))
            .with_job(Job::new("j1", Utc::now()).with_quote(5));
        let doc = job_list_json(Some(&list), None, None).unwrap();
        let jobs = doc["jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["href"], json!("http://localhost/tap/async/j1"));
        assert!(jobs[0].get("quote").is_none());
    }
}

//! Job list domain types

use serde::Deserialize;

use super::job::Job;
use super::owner::Owner;

/// Location of a job list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct JobListUrl {
    /// Absolute URL of the list, e.g. `http://host/tap/async`
    pub base: String,
}

impl JobListUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Path of the list, without scheme and authority
    pub fn request_uri(&self) -> &str {
        match self.base.split_once("://") {
            Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
            None => &self.base,
        }
    }

    /// Absolute URL of one job of the list
    pub fn job_url(&self, job_id: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), job_id)
    }
}

/// A named collection of jobs
#[derive(Debug, Clone, Deserialize)]
pub struct JobList {
    pub name: String,
    #[serde(default)]
    pub url: Option<JobListUrl>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl JobList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            jobs: Vec::new(),
        }
    }

    pub fn with_url(mut self, url: JobListUrl) -> Self {
        self.url = Some(url);
        self
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn find_job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Jobs the given viewer is allowed to see, lazily
    ///
    /// Without a viewer (no user identification) every job is visible.
    pub fn jobs_visible_to<'a>(
        &'a self,
        viewer: Option<&'a Owner>,
    ) -> impl Iterator<Item = &'a Job> + 'a {
        self.jobs
            .iter()
            .filter(move |job| viewer.is_none_or(|owner| owner.can_read(job)))
    }
}

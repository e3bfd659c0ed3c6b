//! Job filters
//!
//! A [`JobFilter`] is a pure predicate over one job. [`list_jobs`] always
//! applies the security selection of the job list first and only then the
//! caller's filter, so a filter can narrow what a viewer sees but never
//! widen it.

mod after;
mod phase;

pub use after::AfterFilter;
pub use phase::PhaseFilter;

use crate::domain::{Job, JobList, Owner};

/// Predicate deciding whether a job is kept
pub trait JobFilter {
    fn matches(&self, job: &Job) -> bool;
}

impl<F> JobFilter for F
where
    F: Fn(&Job) -> bool,
{
    fn matches(&self, job: &Job) -> bool {
        self(job)
    }
}

/// Filter keeping every job
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl JobFilter for AcceptAll {
    fn matches(&self, _job: &Job) -> bool {
        true
    }
}

/// Conjunction of filters
///
/// A job is kept only if every filter keeps it. An empty list keeps all jobs.
#[derive(Default)]
pub struct JobListFilter {
    filters: Vec<Box<dyn JobFilter>>,
}

impl JobListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl JobFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn push(&mut self, filter: impl JobFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl JobFilter for JobListFilter {
    fn matches(&self, job: &Job) -> bool {
        self.filters.iter().all(|f| f.matches(job))
    }
}

impl std::fmt::Debug for JobListFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobListFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Jobs of `job_list` visible to `viewer` and kept by `filter`, lazily
///
/// The security selection runs first; `filter` only ever sees jobs the
/// viewer is entitled to. A missing filter keeps every visible job.
pub fn list_jobs<'a>(
    job_list: &'a JobList,
    viewer: Option<&'a Owner>,
    filter: Option<&'a dyn JobFilter>,
) -> impl Iterator<Item = &'a Job> + 'a {
    let filter: &'a dyn JobFilter = filter.unwrap_or(&AcceptAll);

    job_list.jobs_visible_to(viewer).filter(move |job| {
        let keep = filter.matches(job);
        if !keep {
            tracing::trace!(job_id = %job.id, list = %job_list.name, "Job rejected by filter");
        }
        keep
    })
}

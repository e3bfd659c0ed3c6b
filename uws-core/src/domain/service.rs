//! Service domain type

use serde::Deserialize;

use super::job_list::JobList;

/// Root of the UWS model
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Job lists in registration order
    #[serde(default)]
    pub job_lists: Vec<JobList>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            job_lists: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_job_list(mut self, job_list: JobList) -> Self {
        self.job_lists.push(job_list);
        self
    }

    pub fn job_list(&self, name: &str) -> Option<&JobList> {
        self.job_lists.iter().find(|jl| jl.name == name)
    }
}

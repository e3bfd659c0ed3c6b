//! Execution phase job filter

use super::JobFilter;
use crate::domain::{ExecutionPhase, Job};
use crate::error::FilterError;

/// Keeps jobs whose phase is one of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseFilter {
    phases: Vec<ExecutionPhase>,
}

impl PhaseFilter {
    pub fn new(phases: impl IntoIterator<Item = ExecutionPhase>) -> Result<Self, FilterError> {
        let mut kept: Vec<ExecutionPhase> = Vec::new();
        for phase in phases {
            if !kept.contains(&phase) {
                kept.push(phase);
            }
        }

        if kept.is_empty() {
            return Err(FilterError::NoPhase);
        }
        Ok(Self { phases: kept })
    }

    /// Build the filter from phase names, e.g. `["EXECUTING", "queued"]`
    pub fn parse<I, S>(names: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phases = names
            .into_iter()
            .map(|name| name.as_ref().parse::<ExecutionPhase>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(phases)
    }

    pub fn phases(&self) -> &[ExecutionPhase] {
        &self.phases
    }
}

impl JobFilter for PhaseFilter {
    fn matches(&self, job: &Job) -> bool {
        self.phases.contains(&job.phase)
    }
}

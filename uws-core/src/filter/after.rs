//! Started-after job filter

use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::JobFilter;
use crate::domain::Job;
use crate::error::FilterError;
use crate::time;

/// Keeps jobs started strictly after a cutoff date
///
/// Jobs that have not started yet are rejected as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfterFilter {
    cutoff: DateTime<Utc>,
}

impl AfterFilter {
    pub fn new(cutoff: DateTime<Utc>) -> Self {
        Self { cutoff }
    }

    /// Build the filter from an optional cutoff, failing when it is absent
    pub fn try_new(cutoff: Option<DateTime<Utc>>) -> Result<Self, FilterError> {
        cutoff.map(Self::new).ok_or(FilterError::MissingCutoff)
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }
}

impl FromStr for AfterFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::parse_timestamp(s).map(Self::new)
    }
}

impl JobFilter for AfterFilter {
    fn matches(&self, job: &Job) -> bool {
        job.start_time.is_some_and(|start| start > self.cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn cutoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 10, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_try_new_requires_cutoff() {
        assert_eq!(AfterFilter::try_new(None), Err(FilterError::MissingCutoff));
        assert_eq!(AfterFilter::try_new(Some(cutoff())).unwrap().cutoff(), cutoff());
    }

    #[test]
    fn test_parse_cutoff() {
        let filter: AfterFilter = "2015-10-01T12:00:00Z".parse().unwrap();
        assert_eq!(filter.cutoff(), cutoff());
        assert_eq!("".parse::<AfterFilter>(), Err(FilterError::MissingCutoff));
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        let filter = AfterFilter::new(cutoff());
        let job = |start| Job::new("1", cutoff() - Duration::days(1)).with_start_time(start);

        assert!(!filter.matches(&job(cutoff())));
        assert!(!filter.matches(&job(cutoff() - Duration::milliseconds(1))));
        assert!(filter.matches(&job(cutoff() + Duration::milliseconds(1))));
    }

    #[test]
    fn test_not_started_is_rejected() {
        let filter = AfterFilter::new(cutoff());
        assert!(!filter.matches(&Job::new("1", cutoff() + Duration::days(1))));
    }
}

//! Core domain types
//!
//! This module contains the read-only model of a UWS: the service, its job
//! lists and the jobs they hold. The job engine owns and mutates these
//! values; this crate only reads them.

pub mod error_summary;
pub mod job;
pub mod job_info;
pub mod job_list;
pub mod owner;
pub mod result;
pub mod service;

pub use error_summary::{ErrorSummary, ErrorType};
pub use job::{ExecutionPhase, Job, ParamValue};
pub use job_info::{InfoEntry, InfoValue, JobInfo, JobInfoContent};
pub use job_list::{JobList, JobListUrl};
pub use owner::Owner;
pub use result::JobResult;
pub use service::Service;

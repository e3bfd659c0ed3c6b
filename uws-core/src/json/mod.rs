//! JSON representation of UWS entities
//!
//! Every function takes its entity as an `Option` and returns the empty
//! value of its kind (an empty object, or `None` for job info) when the
//! entity is absent. Errors only come from document construction.

mod builder;
mod job;
mod job_info;
mod service;
mod value;

pub use builder::DocumentBuilder;
pub use job::{
    error_summary_json, job_json, job_params_json, job_result_json, job_results_json,
};
pub use job_info::{job_info_entries_json, job_info_json};
pub use service::{job_list_json, service_json};
pub use value::{long_json, string_json};

/// A JSON object with keys in insertion order
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Version of the UWS protocol written in every document
pub const UWS_VERSION: &str = "1.1";

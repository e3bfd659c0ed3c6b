//! UWS Core
//!
//! External representation of a Universal Worker Service.
//!
//! This crate contains:
//! - Domain types: read-only model of a service, its job lists and jobs
//! - Filters: job filters and the security-first filter pipeline
//! - JSON: the canonical JSON documents of every entity

pub mod domain;
pub mod error;
pub mod filter;
pub mod json;
pub mod time;

pub use error::{FilterError, JsonError, Result};

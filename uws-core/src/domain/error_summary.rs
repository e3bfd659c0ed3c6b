//! Error summary domain types

use serde::Deserialize;

/// Severity of a job error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorType {
    Fatal,
    Transient,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Fatal => "FATAL",
            ErrorType::Transient => "TRANSIENT",
        }
    }
}

/// Summary of the error that stopped a job
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorSummary {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub message: String,
    /// Reference to a detailed error report
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorSummary {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn has_detail(&self) -> bool {
        self.details.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

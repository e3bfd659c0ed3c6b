//! Job result domain type

use serde::Deserialize;

/// A result produced by a job
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub id: String,
    #[serde(rename = "type", default = "default_result_type")]
    pub result_type: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes, negative when unknown
    #[serde(default = "unknown_size")]
    pub size: i64,
    /// Whether fetching the result redirects to `href`
    #[serde(default)]
    pub redirection: bool,
}

fn default_result_type() -> String {
    "simple".to_string()
}

fn unknown_size() -> i64 {
    -1
}

impl JobResult {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            result_type: default_result_type(),
            href: None,
            mime_type: None,
            size: unknown_size(),
            redirection: false,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn with_redirection(mut self, redirection: bool) -> Self {
        self.redirection = redirection;
        self
    }

    /// Size in bytes, if known
    pub fn known_size(&self) -> Option<i64> {
        (self.size >= 0).then_some(self.size)
    }
}

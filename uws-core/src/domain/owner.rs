//! Job owner domain type

use serde::Deserialize;

use super::job::Job;

/// Identity of a user, used both for access checks and for display
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub id: String,
    #[serde(default)]
    pub pseudo: Option<String>,
    /// Grants read access to every job of every list
    #[serde(default)]
    pub admin: bool,
}

impl Owner {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pseudo: None,
            admin: false,
        }
    }

    pub fn with_pseudo(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudo = Some(pseudo.into());
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Name shown in documents: the pseudo when set, the id otherwise
    pub fn display_name(&self) -> &str {
        self.pseudo.as_deref().unwrap_or(&self.id)
    }

    /// Whether this user may read the given job
    pub fn can_read(&self, job: &Job) -> bool {
        self.admin || job.owner.as_ref().is_some_and(|o| o.id == self.id)
    }
}

//! Configuration module
//!
//! Settings shared by every command: where the snapshot lives, who is
//! looking at it and how documents are printed.

use std::path::PathBuf;

use uws_core::domain::Owner;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the service snapshot
    pub snapshot: PathBuf,

    /// User the job lists are rendered for, `None` for no identification
    pub viewer: Option<Owner>,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Config {
    pub fn new(snapshot: PathBuf, owner: Option<String>, admin: bool, pretty: bool) -> Self {
        let viewer = owner
            .filter(|id| !id.trim().is_empty())
            .map(|id| Owner::new(id.trim()).with_admin(admin));

        Self {
            snapshot,
            viewer,
            pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_owner_means_no_viewer() {
        let config = Config::new(PathBuf::from("s.json"), Some("  ".to_string()), true, false);
        assert!(config.viewer.is_none());
    }

    #[test]
    fn test_owner_with_admin() {
        let config = Config::new(PathBuf::from("s.json"), Some("alice".to_string()), true, false);
        let viewer = config.viewer.unwrap();
        assert_eq!(viewer.id, "alice");
        assert!(viewer.admin);
    }
}

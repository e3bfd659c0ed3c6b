//! Service snapshot loading

use std::path::Path;

use anyhow::{Context, Result};
use uws_core::domain::Service;

/// Read a service snapshot from a JSON file
pub fn load_service(path: &Path) -> Result<Service> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;

    let service: Service = serde_json::from_str(&text)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;

    tracing::info!(
        service = %service.name,
        job_lists = service.job_lists.len(),
        "Loaded snapshot"
    );

    Ok(service)
}

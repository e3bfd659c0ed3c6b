//! Service command handler

use anyhow::{Context, Result};
use uws_core::domain::Service;
use uws_core::json::{Document, service_json};

/// Build the service document
pub fn service_document(service: &Service) -> Result<Document> {
    service_json(Some(service)).context("Failed to build service document")
}

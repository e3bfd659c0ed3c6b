//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod service;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::Value;
use uws_core::json::Document;

use crate::config::Config;
use crate::snapshot::load_service;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the service document
    Service,
    /// Print the jobs of a list visible to the viewer
    Jobs {
        /// Job list name
        list: String,

        /// Keep only jobs started after this ISO-8601 date
        #[arg(long)]
        after: Option<String>,

        /// Keep only jobs in one of these phases (repeatable)
        #[arg(long = "phase")]
        phases: Vec<String>,
    },
    /// Print one job
    Job {
        /// Job list name
        list: String,

        /// Job id
        id: String,

        /// Print the short reference form
        #[arg(long)]
        reference: bool,
    },
}

/// Handle a CLI command
///
/// Loads the snapshot and routes the command to its handler.
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let service = load_service(&config.snapshot)?;

    let doc = match command {
        Commands::Service => service::service_document(&service)?,
        Commands::Jobs {
            list,
            after,
            phases,
        } => job::job_list_document(&service, config, &list, after.as_deref(), &phases)?,
        Commands::Job {
            list,
            id,
            reference,
        } => job::job_document(&service, &list, &id, reference)?,
    };

    print_document(doc, config.pretty)
}

fn print_document(doc: Document, pretty: bool) -> Result<()> {
    let value = Value::Object(doc);
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .context("Failed to write document")?;

    println!("{}", text);
    Ok(())
}

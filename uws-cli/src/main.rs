//! UWS CLI
//!
//! Command-line interface printing the JSON documents of a UWS snapshot.

mod commands;
mod config;
mod snapshot;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "uws")]
#[command(about = "UWS document renderer", long_about = None)]
struct Cli {
    /// Service snapshot (JSON file)
    #[arg(long, env = "UWS_SNAPSHOT", default_value = "uws-snapshot.json")]
    snapshot: PathBuf,

    /// Id of the user viewing the jobs
    #[arg(long, env = "UWS_OWNER")]
    owner: Option<String>,

    /// Let the viewer read every job
    #[arg(long, env = "UWS_ADMIN")]
    admin: bool,

    /// Pretty-print documents
    #[arg(long, env = "UWS_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uws=info,uws_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.snapshot, cli.owner, cli.admin, cli.pretty);

    handle_command(cli.command, &config)
}

//! `backoffice` command-line console.

mod app;
mod cli;
mod commands;
mod output;

use clap::Parser;

use backoffice_observability::LogSettings;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    backoffice_observability::tracing::init(&LogSettings::verbose(cli.verbose));

    commands::execute(cli).await
}

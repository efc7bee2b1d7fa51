mod api;
mod busy;
mod cache;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod gallery;
mod logging;
mod model;
mod output;
mod tui;

use clap::Parser;
use error::ErrorFormatter;
use logging::LogTarget;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(&LogTarget::for_command(
        &cli.command,
        config::artq_home().as_deref(),
    ));

    let verbose = cli.verbose;
    if let Err(err) = commands::dispatch(cli).await {
        tracing::debug!(error = %err, "command failed");
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err.into_rich()));
        std::process::exit(1);
    }
}

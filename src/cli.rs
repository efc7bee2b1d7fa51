use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, cache, categories, facet, search};

#[derive(Debug, Parser)]
#[command(name = "artq")]
#[command(about = "Art collection query CLI", long_about = None)]
pub struct Cli {
    /// Path to config.toml (defaults to ~/.artq/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show cause, remediation and source chain on errors
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List classifications and centuries
    Categories(categories::Args),

    /// Search the collection
    Search(search::Args),

    /// Search by a single field value
    Facet(facet::Args),

    /// Inspect or clear the category cache
    Cache(cache::Args),

    /// Browse the collection interactively
    Browse(browse::Args),
}

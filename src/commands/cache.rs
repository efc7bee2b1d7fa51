//! artq cache コマンド
//!
//! カテゴリキャッシュの確認と明示的な無効化。

use super::Context;
use crate::error::Result;
use crate::model::CategoryKind;
use crate::output;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List cached category lists
    #[command(long_about = "Show each cached category list with its item count and when it was stored.")]
    List,

    /// Remove cached category lists
    #[command(
        long_about = "Remove a cached category list so the next run fetches it again. Removes every list when KIND is omitted."
    )]
    Clear {
        /// centuries or classifications
        #[arg(value_parser = parse_kind)]
        kind: Option<CategoryKind>,
    },
}

fn parse_kind(value: &str) -> std::result::Result<CategoryKind, String> {
    CategoryKind::from_key(value).ok_or_else(|| {
        let keys: Vec<&str> = CategoryKind::all().iter().map(|k| k.key()).collect();
        format!("expected one of: {}", keys.join(", "))
    })
}

pub fn run(context: &Context, args: Args) -> Result<()> {
    let cache = context.cache()?;

    match args.command {
        Command::List => {
            let entries = cache.entries()?;
            output::print_cache_entries(&entries);
        }
        Command::Clear { kind } => {
            let removed = cache.clear(kind)?;
            if removed.is_empty() {
                println!("{} Nothing to clear", "•".yellow());
            } else {
                let keys: Vec<&str> = removed.iter().map(|k| k.key()).collect();
                println!("{} Cleared {}", "✓".green(), keys.join(", "));
            }
        }
    }

    Ok(())
}

//! artq categories コマンド
//!
//! 分類と世紀の一覧を先読みして表示する。

use super::Context;
use crate::busy::BusyIndicator;
use crate::error::Result;
use crate::gallery::prefetch::prefetch_categories;
use crate::output;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Drop cached lists and fetch them again
    #[arg(long)]
    pub refresh: bool,
}

pub async fn run(context: &Context, args: Args) -> Result<()> {
    let endpoint = context.endpoint()?;
    let cache = context.cache()?;
    let client = context.client();

    if args.refresh {
        let removed = cache.clear(None)?;
        tracing::info!(removed = removed.len(), "category cache cleared for refresh");
    }

    let busy = BusyIndicator::new();
    let lists = output::with_spinner(
        &busy,
        "Loading categories...",
        prefetch_categories(&client, &endpoint, &cache, &busy),
    )
    .await?;

    if args.json {
        output::print_json(&lists)
    } else {
        output::print_categories(&lists);
        Ok(())
    }
}

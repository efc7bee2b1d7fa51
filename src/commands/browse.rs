//! artq browse コマンド
//!
//! 対話的な検索画面を起動する。

use super::Context;
use crate::api::ArtApi;
use crate::busy::BusyIndicator;
use crate::error::Result;
use crate::gallery::Gallery;
use crate::tui;
use clap::Parser;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(after_help = "\
KEYS:
  Tab / Shift+Tab   Move focus between panes
  Left / Right      Cycle classification and century options
  Enter             Search (form), open card (results), follow link (details)
  n / p             Next / previous page
  q / Esc           Quit

LOGS:
  While browsing, logs are appended to ~/.artq/artq.log (level from ARTQ_LOG)")]
pub struct Args {}

pub async fn run(context: &Context, _args: Args) -> Result<()> {
    let gallery = Gallery::new(context.endpoint()?, BusyIndicator::new());
    let api: Arc<dyn ArtApi> = Arc::new(context.client());
    let cache = context.cache()?;

    tokio::task::block_in_place(|| tui::run(gallery, api, cache))
}

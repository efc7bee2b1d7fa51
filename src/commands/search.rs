//! artq search コマンド
//!
//! フィルタで検索するか、ページ送りの URL をそのまま辿って結果を表示する。

use super::Context;
use crate::api::ArtApi;
use crate::busy::BusyIndicator;
use crate::error::{ArtqError, Result};
use crate::gallery::{Gallery, PageRequest};
use crate::model::{ArtworkRecord, PageInfo, SearchFilter};
use crate::output;
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(after_help = "\
FILTERS:
  Every filter is sent even when empty, so `artq search` alone lists all objects.

PAGINATION:
  The next/prev URLs printed under the table can be passed back with --url.")]
pub struct Args {
    /// Classification name (e.g. Paintings)
    #[arg(long, default_value = "")]
    pub classification: String,

    /// Century name (e.g. "19th century")
    #[arg(long, default_value = "")]
    pub century: String,

    /// Free-text keyword
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Follow a pagination URL verbatim instead of building a query
    #[arg(long, conflicts_with_all = ["classification", "century", "keyword"])]
    pub url: Option<String>,

    /// Also show the detail view of the card at this index
    #[arg(long)]
    pub select: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(context: &Context, args: Args) -> Result<()> {
    let busy = BusyIndicator::new();
    let mut gallery = Gallery::new(context.endpoint()?, busy.clone());

    let request = match args.url {
        Some(url) => gallery.on_follow(url),
        None => gallery.on_submit(&SearchFilter::new(
            args.classification,
            args.century,
            args.keyword,
        )),
    };

    let client = context.client();
    show_results(&mut gallery, &client, &busy, request, args.select, args.json).await
}

/// JSON 出力の形
#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    info: &'a PageInfo,
    records: Vec<&'a ArtworkRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a ArtworkRecord>,
}

/// 要求を実行して結果ページ（と選択カードの詳細）を表示する
pub(super) async fn show_results(
    gallery: &mut Gallery,
    api: &dyn ArtApi,
    busy: &BusyIndicator,
    request: PageRequest,
    select: Option<usize>,
    json: bool,
) -> Result<()> {
    output::with_spinner(busy, "Searching...", gallery.run(api, request)).await;

    if let Some(err) = gallery.take_failure() {
        return Err(err);
    }

    let card_count = gallery.page().map_or(0, |p| p.cards.len());
    let selected = match select {
        Some(index) => {
            if gallery.on_select(index).is_none() {
                return Err(ArtqError::InvalidArgument(format!(
                    "--select {} is out of range ({} card(s) on this page)",
                    index, card_count
                )));
            }
            gallery.feature()
        }
        None => None,
    };

    let Some(page) = gallery.page() else {
        return Ok(());
    };

    if json {
        return output::print_json(&SearchOutput {
            info: &page.info,
            records: page.cards.iter().map(|c| c.record().as_ref()).collect(),
            selected: selected.map(|f| f.record().as_ref()),
        });
    }

    output::print_page(page);
    if let Some(feature) = selected {
        output::print_feature(feature);
    }
    Ok(())
}

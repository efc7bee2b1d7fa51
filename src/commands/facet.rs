//! artq facet コマンド
//!
//! 詳細ビューの検索リンクと同じ絞り込み検索を直接実行する。

use super::Context;
use crate::busy::BusyIndicator;
use crate::error::{ArtqError, Result};
use crate::gallery::feature::FactLink;
use crate::gallery::search::{facet_url, FacetField};
use crate::gallery::Gallery;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Field to filter by
    #[arg(value_enum)]
    pub field: FacetField,

    /// Exact value to match (e.g. Bronze)
    pub value: String,

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

    let link = FactLink::Search {
        field: args.field,
        url: facet_url(gallery.endpoint(), args.field, &args.value),
        value: args.value,
    };
    let request = gallery
        .on_facet(&link)
        .ok_or_else(|| ArtqError::Internal("facet link did not produce a request".to_string()))?;

    let client = context.client();
    super::search::show_results(&mut gallery, &client, &busy, request, args.select, args.json)
        .await
}

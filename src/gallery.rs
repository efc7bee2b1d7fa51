//! 検索・ページ送り・選択を束ねるコア
//!
//! UI 層は `on_submit` / `on_navigate` / `on_select` / `on_facet` を呼び、
//! 返ってきた `PageRequest` を送信して、その応答を `apply` に戻す。
//! 要求には単調増加の番号が付き、最後に確定した番号より古い応答は
//! 描画せずに捨てる。送信から `apply` までビジー表示のガードを保持する。

pub mod feature;
pub mod pagination;
pub mod prefetch;
pub mod preview;
pub mod search;

use crate::api::{fetch_page, ArtApi, Endpoint};
use crate::busy::{BusyGuard, BusyIndicator};
use crate::error::formatter::mask_secrets;
use crate::error::{ArtqError, ErrorKind, Result};
use crate::model::{ArtworkRecord, Category, CategoryKind, PageInfo, ResultPage, SearchFilter};
use feature::{render_feature, Feature, FactLink};
use pagination::{NavDirection, Pager};
use prefetch::CategoryLists;
use preview::{render_previews, PreviewCard};

// ============================================================================
// PageRequest / PageResponse
// ============================================================================

/// 送信待ちのページ要求
#[derive(Debug)]
pub struct PageRequest {
    seq: u64,
    url: String,
    guard: BusyGuard,
}

impl PageRequest {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 送信して応答を受け取る。ガードは応答に引き継ぐ
    pub async fn send(self, api: &dyn ArtApi) -> PageResponse {
        let result = fetch_page::<ArtworkRecord>(api, &self.url).await;
        PageResponse {
            seq: self.seq,
            url: self.url,
            result,
            _guard: self.guard,
        }
    }
}

/// 受信済みのページ応答
#[derive(Debug)]
pub struct PageResponse {
    seq: u64,
    url: String,
    result: Result<ResultPage<ArtworkRecord>>,
    _guard: BusyGuard,
}

impl PageResponse {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// `apply` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// 新しいページに置き換えた
    Rendered { records: usize },
    /// より新しい要求が確定済みなので捨てた
    Stale,
    /// 失敗した（前のページはそのまま）
    Failed(ErrorKind),
}

// ============================================================================
// PageView
// ============================================================================

/// 表示中の結果ページ
#[derive(Debug, Clone)]
pub struct PageView {
    pub info: PageInfo,
    pub cards: Vec<PreviewCard>,
    pub pager: Pager,
}

impl PageView {
    fn from_page(page: ResultPage<ArtworkRecord>) -> Self {
        let pager = Pager::from_info(&page.info);
        Self {
            info: page.info,
            cards: render_previews(page.records),
            pager,
        }
    }
}

// ============================================================================
// Gallery
// ============================================================================

/// UI 技術に依存しないクライアントの状態
pub struct Gallery {
    endpoint: Endpoint,
    busy: BusyIndicator,
    next_seq: u64,
    /// 描画または失敗として確定した最新の要求番号
    settled_seq: u64,
    categories: CategoryLists,
    page: Option<PageView>,
    feature: Option<Feature>,
    last_error: Option<String>,
    /// 直近の失敗（呼び出し側が取り出すまで保持）
    failure: Option<ArtqError>,
}

impl Gallery {
    pub fn new(endpoint: Endpoint, busy: BusyIndicator) -> Self {
        Self {
            endpoint,
            busy,
            next_seq: 0,
            settled_seq: 0,
            categories: CategoryLists::default(),
            page: None,
            feature: None,
            last_error: None,
            failure: None,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn page(&self) -> Option<&PageView> {
        self.page.as_ref()
    }

    pub fn pager(&self) -> Pager {
        self.page.as_ref().map(|p| p.pager.clone()).unwrap_or_default()
    }

    pub fn feature(&self) -> Option<&Feature> {
        self.feature.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 直近の失敗を取り出す
    pub fn take_failure(&mut self) -> Option<ArtqError> {
        self.failure.take()
    }

    fn fail(&mut self, error: ArtqError) {
        self.last_error = Some(mask_secrets(&error.to_string()));
        self.failure = Some(error);
    }

    /// セレクタに並べる選択肢
    pub fn options(&self, kind: CategoryKind) -> Vec<&str> {
        match kind {
            CategoryKind::Centuries => self.categories.centuries.iter().map(|c| c.name()).collect(),
            CategoryKind::Classifications => self
                .categories
                .classifications
                .iter()
                .map(|c| c.name())
                .collect(),
        }
    }

    /// 先読み結果を反映する。失敗時はログだけ残して一覧は空のまま
    pub fn apply_categories(&mut self, result: Result<CategoryLists>) {
        match result {
            Ok(lists) => {
                tracing::info!(
                    centuries = lists.centuries.len(),
                    classifications = lists.classifications.len(),
                    "category lists loaded"
                );
                self.categories = lists;
            }
            Err(e) => {
                tracing::error!(error = %e, "category prefetch failed");
                self.fail(e);
            }
        }
    }

    fn issue(&mut self, url: String) -> PageRequest {
        self.next_seq += 1;
        tracing::debug!(seq = self.next_seq, url = %mask_secrets(&url), "page request issued");
        PageRequest {
            seq: self.next_seq,
            url,
            guard: self.busy.acquire(),
        }
    }

    /// 検索フォームの送信
    pub fn on_submit(&mut self, filter: &SearchFilter) -> PageRequest {
        let url = search::search_url(&self.endpoint, filter);
        self.issue(url)
    }

    /// サーバーが返したページ URL をそのまま辿る
    pub fn on_follow(&mut self, url: impl Into<String>) -> PageRequest {
        self.issue(url.into())
    }

    /// ページ送り。無効なボタンなら何もしない
    pub fn on_navigate(&mut self, direction: NavDirection) -> Option<PageRequest> {
        let url = self
            .page
            .as_ref()?
            .pager
            .control(direction)
            .url()?
            .to_string();
        Some(self.issue(url))
    }

    /// カードの選択。前の詳細ビューは捨てる
    pub fn on_select(&mut self, index: usize) -> Option<&Feature> {
        let record = self.page.as_ref()?.cards.get(index)?.record().clone();
        self.feature = Some(render_feature(&self.endpoint, record));
        self.feature.as_ref()
    }

    /// 詳細ビューのリンク。mailto とリンクなしは要求を出さない
    pub fn on_facet(&mut self, link: &FactLink) -> Option<PageRequest> {
        match link {
            FactLink::Search { url, .. } => Some(self.issue(url.clone())),
            FactLink::Mailto(_) | FactLink::None => None,
        }
    }

    /// 応答を反映する
    pub fn apply(&mut self, response: PageResponse) -> Applied {
        let PageResponse {
            seq, url, result, ..
        } = response;

        if seq <= self.settled_seq {
            tracing::debug!(seq, settled = self.settled_seq, "discarding stale response");
            return Applied::Stale;
        }
        self.settled_seq = seq;

        match result {
            Ok(page) => {
                let records = page.records.len();
                self.page = Some(PageView::from_page(page));
                self.last_error = None;
                self.failure = None;
                Applied::Rendered { records }
            }
            Err(e) => {
                tracing::error!(
                    url = %mask_secrets(&url),
                    error = %e,
                    retryable = e.is_retryable(),
                    "page request failed"
                );
                let kind = e.kind();
                self.fail(e);
                Applied::Failed(kind)
            }
        }
    }

    /// 要求を送って即座に反映する（逐次実行用）
    pub async fn run(&mut self, api: &dyn ArtApi, request: PageRequest) -> Applied {
        let response = request.send(api).await;
        self.apply(response)
    }
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;

//! 起動時のカテゴリ一覧の先読み
//!
//! 世紀と分類を並行に取得し、両方そろったときだけ成功とする。
//! どちらもキャッシュを先に見て、あればネットワークに出ない。

use crate::api::{fetch_page, ArtApi, Endpoint, Resource};
use crate::busy::BusyIndicator;
use crate::cache::CategoryCache;
use crate::error::formatter::mask_secrets;
use crate::error::Result;
use crate::model::{CategoryKind, Century, Classification};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// 世紀一覧のページサイズ
pub const CENTURY_PAGE_SIZE: &str = "5";

/// 分類一覧のページサイズ
pub const CLASSIFICATION_PAGE_SIZE: &str = "100";

/// 先読みの結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryLists {
    pub centuries: Vec<Century>,
    pub classifications: Vec<Classification>,
}

/// 世紀一覧（temporalorder 順）
pub async fn fetch_centuries(
    api: &dyn ArtApi,
    endpoint: &Endpoint,
    cache: &CategoryCache,
) -> Result<Vec<Century>> {
    let url = endpoint.url(
        Resource::Century,
        &[("size", CENTURY_PAGE_SIZE), ("sort", "temporalorder")],
    );
    read_through(api, cache, CategoryKind::Centuries, &url).await
}

/// 分類一覧（名前順）
pub async fn fetch_classifications(
    api: &dyn ArtApi,
    endpoint: &Endpoint,
    cache: &CategoryCache,
) -> Result<Vec<Classification>> {
    let url = endpoint.url(
        Resource::Classification,
        &[("size", CLASSIFICATION_PAGE_SIZE), ("sort", "name")],
    );
    read_through(api, cache, CategoryKind::Classifications, &url).await
}

async fn read_through<T>(
    api: &dyn ArtApi,
    cache: &CategoryCache,
    kind: CategoryKind,
    url: &str,
) -> Result<Vec<T>>
where
    T: DeserializeOwned + Serialize,
{
    match cache.load::<T>(kind) {
        Ok(Some(items)) => {
            tracing::debug!(key = kind.key(), items = items.len(), "category cache hit");
            return Ok(items);
        }
        Ok(None) => {}
        // 壊れたエントリは取得し直して上書きする
        Err(e) => tracing::warn!(key = kind.key(), error = %e, "ignoring unreadable cache entry"),
    }

    let page = fetch_page::<T>(api, url).await?;

    if let Err(e) = cache.store(kind, &page.records) {
        tracing::warn!(key = kind.key(), url = %mask_secrets(url), error = %e, "failed to store category cache");
    }

    Ok(page.records)
}

/// 2 つの一覧を並行に取得する
///
/// 片方でも失敗すれば全体が失敗し、部分的な結果は返さない。
pub async fn prefetch_categories(
    api: &dyn ArtApi,
    endpoint: &Endpoint,
    cache: &CategoryCache,
    busy: &BusyIndicator,
) -> Result<CategoryLists> {
    let _guard = busy.acquire();

    let (classifications, centuries) = tokio::try_join!(
        fetch_classifications(api, endpoint, cache),
        fetch_centuries(api, endpoint, cache),
    )?;

    Ok(CategoryLists {
        centuries,
        classifications,
    })
}

#[cfg(test)]
#[path = "prefetch_test.rs"]
mod tests;

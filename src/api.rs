//! コレクション API クライアント
//!
//! - `endpoint`: リクエスト URL の組み立て
//! - `harvard`: reqwest による実装
//! - `fake`: テスト用のインプロセス実装

pub mod endpoint;
pub mod harvard;

#[cfg(test)]
pub mod fake;

pub use endpoint::{Endpoint, Resource};
pub use harvard::HarvardClient;

use crate::error::Result;
use crate::error::formatter::mask_secrets;
use crate::model::ResultPage;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// コレクション API への GET を抽象化した trait
///
/// 成功か失敗かは一回の呼び出しで確定する。再試行もバックオフもしない。
pub trait ArtApi: Send + Sync {
    /// URL を GET し、JSON ボディを返す
    fn get_json<'a>(&'a self, url: &'a str)
        -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;
}

/// URL を取得して型付きのページに変換する
///
/// `info` や `records` が欠けていれば Parse エラー。
pub async fn fetch_page<T: DeserializeOwned>(api: &dyn ArtApi, url: &str) -> Result<ResultPage<T>> {
    tracing::debug!(url = %mask_secrets(url), "fetching page");
    let value = api.get_json(url).await?;
    let page: ResultPage<T> = serde_json::from_value(value)?;
    tracing::debug!(records = page.records.len(), "page decoded");
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::fake::FakeApi;
    use super::*;
    use crate::error::{ArtqError, ErrorKind};
    use crate::model::Classification;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_page_decodes_records() {
        let api = FakeApi::new().route(
            "/classification",
            json!({"info": {"page": 1}, "records": [{"id": 1, "name": "Prints"}]}),
        );

        let page: ResultPage<Classification> =
            fetch_page(&api, "http://x/classification?apikey=k").await.unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].name, "Prints");
    }

    #[tokio::test]
    async fn test_fetch_page_missing_records_is_parse_error() {
        let api = FakeApi::new().route("/object", json!({"info": {}}));

        let err = fetch_page::<Classification>(&api, "http://x/object")
            .await
            .unwrap_err();

        assert!(matches!(err, ArtqError::Parse(_)));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_fetch_page_status_is_network_error() {
        let api = FakeApi::new().route_status("/object", 503);

        let err = fetch_page::<Classification>(&api, "http://x/object")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
    }
}

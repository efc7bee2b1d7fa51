//! リクエスト URL の組み立て

use crate::error::{ArtqError, Result};
use reqwest::Url;

/// API リソース
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Century,
    Classification,
    Object,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Century => "century",
            Resource::Classification => "classification",
            Resource::Object => "object",
        }
    }
}

/// 固定のベースエンドポイントとアクセスキー
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
    api_key: String,
}

impl Endpoint {
    /// ベース URL を検証して作成
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| ArtqError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if base.cannot_be_a_base() {
            return Err(ArtqError::InvalidUrl(format!(
                "{}: not a base URL",
                base_url
            )));
        }

        Ok(Self {
            base,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// `{base}/{resource}?apikey=KEY&k=v...` を組み立てる
    ///
    /// パラメータは与えた順に、値が空でも `k=` として必ず付与する。
    /// 値はすべてエンコードされるため、どの入力でも失敗しない。
    pub fn url(&self, resource: Resource, params: &[(&str, &str)]) -> String {
        let mut url = self.base.clone();
        let path = format!(
            "{}/{}",
            self.base.path().trim_end_matches('/'),
            resource.path()
        );
        url.set_path(&path);
        url.set_fragment(None);

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("apikey", &self.api_key);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        url.into()
    }
}

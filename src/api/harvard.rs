//! Harvard Art Museums API クライアント

use crate::api::ArtApi;
use crate::config::HttpConfig;
use crate::error::{ArtqError, Result};
use reqwest::{Client, Url};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// reqwest ベースの API クライアント
pub struct HarvardClient {
    http: Client,
}

impl HarvardClient {
    pub fn new(config: &HttpConfig) -> Self {
        Self {
            http: config.build_client(),
        }
    }
}

impl ArtApi for HarvardClient {
    fn get_json<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>> {
        Box::pin(async move {
            // ページングの URL はサーバーから来た値をそのまま使う
            let parsed =
                Url::parse(url).map_err(|e| ArtqError::InvalidUrl(format!("{}: {}", url, e)))?;

            let response = self.http.get(parsed).send().await?;
            let status = response.status().as_u16();

            if !response.status().is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ArtqError::Api { status, message });
            }

            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        })
    }
}

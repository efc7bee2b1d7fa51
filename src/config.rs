//! 設定ファイル（~/.artq/config.toml）と HTTP 設定

use crate::env::EnvVar;
use crate::error::{ArtqError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// コレクション API のデフォルトエンドポイント
pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

/// API キーを上書きする環境変数
pub const API_KEY_ENV: &str = "HARVARD_API_KEY";

/// ベース URL を上書きする環境変数
pub const BASE_URL_ENV: &str = "ARTQ_BASE_URL";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（None なら無制限）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: "artq-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// config.toml のスキーマ
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ConfigFile {
    /// ファイルから読み込む（存在しなければ空設定）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ArtqError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// 実行時に解決済みの設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub cache_dir: PathBuf,
    pub http: HttpConfig,
}

impl Settings {
    /// 設定ファイルと環境変数から解決する
    ///
    /// 優先順位: 環境変数 > 設定ファイル > デフォルト
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let root = artq_home();
        let path = match (config_path, &root) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(root)) => root.join("config.toml"),
            (None, None) => PathBuf::new(),
        };

        let file = if path.as_os_str().is_empty() {
            ConfigFile::default()
        } else {
            ConfigFile::load_from(&path)?
        };

        Self::resolve(
            file,
            root,
            EnvVar::get(API_KEY_ENV),
            EnvVar::get(BASE_URL_ENV),
        )
    }

    /// 読み込み済みの値を合成する
    pub fn resolve(
        file: ConfigFile,
        root: Option<PathBuf>,
        env_api_key: Option<String>,
        env_base_url: Option<String>,
    ) -> Result<Self> {
        let cache_dir = match (file.cache_dir, root) {
            (Some(dir), _) => dir,
            (None, Some(root)) => root.join("cache"),
            (None, None) => {
                return Err(ArtqError::Config(
                    "HOME environment variable not set and no cache_dir configured".to_string(),
                ))
            }
        };

        let base_url = env_base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = env_api_key.or(file.api_key).unwrap_or_default();

        let mut http = HttpConfig::default();
        http.timeout = file.timeout_secs.map(Duration::from_secs);
        if let Some(agent) = file.user_agent {
            http.user_agent = agent;
        }

        Ok(Self {
            api_key,
            base_url,
            cache_dir,
            http,
        })
    }
}

/// ~/.artq
pub fn artq_home() -> Option<PathBuf> {
    EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".artq"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

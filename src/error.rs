pub mod code;
pub mod formatter;
pub mod rich;

use thiserror::Error;

use formatter::mask_secrets;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

/// artq 統一エラー型
#[derive(Debug, Error)]
pub enum ArtqError {
    /// reqwest のメッセージは要求 URL を含むので、表示時に API キーを伏せる
    #[error("Network error: {}", mask_secrets(&.0.to_string()))]
    Network(#[from] reqwest::Error),

    #[error("API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ArtqError>;

/// 失敗の大分類
///
/// API との通信で起こり得るのは `Network` と `Parse` の二種類のみ。
/// それ以外（設定・キャッシュ・端末）はローカル要因として `Local` に寄せる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Local,
}

impl ArtqError {
    /// エラーの大分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArtqError::Network(_) | ArtqError::Api { .. } => ErrorKind::Network,
            ArtqError::Parse(_) => ErrorKind::Parse,
            _ => ErrorKind::Local,
        }
    }

    /// 再試行で解消し得るエラーかどうか（診断表示用、クライアントは再試行しない）
    pub fn is_retryable(&self) -> bool {
        match self {
            ArtqError::Network(_) => true,
            ArtqError::Api { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }

    /// CLI 表示用のエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            ArtqError::Network(e) if e.is_timeout() => ErrorCode::Net002,
            ArtqError::Network(_) => ErrorCode::Net001,
            ArtqError::Api { status: 429, .. } => ErrorCode::Api001,
            ArtqError::Api {
                status: 401 | 403, ..
            } => ErrorCode::Api002,
            ArtqError::Api { status: 404, .. } => ErrorCode::Api003,
            ArtqError::Api { .. } => ErrorCode::Api004,
            ArtqError::Parse(_) => ErrorCode::Par001,
            ArtqError::InvalidUrl(_) | ArtqError::InvalidArgument(_) => ErrorCode::Val001,
            ArtqError::Io(_) => ErrorCode::Io001,
            ArtqError::Config(_) => ErrorCode::Cfg001,
            ArtqError::Cache(_) => ErrorCode::Cch001,
            ArtqError::Terminal(_) => ErrorCode::Tui001,
            ArtqError::Internal(_) => ErrorCode::Int001,
        }
    }

    /// 表示用のコンテキスト（失敗した URL やステータス）
    pub fn context(&self) -> ErrorContext {
        match self {
            ArtqError::Network(e) => {
                let context = e.url().map(ErrorContext::for_url).unwrap_or_default();
                match e.status() {
                    Some(status) => context.with_status(status.as_u16()),
                    None => context,
                }
            }
            ArtqError::Api { status, .. } => ErrorContext::default().with_status(*status),
            _ => ErrorContext::default(),
        }
    }

    /// RichError に変換
    pub fn into_rich(self) -> RichError {
        RichError::from(self)
    }
}

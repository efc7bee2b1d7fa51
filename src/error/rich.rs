//! CLI に表示するエラーの構造化表現

use super::code::ErrorCode;
use super::formatter::mask_secrets;
use super::ArtqError;

/// 失敗した要求の文脈
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// 要求 URL。表示時に API キーを伏せる
    pub url: Option<String>,
    /// API リソース名（`object`, `century` など）
    pub resource: Option<String>,
    pub status: Option<u16>,
}

impl ErrorContext {
    /// 要求 URL から文脈を作る。リソース名はパス末尾から取る
    pub fn for_url(url: &reqwest::Url) -> Self {
        let resource = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .map(str::to_string);
        Self {
            url: Some(url.to_string()),
            resource,
            status: None,
        }
    }

    pub fn with_status(self, status: u16) -> Self {
        Self {
            status: Some(status),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// コード・メッセージ・文脈を持つ表示用エラー
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: ErrorContext,
    cause: Option<ArtqError>,
}

impl RichError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            cause: None,
        }
    }

    pub fn with_context(self, context: ErrorContext) -> Self {
        Self { context, ..self }
    }

    pub fn caused_by(self, cause: ArtqError) -> Self {
        Self {
            cause: Some(cause),
            ..self
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

impl From<ArtqError> for RichError {
    fn from(err: ArtqError) -> Self {
        RichError::new(err.code(), err.to_string())
            .with_context(err.context())
            .caused_by(err)
    }
}

// 下位エラーの Debug には生の URL が残るので、伏字済みの文字列で出す
impl std::fmt::Debug for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichError")
            .field("code", &self.code.as_str())
            .field("message", &mask_secrets(&self.message))
            .field("cause", &self.cause.as_ref().map(|e| mask_secrets(&e.to_string())))
            .finish()
    }
}

impl std::fmt::Display for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for RichError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

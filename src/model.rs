//! コレクション API のデータモデル
//!
//! API のペイロードは不透明な協調先として扱う。ここで型付けするのは
//! クライアントが読むフィールドだけで、残りは `extra` にそのまま保持する。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// カテゴリ（参照データ）
// ============================================================================

/// 世紀
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Century {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub temporalorder: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 分類
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 名前で選択肢になるカテゴリ
pub trait Category {
    fn name(&self) -> &str;
}

impl Category for Century {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Category for Classification {
    fn name(&self) -> &str {
        &self.name
    }
}

/// カテゴリキャッシュの名前空間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Centuries,
    Classifications,
}

impl CategoryKind {
    pub fn all() -> &'static [CategoryKind] {
        &[CategoryKind::Centuries, CategoryKind::Classifications]
    }

    /// 永続ストレージ上のキー
    pub fn key(&self) -> &'static str {
        match self {
            CategoryKind::Centuries => "centuries",
            CategoryKind::Classifications => "classifications",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.key() == key)
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ============================================================================
// 検索
// ============================================================================

/// 送信時点のフィルタ入力。空文字列は「絞り込みなし」
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub classification: String,
    pub century: String,
    pub keyword: String,
}

impl SearchFilter {
    pub fn new(
        classification: impl Into<String>,
        century: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            classification: classification.into(),
            century: century.into(),
            keyword: keyword.into(),
        }
    }
}

/// ページ情報（next/prev はサーバーが返す不透明な URL）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub totalrecordsperquery: Option<u64>,
    #[serde(default)]
    pub totalrecords: Option<u64>,
    #[serde(default)]
    pub pages: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 1 ページ分の応答。ナビゲーションのたびに丸ごと置き換わる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    pub info: PageInfo,
    pub records: Vec<T>,
}

// ============================================================================
// 作品レコード
// ============================================================================

/// 画像
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub baseimageurl: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 作品に関わった人物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub displayname: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 作品レコード。どのフィールドも欠けていてよい
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primaryimageurl: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub dated: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub people: Option<Vec<Person>>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub creditline: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 値が「偽」（欠落・空文字・空白のみ）でなければ返す
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;

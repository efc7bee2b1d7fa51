//! カテゴリ一覧の永続キャッシュ
//!
//! `<cache_dir>/<key>.json` に JSON 配列をそのまま保存する。
//! スキーマのバージョンも有効期限も持たない。無効化は `clear` を明示的に
//! 呼んだときだけ行う。

use crate::error::{ArtqError, Result};
use crate::model::CategoryKind;
use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// キャッシュエントリの概要
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub kind: CategoryKind,
    pub items: usize,
    pub stored_at: Option<DateTime<Local>>,
    pub path: PathBuf,
}

/// カテゴリキャッシュ
pub struct CategoryCache {
    cache_dir: PathBuf,
}

impl CategoryCache {
    /// キャッシュディレクトリを指定して初期化
    pub fn with_cache_dir(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    /// キーはカテゴリ種別からのみ導出する
    fn cache_path(&self, kind: CategoryKind) -> PathBuf {
        self.cache_dir.join(format!("{}.json", kind.key()))
    }

    /// キャッシュを読む（なければ None）
    pub fn load<T: DeserializeOwned>(&self, kind: CategoryKind) -> Result<Option<Vec<T>>> {
        let path = self.cache_path(kind);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let items: Vec<T> = serde_json::from_str(&content).map_err(|e| {
            ArtqError::Cache(format!("{} is not a valid cache entry: {}", path.display(), e))
        })?;
        Ok(Some(items))
    }

    /// キャッシュを書く（無条件に上書き）
    pub fn store<T: Serialize>(&self, kind: CategoryKind, items: &[T]) -> Result<()> {
        let path = self.cache_path(kind);
        let content = serde_json::to_string(items)?;
        fs::write(&path, content)?;
        tracing::debug!(key = kind.key(), items = items.len(), "category cache stored");
        Ok(())
    }

    /// 明示的な無効化。`None` なら全キーを消す
    ///
    /// 消したキーの一覧を返す。
    pub fn clear(&self, kind: Option<CategoryKind>) -> Result<Vec<CategoryKind>> {
        let kinds: Vec<CategoryKind> = match kind {
            Some(kind) => vec![kind],
            None => CategoryKind::all().to_vec(),
        };

        let mut removed = Vec::new();
        for kind in kinds {
            let path = self.cache_path(kind);
            if path.exists() {
                fs::remove_file(path)?;
                removed.push(kind);
            }
        }
        Ok(removed)
    }

    /// 保存済みエントリの一覧
    pub fn entries(&self) -> Result<Vec<CacheEntry>> {
        let mut entries = Vec::new();

        for &kind in CategoryKind::all() {
            let path = self.cache_path(kind);
            if !path.exists() {
                continue;
            }

            let items = self
                .load::<serde_json::Value>(kind)?
                .map_or(0, |items| items.len());
            let stored_at = fs::metadata(&path)
                .and_then(|m| m.modified())
                .ok()
                .map(DateTime::<Local>::from);

            entries.push(CacheEntry {
                kind,
                items,
                stored_at,
                path,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;

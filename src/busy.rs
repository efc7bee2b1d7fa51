//! ビジー表示
//!
//! ネットワーク操作ごとに `BusyGuard` を取得し、ドロップで解放する。
//! カウンタが 0 のときだけ非表示になるため、重なった操作の片方が
//! 終わっても表示は消えない。失敗経路でもガードは必ずドロップされる。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 共有のビジー状態
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator {
    active: Arc<AtomicUsize>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// ガードを取得（取得中はビジー）
    pub fn acquire(&self) -> BusyGuard {
        let previous = self.active.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            tracing::trace!("busy on");
        }
        BusyGuard {
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }

    /// 取得中のガード数
    pub fn depth(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// スコープ付きのビジー取得
#[derive(Debug)]
#[must_use = "the indicator is released as soon as the guard is dropped"]
pub struct BusyGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if self.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            tracing::trace!("busy off");
        }
    }
}

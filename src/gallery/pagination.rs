//! ページ送り
//!
//! 次/前の URL はサーバーが返したものを束縛して、そのまま再要求する。

use crate::model::{present, PageInfo};

/// ページ送りの向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

/// ページ送りボタン。URL が束縛されているときだけ有効
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavControl {
    url: Option<String>,
}

impl NavControl {
    pub fn bound(url: &Option<String>) -> Self {
        Self {
            url: present(url).map(str::to_string),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// 次/前ボタンの組
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    pub next: NavControl,
    pub prev: NavControl,
}

impl Pager {
    pub fn from_info(info: &PageInfo) -> Self {
        Self {
            next: NavControl::bound(&info.next),
            prev: NavControl::bound(&info.prev),
        }
    }

    pub fn control(&self, direction: NavDirection) -> &NavControl {
        match direction {
            NavDirection::Next => &self.next,
            NavDirection::Previous => &self.prev,
        }
    }
}

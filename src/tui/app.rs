//! ブラウズ TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: ギャラリーの状態 + フォーム入力 + フォーカス
//! - `Msg`: キー入力と非同期応答をまとめたメッセージ
//! - `update`: 状態更新。送信すべき要求を `Effect` で返す

use crate::error::Result;
use crate::gallery::feature::FactLink;
use crate::gallery::pagination::NavDirection;
use crate::gallery::prefetch::CategoryLists;
use crate::gallery::{Applied, Gallery, PageRequest, PageResponse};
use crate::model::{CategoryKind, SearchFilter};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Focus
// ============================================================================

/// キー入力を受け取るペイン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Classification,
    Century,
    #[default]
    Keyword,
    Results,
    Feature,
}

impl Focus {
    pub fn all() -> &'static [Focus] {
        &[
            Focus::Classification,
            Focus::Century,
            Focus::Keyword,
            Focus::Results,
            Focus::Feature,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Focus::Classification => 0,
            Focus::Century => 1,
            Focus::Keyword => 2,
            Focus::Results => 3,
            Focus::Feature => 4,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::all()[index % Self::all().len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::all().len() - 1)
    }

    /// 検索フォームの一部か
    pub fn is_form(&self) -> bool {
        matches!(self, Focus::Classification | Focus::Century | Focus::Keyword)
    }
}

// ============================================================================
// Msg
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次のペインへ
    NextFocus,
    /// 前のペインへ
    PrevFocus,
    /// セレクタの次の選択肢
    OptionNext,
    /// セレクタの前の選択肢
    OptionPrev,
    /// キーワード入力
    Input(char),
    /// キーワード削除
    Backspace,
    /// 検索を送信
    Submit,
    /// カーソル上
    MoveUp,
    /// カーソル下
    MoveDown,
    /// 選択中のカード / リンクを開く
    Activate,
    /// ページ送り
    Navigate(NavDirection),
    /// ページ応答の到着
    PageLoaded(PageResponse),
    /// カテゴリ一覧の到着
    CategoriesLoaded(Result<CategoryLists>),
    /// スピナー用のタイマー
    Tick,
}

// ============================================================================
// Model
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    pub gallery: Gallery,
    pub focus: Focus,
    /// 分類セレクタの位置（0 は「指定なし」）
    pub classification: usize,
    /// 世紀セレクタの位置（0 は「指定なし」）
    pub century: usize,
    pub keyword: String,
    pub results: ListState,
    /// 詳細ビューで選択中のリンク（`Feature::links` の順）
    pub link: usize,
    /// ステータス行の補足（mailto の宛先など）
    pub notice: Option<String>,
    pub tick: usize,
    pub should_quit: bool,
}

impl Model {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            focus: Focus::default(),
            classification: 0,
            century: 0,
            keyword: String::new(),
            results: ListState::default(),
            link: 0,
            notice: None,
            tick: 0,
            should_quit: false,
        }
    }

    /// セレクタで選ばれている名前（未選択なら空文字列）
    pub fn selected_option(&self, kind: CategoryKind) -> &str {
        let position = match kind {
            CategoryKind::Classifications => self.classification,
            CategoryKind::Centuries => self.century,
        };
        position
            .checked_sub(1)
            .and_then(|i| self.gallery.options(kind).get(i).copied())
            .unwrap_or("")
    }

    /// 送信時点のフォーム内容
    pub fn filter(&self) -> SearchFilter {
        SearchFilter::new(
            self.selected_option(CategoryKind::Classifications),
            self.selected_option(CategoryKind::Centuries),
            self.keyword.as_str(),
        )
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        match key {
            KeyCode::Esc => return Some(Msg::Quit),
            KeyCode::Tab => return Some(Msg::NextFocus),
            KeyCode::BackTab => return Some(Msg::PrevFocus),
            _ => {}
        }

        if self.focus == Focus::Keyword {
            // キーワード入力中は文字キーをすべて入力として扱う
            return match key {
                KeyCode::Char(c) => Some(Msg::Input(c)),
                KeyCode::Backspace => Some(Msg::Backspace),
                KeyCode::Enter => Some(Msg::Submit),
                _ => None,
            };
        }

        match key {
            KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Char('n') => Some(Msg::Navigate(NavDirection::Next)),
            KeyCode::Char('p') => Some(Msg::Navigate(NavDirection::Previous)),
            KeyCode::Left if self.focus.is_form() => Some(Msg::OptionPrev),
            KeyCode::Right if self.focus.is_form() => Some(Msg::OptionNext),
            KeyCode::Enter if self.focus.is_form() => Some(Msg::Submit),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::MoveDown),
            KeyCode::Enter => Some(Msg::Activate),
            _ => None,
        }
    }
}

// ============================================================================
// update
// ============================================================================

/// update() の戻り値
#[derive(Debug, Default)]
pub struct Effect {
    /// 送信すべきページ要求
    pub request: Option<PageRequest>,
}

impl Effect {
    fn none() -> Self {
        Self::default()
    }

    fn send(request: Option<PageRequest>) -> Self {
        Self { request }
    }
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> Effect {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
            Effect::none()
        }
        Msg::NextFocus => {
            model.focus = model.focus.next();
            Effect::none()
        }
        Msg::PrevFocus => {
            model.focus = model.focus.prev();
            Effect::none()
        }
        Msg::OptionNext => {
            cycle_option(model, 1);
            Effect::none()
        }
        Msg::OptionPrev => {
            cycle_option(model, -1);
            Effect::none()
        }
        Msg::Input(c) => {
            model.keyword.push(c);
            Effect::none()
        }
        Msg::Backspace => {
            model.keyword.pop();
            Effect::none()
        }
        Msg::Submit => {
            model.notice = None;
            let filter = model.filter();
            Effect::send(Some(model.gallery.on_submit(&filter)))
        }
        Msg::MoveUp => {
            move_cursor(model, -1);
            Effect::none()
        }
        Msg::MoveDown => {
            move_cursor(model, 1);
            Effect::none()
        }
        Msg::Activate => activate(model),
        Msg::Navigate(direction) => Effect::send(model.gallery.on_navigate(direction)),
        Msg::PageLoaded(response) => {
            if let Applied::Rendered { records } = model.gallery.apply(response) {
                model.results.select(if records > 0 { Some(0) } else { None });
            }
            Effect::none()
        }
        Msg::CategoriesLoaded(result) => {
            model.gallery.apply_categories(result);
            Effect::none()
        }
        Msg::Tick => {
            model.tick = model.tick.wrapping_add(1);
            Effect::none()
        }
    }
}

/// セレクタを循環させる（「指定なし」を含む）
fn cycle_option(model: &mut Model, step: isize) {
    let kind = match model.focus {
        Focus::Classification => CategoryKind::Classifications,
        Focus::Century => CategoryKind::Centuries,
        _ => return,
    };
    let len = model.gallery.options(kind).len() + 1;
    let position = match kind {
        CategoryKind::Classifications => &mut model.classification,
        CategoryKind::Centuries => &mut model.century,
    };
    *position = (*position as isize + step).rem_euclid(len as isize) as usize;
}

fn move_cursor(model: &mut Model, step: isize) {
    match model.focus {
        Focus::Results => {
            let len = model.gallery.page().map_or(0, |p| p.cards.len());
            if len == 0 {
                return;
            }
            let current = model.results.selected().unwrap_or(0) as isize;
            model
                .results
                .select(Some((current + step).clamp(0, len as isize - 1) as usize));
        }
        Focus::Feature => {
            let len = model.gallery.feature().map_or(0, |f| f.links().count());
            if len == 0 {
                return;
            }
            model.link = (model.link as isize + step).clamp(0, len as isize - 1) as usize;
        }
        _ => {}
    }
}

fn activate(model: &mut Model) -> Effect {
    match model.focus {
        Focus::Results => {
            let Some(index) = model.results.selected() else {
                return Effect::none();
            };
            if model.gallery.on_select(index).is_some() {
                model.link = 0;
                model.focus = Focus::Feature;
            }
            Effect::none()
        }
        Focus::Feature => {
            let Some(link) = model
                .gallery
                .feature()
                .and_then(|f| f.links().nth(model.link))
                .map(|fact| fact.link.clone())
            else {
                return Effect::none();
            };

            if let FactLink::Mailto(_) = &link {
                model.notice = link.href();
                return Effect::none();
            }

            let request = model.gallery.on_facet(&link);
            if request.is_some() {
                model.notice = None;
                model.focus = Focus::Results;
            }
            Effect::send(request)
        }
        _ => Effect::none(),
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

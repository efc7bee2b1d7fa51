//! ブラウズ TUI
//!
//! ratatui/crossterm による対話的な検索画面。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update
//! - `view`: 画面描画
//!
//! ネットワーク要求はすべて tokio タスクに渡し、応答はチャネル経由で
//! `Msg` としてメインループに戻す。描画中に応答を待つことはない。

mod app;
mod view;

use crate::api::ArtApi;
use crate::cache::CategoryCache;
use crate::error::{ArtqError, Result};
use crate::gallery::prefetch::prefetch_categories;
use crate::gallery::{Gallery, PageRequest};
use app::{update, Model, Msg};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

/// キー入力を待つ最大時間（スピナーの更新間隔を兼ねる）
const POLL_INTERVAL: Duration = Duration::from_millis(80);

fn terminal_error(err: std::io::Error) -> ArtqError {
    ArtqError::Terminal(err.to_string())
}

/// TUI を実行
///
/// キー入力の待機はブロッキングなので、ランタイムのワーカー上では
/// `block_in_place` の中で呼ぶ。
pub fn run(gallery: Gallery, api: Arc<dyn ArtApi>, cache: CategoryCache) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    spawn_prefetch(&gallery, Arc::clone(&api), cache, tx.clone());

    // ターミナル設定
    terminal::enable_raw_mode().map_err(terminal_error)?;
    stdout().execute(EnterAlternateScreen).map_err(terminal_error)?;

    let mut model = Model::new(gallery);
    let result = event_loop(&mut model, &api, &tx, &mut rx);

    // ターミナルを復元（ループが失敗しても必ず戻す）
    let restored = terminal::disable_raw_mode()
        .and_then(|_| stdout().execute(LeaveAlternateScreen).map(|_| ()));

    result?;
    restored.map_err(terminal_error)?;
    Ok(())
}

fn event_loop(
    model: &mut Model,
    api: &Arc<dyn ArtApi>,
    tx: &UnboundedSender<Msg>,
    rx: &mut mpsc::UnboundedReceiver<Msg>,
) -> Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    while !model.should_quit {
        terminal
            .draw(|f| view::view(f, model))
            .map_err(terminal_error)?;

        // 届いている応答をすべて反映
        while let Ok(msg) = rx.try_recv() {
            dispatch(model, msg, api, tx);
        }

        if event::poll(POLL_INTERVAL).map_err(terminal_error)? {
            if let Event::Key(key) = event::read().map_err(terminal_error)? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = model.key_to_msg(key.code) {
                        dispatch(model, msg, api, tx);
                    }
                }
            }
        } else {
            dispatch(model, Msg::Tick, api, tx);
        }
    }

    Ok(())
}

/// update を実行し、要求があれば送信タスクを起動する
fn dispatch(model: &mut Model, msg: Msg, api: &Arc<dyn ArtApi>, tx: &UnboundedSender<Msg>) {
    let effect = update(model, msg);
    if let Some(request) = effect.request {
        spawn_request(request, Arc::clone(api), tx.clone());
    }
}

fn spawn_request(request: PageRequest, api: Arc<dyn ArtApi>, tx: UnboundedSender<Msg>) {
    tokio::spawn(async move {
        let response = request.send(api.as_ref()).await;
        // 画面を閉じた後の応答は捨てる
        let _ = tx.send(Msg::PageLoaded(response));
    });
}

fn spawn_prefetch(
    gallery: &Gallery,
    api: Arc<dyn ArtApi>,
    cache: CategoryCache,
    tx: UnboundedSender<Msg>,
) {
    let endpoint = gallery.endpoint().clone();
    let busy = gallery.busy().clone();
    tokio::spawn(async move {
        let result = prefetch_categories(api.as_ref(), &endpoint, &cache, &busy).await;
        let _ = tx.send(Msg::CategoriesLoaded(result));
    });
}

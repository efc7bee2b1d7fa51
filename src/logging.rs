//! tracing の初期化
//!
//! 通常のサブコマンドは stderr に出す。`browse` は端末を alternate screen で
//! 占有するので、ログは `~/.artq/artq.log` に追記する。

use crate::cli::Command;
use crate::env::EnvVar;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// ログレベルを指定する環境変数（優先順）
const LOG_ENV: [&str; 2] = ["ARTQ_LOG", "RUST_LOG"];

const LOG_FILE: &str = "artq.log";

/// ログの出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// 書き込み先がない（HOME 未設定で browse）
    Off,
}

impl LogTarget {
    /// サブコマンドに応じた出力先
    pub fn for_command(command: &Command, home: Option<&Path>) -> Self {
        match (command, home) {
            (Command::Browse(_), Some(home)) => LogTarget::File(home.join(LOG_FILE)),
            (Command::Browse(_), None) => LogTarget::Off,
            _ => LogTarget::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvVar::first_of(&LOG_ENV)
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// 追記モードで開く。親ディレクトリがなければ作る
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// グローバルな subscriber を設定する
pub fn init(target: &LogTarget) {
    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .with_target(false)
            .init(),
        LogTarget::File(path) => {
            // 開けなければ黙って捨てる。stderr に書くと画面が崩れる
            if let Ok(file) = open_log_file(path) {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }
        }
        LogTarget::Off => {}
    }
}

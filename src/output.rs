//! CLI 向けの表示処理
//!
//! テーブル表示（comfy-table）、JSON 出力、ビジー中のスピナー。

use crate::busy::BusyIndicator;
use crate::cache::CacheEntry;
use crate::gallery::feature::{Feature, FactLink};
use crate::gallery::pagination::NavControl;
use crate::gallery::prefetch::CategoryLists;
use crate::gallery::PageView;
use crate::model::Category;
use comfy_table::{presets::UTF8_FULL, presets::UTF8_FULL_CONDENSED, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

/// 説明文をテーブル用に切り詰める
const DESCRIPTION_WIDTH: usize = 60;

// ============================================================================
// スピナー
// ============================================================================

/// `future` の完了まで、ビジー中だけスピナーを回す
pub async fn with_spinner<F: Future>(busy: &BusyIndicator, message: &str, future: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());

    tokio::pin!(future);
    let mut ticker = tokio::time::interval(Duration::from_millis(80));

    let output = loop {
        tokio::select! {
            output = &mut future => break output,
            _ = ticker.tick() => {
                if busy.is_busy() {
                    pb.tick();
                }
            }
        }
    };

    pb.finish_and_clear();
    output
}

// ============================================================================
// カテゴリ
// ============================================================================

pub fn print_categories(lists: &CategoryLists) {
    print_category_table("Classifications", &lists.classifications);
    print_category_table("Centuries", &lists.centuries);
}

fn print_category_table<T: Category>(title: &str, items: &[T]) {
    println!("{} ({})", title.bold(), items.len());
    if items.is_empty() {
        println!("  (none)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Name"]);
    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), item.name().to_string()]);
    }
    println!("{table}");
}

// ============================================================================
// 検索結果
// ============================================================================

pub fn print_page(page: &PageView) {
    let total = page
        .info
        .totalrecords
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    let position = match (page.info.page, page.info.pages) {
        (Some(current), Some(pages)) => format!("page {} of {}", current, pages),
        (Some(current), None) => format!("page {}", current),
        _ => "page ?".to_string(),
    };
    println!("{} records, {}", total.bold(), position);

    if page.cards.is_empty() {
        println!("No records matched");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["#", "Title", "Description", "Image"]);
        for (index, card) in page.cards.iter().enumerate() {
            table.add_row(vec![
                index.to_string(),
                card.title.clone().unwrap_or_else(|| "-".to_string()),
                card.description
                    .as_deref()
                    .map_or_else(|| "-".to_string(), truncate),
                card.image.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        println!("{table}");
    }

    println!(
        "{}  {}",
        nav_label("prev", &page.pager.prev),
        nav_label("next", &page.pager.next)
    );
}

fn nav_label(name: &str, control: &NavControl) -> String {
    match control.url() {
        Some(url) => format!("{} {}", format!("[{}]", name).green(), url),
        None => format!("[{}]", name).dimmed().to_string(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_WIDTH {
        let head: String = text.chars().take(DESCRIPTION_WIDTH - 1).collect();
        format!("{}…", head)
    } else {
        text.to_string()
    }
}

// ============================================================================
// 詳細ビュー
// ============================================================================

pub fn print_feature(feature: &Feature) {
    println!();
    println!(
        "{}",
        feature.title.as_deref().unwrap_or("(untitled)").bold()
    );
    if let Some(dated) = &feature.dated {
        println!("{}", dated.dimmed());
    }

    if !feature.facts.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        for fact in &feature.facts {
            let content = match &fact.link {
                FactLink::None => fact.content.clone(),
                link => format!(
                    "{}\n{}",
                    fact.content,
                    link.href().unwrap_or_default().cyan()
                ),
            };
            table.add_row(vec![fact.label.to_string(), content]);
        }
        println!("{table}");
    }

    for photo in &feature.photos {
        println!("{} {}", "photo".dimmed(), photo);
    }
}

// ============================================================================
// キャッシュ
// ============================================================================

pub fn print_cache_entries(entries: &[CacheEntry]) {
    if entries.is_empty() {
        println!("Category cache is empty");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Items", "Stored", "Path"]);
    for entry in entries {
        let stored = entry
            .stored_at
            .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string());
        table.add_row(vec![
            entry.kind.key().to_string(),
            entry.items.to_string(),
            stored,
            entry.path.display().to_string(),
        ]);
    }
    println!("{table}");
}

// ============================================================================
// JSON
// ============================================================================

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("A sleeping cat"), "A sleeping cat");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(DESCRIPTION_WIDTH + 10);
        let truncated = truncate(&long);
        assert_eq!(truncated.chars().count(), DESCRIPTION_WIDTH);
        assert!(truncated.ends_with('…'));
    }

    #[tokio::test]
    async fn test_with_spinner_returns_future_output() {
        let busy = BusyIndicator::new();
        let value = with_spinner(&busy, "Loading...", async {
            let _guard = busy.acquire();
            tokio::time::sleep(Duration::from_millis(20)).await;
            42
        })
        .await;

        assert_eq!(value, 42);
        assert!(!busy.is_busy());
    }
}

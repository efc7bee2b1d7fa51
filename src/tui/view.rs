//! ブラウズ TUI の描画

use super::app::{Focus, Model};
use crate::gallery::feature::{Feature, FactLink};
use crate::gallery::PageView;
use crate::model::CategoryKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    f.render_widget(Clear, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // フォーム
            Constraint::Min(5),    // 結果 + 詳細
            Constraint::Length(1), // ステータス
        ])
        .split(f.area());

    view_form(f, model, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    view_results(f, model, body[0]);
    view_feature(f, model, body[1]);
    view_status(f, model, chunks[2]);
}

fn focus_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn view_form(f: &mut Frame, model: &Model, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let selectors = [
        (Focus::Classification, CategoryKind::Classifications, "Classification"),
        (Focus::Century, CategoryKind::Centuries, "Century"),
    ];
    for (i, (focus, kind, label)) in selectors.into_iter().enumerate() {
        let count = model.gallery.options(kind).len();
        let selected = model.selected_option(kind);
        let text = if selected.is_empty() {
            Span::styled("(any)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(selected.to_string())
        };
        let widget = Paragraph::new(Line::from(vec![Span::raw("◀ "), text, Span::raw(" ▶")]))
            .block(focus_block(format!("{} ({})", label, count), model.focus == focus));
        f.render_widget(widget, chunks[i]);
    }

    let cursor = if model.focus == Focus::Keyword { "▏" } else { "" };
    let keyword = Paragraph::new(format!("{}{}", model.keyword, cursor))
        .block(focus_block("Keyword".to_string(), model.focus == Focus::Keyword));
    f.render_widget(keyword, chunks[2]);
}

fn results_title(page: Option<&PageView>) -> String {
    let Some(page) = page else {
        return "Results".to_string();
    };
    let total = page.info.totalrecords.unwrap_or(page.cards.len() as u64);
    let position = match (page.info.page, page.info.pages) {
        (Some(current), Some(pages)) => format!(" · page {}/{}", current, pages),
        _ => String::new(),
    };
    let prev = if page.pager.prev.is_enabled() { "[p]rev" } else { "" };
    let next = if page.pager.next.is_enabled() { "[n]ext" } else { "" };
    format!("Results {} records{} {} {}", total, position, prev, next)
        .trim_end()
        .to_string()
}

fn view_results(f: &mut Frame, model: &Model, area: Rect) {
    let page = model.gallery.page();
    let items: Vec<ListItem> = page
        .map(|p| p.cards.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|card| {
            if card.is_blank() {
                return ListItem::new(Line::from(Span::styled(
                    "(no preview)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            let mut lines = vec![Line::from(Span::styled(
                card.title.clone().unwrap_or_else(|| "(untitled)".to_string()),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(description) = &card.description {
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            if card.image.is_some() {
                lines.push(Line::from(Span::styled(
                    "▣ image",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(focus_block(results_title(page), model.focus == Focus::Results))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = model.results.clone();
    f.render_stateful_widget(list, area, &mut state);
}

fn feature_lines(feature: &Feature, selected_link: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        feature.title.clone().unwrap_or_else(|| "(untitled)".to_string()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(dated) = &feature.dated {
        lines.push(Line::from(Span::styled(
            dated.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::default());

    let mut link_index = 0;
    for fact in &feature.facts {
        let label = Span::styled(
            format!("{}: ", fact.label),
            Style::default().fg(Color::DarkGray),
        );
        let content = match fact.link {
            FactLink::None => Span::raw(fact.content.clone()),
            ref link => {
                let color = if link.is_search() { Color::Cyan } else { Color::Yellow };
                let mut style = Style::default()
                    .fg(color)
                    .add_modifier(Modifier::UNDERLINED);
                if selected_link == Some(link_index) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                link_index += 1;
                Span::styled(fact.content.clone(), style)
            }
        };
        lines.push(Line::from(vec![label, content]));
    }

    if !feature.photos.is_empty() {
        lines.push(Line::default());
        for photo in &feature.photos {
            lines.push(Line::from(Span::styled(
                format!("photo {}", photo),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

fn view_feature(f: &mut Frame, model: &Model, area: Rect) {
    let focused = model.focus == Focus::Feature;
    let lines = match model.gallery.feature() {
        Some(feature) => feature_lines(feature, focused.then_some(model.link)),
        None => vec![Line::from(Span::styled(
            "Select a result to see its details",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let widget = Paragraph::new(lines)
        .block(focus_block("Details".to_string(), focused))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn view_status(f: &mut Frame, model: &Model, area: Rect) {
    let mut spans = Vec::new();

    let depth = model.gallery.busy().depth();
    if depth > 0 {
        let pending = if depth > 1 {
            format!(" ({})", depth)
        } else {
            String::new()
        };
        spans.push(Span::styled(
            format!("{} Loading…{} ", SPINNER[model.tick % SPINNER.len()], pending),
            Style::default().fg(Color::Green),
        ));
    }

    if let Some(error) = model.gallery.last_error() {
        spans.push(Span::styled(
            format!("{} ", error),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(notice) = &model.notice {
        spans.push(Span::styled(
            format!("{} ", notice),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        "Tab: focus · ←/→: option · Enter: search/open · n/p: page · q/Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

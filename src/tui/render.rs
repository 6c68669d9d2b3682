//! 画面描画
//!
//! 検索欄・サマリ・テーブル・ページ操作・ヘルプを縦に並べる。
//! 描画時にヘッダのレイアウトを Model に記録し、マウス判定に使う。

use super::app::Model;
use super::header::{fit, HeaderLayout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// 列間の区切り
const SEPARATOR: &str = "│";

/// 画面を描画
pub fn draw(f: &mut Frame, model: &mut Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 検索欄
            Constraint::Length(1), // サマリ
            Constraint::Min(3),    // テーブル
            Constraint::Length(1), // ページ操作 / ステータス
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    draw_search(f, model, chunks[0]);

    let summary = Paragraph::new(format!(" {}", model.view.summary()))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(summary, chunks[1]);

    draw_table(f, model, chunks[2]);
    draw_footer(f, model, chunks[3]);

    let help = Paragraph::new(
        " /: search | ←/→: column | Enter: sort | +/-: width | n/p: page | e/E: export visible/all | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

/// 検索欄を描画
fn draw_search(f: &mut Frame, model: &Model, area: Rect) {
    let border_style = if model.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let pending = if model.debouncer.is_pending() { " …" } else { "" };
    let cursor = if model.search_focused { "_" } else { "" };

    let search = Paragraph::new(format!("{}{}{}", model.search, cursor, pending)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);
}

/// 左端の列を調整してカーソル列を表示範囲に入れる
fn scroll_to_cursor(model: &mut Model, origin_x: u16, row_y: u16, width: u16) -> HeaderLayout {
    let widths = model.view.widths().as_slice().to_vec();
    if model.cursor < model.first_column {
        model.first_column = model.cursor;
    }

    loop {
        let layout = HeaderLayout::compute(&widths, model.first_column, origin_x, row_y, width);
        let visible = layout.fully_shows(model.cursor, &widths);
        if visible || model.first_column >= model.cursor {
            return layout;
        }
        model.first_column += 1;
    }
}

/// テーブル本体を描画
fn draw_table(f: &mut Frame, model: &mut Model, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if model.view.model().column_count() == 0 {
        let empty = Paragraph::new(" No columns to display")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, inner);
        model.header = HeaderLayout::default();
        return;
    }

    let layout = scroll_to_cursor(model, inner.x, inner.y, inner.width);

    // ヘッダ行
    let mut header_spans = Vec::new();
    for span in layout.spans() {
        let label = model.view.header_display(span.column);
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if span.column == model.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if model.view.resizing_column() == Some(span.column) {
            style = style.fg(Color::Yellow);
        }
        header_spans.push(Span::styled(fit(&label, span.width), style));
        header_spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
    }

    let mut lines = vec![Line::from(header_spans)];

    // 本体行
    let body_height = usize::from(inner.height.saturating_sub(1));
    let rows = model.view.displayed_rows();
    for (i, row) in rows.iter().skip(model.scroll).take(body_height).enumerate() {
        let style = if (model.scroll + i) % 2 == 1 {
            Style::default().bg(Color::Rgb(40, 40, 40))
        } else {
            Style::default()
        };
        let mut spans = Vec::new();
        for span in layout.spans() {
            spans.push(Span::styled(fit(row.cell(span.column), span.width), style));
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    }

    if rows.is_empty() {
        lines.push(Line::styled(
            " No matching rows",
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(lines), inner);
    model.header = layout;
}

/// ページ操作とステータスを描画
fn draw_footer(f: &mut Frame, model: &Model, area: Rect) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    if model.view.pagination().is_some() {
        spans.push(Span::styled(
            " ◀ prev ",
            if model.view.has_prev_page() { enabled } else { disabled },
        ));
        spans.push(Span::raw(format!(
            " Page {} / {} ",
            model.view.current_page(),
            model.view.total_pages()
        )));
        spans.push(Span::styled(
            " next ▶ ",
            if model.view.has_next_page() { enabled } else { disabled },
        ));
    }

    if let Some(status) = &model.status {
        spans.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Green),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

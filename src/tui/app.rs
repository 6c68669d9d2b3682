//! テーブルプレビュー TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: ビュー状態 + 入力欄 + デバウンサ + カーソル
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新

use super::header::{cells_to_units, HeaderHit, HeaderLayout, UNITS_PER_CELL};
use crate::host::Host;
use crate::table::{Debouncer, HeaderClick, TableView};
use chrono::Utc;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

/// キー操作 1 回あたりの列幅変更量
pub const KEY_RESIZE_STEP: i32 = 2 * UNITS_PER_CELL as i32;

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// テーブルビュー
    pub view: TableView,
    /// 保存要求の送信先
    pub host: Box<dyn Host>,
    /// 検索入力欄のテキスト（未適用の入力を含む）
    pub search: String,
    /// 検索入力欄にフォーカスしているか
    pub search_focused: bool,
    /// フィルタ再計算の遅延タスク
    pub debouncer: Debouncer<String>,
    /// ヘッダカーソル列
    pub cursor: usize,
    /// 左端に表示する列
    pub first_column: usize,
    /// 表示行の先頭オフセット
    pub scroll: usize,
    /// ステータス行のメッセージ
    pub status: Option<String>,
    /// 終了フラグ
    pub should_quit: bool,
    /// 最後に描画したヘッダのレイアウト
    pub header: HeaderLayout,
}

impl Model {
    pub fn new(view: TableView, host: Box<dyn Host>, debounce: Duration) -> Self {
        Self {
            view,
            host,
            search: String::new(),
            search_focused: false,
            debouncer: Debouncer::new(debounce),
            cursor: 0,
            first_column: 0,
            scroll: 0,
            status: None,
            should_quit: false,
            header: HeaderLayout::default(),
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.search_focused {
            // 検索欄にフォーカス中のキー処理
            return match key {
                KeyCode::Esc if !self.search.is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Msg::SearchUnfocus),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            };
        }

        match key {
            KeyCode::Char('q') => Some(Msg::Quit),
            KeyCode::Char('/') => Some(Msg::SearchFocus),
            KeyCode::Left | KeyCode::Char('h') => Some(Msg::CursorLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Msg::CursorRight),
            KeyCode::Enter | KeyCode::Char('s') => Some(Msg::HeaderClick(self.cursor)),
            KeyCode::Char('+') | KeyCode::Char('>') => Some(Msg::Grow),
            KeyCode::Char('-') | KeyCode::Char('<') => Some(Msg::Shrink),
            KeyCode::PageDown | KeyCode::Char('n') => Some(Msg::NextPage),
            KeyCode::PageUp | KeyCode::Char('p') => Some(Msg::PrevPage),
            KeyCode::Down | KeyCode::Char('j') => Some(Msg::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Msg::ScrollUp),
            KeyCode::Char('e') => Some(Msg::ExportVisible),
            KeyCode::Char('E') => Some(Msg::ExportAll),
            _ => None,
        }
    }

    /// マウス入力をメッセージに変換
    ///
    /// ヘッダのクリックはボタンを離した時点で発火する。リサイズ中に離した
    /// 場合は、同じ列のヘッダ上であればその列へのクリックも伴う。
    pub fn mouse_to_msg(&self, event: MouseEvent) -> Option<Msg> {
        let hit = self.header.hit(event.column, event.row);
        let x = cells_to_units(event.column);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(HeaderHit::Handle(column)) => Some(Msg::ResizeStart { column, x }),
                _ => None,
            },
            MouseEventKind::Drag(MouseButton::Left) if self.view.is_resizing() => {
                Some(Msg::ResizeMove { x })
            }
            MouseEventKind::Up(MouseButton::Left) => match self.view.resizing_column() {
                Some(active) => Some(Msg::ResizeEnd {
                    click: hit.map(|h| h.column()).filter(|&c| c == active),
                }),
                None => match hit {
                    Some(HeaderHit::Cell(column)) => Some(Msg::HeaderClick(column)),
                    _ => None,
                },
            },
            MouseEventKind::ScrollDown => Some(Msg::ScrollDown),
            MouseEventKind::ScrollUp => Some(Msg::ScrollUp),
            _ => None,
        }
    }
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 時間経過（デバウンス判定）
    Tick,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除（保留中のフィルタを即時適用）
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// ヘッダカーソル移動
    CursorLeft,
    CursorRight,
    /// ヘッダクリック（ソート）
    HeaderClick(usize),
    /// カーソル列の幅を増減
    Grow,
    Shrink,
    /// リサイズジェスチャ
    ResizeStart { column: usize, x: i32 },
    ResizeMove { x: i32 },
    ResizeEnd { click: Option<usize> },
    /// ページ移動
    NextPage,
    PrevPage,
    /// 行スクロール
    ScrollDown,
    ScrollUp,
    /// エクスポート
    ExportVisible,
    ExportAll,
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg, now: Instant) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::Tick => {
            if let Some(query) = model.debouncer.poll(now) {
                apply_filter(model, &query);
            }
        }
        Msg::SearchFocus => {
            model.search_focused = true;
        }
        Msg::SearchUnfocus => {
            model.search_focused = false;
            if let Some(query) = model.debouncer.flush() {
                apply_filter(model, &query);
            }
        }
        Msg::SearchInput(c) => {
            model.search.push(c);
            model.debouncer.schedule(now, model.search.clone());
        }
        Msg::SearchBackspace => {
            model.search.pop();
            model.debouncer.schedule(now, model.search.clone());
        }
        Msg::SearchClear => {
            model.search.clear();
            model.debouncer.cancel();
            apply_filter(model, "");
        }
        Msg::CursorLeft => {
            model.cursor = model.cursor.saturating_sub(1);
        }
        Msg::CursorRight => {
            let last = model.view.model().column_count().saturating_sub(1);
            model.cursor = (model.cursor + 1).min(last);
        }
        Msg::HeaderClick(column) => header_click(model, column),
        Msg::Grow => {
            model.view.nudge_width(model.cursor, KEY_RESIZE_STEP);
        }
        Msg::Shrink => {
            model.view.nudge_width(model.cursor, -KEY_RESIZE_STEP);
        }
        Msg::ResizeStart { column, x } => {
            if model.view.begin_resize(column, x) {
                model.cursor = column;
            }
        }
        Msg::ResizeMove { x } => {
            model.view.drag_resize(x);
        }
        Msg::ResizeEnd { click } => {
            model.view.end_resize();
            if let Some(column) = click {
                header_click(model, column);
            }
        }
        Msg::NextPage => {
            model.view.next_page();
            model.scroll = 0;
        }
        Msg::PrevPage => {
            model.view.prev_page();
            model.scroll = 0;
        }
        Msg::ScrollDown => {
            let last = model.view.displayed_rows().len().saturating_sub(1);
            model.scroll = (model.scroll + 1).min(last);
        }
        Msg::ScrollUp => {
            model.scroll = model.scroll.saturating_sub(1);
        }
        Msg::ExportVisible => {
            let request = model.view.export_visible(Utc::now());
            model.status = Some(format!(
                "Export requested: {} ({} rows)",
                request.filename,
                model.view.filtered_count()
            ));
            model.host.post(request);
        }
        Msg::ExportAll => {
            let request = model.view.export_all(Utc::now());
            model.status = Some(format!(
                "Export requested: {} ({} rows)",
                request.filename,
                model.view.model().row_count()
            ));
            model.host.post(request);
        }
    }
}

fn apply_filter(model: &mut Model, query: &str) {
    model.view.apply_filter(query);
    model.scroll = 0;
}

fn header_click(model: &mut Model, column: usize) {
    if let HeaderClick::Sorted(active) = model.view.on_header_click(column) {
        model.cursor = column;
        model.status = Some(format!(
            "Sorted by {} {}",
            model.view.model().header(column).unwrap_or(""),
            active.direction.glyph()
        ));
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

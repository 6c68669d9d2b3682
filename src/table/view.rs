//! テーブルビュー
//!
//! 正準行リスト・フィルタクエリ・ソート状態・ページング状態・列幅を
//! 1 つのインスタンスにまとめた状態付きコンポーネント。
//! 表示される行は常に「正準行リスト + クエリ」から再導出する。

use super::csv::{build_csv, export_filename, ExportScope};
use super::filter::{filter_rows, normalize_query};
use super::model::{Row, TableModel};
use super::page::Pagination;
use super::resize::{ClickGuard, ColumnWidths, ResizeSession};
use super::sort::{sort_rows, ActiveSort, SortDirection, SortState};
use crate::host::SaveFileRequest;
use chrono::{DateTime, Utc};

/// ヘッダクリックの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderClick {
    /// ソートを適用した
    Sorted(ActiveSort),
    /// リサイズ直後のクリックとして無視した
    Suppressed,
    /// 存在しない列
    OutOfRange,
}

/// テーブルビュー
#[derive(Debug, Clone)]
pub struct TableView {
    model: TableModel,
    /// 正規化済みクエリ
    query: String,
    /// 絞り込み済み行（正準インデックス、昇順）
    filtered: Vec<usize>,
    sort: SortState,
    /// `None` ならページングなし（一致行をすべて表示）
    pagination: Option<Pagination>,
    widths: ColumnWidths,
    resize: Option<ResizeSession>,
    click_guard: ClickGuard,
}

impl TableView {
    pub fn new(model: TableModel, pagination: Option<Pagination>) -> Self {
        let widths = ColumnWidths::new(model.column_count());
        let filtered = (0..model.row_count()).collect();
        Self {
            model,
            query: String::new(),
            filtered,
            sort: SortState::default(),
            pagination,
            widths,
            resize: None,
            click_guard: ClickGuard::default(),
        }
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    // ------------------------------------------------------------------------
    // フィルタ
    // ------------------------------------------------------------------------

    /// クエリを適用し、ページングありなら 1 ページ目に戻す
    pub fn apply_filter(&mut self, raw_query: &str) {
        self.query = normalize_query(raw_query);
        self.refilter();
        if self.pagination.is_some() {
            self.render_page(1);
        }
        log::debug!(
            "filter {:?}: {} / {} rows",
            self.query,
            self.filtered.len(),
            self.model.row_count()
        );
    }

    fn refilter(&mut self) {
        self.filtered = filter_rows(self.model.canonical_rows(), &self.query);
    }

    /// 絞り込み済み行（正準順）
    pub fn filtered_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        let rows = self.model.canonical_rows();
        self.filtered.iter().map(move |&i| &rows[i])
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// 画面に並べる行（ページングありなら現在ページ分のみ）
    pub fn displayed_rows(&self) -> Vec<&Row> {
        let range = match &self.pagination {
            Some(p) => p.window(self.filtered.len()),
            None => 0..self.filtered.len(),
        };
        let rows = self.model.canonical_rows();
        self.filtered[range].iter().map(|&i| &rows[i]).collect()
    }

    // ------------------------------------------------------------------------
    // ソート
    // ------------------------------------------------------------------------

    /// ヘッダクリック
    ///
    /// リサイズ直後の 1 回は無視する。
    pub fn on_header_click(&mut self, column: usize) -> HeaderClick {
        if self.click_guard.consume() {
            return HeaderClick::Suppressed;
        }
        if column >= self.model.column_count() {
            return HeaderClick::OutOfRange;
        }

        let active = self.sort.click(column);
        self.apply_sort(active);
        HeaderClick::Sorted(active)
    }

    /// 列と方向を指定してソート
    pub fn sort_by(&mut self, column: usize, direction: SortDirection) -> Option<ActiveSort> {
        if column >= self.model.column_count() {
            return None;
        }
        let active = self.sort.set(column, direction);
        self.apply_sort(active);
        Some(active)
    }

    fn apply_sort(&mut self, active: ActiveSort) {
        sort_rows(self.model.rows_mut(), active);
        self.refilter();
        if let Some(page) = self.pagination.map(|p| p.current_page()) {
            self.render_page(page);
        }
        log::debug!(
            "sorted by column {} ({:?})",
            active.column,
            active.direction
        );
    }

    /// ヘッダ表示用ラベル（ソート列には方向記号を付ける）
    pub fn header_display(&self, column: usize) -> String {
        let label = self.model.header(column).unwrap_or("");
        match self.sort.indicator(column) {
            Some(glyph) => format!("{} {}", label, glyph),
            None => label.to_string(),
        }
    }

    // ------------------------------------------------------------------------
    // ページング
    // ------------------------------------------------------------------------

    /// 要求ページを表示し、確定したページ番号を返す
    ///
    /// ページングなしの場合は常に 1。
    pub fn render_page(&mut self, requested: usize) -> usize {
        let count = self.filtered.len();
        match &mut self.pagination {
            Some(p) => p.go_to(requested, count),
            None => 1,
        }
    }

    pub fn next_page(&mut self) -> usize {
        let current = self.current_page();
        self.render_page(current + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        let current = self.current_page();
        self.render_page(current.saturating_sub(1))
    }

    pub fn current_page(&self) -> usize {
        self.pagination.map_or(1, |p| p.current_page())
    }

    pub fn total_pages(&self) -> usize {
        self.pagination
            .map_or(1, |p| p.total_pages(self.filtered.len()))
    }

    pub fn has_prev_page(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_prev())
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination
            .is_some_and(|p| p.has_next(self.filtered.len()))
    }

    // ------------------------------------------------------------------------
    // 列幅
    // ------------------------------------------------------------------------

    /// リサイズジェスチャ開始
    pub fn begin_resize(&mut self, column: usize, pointer_x: i32) -> bool {
        let Some(width) = self.widths.get(column) else {
            return false;
        };
        self.resize = Some(ResizeSession::begin(column, pointer_x, width));
        true
    }

    /// ドラッグ中のポインタ移動。適用後の幅を返す
    pub fn drag_resize(&mut self, pointer_x: i32) -> Option<u32> {
        let session = self.resize?;
        self.widths
            .set(session.column(), session.width_at(pointer_x))
    }

    /// ジェスチャ終了。直後のヘッダクリックを 1 回抑止する
    pub fn end_resize(&mut self) -> bool {
        if self.resize.take().is_none() {
            return false;
        }
        self.click_guard.arm();
        true
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// ジェスチャ中の列
    pub fn resizing_column(&self) -> Option<usize> {
        self.resize.map(|s| s.column())
    }

    /// ジェスチャを介さずに列幅を増減する
    pub fn nudge_width(&mut self, column: usize, delta: i32) -> Option<u32> {
        let current = self.widths.get(column)?;
        let session = ResizeSession::begin(column, 0, current);
        self.widths.set(column, session.width_at(delta))
    }

    // ------------------------------------------------------------------------
    // サマリ / エクスポート
    // ------------------------------------------------------------------------

    /// 状態表示用の文字列
    pub fn summary(&self) -> String {
        let total = self.model.row_count();
        let visible = self.filtered.len();
        let columns = self.model.column_count();

        match &self.pagination {
            Some(p) => {
                let window = p.window(visible);
                let start = if window.is_empty() { 0 } else { window.start + 1 };
                format!(
                    "{}-{} of {} · {} / {} rows · {} columns",
                    start, window.end, visible, visible, total, columns
                )
            }
            None => format!("{} / {} rows · {} columns", visible, total, columns),
        }
    }

    /// 指定範囲の CSV テキスト
    pub fn to_csv(&self, scope: ExportScope) -> String {
        let headers = self.model.headers().iter().map(String::as_str);
        match scope {
            ExportScope::Visible => build_csv(headers, self.filtered_rows()),
            ExportScope::All => build_csv(headers, self.model.canonical_rows()),
        }
    }

    /// 保存要求を作成
    pub fn export(&self, scope: ExportScope, at: DateTime<Utc>) -> SaveFileRequest {
        SaveFileRequest::download_csv(export_filename(scope, at), self.to_csv(scope))
    }

    pub fn export_visible(&self, at: DateTime<Utc>) -> SaveFileRequest {
        self.export(ExportScope::Visible, at)
    }

    pub fn export_all(&self, at: DateTime<Utc>) -> SaveFileRequest {
        self.export(ExportScope::All, at)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

//! 行ストア
//!
//! 初期ペイロードから一度だけ構築される表データ。行の追加・削除は行わず、
//! ソートによる並べ替えのみを許可する。

use crate::payload::TablePayload;

/// 1 行分のセル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
    /// 全セルを連結して小文字化した検索用テキスト
    haystack: String,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        let haystack = cells.concat().to_lowercase();
        Self { cells, haystack }
    }

    /// 指定列のセル（存在しなければ空文字列）
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// フィルタ対象のテキスト（小文字化済み）
    pub fn search_text(&self) -> &str {
        &self.haystack
    }
}

/// 表データ（ヘッダと正準行リスト）
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TableModel {
    /// ヘッダと行から構築
    ///
    /// 行は列数に揃える（不足分は空文字列、超過分は切り捨て）。
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let arity = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, mut cells)| {
                if cells.len() > arity {
                    log::debug!("row {} has {} cells, truncating to {}", i, cells.len(), arity);
                }
                cells.resize(arity, String::new());
                Row::new(cells)
            })
            .collect();

        Self { headers, rows }
    }

    /// 初期ペイロードから行ストアを構築
    ///
    /// 列が一つもない場合は診断ログを残し、空の表として扱う。
    pub fn from_payload(payload: TablePayload) -> Self {
        if payload.headers.is_empty() {
            log::warn!(
                "table has no columns; {} row(s) ignored",
                payload.rows.len()
            );
            return Self::default();
        }

        let model = Self::new(payload.headers, payload.rows);
        log::debug!(
            "row store seeded: {} rows, {} columns",
            model.row_count(),
            model.column_count()
        );
        model
    }

    /// 正準行リスト
    pub fn canonical_rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn header(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(String::as_str)
    }

    /// 列を 0 始まりのインデックスまたはヘッダ名で解決
    ///
    /// ヘッダ名の完全一致を優先し、次に数値インデックスとして解釈する。
    pub fn column_index(&self, key: &str) -> Option<usize> {
        if let Some(index) = self.headers.iter().position(|h| h == key) {
            return Some(index);
        }
        key.trim()
            .parse::<usize>()
            .ok()
            .filter(|&index| index < self.column_count())
    }

    /// ソート用に行リストを可変参照で渡す（長さは呼び出し側で変えない）
    pub(super) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;

//! ページング
//!
//! 絞り込み済み行リストを固定サイズのページに分割する。
//! 現在ページは常に `1..=total_pages` に収まる。

use std::ops::Range;

/// デフォルトのページサイズ
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// ページング状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    /// ページサイズ 0 は 1 として扱う
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 総ページ数（最低 1）
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size).max(1)
    }

    /// 要求ページを `[1, total_pages]` に丸める
    pub fn clamp_page(&self, requested: usize, filtered_count: usize) -> usize {
        requested.clamp(1, self.total_pages(filtered_count))
    }

    /// 要求ページへ移動し、確定したページ番号を返す
    pub fn go_to(&mut self, requested: usize, filtered_count: usize) -> usize {
        self.current_page = self.clamp_page(requested, filtered_count);
        self.current_page
    }

    /// 現在ページに表示する絞り込み済みリスト上の範囲
    pub fn window(&self, filtered_count: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(filtered_count);
        let end = (start + self.page_size).min(filtered_count);
        start..end
    }

    /// 「前へ」が押せるか
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// 「次へ」が押せるか
    pub fn has_next(&self, filtered_count: usize) -> bool {
        self.current_page < self.total_pages(filtered_count)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

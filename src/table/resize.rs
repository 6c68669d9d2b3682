//! 列幅とリサイズジェスチャ
//!
//! 列幅はピクセル相当の単位で保持する。ドラッグ中だけ存在する
//! `ResizeSession` と、ジェスチャ終了直後のヘッダクリックを 1 回だけ
//! 無視する `ClickGuard` を提供する。

/// 列幅の下限
pub const MIN_COLUMN_WIDTH: u32 = 60;

/// 列幅の初期値
pub const DEFAULT_COLUMN_WIDTH: u32 = 120;

/// 列ごとの幅（列同士は独立）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<u32>,
}

impl ColumnWidths {
    pub fn new(column_count: usize) -> Self {
        Self {
            widths: vec![DEFAULT_COLUMN_WIDTH; column_count],
        }
    }

    pub fn get(&self, column: usize) -> Option<u32> {
        self.widths.get(column).copied()
    }

    /// 幅を設定（下限で切り上げ）。存在しない列なら None
    pub fn set(&mut self, column: usize, width: u32) -> Option<u32> {
        let slot = self.widths.get_mut(column)?;
        *slot = width.max(MIN_COLUMN_WIDTH);
        Some(*slot)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.widths
    }
}

/// ドラッグ中のリサイズジェスチャ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    column: usize,
    start_x: i32,
    start_width: u32,
}

impl ResizeSession {
    pub fn begin(column: usize, start_x: i32, start_width: u32) -> Self {
        Self {
            column,
            start_x,
            start_width,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// ポインタ位置 `x` での列幅
    pub fn width_at(&self, x: i32) -> u32 {
        let width = i64::from(self.start_width) + i64::from(x) - i64::from(self.start_x);
        width.clamp(i64::from(MIN_COLUMN_WIDTH), i64::from(u32::MAX)) as u32
    }
}

/// ジェスチャ終了後のクリック抑止フラグ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickGuard {
    armed: bool,
}

impl ClickGuard {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// 武装中なら解除して `true` を返す
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

#[cfg(test)]
#[path = "resize_test.rs"]
mod tests;

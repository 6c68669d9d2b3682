//! ヘッダ行のレイアウト
//!
//! 列幅（ピクセル相当）を端末セルに換算し、マウス位置から
//! ヘッダセル / リサイズハンドルを判定する。描画とヒットテストで同じ
//! レイアウトを使う。

/// 1 セルあたりの幅単位
pub const UNITS_PER_CELL: u32 = 8;

/// 幅単位をセル数に換算（四捨五入、最低 1）
pub fn width_to_cells(units: u32) -> u16 {
    let cells = (units + UNITS_PER_CELL / 2) / UNITS_PER_CELL;
    cells.clamp(1, u32::from(u16::MAX)) as u16
}

/// セル座標を幅単位のポインタ位置に換算
pub fn cells_to_units(x: u16) -> i32 {
    i32::from(x) * UNITS_PER_CELL as i32
}

/// テキストを指定幅に収める（はみ出す場合は末尾を `…` にする）
pub fn fit(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if width == 0 {
        return String::new();
    }

    let count = text.chars().count();
    if count > width {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

/// 1 列分の表示範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub column: usize,
    pub start: u16,
    pub width: u16,
}

impl ColumnSpan {
    /// 列右端の区切り（リサイズハンドル）の x 座標
    pub fn handle_x(&self) -> u16 {
        self.start.saturating_add(self.width)
    }
}

/// ヘッダ上のヒット対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Cell(usize),
    Handle(usize),
}

impl HeaderHit {
    pub fn column(&self) -> usize {
        match self {
            HeaderHit::Cell(c) | HeaderHit::Handle(c) => *c,
        }
    }
}

/// 最後に描画したヘッダ行のレイアウト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    row_y: u16,
    spans: Vec<ColumnSpan>,
}

impl HeaderLayout {
    /// `first_column` から `max_width` セルに収まる範囲の列を並べる
    ///
    /// 列間には区切り 1 セルを置く。最後の列は途中で切れてもよい。
    pub fn compute(
        widths: &[u32],
        first_column: usize,
        origin_x: u16,
        row_y: u16,
        max_width: u16,
    ) -> Self {
        let limit = origin_x.saturating_add(max_width);
        let mut spans = Vec::new();
        let mut x = origin_x;

        for (column, &units) in widths.iter().enumerate().skip(first_column) {
            if x >= limit {
                break;
            }
            let width = width_to_cells(units).min(limit - x);
            spans.push(ColumnSpan {
                column,
                start: x,
                width,
            });
            x = x.saturating_add(width).saturating_add(1);
        }

        Self { row_y, spans }
    }

    pub fn spans(&self) -> &[ColumnSpan] {
        &self.spans
    }

    /// 列が完全に表示されているか
    pub fn fully_shows(&self, column: usize, widths: &[u32]) -> bool {
        self.spans.iter().any(|s| {
            s.column == column && widths.get(column).map(|&w| width_to_cells(w)) == Some(s.width)
        })
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<HeaderHit> {
        if y != self.row_y {
            return None;
        }
        self.spans.iter().find_map(|s| {
            if x == s.handle_x() {
                Some(HeaderHit::Handle(s.column))
            } else if x >= s.start && x < s.handle_x() {
                Some(HeaderHit::Cell(s.column))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;

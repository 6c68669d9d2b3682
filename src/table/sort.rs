//! ソートロジック
//!
//! 単一列ソート。比較する 2 セルが両方とも数値として解釈できれば数値比較、
//! そうでなければロケール順の文字列比較を行う。

use super::model::Row;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid decimal pattern")
});

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// ヘッダに表示する方向記号
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// 有効なソート列と方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSort {
    pub column: usize,
    pub direction: SortDirection,
}

/// ソート状態（初期状態はソートなし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<ActiveSort>,
}

impl SortState {
    /// ヘッダクリック
    ///
    /// - 現在のソート列なら方向を反転
    /// - それ以外の列なら昇順でその列をソート列にする
    pub fn click(&mut self, column: usize) -> ActiveSort {
        let next = match self.active {
            Some(current) if current.column == column => ActiveSort {
                column,
                direction: current.direction.toggled(),
            },
            _ => ActiveSort {
                column,
                direction: SortDirection::Ascending,
            },
        };
        self.active = Some(next);
        next
    }

    /// 列と方向を直接指定
    pub fn set(&mut self, column: usize, direction: SortDirection) -> ActiveSort {
        let next = ActiveSort { column, direction };
        self.active = Some(next);
        next
    }

    /// 指定列のソート記号（ソート列以外は None）
    pub fn indicator(&self, column: usize) -> Option<&'static str> {
        self.active
            .filter(|a| a.column == column)
            .map(|a| a.direction.glyph())
    }
}

/// 寛容な数値パース
///
/// 前後の空白を許容し、10 進小数・指数表記・`0x`/`0o`/`0b` 接頭辞・
/// `Infinity` を受け付ける。空文字列や非数値は `None`。
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    if DECIMAL.is_match(s) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

/// 接頭辞を除いた桁列を解釈（符号は不可、`u64` を超えても浮動小数で返す）
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// 文字の照合クラス（記号 < 数字 < 英字 < その他）
fn char_class(c: char) -> u8 {
    if c.is_whitespace() || c.is_ascii_punctuation() {
        0
    } else if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        3
    }
}

/// 第 1 段階のキー（分音記号を除き小文字化した基底文字）
fn base_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// 第 2 段階のキー（基底文字は 0、分音記号はそのコードポイント）
fn accent_key(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.nfd()
        .map(|c| if is_combining_mark(c) { u32::from(c) } else { 0 })
}

/// ロケール順に近い文字列比較
///
/// 1. 分音記号と大文字小文字を無視した基底文字（記号 < 数字 < 英字 < その他）
/// 2. 分音記号なしを先に置く
/// 3. 小文字を大文字より先に置く
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(base_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| case_compare(a, b))
        .then_with(|| a.cmp(b))
}

fn case_compare(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(ca, cb)| ca != cb)
        .map_or(Ordering::Equal, |(ca, cb)| {
            match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
}

/// セル同士の比較
///
/// 両方が数値なら数値比較、片方でも失敗すれば文字列比較にフォールバックする。
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        _ => locale_compare(a, b),
    }
}

/// 正準行リストを指定列で並べ替える
pub fn sort_rows(rows: &mut Vec<Row>, sort: ActiveSort) {
    let column = sort.column;
    let taken = std::mem::take(rows);
    *rows = merge_sort_by(taken, &mut |a: &Row, b: &Row| {
        let cmp = compare_cells(a.cell(column), b.cell(column));
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// 安定マージソート
///
/// 数値と文字列が混在する列では比較関数が全順序にならない。
/// `slice::sort_by` はその場合に panic し得るため使わない。
fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;

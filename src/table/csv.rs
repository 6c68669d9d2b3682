//! CSV 生成
//!
//! ヘッダ行と行リストから BOM 付きの CSV テキストを作る。
//! ファイル書き込みはホスト側の責務で、ここでは行わない。

use super::model::Row;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// 表計算ソフト向けのバイトオーダーマーク
pub const BOM: char = '\u{FEFF}';

/// エクスポート対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// フィルタを通過した行
    Visible,
    /// 正準行リストの全行
    All,
}

impl ExportScope {
    fn file_prefix(self) -> &'static str {
        match self {
            ExportScope::Visible => "table",
            ExportScope::All => "table-all",
        }
    }
}

/// フィールドをエスケープ
///
/// カンマ・ダブルクォート・改行を含む場合のみクォートし、内部の `"` は `""` にする。
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn join_line<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// CSV テキストを構築
///
/// 1 行目はヘッダ、以降は与えられた順の各行。行区切りは `\n`。
pub fn build_csv<'h, 'r, H, R>(headers: H, rows: R) -> String
where
    H: IntoIterator<Item = &'h str>,
    R: IntoIterator<Item = &'r Row>,
{
    let mut lines = vec![join_line(headers)];
    lines.extend(
        rows.into_iter()
            .map(|row| join_line(row.cells().iter().map(String::as_str))),
    );

    let mut csv = String::from(BOM);
    csv.push_str(&lines.join("\n"));
    csv
}

/// エクスポートファイル名（ISO 8601 タイムスタンプの `:` と `.` を `-` に置換）
pub fn export_filename(scope: ExportScope, at: DateTime<Utc>) -> String {
    let timestamp = at
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-");
    format!("{}-{}.csv", scope.file_prefix(), timestamp)
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;

//! フィルタロジック
//!
//! 行の全セル連結テキストに対する case-insensitive な部分一致で絞り込む。

use super::model::Row;

/// 入力クエリを正規化（前後の空白除去 + 小文字化）
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// 正規化済みクエリに行が一致するか
///
/// 空クエリは全行に一致する。
pub fn row_matches(row: &Row, query: &str) -> bool {
    query.is_empty() || row.search_text().contains(query)
}

/// 一致した行の正準インデックスを正準順で返す
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<usize> {
    let query = normalize_query(query);
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;

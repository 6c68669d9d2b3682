use super::*;

fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter()
        .map(|cells| Row::new(cells.iter().map(|c| c.to_string()).collect()))
        .collect()
}

#[test]
fn empty_query_returns_all() {
    let rows = rows(&[&["foo"], &["bar"]]);
    assert_eq!(filter_rows(&rows, ""), vec![0, 1]);
}

#[test]
fn whitespace_query_returns_all() {
    let rows = rows(&[&["foo"], &["bar"]]);
    assert_eq!(filter_rows(&rows, "   "), vec![0, 1]);
}

#[test]
fn partial_match_in_any_cell() {
    let rows = rows(&[&["alice", "admin"], &["bob", "user"], &["carol", "admin"]]);
    assert_eq!(filter_rows(&rows, "adm"), vec![0, 2]);
}

#[test]
fn case_insensitive_and_trimmed() {
    let rows = rows(&[&["MyPlugin"], &["other"]]);
    assert_eq!(filter_rows(&rows, "  myPLUGIN "), vec![0]);
}

#[test]
fn matches_across_cell_boundary() {
    // 行テキストはセルを区切りなしで連結したもの
    let rows = rows(&[&["ab", "cd"]]);
    assert_eq!(filter_rows(&rows, "bc"), vec![0]);
}

#[test]
fn no_match_returns_empty() {
    let rows = rows(&[&["foo"], &["bar"]]);
    assert!(filter_rows(&rows, "xyz").is_empty());
}

#[test]
fn normalize_query_trims_and_lowercases() {
    assert_eq!(normalize_query("  HeLLo "), "hello");
}

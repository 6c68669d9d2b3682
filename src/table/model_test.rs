use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn new_pads_short_rows_to_column_count() {
    let model = TableModel::new(strings(&["a", "b", "c"]), vec![strings(&["1"])]);
    assert_eq!(model.canonical_rows()[0].cells(), &strings(&["1", "", ""])[..]);
}

#[test]
fn new_truncates_long_rows() {
    let model = TableModel::new(strings(&["a"]), vec![strings(&["1", "2"])]);
    assert_eq!(model.canonical_rows()[0].cells().len(), 1);
}

#[test]
fn cell_out_of_range_is_empty() {
    let row = Row::new(strings(&["x"]));
    assert_eq!(row.cell(0), "x");
    assert_eq!(row.cell(5), "");
}

#[test]
fn search_text_is_lowercase_concatenation() {
    let row = Row::new(strings(&["Foo", "BAR"]));
    assert_eq!(row.search_text(), "foobar");
}

#[test]
fn from_payload_without_headers_is_empty() {
    let payload = TablePayload {
        headers: vec![],
        rows: vec![vec![], vec![]],
    };
    let model = TableModel::from_payload(payload);
    assert_eq!(model.row_count(), 0);
    assert_eq!(model.column_count(), 0);
}

#[test]
fn from_payload_keeps_document_order() {
    let payload = TablePayload {
        headers: strings(&["id"]),
        rows: vec![strings(&["2"]), strings(&["1"])],
    };
    let model = TableModel::from_payload(payload);
    assert_eq!(model.canonical_rows()[0].cell(0), "2");
    assert_eq!(model.canonical_rows()[1].cell(0), "1");
}

#[test]
fn column_index_prefers_label_then_index() {
    let model = TableModel::new(strings(&["name", "0"]), vec![]);
    assert_eq!(model.column_index("name"), Some(0));
    // "0" はヘッダ名として一致する
    assert_eq!(model.column_index("0"), Some(1));
    assert_eq!(model.column_index("1"), Some(1));
    assert_eq!(model.column_index("2"), None);
    assert_eq!(model.column_index("missing"), None);
}

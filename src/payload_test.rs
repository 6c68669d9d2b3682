use super::*;
use serde_json::json;

#[test]
fn objects_union_keys_in_first_seen_order() {
    let payload = TablePayload::from_value(json!([
        {"id": 1, "name": "a"},
        {"name": "b", "age": 30},
    ]));
    assert_eq!(payload.headers, vec!["id", "name", "age"]);
    assert_eq!(payload.rows[0], vec!["1", "a", ""]);
    assert_eq!(payload.rows[1], vec!["", "b", "30"]);
}

#[test]
fn array_rows_use_indices_as_headers() {
    let payload = TablePayload::from_value(json!([[1, 2], [3, 4, 5]]));
    assert_eq!(payload.headers, vec!["0", "1", "2"]);
    assert_eq!(payload.rows[0], vec!["1", "2", ""]);
    assert_eq!(payload.rows[1], vec!["3", "4", "5"]);
}

#[test]
fn scalar_top_level_becomes_single_row() {
    let payload = TablePayload::from_value(json!("hello"));
    assert_eq!(payload.headers, vec![SCALAR_HEADER]);
    assert_eq!(payload.rows, vec![vec!["hello".to_string()]]);
}

#[test]
fn single_object_is_wrapped() {
    let payload = TablePayload::from_value(json!({"k": true}));
    assert_eq!(payload.headers, vec!["k"]);
    assert_eq!(payload.rows, vec![vec!["true".to_string()]]);
}

#[test]
fn float_numbers_render_like_js() {
    let payload = TablePayload::from_json_str(
        r#"[{"a": 1.0, "b": 1e2, "c": 1.5, "d": -0.0, "e": 1e21, "f": 1.5e-7, "g": 0.000001, "h": 12}]"#,
    )
    .unwrap();
    assert_eq!(
        payload.rows[0],
        vec!["1", "100", "1.5", "0", "1e+21", "1.5e-7", "0.000001", "12"]
    );
}

#[test]
fn nested_values_are_compact_json() {
    let payload = TablePayload::from_value(json!([{"tags": ["x", "y"], "meta": {"a": 1}}]));
    let row = &payload.rows[0];
    assert_eq!(row[0], "[\"x\",\"y\"]");
    assert_eq!(row[1], "{\"a\":1}");
}

#[test]
fn null_renders_empty() {
    let payload = TablePayload::from_value(json!([{"a": null}, null]));
    assert_eq!(payload.headers, vec!["a", SCALAR_HEADER]);
    assert_eq!(payload.rows[0], vec!["", ""]);
    assert_eq!(payload.rows[1], vec!["", ""]);
}

#[test]
fn scalar_rows_fill_every_column() {
    let payload = TablePayload::from_value(json!([{"a": 1}, 7]));
    assert_eq!(payload.rows[1], vec!["7", "7"]);
}

#[test]
fn empty_array_has_no_columns() {
    let payload = TablePayload::from_value(json!([]));
    assert!(payload.headers.is_empty());
    assert!(payload.rows.is_empty());
}

#[test]
fn invalid_json_is_error() {
    let err = TablePayload::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, JtpError::Json(_)));
}

#[test]
fn read_rejects_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "  \n").unwrap();
    let err = TablePayload::read(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, JtpError::Payload(_)));
}

use super::*;
use proptest::prelude::*;

fn row_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 ,]{0,8}", 1..4)
}

fn table_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(row_strategy().prop_map(Row::new), 0..20)
}

proptest! {
    /// フィルタ結果は「連結テキストにクエリを含む行」と一致する
    #[test]
    fn prop_filter_matches_definition(rows in table_strategy(), query in "[a-zA-Z0-9]{0,3}") {
        let expected: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.cells().concat().to_lowercase().contains(&query.to_lowercase()))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(filter_rows(&rows, &query), expected);
    }

    /// 同じクエリで再度絞り込んでも結果は変わらない
    #[test]
    fn prop_filter_idempotent(rows in table_strategy(), query in "[a-z]{0,2}") {
        let once = filter_rows(&rows, &query);
        let subset: Vec<Row> = once.iter().map(|&i| rows[i].clone()).collect();
        let twice: Vec<usize> = filter_rows(&subset, &query)
            .into_iter()
            .map(|i| once[i])
            .collect();
        prop_assert_eq!(once, twice);
    }

    /// 結果は正準順を保った部分集合
    #[test]
    fn prop_filter_is_ordered_subset(rows in table_strategy(), query in "[a-z]{0,2}") {
        let result = filter_rows(&rows, &query);
        prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.iter().all(|&i| i < rows.len()));
    }
}

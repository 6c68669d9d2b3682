use super::*;
use proptest::prelude::*;

#[test]
fn total_pages_rounds_up() {
    let p = Pagination::new(10);
    assert_eq!(p.total_pages(25), 3);
    assert_eq!(p.total_pages(30), 3);
    assert_eq!(p.total_pages(31), 4);
}

#[test]
fn empty_list_has_one_page() {
    let p = Pagination::default();
    assert_eq!(p.total_pages(0), 1);
    assert_eq!(p.window(0), 0..0);
    assert!(!p.has_prev());
    assert!(!p.has_next(0));
}

#[test]
fn requests_clamp_into_range() {
    let p = Pagination::new(10);
    assert_eq!(p.clamp_page(0, 25), 1);
    assert_eq!(p.clamp_page(1, 25), 1);
    assert_eq!(p.clamp_page(4, 25), 3);
}

#[test]
fn window_of_last_page_is_partial() {
    let mut p = Pagination::new(10);
    p.go_to(3, 25);
    assert_eq!(p.window(25), 20..25);
    assert!(p.has_prev());
    assert!(!p.has_next(25));
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let p = Pagination::new(0);
    assert_eq!(p.total_pages(3), 3);
    assert_eq!(p.window(3), 0..1);
}

#[test]
fn shrinking_list_keeps_window_in_bounds() {
    let mut p = Pagination::new(10);
    p.go_to(3, 25);
    // 再クランプ前でも範囲外アクセスしない
    assert_eq!(p.window(5), 5..5);
    assert_eq!(p.go_to(p.current_page(), 5), 1);
}

proptest! {
    /// 確定したページは常に 1..=total_pages に収まる
    #[test]
    fn prop_current_page_in_bounds(size in 1usize..50, count in 0usize..500, requested in 0usize..100) {
        let mut p = Pagination::new(size);
        let page = p.go_to(requested, count);
        prop_assert!(page >= 1);
        prop_assert!(page <= p.total_pages(count));
        let window = p.window(count);
        prop_assert!(window.end <= count);
        prop_assert!(window.len() <= size);
    }
}

use super::*;

#[test]
fn drag_widens_by_pointer_delta() {
    let session = ResizeSession::begin(0, 100, 120);
    assert_eq!(session.width_at(150), 170);
}

#[test]
fn drag_below_floor_clamps_to_min() {
    // 120 + (20 - 100) = 40 -> 60
    let session = ResizeSession::begin(0, 100, 120);
    assert_eq!(session.width_at(20), MIN_COLUMN_WIDTH);
}

#[test]
fn drag_far_left_never_underflows() {
    let session = ResizeSession::begin(2, 0, 60);
    assert_eq!(session.width_at(i32::MIN), MIN_COLUMN_WIDTH);
    assert_eq!(session.column(), 2);
}

#[test]
fn widths_start_at_default() {
    let widths = ColumnWidths::new(3);
    assert_eq!(widths.as_slice(), &[DEFAULT_COLUMN_WIDTH; 3]);
    assert_eq!(widths.as_slice().len(), 3);
}

#[test]
fn set_width_respects_floor_and_bounds() {
    let mut widths = ColumnWidths::new(2);
    assert_eq!(widths.set(0, 10), Some(MIN_COLUMN_WIDTH));
    assert_eq!(widths.set(1, 300), Some(300));
    assert_eq!(widths.set(5, 300), None);
    // 他の列には影響しない
    assert_eq!(widths.get(0), Some(MIN_COLUMN_WIDTH));
}

#[test]
fn click_guard_consumes_once() {
    let mut guard = ClickGuard::default();
    assert!(!guard.consume());
    guard.arm();
    assert!(guard.consume());
    assert!(!guard.consume());
}

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn fires_after_quiet_period() {
    let start = Instant::now();
    let mut d = Debouncer::new(ms(120));
    assert!(!d.schedule(start, "a"));

    assert_eq!(d.poll(start + ms(119)), None);
    assert_eq!(d.poll(start + ms(120)), Some("a"));
    assert!(!d.is_pending());
}

#[test]
fn later_keystroke_supersedes_pending() {
    let start = Instant::now();
    let mut d = Debouncer::new(ms(120));
    d.schedule(start, "a");
    assert!(d.schedule(start + ms(100), "ab"));

    // 最初の予約時刻では発火しない
    assert_eq!(d.poll(start + ms(120)), None);
    assert_eq!(d.poll(start + ms(220)), Some("ab"));
}

#[test]
fn fires_only_once() {
    let start = Instant::now();
    let mut d = Debouncer::new(ms(10));
    d.schedule(start, 1);
    assert_eq!(d.poll(start + ms(10)), Some(1));
    assert_eq!(d.poll(start + ms(50)), None);
}

#[test]
fn cancel_drops_pending() {
    let start = Instant::now();
    let mut d = Debouncer::new(ms(10));
    d.schedule(start, 1);
    assert_eq!(d.cancel(), Some(1));
    assert_eq!(d.poll(start + ms(100)), None);
    assert_eq!(d.deadline(), None);
}

#[test]
fn flush_returns_pending_immediately() {
    let start = Instant::now();
    let mut d = Debouncer::new(ms(120));
    d.schedule(start, "q");
    assert_eq!(d.flush(), Some("q"));
    assert!(!d.is_pending());
}

#[test]
fn deadline_tracks_latest_schedule() {
    let start = Instant::now();
    let mut d = Debouncer::<()>::default();
    d.schedule(start, ());
    d.schedule(start + ms(50), ());
    assert_eq!(d.deadline(), Some(start + ms(50) + DEFAULT_DEBOUNCE));
}

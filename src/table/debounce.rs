//! デバウンス
//!
//! 最後の入力から一定時間経過した時点で 1 回だけ発火する遅延タスク。
//! 時刻は呼び出し側が渡すため、タイマーを持たずにテストできる。

use std::time::{Duration, Instant};

/// フィルタ入力のデフォルト待機時間
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(120);

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Instant,
    payload: T,
}

/// 保留中のタスクを高々 1 つだけ持つデバウンサ
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// タスクを予約する
    ///
    /// 保留中のタスクがあれば破棄して置き換え、`true` を返す。
    pub fn schedule(&mut self, now: Instant, payload: T) -> bool {
        let superseded = self.pending.is_some();
        self.pending = Some(Pending {
            due: now + self.delay,
            payload,
        });
        superseded
    }

    /// 保留中のタスクを取り消す
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// 期限に達していればタスクを取り出す
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due => self.cancel(),
            _ => None,
        }
    }

    /// 期限を待たずにタスクを取り出す
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }

    /// 次の発火予定時刻
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

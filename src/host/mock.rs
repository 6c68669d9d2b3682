//! テスト用モックホスト

use super::*;
use std::sync::Mutex;

/// 受け取った要求を記録するだけのホスト
#[derive(Default)]
pub struct MockHost {
    requests: Mutex<Vec<SaveFileRequest>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された要求
    pub fn requests(&self) -> Vec<SaveFileRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Host for MockHost {
    fn post(&self, request: SaveFileRequest) {
        self.requests.lock().unwrap().push(request);
    }
}

impl Host for std::sync::Arc<MockHost> {
    fn post(&self, request: SaveFileRequest) {
        self.as_ref().post(request);
    }
}

//! ホスト連携
//!
//! プレビュー本体はファイルを書かず、保存要求をホストへ送るだけ
//! （fire-and-forget）。実際の書き込みはホスト側のワーカーが行う。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// ホストへの要求種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostAction {
    #[serde(rename = "downloadCSV")]
    DownloadCsv,
}

/// 保存要求メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFileRequest {
    pub action: HostAction,
    pub filename: String,
    pub content: String,
}

impl SaveFileRequest {
    pub fn download_csv(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            action: HostAction::DownloadCsv,
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// ホストへのメッセージチャネル
///
/// 送信結果は返さない。
pub trait Host: Send + Sync {
    fn post(&self, request: SaveFileRequest);
}

/// mpsc チャネル経由でホストワーカーへ送る実装
pub struct ChannelHost {
    tx: UnboundedSender<SaveFileRequest>,
}

impl ChannelHost {
    /// 送信側と、ワーカーに渡す受信側を作成
    pub fn channel() -> (Self, UnboundedReceiver<SaveFileRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Host for ChannelHost {
    fn post(&self, request: SaveFileRequest) {
        log::info!("save requested: {}", request.filename);
        if self.tx.send(request).is_err() {
            log::warn!("host channel closed; save request dropped");
        }
    }
}

/// ホスト側での保存結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { path: PathBuf, bytes: usize },
    Failed { filename: String, error: String },
}

/// ホストワーカー
///
/// 送信側がすべて drop されるまで要求を受け取り、`out_dir` に書き込む。
pub async fn run_save_worker(
    mut rx: UnboundedReceiver<SaveFileRequest>,
    out_dir: PathBuf,
) -> Vec<SaveOutcome> {
    let mut outcomes = Vec::new();
    while let Some(request) = rx.recv().await {
        let outcome = save(&out_dir, request).await;
        match &outcome {
            SaveOutcome::Written { path, bytes } => {
                log::info!("wrote {} bytes to {}", bytes, path.display());
            }
            SaveOutcome::Failed { filename, error } => {
                log::warn!("failed to save {}: {}", filename, error);
            }
        }
        outcomes.push(outcome);
    }
    outcomes
}

async fn save(out_dir: &Path, request: SaveFileRequest) -> SaveOutcome {
    // ディレクトリ成分は無視し、ファイル名だけを使う
    let Some(name) = Path::new(&request.filename).file_name() else {
        return SaveOutcome::Failed {
            filename: request.filename,
            error: "invalid file name".to_string(),
        };
    };
    let path = out_dir.join(name);

    if let Err(e) = tokio::fs::create_dir_all(out_dir).await {
        return SaveOutcome::Failed {
            filename: request.filename,
            error: e.to_string(),
        };
    }

    let bytes = request.content.len();
    match tokio::fs::write(&path, request.content.as_bytes()).await {
        Ok(()) => SaveOutcome::Written { path, bytes },
        Err(e) => SaveOutcome::Failed {
            filename: request.filename,
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;

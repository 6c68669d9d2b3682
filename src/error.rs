//! エラー型
//!
//! CLI 層で使用する統一エラー型。プレビュー本体（`table`）はエラーを返さず、
//! 欠損データは空コレクションとして扱う。

mod code;

pub use code::ErrorCode;

use thiserror::Error;

/// JTP統一エラー型
#[derive(Debug, Error)]
pub enum JtpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid table payload: {0}")]
    Payload(String),

    #[error("Unknown column: {0}. Use a 0-based index or a header label")]
    UnknownColumn(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, JtpError>;

impl JtpError {
    /// エラーコードを返す
    pub fn code(&self) -> ErrorCode {
        match self {
            JtpError::Io(_) => ErrorCode::Io001,
            JtpError::Json(_) => ErrorCode::Jsn001,
            JtpError::Toml(_) => ErrorCode::Cfg001,
            JtpError::Config(_) => ErrorCode::Cfg002,
            JtpError::Payload(_) => ErrorCode::Pay001,
            JtpError::UnknownColumn(_) => ErrorCode::Col001,
            JtpError::Terminal(_) => ErrorCode::Tui001,
        }
    }

    /// `[CODE] message` 形式の表示用文字列
    pub fn display_with_code(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

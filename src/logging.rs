//! ロギング
//!
//! TUI が端末を占有するため、ログはファイルにのみ出力する。
//! ログファイル未指定なら何も初期化しない（`log` のレコードは捨てられる）。

use crate::env::EnvVar;
use crate::error::{JtpError, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// ログレベルを指定する環境変数
pub const LOG_LEVEL_ENV: &str = "JTP_LOG";

/// ログレベル文字列を解釈（不明ならデバッグ）
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Debug,
    }
}

/// ファイルロガーを初期化
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let level = parse_level(EnvVar::get(LOG_LEVEL_ENV).as_deref());
    WriteLogger::init(level, Config::default(), file)
        .map_err(|e| JtpError::Config(format!("failed to initialize logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_known_values() {
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
    }

    #[test]
    fn parse_level_defaults_to_debug() {
        assert_eq!(parse_level(None), LevelFilter::Debug);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Debug);
    }

    #[test]
    fn init_without_file_is_noop() {
        assert!(init(None).is_ok());
    }
}

//! 設定ファイル
//!
//! `$JTP_CONFIG` または `~/.jtp/config.toml` から読み込む。
//! ファイルがなければデフォルト値を使う。

use crate::env::{EnvVar, CONFIG_ENV};
use crate::error::{JtpError, Result};
use crate::table::debounce::DEFAULT_DEBOUNCE;
use crate::table::page::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// プレビュー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 1 ページの行数
    pub page_size: usize,
    /// ページングするか（false なら一致行をすべて表示）
    pub paginate: bool,
    /// フィルタ入力のデバウンス時間（ミリ秒）
    pub debounce_ms: u64,
    /// CSV の保存先（未指定ならカレントディレクトリ）
    pub export_dir: Option<PathBuf>,
    /// ログファイル（未指定ならログを出さない）
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            paginate: true,
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            export_dir: None,
            log_file: None,
        }
    }
}

impl Config {
    /// デフォルトパスから読み込む
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 設定ファイルのパス（環境変数 > ホームディレクトリ）
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = EnvVar::get(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        EnvVar::home().map(|home| PathBuf::from(home).join(".jtp").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(JtpError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// 保存先ディレクトリ（未指定ならカレントディレクトリ）
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

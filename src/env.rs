/// 設定ファイルパスを上書きする環境変数
pub const CONFIG_ENV: &str = "JTP_CONFIG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// ホームディレクトリ（`HOME`、Windows では `USERPROFILE`）
    pub fn home() -> Option<String> {
        Self::get("HOME").or_else(|| Self::get("USERPROFILE"))
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;

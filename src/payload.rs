//! 初期ペイロード
//!
//! JSON 値からヘッダ列と文字列化済みセルの行列を作る。
//! プレビュー本体への唯一の入力。

use crate::error::{JtpError, Result};
use serde_json::{Number, Value};
use std::io::Read;

/// 配列・オブジェクト以外の行に使う列名
pub const SCALAR_HEADER: &str = "value";

/// ヘッダと行優先のセル文字列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePayload {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TablePayload {
    /// JSON 値から構築
    ///
    /// - トップレベルが配列でなければ 1 要素の配列として扱う
    /// - ヘッダは出現順の和集合（配列行はインデックス、オブジェクト行はキー、
    ///   それ以外は `value`）
    pub fn from_value(value: Value) -> Self {
        let items = match value {
            Value::Array(items) => items,
            other => vec![other],
        };

        let headers = collect_headers(&items);
        let rows = items
            .iter()
            .map(|item| headers.iter().map(|h| cell_text(lookup(item, h))).collect())
            .collect();

        Self { headers, rows }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    /// ファイルまたは標準入力（`-`）から読み込む
    pub fn read(source: &str) -> Result<Self> {
        let text = if source == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(source)?
        };

        if text.trim().is_empty() {
            return Err(JtpError::Payload(format!("{} is empty", display_source(source))));
        }
        Self::from_json_str(&text)
    }
}

fn display_source(source: &str) -> &str {
    if source == "-" {
        "stdin"
    } else {
        source
    }
}

fn collect_headers(items: &[Value]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    let mut push = |key: String| {
        if !headers.contains(&key) {
            headers.push(key);
        }
    };

    for item in items {
        match item {
            Value::Array(cells) => (0..cells.len()).for_each(|i| push(i.to_string())),
            Value::Object(map) => map.keys().for_each(|k| push(k.clone())),
            _ => push(SCALAR_HEADER.to_string()),
        }
    }
    headers
}

fn lookup<'a>(item: &'a Value, header: &str) -> Option<&'a Value> {
    match item {
        Value::Array(cells) => header.parse::<usize>().ok().and_then(|i| cells.get(i)),
        Value::Object(map) => map.get(header),
        other => Some(other),
    }
}

/// セル値の文字列化（null/欠損は空、入れ子はコンパクト JSON）
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(nested) => serde_json::to_string(nested).unwrap_or_default(),
    }
}

/// 数値の文字列化
///
/// 整数はそのまま、浮動小数は `1.0` を `1` とする最短表記。
/// 絶対値が `1e-6` 未満または `1e21` 以上なら `1e+21` 形式の指数表記。
fn number_text(n: &Number) -> String {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }

    let abs = f.abs();
    if (1e-6..1e21).contains(&abs) {
        return f.to_string();
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;

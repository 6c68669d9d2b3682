use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{JtpError, Result};
use crate::logging;
use crate::payload::TablePayload;
use crate::table::{Pagination, SortDirection, TableModel, TableView};

pub mod export;
pub mod preview;
pub mod show;

pub async fn dispatch(cli: Cli) -> std::result::Result<(), String> {
    let config = Config::load().map_err(fail)?;
    logging::init(config.log_file.as_deref()).map_err(fail)?;

    match cli.command {
        Command::Preview(args) => preview::run(args, &config).await,
        Command::Export(args) => export::run(args, &config).await,
        Command::Show(args) => show::run(args, &config),
    }
}

/// エラーをコードと原因付きのメッセージに変換
pub fn fail(err: JtpError) -> String {
    format!("{}\n  cause: {}", err.display_with_code(), err.code().cause())
}

/// テーブルの入力と初期表示の共通オプション
#[derive(Debug, clap::Args)]
pub struct ViewArgs {
    /// JSON file to preview ("-" reads stdin)
    pub source: String,

    /// Initial filter query (case-insensitive substring)
    #[arg(long, short)]
    pub query: Option<String>,

    /// Sort by column (0-based index or header label)
    #[arg(long, short)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

/// 入力を読み込み、ソート・フィルタを適用したビューを作る
pub fn build_view(args: &ViewArgs, pagination: Option<Pagination>) -> Result<TableView> {
    let payload = TablePayload::read(&args.source)?;
    let mut view = TableView::new(TableModel::from_payload(payload), pagination);

    if let Some(key) = &args.sort {
        let column = view
            .model()
            .column_index(key)
            .ok_or_else(|| JtpError::UnknownColumn(key.clone()))?;
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view.sort_by(column, direction);
    }

    if let Some(query) = &args.query {
        view.apply_filter(query);
    }

    Ok(view)
}

/// ページサイズを決定（CLI 指定 > 設定ファイル）
pub fn resolve_page_size(flag: Option<usize>, config: &Config) -> Result<usize> {
    match flag.unwrap_or(config.page_size) {
        0 => Err(JtpError::Config("page size must be at least 1".to_string())),
        size => Ok(size),
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;

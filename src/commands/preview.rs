//! jtp preview コマンド
//!
//! TUI でテーブルを表示する。エクスポートはホストワーカーが
//! バックグラウンドで書き込み、終了時に結果を表示する。

use super::{build_view, fail, resolve_page_size, ViewArgs};
use crate::config::Config;
use crate::error::JtpError;
use crate::host::{run_save_worker, ChannelHost};
use crate::output::print_outcomes;
use crate::table::Pagination;
use crate::tui::{self, Model};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show every matching row instead of paging
    #[arg(long)]
    pub no_paginate: bool,

    /// Directory to write exported CSV files into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    let pagination = if config.paginate && !args.no_paginate {
        let size = resolve_page_size(args.page_size, config).map_err(fail)?;
        Some(Pagination::new(size))
    } else {
        None
    };

    let view = build_view(&args.view, pagination).map_err(fail)?;
    let out_dir = args.out_dir.unwrap_or_else(|| config.export_dir());

    let (host, rx) = ChannelHost::channel();
    let worker = tokio::spawn(run_save_worker(rx, out_dir));

    let mut model = Model::new(view, Box::new(host), config.debounce());
    if let Some(query) = &args.view.query {
        model.search = query.clone();
    }

    // TUI はブロッキングで動かす。終了時に Model（送信側）が drop される
    let ui = tokio::task::spawn_blocking(move || tui::run(&mut model));
    ui.await
        .map_err(|e| e.to_string())?
        .map_err(|e| fail(JtpError::Terminal(e.to_string())))?;

    let outcomes = worker.await.map_err(|e| e.to_string())?;
    if outcomes.is_empty() {
        return Ok(());
    }
    match print_outcomes(&outcomes) {
        0 => Ok(()),
        failures => Err(format!("{} export(s) failed", failures)),
    }
}

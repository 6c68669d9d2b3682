//! jtp export コマンド
//!
//! 対話なしでビューを構築し、表示中または全行の CSV をホストに保存させる。

use super::{build_view, fail, ViewArgs};
use crate::config::Config;
use crate::host::{run_save_worker, ChannelHost, Host};
use crate::output::print_outcomes;
use crate::table::ExportScope;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Export every row instead of only rows matching the query
    #[arg(long)]
    pub all: bool,

    /// Directory to write the CSV file into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub async fn run(args: Args, config: &Config) -> Result<(), String> {
    let view = build_view(&args.view, None).map_err(fail)?;
    let out_dir = args.out_dir.unwrap_or_else(|| config.export_dir());

    let scope = if args.all {
        ExportScope::All
    } else {
        ExportScope::Visible
    };

    let (host, rx) = ChannelHost::channel();
    let worker = tokio::spawn(run_save_worker(rx, out_dir));

    host.post(view.export(scope, Utc::now()));
    drop(host);

    let outcomes = worker.await.map_err(|e| e.to_string())?;
    match print_outcomes(&outcomes) {
        0 => Ok(()),
        failures => Err(format!("{} export(s) failed", failures)),
    }
}

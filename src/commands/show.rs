//! jtp show コマンド
//!
//! ビューの 1 ページ分を表または JSON として標準出力に表示する。

use super::{build_view, fail, resolve_page_size, ViewArgs};
use crate::config::Config;
use crate::table::{Pagination, TableView};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Page to show (clamped into range)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show every matching row instead of one page
    #[arg(long)]
    pub all: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, config: &Config) -> Result<(), String> {
    let pagination = if args.all {
        None
    } else {
        let size = resolve_page_size(args.page_size, config).map_err(fail)?;
        Some(Pagination::new(size))
    };

    let mut view = build_view(&args.view, pagination).map_err(fail)?;
    view.render_page(args.page);

    if args.json {
        print_json(&view)
    } else {
        print_table(&view);
        Ok(())
    }
}

/// 表示行をヘッダ名をキーにしたオブジェクトの配列として出力
fn rows_as_json(view: &TableView) -> Value {
    let headers = view.model().headers();
    let rows = view
        .displayed_rows()
        .into_iter()
        .map(|row| {
            let object: Map<String, Value> = headers
                .iter()
                .zip(row.cells())
                .map(|(h, c)| (h.clone(), Value::String(c.clone())))
                .collect();
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

fn print_json(view: &TableView) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&rows_as_json(view))
        .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn print_table(view: &TableView) {
    let column_count = view.model().column_count();
    if column_count == 0 {
        println!("No columns to display");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header((0..column_count).map(|c| view.header_display(c)));
    for row in view.displayed_rows() {
        table.add_row(row.cells());
    }

    println!("{table}");
    println!("{}", view.summary().dimmed());
    if !view.query().is_empty() {
        println!("{}", format!("Filter: \"{}\"", view.query()).dimmed());
    }
    if view.pagination().is_some() {
        println!(
            "{}",
            format!("Page {} / {}", view.current_page(), view.total_pages()).dimmed()
        );
    }
}

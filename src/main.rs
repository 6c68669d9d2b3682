mod cli;
mod commands;
mod config;
mod env;
mod error;
mod host;
mod logging;
mod output;
mod payload;
mod table;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

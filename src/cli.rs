use clap::{Parser, Subcommand};

use crate::commands::{export, preview, show};

#[derive(Debug, Parser)]
#[command(name = "jtp", version)]
#[command(about = "JSON Table Preview CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive table preview
    Preview(preview::Args),

    /// Export the table as CSV
    Export(export::Args),

    /// Print one page of the table
    Show(show::Args),
}

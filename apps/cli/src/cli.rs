use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quotesync")]
#[command(about = "Quote collection with remote reconciliation")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a quote to the local collection
    Add { text: String, category: String },
    /// List quotes, optionally restricted to one category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one random quote; remembers the last category filter
    Random {
        #[arg(long)]
        category: Option<String>,
    },
    /// List the distinct categories
    Categories,
    /// Export the collection as JSON (stdout unless --output is given)
    Export {
        #[arg(long)]
        output: Option<String>,
    },
    /// Import quotes from a JSON file
    Import { path: String },
    /// Run one reconciliation cycle against the remote endpoint
    Sync,
    /// Sync now, then keep reconciling on the configured interval
    Watch,
}

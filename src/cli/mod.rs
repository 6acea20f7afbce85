pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "photofeed")]
#[command(about = "Search and browse a public photo feed", long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the feed for a query once and print it
    Search {
        /// Search text; the configured default query is used when omitted
        #[arg(default_value = "")]
        query: String,

        /// Print the full detail view for every item
        #[arg(short, long)]
        details: bool,

        /// Print items as JSON
        #[arg(long, conflicts_with = "details")]
        json: bool,

        /// Open the link of the Nth item (1-based) in a browser
        #[arg(short, long)]
        open: Option<usize>,
    },
    /// Interactive search: every line read from stdin replaces the search text
    Browse,
    /// Show the config file location and effective settings
    Config,
}

//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "swap-quote", version, about = "Token catalog and swap estimates from a price feed")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "SWAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the price feed URL
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog, highest price first
    Catalog {
        /// Show at most this many tokens
        #[arg(long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Estimate a swap between two tokens
    Quote {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Amount as typed into the form (digits and one optional '.')
        #[arg(long)]
        amount: String,

        /// Treat the amount as the desired output instead of the input
        #[arg(long)]
        reverse: bool,
    },

    /// Search tokens by symbol or name
    Search {
        query: String,

        /// Hide this symbol from the results
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Keep rebuilding the catalog until interrupted
    Watch {
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

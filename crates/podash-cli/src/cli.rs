//! CLI definition using clap

use clap::{Parser, Subcommand};
use podash_types::OutputFormat;

#[derive(Parser)]
#[command(name = "podash")]
#[command(author = "mudit")]
#[command(version)]
#[command(about = "Factory production/shipment dashboard from a spreadsheet export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sheet source override: export URL or local CSV file
    #[arg(long, short = 's', global = true)]
    pub source: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the sheet and print the full dashboard
    Show,

    /// Fetch the sheet and print the summary totals only
    Summary,

    /// Generate AI insights over the current sheet data
    Insights {
        /// Model name override
        #[arg(long)]
        model: Option<String>,
    },

    /// Refresh the dashboard on an interval, keeping the last good model
    /// when a cycle fails
    Watch {
        /// Seconds between refresh cycles
        #[arg(long, short = 'i', default_value_t = 60)]
        interval: u64,

        /// Stop after this many cycles (0 = run until interrupted)
        #[arg(long, default_value_t = 0)]
        cycles: u64,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the sheet export URL
        #[arg(long)]
        set_sheet_url: Option<String>,

        /// Set the insight model
        #[arg(long)]
        set_model: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the HTTP timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

//! CLI definition using clap

use bidcalc_types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bidcalc")]
#[command(version)]
#[command(about = "Bid pricing for traffic-control estimates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print job-level totals for an estimate
    Totals {
        /// Path to estimate JSON file
        file: PathBuf,

        /// Catalog CSV overriding prices (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print every category result alongside the totals
    Breakdown {
        /// Path to estimate JSON file
        file: PathBuf,

        /// Catalog CSV overriding prices (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the static equipment catalog
    Catalog {
        /// Merge overrides from a CSV file into the built-in catalog
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the SHA-256 fingerprint of a normalized estimate
    Fingerprint {
        /// Path to estimate JSON file
        file: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long)]
        init: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default catalog CSV
        #[arg(long)]
        set_catalog_csv: Option<PathBuf>,
    },
}

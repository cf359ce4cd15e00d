//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Orgstat: organisation CSV cleaning and aggregation
#[derive(Parser)]
#[command(name = "orgstat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a data file and compute the country and category views
    Analyze {
        /// Path to the organisation CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the full result as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },

    /// Clean a data file and write the validated rows back out as CSV
    Clean {
        /// Path to the organisation CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the cleaned CSV (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

//! Orgstat CLI - organisation CSV cleaning and aggregation.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file, output, json } => {
            commands::analyze::run(file, output, json, cli.verbose)
        }

        Commands::Clean { file, output } => commands::clean::run(file, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Clean command - validate a file and write the cleaned rows as CSV.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use orgstat::{clean_with_report, write_cleaned};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(&file)?;
    let (records, report) = clean_with_report(&contents)?;

    match &output {
        Some(path) => {
            let out = File::create(path)?;
            write_cleaned(&records, out)?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_cleaned(&records, &mut lock)?;
            lock.flush()?;
        }
    }

    if verbose || output.is_some() {
        eprintln!(
            "{} {} accepted, {} rejected, {} duplicate rows dropped",
            "Cleaned:".green().bold(),
            report.accepted,
            report.rejected,
            report.duplicates_dropped
        );
    }

    Ok(())
}

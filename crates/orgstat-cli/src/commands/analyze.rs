//! Analyze command - run the full pipeline and report both derived views.

use std::path::PathBuf;

use colored::Colorize;
use orgstat::{AnalysisResult, Analyzer};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Analyzer::new().process(&file)?;

    if let Some(path) = &output {
        std::fs::write(path, serde_json::to_string_pretty(&result)?)?;
        if verbose {
            eprintln!("Wrote JSON result to {}", path.display());
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, verbose);
    }

    Ok(())
}

fn print_report(result: &AnalysisResult, verbose: bool) {
    println!(
        "{} {}",
        "Analysis of".cyan().bold(),
        result.source.file.white()
    );
    if verbose {
        println!("  {}", result.source.hash.dimmed());
    }
    println!();

    let cleaning = &result.summary.cleaning;
    println!("{}", "Cleaning:".yellow().bold());
    println!("  Rows read:  {}", cleaning.total_rows.to_string().white());
    println!("  Accepted:   {}", cleaning.accepted.to_string().green());
    println!("  Rejected:   {}", cleaning.rejected.to_string().red());
    println!(
        "  Duplicates: {}",
        cleaning.duplicates_dropped.to_string().red()
    );
    println!();

    println!(
        "{} ({})",
        "Countries".yellow().bold(),
        result.summary.country_groups
    );
    for (country, stats) in &result.countries {
        let label = if country.is_empty() { "(none)" } else { country };
        println!(
            "  {:<24} t = {:>10.4}  distance = {:>14.4}",
            label.white(),
            stats.t_test_score,
            stats.distance
        );
    }
    println!();

    println!(
        "{} ({})",
        "Categories".yellow().bold(),
        result.summary.category_groups
    );
    for (category, group) in &result.categories {
        let label = if category.is_empty() { "(none)" } else { category };
        println!("  {}", label.white().bold());
        for (id, entry) in group {
            println!(
                "    #{:<4} {:<16} employees = {:<8} change = {:.4}%",
                entry.rank, id, entry.employee_count, entry.profit_percent_change
            );
        }
    }
}

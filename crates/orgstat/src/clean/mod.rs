//! Cleaning & validation: raw CSV text to validated organisation records.
//!
//! Processing order is strict: resolve the header, reject rows with a
//! malformed id or employee count, scan the whole file for duplicate ids,
//! then drop every row whose id appeared more than once. Malformed rows are
//! dropped silently; only structural file failures surface as errors.

mod validators;

pub use validators::{is_integer_literal, is_valid_identifier};

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::input::{Parser, RawTable};
use crate::record::{fields, ColumnBinding, OrganisationRecord};

/// Row accounting for one cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Data rows seen (blank lines excluded).
    pub total_rows: usize,
    /// Rows surviving validation and deduplication.
    pub accepted: usize,
    /// Rows rejected for a malformed id or employee count.
    pub rejected: usize,
    /// Rows dropped because their id appeared more than once.
    pub duplicates_dropped: usize,
}

/// Clean raw CSV text into validated, deduplicated records.
///
/// Every record in the output has a unique, non-empty, alphanumeric id and a
/// valid non-negative integer employee count; all other fields may be absent.
/// An empty file yields an empty vec, which is a valid outcome.
pub fn clean(contents: &str) -> Result<Vec<OrganisationRecord>> {
    clean_with_report(contents).map(|(records, _)| records)
}

/// Clean raw CSV text, also returning row accounting.
pub fn clean_with_report(contents: &str) -> Result<(Vec<OrganisationRecord>, CleanReport)> {
    let table = Parser::new().parse_str(contents)?;
    Ok(clean_table(&table))
}

/// Clean an already-parsed table.
pub fn clean_table(table: &RawTable) -> (Vec<OrganisationRecord>, CleanReport) {
    let binding = ColumnBinding::resolve(&table.headers);

    let mut report = CleanReport::default();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: HashSet<&str> = HashSet::new();
    let mut staged: Vec<OrganisationRecord> = Vec::new();

    for row in &table.rows {
        report.total_rows += 1;

        let id = cell(row, binding.id);
        let employees = cell(row, binding.employee_count);

        if !is_valid_identifier(id) || !is_integer_literal(employees) {
            report.rejected += 1;
            continue;
        }
        let Ok(employee_count) = employees.parse::<u64>() else {
            report.rejected += 1;
            continue;
        };

        // Ids are non-empty past validation, so an empty id can never enter
        // the duplicate set.
        if !seen.insert(id) {
            duplicates.insert(id);
        }

        staged.push(OrganisationRecord {
            id: id.to_string(),
            name: text_field(row, binding.name),
            website: text_field(row, binding.website),
            country: text_field(row, binding.country),
            founded: int_field(row, binding.founded),
            category: text_field(row, binding.category),
            employee_count,
            median_salary: float_field(row, binding.median_salary),
            profit_2020: float_field(row, binding.profit_2020),
            profit_2021: float_field(row, binding.profit_2021),
        });
    }

    let records: Vec<OrganisationRecord> = staged
        .into_iter()
        .filter(|r| !duplicates.contains(r.id.as_str()))
        .collect();

    report.accepted = records.len();
    report.duplicates_dropped = report.total_rows - report.rejected - report.accepted;

    (records, report)
}

/// Write cleaned records back out as canonical-order CSV.
pub fn write_cleaned<W: Write>(records: &[OrganisationRecord], writer: W) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    out.write_record(fields::ALL)?;
    for record in records {
        out.write_record(record.csv_fields())?;
    }
    out.flush().map_err(|e| csv::Error::from(e))?;

    Ok(())
}

fn cell<'a>(row: &'a [String], position: Option<usize>) -> &'a str {
    position
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Empty cells become `None`, never `""`.
fn text_field(row: &[String], position: Option<usize>) -> Option<String> {
    let value = cell(row, position);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Unvalidated numeric field: a non-numeric value is treated as absent
/// rather than rejecting the row.
fn float_field(row: &[String], position: Option<usize>) -> Option<f64> {
    cell(row, position).parse::<f64>().ok().filter(|v| v.is_finite())
}

fn int_field(row: &[String], position: Option<usize>) -> Option<i64> {
    cell(row, position).parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "organisation id,name,website,country,founded,category,number of employees,median salary,profits in 2020(million),profits in 2021(million)";

    fn row(id: &str, country: &str, category: &str, employees: &str) -> String {
        format!("{id},org,http://example.org,{country},2001,{category},{employees},50000,120,90")
    }

    #[test]
    fn test_clean_accepts_valid_rows() {
        let input = format!("{HEADER}\n{}\n{}\n", row("a1", "norway", "retail", "10"), row("b2", "chile", "mining", "20"));
        let (records, report) = clean_with_report(&input).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a1");
        assert_eq!(records[0].employee_count, 10);
        assert_eq!(records[1].profit_2021, Some(90.0));
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn test_clean_rejects_bad_id_and_fractional_employees() {
        let input = format!(
            "{HEADER}\n{}\n{}\n{}\n",
            row("a-1", "norway", "retail", "10"),
            row("b2", "chile", "mining", "20.5"),
            row("c3", "peru", "mining", "30"),
        );
        let (records, report) = clean_with_report(&input).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "c3");
        assert_eq!(report.rejected, 2);
    }

    #[test]
    fn test_clean_drops_all_copies_of_duplicate_id() {
        let input = format!(
            "{HEADER}\n{}\n{}\n{}\n",
            row("a1", "norway", "retail", "10"),
            row("a1", "chile", "mining", "20"),
            row("b2", "peru", "mining", "30"),
        );
        let (records, report) = clean_with_report(&input).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "b2");
        assert_eq!(report.duplicates_dropped, 2);
    }

    #[test]
    fn test_clean_empty_cells_become_none() {
        let input = format!("{HEADER}\na1,,,,,retail,10,,120,90\n");
        let records = clean(&input).unwrap();

        assert_eq!(records[0].name, None);
        assert_eq!(records[0].country, None);
        assert_eq!(records[0].median_salary, None);
        assert_eq!(records[0].category.as_deref(), Some("retail"));
    }

    #[test]
    fn test_clean_non_numeric_salary_is_absent_not_rejected() {
        // Salary and profits are accepted unchecked; a non-numeric value is
        // treated as missing rather than dropping the row.
        let input = format!("{HEADER}\na1,org,w,norway,2001,retail,10,lots,abc,90\n");
        let records = clean(&input).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].median_salary, None);
        assert_eq!(records[0].profit_2020, None);
        assert_eq!(records[0].profit_2021, Some(90.0));
    }

    #[test]
    fn test_clean_empty_file_is_valid() {
        assert!(clean("").unwrap().is_empty());
        assert!(clean(&format!("{HEADER}\n")).unwrap().is_empty());
    }

    #[test]
    fn test_clean_missing_column_makes_field_absent() {
        let input = "organisation id,number of employees,country\na1,10,norway\n";
        let records = clean(input).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, None);
        assert_eq!(records[0].profit_2020, None);
    }

    #[test]
    fn test_clean_missing_id_column_rejects_everything() {
        let input = "name,number of employees\norg,10\n";
        let (records, report) = clean_with_report(input).unwrap();

        assert!(records.is_empty());
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn test_clean_is_idempotent_through_write_cleaned() {
        let input = format!(
            "{HEADER}\n{}\n{}\n",
            row("a1", "norway", "retail", "10"),
            row("b2", "chile", "mining", "20"),
        );
        let records = clean(&input).unwrap();

        let mut buffer = Vec::new();
        write_cleaned(&records, &mut buffer).unwrap();
        let cleaned_again = clean(std::str::from_utf8(&buffer).unwrap()).unwrap();

        assert_eq!(records, cleaned_again);
    }
}

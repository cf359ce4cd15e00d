//! Per-category organisation ranking by size and profit-change magnitude.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::OrganisationRecord;
use crate::stats::round4_or_zero;

/// Ranking entry for one organisation within its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRank {
    pub employee_count: u64,
    /// `|profit_2020 − profit_2021| / profit_2020 × 100`, rounded to 4
    /// decimal places; 0 when profit_2020 is 0 or either figure is absent.
    pub profit_percent_change: f64,
    /// Competition rank within the category (ties share a rank, the next
    /// distinct entry resumes at previous_rank + tie_count).
    pub rank: u32,
}

/// Group records by category and rank each group.
///
/// Categories appear in first-seen record order; within a category,
/// organisations appear in rank order. Records with a missing category form
/// their own group under the empty-string key.
pub fn category_rankings(
    records: &[OrganisationRecord],
) -> IndexMap<String, IndexMap<String, CategoryRank>> {
    let mut groups: IndexMap<String, Vec<&OrganisationRecord>> = IndexMap::new();
    for record in records {
        let key = record.category.clone().unwrap_or_default();
        groups.entry(key).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(category, members)| (category, rank_group(&members)))
        .collect()
}

/// Profit-change magnitude as a percentage of the 2020 figure.
///
/// Undefined changes (absent figures, or a zero base) resolve to 0 under the
/// shared edge policy.
pub fn profit_percent_change(profit_2020: Option<f64>, profit_2021: Option<f64>) -> f64 {
    match (profit_2020, profit_2021) {
        (Some(p20), Some(p21)) => round4_or_zero((p20 - p21).abs() / p20 * 100.0),
        _ => 0.0,
    }
}

fn rank_group(members: &[&OrganisationRecord]) -> IndexMap<String, CategoryRank> {
    let mut entries: Vec<(String, u64, f64)> = members
        .iter()
        .map(|r| {
            (
                r.id.clone(),
                r.employee_count,
                profit_percent_change(r.profit_2020, r.profit_2021),
            )
        })
        .collect();

    // Employee count descending, then percent change descending.
    entries.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut ranked = IndexMap::with_capacity(entries.len());
    let mut rank = 0u32;
    let mut previous: Option<(u64, f64)> = None;

    for (position, (id, employees, change)) in entries.into_iter().enumerate() {
        if previous != Some((employees, change)) {
            rank = position as u32 + 1;
            previous = Some((employees, change));
        }

        ranked.insert(
            id,
            CategoryRank {
                employee_count: employees,
                profit_percent_change: change,
                rank,
            },
        );
    }

    ranked
}

//! Per-country profit comparison and employee/salary distance.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::OrganisationRecord;
use crate::stats::{minkowski_distance, round4_or_zero, t_test_ind};

/// Derived statistics for one country group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountryStats {
    /// Independent two-sample t-statistic over profit_2020 vs profit_2021,
    /// 0 when undefined.
    pub t_test_score: f64,
    /// Order-3 Minkowski distance between the employee-count and
    /// median-salary vectors, 0 when undefined.
    pub distance: f64,
}

/// Group records by country and derive [`CountryStats`] per group.
///
/// Groups appear in first-seen record order. Records with a missing country
/// form their own group under the empty-string key.
pub fn country_statistics(records: &[OrganisationRecord]) -> IndexMap<String, CountryStats> {
    let mut groups: IndexMap<String, Vec<&OrganisationRecord>> = IndexMap::new();
    for record in records {
        let key = record.country.clone().unwrap_or_default();
        groups.entry(key).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(country, members)| (country, group_statistics(&members)))
        .collect()
}

fn group_statistics(members: &[&OrganisationRecord]) -> CountryStats {
    // Profit lists stay positionally aligned: only records carrying both
    // yearly figures contribute.
    let mut profit_2020 = Vec::with_capacity(members.len());
    let mut profit_2021 = Vec::with_capacity(members.len());
    for record in members {
        if let (Some(p20), Some(p21)) = (record.profit_2020, record.profit_2021) {
            profit_2020.push(p20);
            profit_2021.push(p21);
        }
    }

    // Employee counts are always present; salary may be absent, in which
    // case the record is excluded from both distance vectors.
    let mut employees = Vec::with_capacity(members.len());
    let mut salaries = Vec::with_capacity(members.len());
    for record in members {
        if let Some(salary) = record.median_salary {
            employees.push(record.employee_count as f64);
            salaries.push(salary);
        }
    }

    CountryStats {
        t_test_score: round4_or_zero(t_test_ind(&profit_2020, &profit_2021)),
        distance: round4_or_zero(minkowski_distance(&employees, &salaries, 3)),
    }
}

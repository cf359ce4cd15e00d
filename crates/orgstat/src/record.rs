//! Record model and header binding for organisation datasets.

use serde::Serialize;

/// Canonical header names, matched case-insensitively and in any column order.
pub mod fields {
    pub const ORGANISATION_ID: &str = "organisation id";
    pub const NAME: &str = "name";
    pub const WEBSITE: &str = "website";
    pub const COUNTRY: &str = "country";
    pub const FOUNDED: &str = "founded";
    pub const CATEGORY: &str = "category";
    pub const NUMBER_OF_EMPLOYEES: &str = "number of employees";
    pub const MEDIAN_SALARY: &str = "median salary";
    pub const PROFITS_2020: &str = "profits in 2020(million)";
    pub const PROFITS_2021: &str = "profits in 2021(million)";

    /// The ten expected columns, in canonical output order.
    pub const ALL: [&str; 10] = [
        ORGANISATION_ID,
        NAME,
        WEBSITE,
        COUNTRY,
        FOUNDED,
        CATEGORY,
        NUMBER_OF_EMPLOYEES,
        MEDIAN_SALARY,
        PROFITS_2020,
        PROFITS_2021,
    ];
}

/// One cleaned row of input.
///
/// `id` and `employee_count` are validated during cleaning; every other field
/// is optional, with empty input cells represented as `None` rather than `""`.
/// Numeric fields that fail to parse are also represented as `None` — absent
/// values are excluded from aggregation, never treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganisationRecord {
    /// Natural key, non-empty and alphanumeric after cleaning.
    pub id: String,
    pub name: Option<String>,
    pub website: Option<String>,
    /// Grouping key for the country aggregation.
    pub country: Option<String>,
    pub founded: Option<i64>,
    /// Grouping key for the category aggregation.
    pub category: Option<String>,
    /// Required non-negative integer, validated as a pure integer literal.
    pub employee_count: u64,
    pub median_salary: Option<f64>,
    /// Denominated in millions.
    pub profit_2020: Option<f64>,
    /// Denominated in millions.
    pub profit_2021: Option<f64>,
}

impl OrganisationRecord {
    /// Serialise back to the ten canonical columns, absent fields as empty.
    pub fn csv_fields(&self) -> [String; 10] {
        fn text(v: &Option<String>) -> String {
            v.clone().unwrap_or_default()
        }
        fn num(v: Option<f64>) -> String {
            v.map(|n| n.to_string()).unwrap_or_default()
        }

        [
            self.id.clone(),
            text(&self.name),
            text(&self.website),
            text(&self.country),
            self.founded.map(|y| y.to_string()).unwrap_or_default(),
            text(&self.category),
            self.employee_count.to_string(),
            num(self.median_salary),
            num(self.profit_2020),
            num(self.profit_2021),
        ]
    }
}

/// Resolved column positions for the ten expected fields.
///
/// A field whose header is missing resolves to `None`, making that field
/// absent for every row of the file.
#[derive(Debug, Clone, Default)]
pub struct ColumnBinding {
    pub id: Option<usize>,
    pub name: Option<usize>,
    pub website: Option<usize>,
    pub country: Option<usize>,
    pub founded: Option<usize>,
    pub category: Option<usize>,
    pub employee_count: Option<usize>,
    pub median_salary: Option<usize>,
    pub profit_2020: Option<usize>,
    pub profit_2021: Option<usize>,
}

impl ColumnBinding {
    /// Resolve column positions from a header row.
    ///
    /// Headers are matched lower-cased and trimmed, independent of order.
    pub fn resolve(headers: &[String]) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Self {
            id: position(fields::ORGANISATION_ID),
            name: position(fields::NAME),
            website: position(fields::WEBSITE),
            country: position(fields::COUNTRY),
            founded: position(fields::FOUNDED),
            category: position(fields::CATEGORY),
            employee_count: position(fields::NUMBER_OF_EMPLOYEES),
            median_salary: position(fields::MEDIAN_SALARY),
            profit_2020: position(fields::PROFITS_2020),
            profit_2021: position(fields::PROFITS_2021),
        }
    }
}

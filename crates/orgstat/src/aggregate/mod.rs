//! Aggregation engine: validated records to the two derived views.
//!
//! Both passes are pure one-shot folds over the cleaned record set, grouped
//! with `IndexMap` so results keep first-seen input order.

mod category;
mod country;

pub use category::{category_rankings, profit_percent_change, CategoryRank};
pub use country::{country_statistics, CountryStats};

use indexmap::IndexMap;

use crate::record::OrganisationRecord;

/// Country name → derived statistics.
pub type CountryMap = IndexMap<String, CountryStats>;

/// Category name → organisation id → ranking entry.
pub type CategoryMap = IndexMap<String, IndexMap<String, CategoryRank>>;

/// Derive both aggregate views from a cleaned record set.
///
/// An empty record set yields two empty maps, which is a valid outcome.
pub fn aggregate(records: &[OrganisationRecord]) -> (CountryMap, CategoryMap) {
    (country_statistics(records), category_rankings(records))
}

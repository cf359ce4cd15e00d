//! Orgstat: cleaning and statistical aggregation for organisation CSV datasets.
//!
//! Orgstat ingests a CSV file of organisation records, cleans and validates
//! it, and derives two aggregate views: a per-country comparison of two years
//! of profit figures (t-test score plus an order-3 Minkowski distance between
//! employee counts and median salaries), and a per-category ranking of
//! organisations by size and profit-change magnitude.
//!
//! # Core Principles
//!
//! - **Silent row exclusion**: malformed and duplicate-id rows are dropped
//!   deterministically, never raised as errors
//! - **Defined statistics**: undefined results (NaN/inf, zero divisors)
//!   resolve to `0` instead of propagating
//! - **Pure passes**: cleaning and aggregation are stateless folds; nothing
//!   persists across invocations
//!
//! # Example
//!
//! ```no_run
//! use orgstat::Analyzer;
//!
//! let result = Analyzer::new().process("organisations.csv").unwrap();
//!
//! println!("Countries: {}", result.countries.len());
//! println!("Categories: {}", result.categories.len());
//! ```

pub mod aggregate;
pub mod clean;
pub mod error;
pub mod input;
pub mod record;
pub mod stats;

mod analyzer;

pub use crate::analyzer::{process, AnalysisResult, AnalysisSummary, Analyzer, AnalyzerConfig};
pub use aggregate::{aggregate, CategoryMap, CategoryRank, CountryMap, CountryStats};
pub use clean::{clean, clean_with_report, write_cleaned, CleanReport};
pub use error::{OrgStatError, Result};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use record::OrganisationRecord;

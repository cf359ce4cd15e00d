//! Main Analyzer struct and public API.

use std::path::Path;

use serde::Serialize;

use crate::aggregate::{aggregate, CategoryMap, CountryMap};
use crate::clean::{clean_table, CleanReport};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of processing a data file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Per-country profit comparison and distance metric.
    pub countries: CountryMap,
    /// Per-category organisation rankings.
    pub categories: CategoryMap,
    /// Row accounting and group counts.
    pub summary: AnalysisSummary,
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    #[serde(flatten)]
    pub cleaning: CleanReport,
    /// Distinct country groups among accepted records.
    pub country_groups: usize,
    /// Distinct category groups among accepted records.
    pub category_groups: usize,
}

/// The organisation-dataset pipeline: read, clean, aggregate.
///
/// Every call is independent; no state persists across invocations.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    parser: Parser,
}

impl Analyzer {
    /// Create a new analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// The configuration this analyzer was built with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Process a data file end to end.
    ///
    /// A file with no valid rows produces empty mappings, not an error; only
    /// structural failures (unreadable file, CSV read error) propagate.
    pub fn process(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let (table, source) = self.parser.parse_file(path)?;
        let (records, cleaning) = clean_table(&table);
        let (countries, categories) = aggregate(&records);

        let summary = AnalysisSummary {
            cleaning,
            country_groups: countries.len(),
            category_groups: categories.len(),
        };

        Ok(AnalysisResult {
            source,
            countries,
            categories,
            summary,
        })
    }

    /// Process in-memory CSV text, returning just the two derived views.
    pub fn process_str(&self, contents: &str) -> Result<(CountryMap, CategoryMap)> {
        let table = self.parser.parse_str(contents)?;
        let (records, _) = clean_table(&table);
        Ok(aggregate(&records))
    }
}

/// Convenience wrapper: process a file with default configuration.
pub fn process(path: impl AsRef<Path>) -> Result<(CountryMap, CategoryMap)> {
    let result = Analyzer::new().process(path)?;
    Ok((result.countries, result.categories))
}

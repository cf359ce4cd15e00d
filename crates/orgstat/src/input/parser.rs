//! CSV parser for organisation files.
//!
//! The input format splits fields on literal commas with no quoting or
//! escaping, so the reader is built with quoting disabled. Headers and data
//! are lower-cased on the way in; header matching downstream is therefore a
//! straight name comparison.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{RawTable, SourceMetadata};
use crate::error::{OrgStatError, Result};

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

/// Parses organisation CSV files.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the raw table and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RawTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| OrgStatError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| OrgStatError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(contents.as_bytes());
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_str(&contents)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse raw text directly.
    ///
    /// Empty input (no header, no rows) yields an empty table, which is a
    /// valid result rather than an error.
    pub fn parse_str(&self, contents: &str) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .from_reader(contents.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        // A header of a single empty field means the input had no header line.
        if headers.iter().all(|h| h.is_empty()) {
            return Ok(RawTable::default());
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<String> =
                record.iter().map(|f| f.trim().to_lowercase()).collect();

            // Blank lines carry a single empty field when they survive the
            // reader at all; skip them.
            if row.iter().all(|f| f.is_empty()) && row.len() <= 1 {
                continue;
            }

            // Pad short rows; truncate long ones.
            while row.len() < expected_cols {
                row.push(String::new());
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        Ok(RawTable::new(headers, rows))
    }
}

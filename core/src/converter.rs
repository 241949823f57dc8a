//! # Registry Conversion Service
//!
//! Implements the "registry to SQL" use case.
//!
//! The service owns the only I/O of a run: reading the registry through a
//! [`RegistrySource`] and writing the script to disk. Everything between the
//! two is pure ([`parser::parse`], [`table::build`], [`sql::render`]).

use std::path::Path;
use std::time::{Duration, Instant};

use ouisql_common::{info, success};

use crate::error::ConvertError;
use crate::error::FetchError;
use crate::parser;
use crate::registry::RegistrySource;
use crate::sql;
use crate::table::{self, BuildReport};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Non-comment lines in the registry.
    pub rules: usize,
    /// Rows in the vendor table, i.e. rows in the script.
    pub entries: usize,
    pub overridden: usize,
    pub skipped: usize,
    /// Size of the written script, `None` when nothing was written.
    pub bytes_written: Option<usize>,
    pub elapsed: Duration,
}

impl Summary {
    fn from_report(rules: usize, report: &BuildReport, start: Instant) -> Self {
        Self {
            rules,
            entries: report.table.len(),
            overridden: report.overridden,
            skipped: report.skipped.len(),
            bytes_written: None,
            elapsed: start.elapsed(),
        }
    }
}

/// Parses and folds registry text. No I/O.
pub fn convert_text(text: &str) -> (usize, BuildReport) {
    let rules = parser::parse(text);
    let report = table::build(&rules);
    (rules.len(), report)
}

/// Application service for registry conversion.
pub struct ConversionService {
    source: Box<dyn RegistrySource>,
}

impl ConversionService {
    pub fn new(source: Box<dyn RegistrySource>) -> Self {
        Self { source }
    }

    /// Fetches the registry and folds it into a vendor table.
    pub fn build(&self) -> Result<(usize, BuildReport), FetchError> {
        info!("Fetching vendor registry from {}", self.source.location());
        let text = self.source.fetch()?;
        success!("Registry received ({} bytes)", text.len());

        Ok(convert_text(&text))
    }

    /// Runs the full pipeline and writes the SQL script to `output`.
    pub fn convert(&self, output: &Path) -> Result<Summary, ConvertError> {
        let start = Instant::now();
        let (rules, report) = self.build()?;

        let script = sql::render(&report.table);
        sql::write_script(output, &script)?;
        success!(
            "Wrote {} vendor rows to {}",
            report.table.len(),
            output.display()
        );

        let mut summary = Summary::from_report(rules, &report, start);
        summary.bytes_written = Some(script.len());
        Ok(summary)
    }

    /// Fetches and builds without writing anything.
    pub fn check(&self) -> Result<Summary, FetchError> {
        let start = Instant::now();
        let (rules, report) = self.build()?;
        Ok(Summary::from_report(rules, &report, start))
    }
}

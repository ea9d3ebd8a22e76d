//! Fatal errors and non-fatal diagnostics.
//!
//! Only fetch failures and missing tables stop a run. Everything else is a
//! [`Diagnostic`]: logged when recorded, carried on the table, never thrown.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport or HTTP status failure reaching the source page.
    #[error("fetching {url} failed: {source}")]
    FetchFailure {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("document contains no <table> elements")]
    NoTablesFound,

    #[error("table index {index} out of range ({count} tables found)")]
    TableIndexOutOfRange { index: usize, count: usize },

    #[error("{headers} header labels but {columns} data columns")]
    ColumnCountMismatch { headers: usize, columns: usize },

    #[error("unknown sort column `{requested}` (expected one of: {known})")]
    InvalidSortColumn { requested: String, known: String },

    #[error("writing export {path}: {source}")]
    Export {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// A condition that degrades the output but never aborts the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    ColumnCountMismatch { headers: usize, columns: usize },
    UnknownColumnMapping { label: String },
    TypeCoercionFailure { column: String, values: Vec<String> },
    InvalidSortColumn { requested: String },
    RaggedRow { row: usize, cells: usize, expected: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ColumnCountMismatch { headers, columns } => write!(
                f,
                "{} header labels but {} data columns; using positional labels, sorting disabled",
                headers, columns
            ),
            Diagnostic::UnknownColumnMapping { label } => {
                write!(f, "no canonical name for header `{}`; keeping raw label", label)
            }
            Diagnostic::TypeCoercionFailure { column, values } => write!(
                f,
                "column `{}` left as text; unparseable values: {:?}",
                column, values
            ),
            Diagnostic::InvalidSortColumn { requested } => {
                write!(f, "sort column `{}` not in table; keeping source order", requested)
            }
            Diagnostic::RaggedRow { row, cells, expected } => write!(
                f,
                "row {} has {} cells, expected {}; padded/truncated",
                row, cells, expected
            ),
        }
    }
}

/// Collects diagnostics, logging each one as it arrives.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.0.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// src/sort.rs

use tracing::{debug, info};

use crate::config::{canonical_names, NO_SORT};
use crate::error::{Diagnostic, ScrapeError};
use crate::schema::TypedTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Largest first.
    #[default]
    Descending,
    Ascending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: Direction,
}

impl SortSpec {
    /// `None` when `column` is the no-sort sentinel.
    pub fn parse(column: &str, ascending: bool) -> Option<Self> {
        if column.eq_ignore_ascii_case(NO_SORT) {
            return None;
        }
        Some(Self {
            column: column.to_string(),
            direction: if ascending {
                Direction::Ascending
            } else {
                Direction::Descending
            },
        })
    }
}

/// Check a requested sort column against the canonical names before any
/// page is fetched. Returns the canonical spelling.
pub fn validate_sort_column(requested: &str) -> Result<String, ScrapeError> {
    if requested.eq_ignore_ascii_case(NO_SORT) {
        return Ok(NO_SORT.to_string());
    }
    canonical_names()
        .find(|name| name.eq_ignore_ascii_case(requested))
        .map(str::to_string)
        .ok_or_else(|| ScrapeError::InvalidSortColumn {
            requested: requested.to_string(),
            known: canonical_names()
                .chain(std::iter::once(NO_SORT))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Reorder rows by `spec`. Equal keys keep their input order in both
/// directions. An unknown column, or a table with sorting disabled, is
/// left as is with a diagnostic.
pub fn sort_table(mut table: TypedTable, spec: &SortSpec) -> TypedTable {
    let idx = match table.column_index(&spec.column) {
        Some(idx) if !table.sorting_disabled => idx,
        _ => {
            table.diagnostics.record(Diagnostic::InvalidSortColumn {
                requested: spec.column.clone(),
            });
            return table;
        }
    };

    debug!(column = %spec.column, index = idx, direction = ?spec.direction, "sorting");
    // sort_by is stable
    table.rows.sort_by(|a, b| {
        let ord = a[idx].compare(&b[idx]);
        match spec.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
    info!(column = %table.columns[idx].name, rows = table.rows.len(), "sorted table");
    table
}

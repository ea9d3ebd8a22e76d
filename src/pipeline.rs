// src/pipeline.rs

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::ScrapeError;
use crate::process::{extract_headers, extract_rows, Document, RawTable};
use crate::schema::{build_positional, build_table, TypedTable};
use crate::sort::{sort_table, SortSpec};

/// Per-run choices that shape the pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Which located table to use, in document order.
    pub table_index: usize,
    /// `None` keeps source order.
    pub sort: Option<SortSpec>,
}

/// One line of `--list-tables` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub index: usize,
    pub id: String,
    pub rows: usize,
    pub headers: usize,
}

/// Headers + rows of one table, typed. Never fails: a header/body
/// disagreement degrades to positional labels.
pub fn process_table(table: &RawTable<'_>) -> TypedTable {
    let rows = extract_rows(table);
    match extract_headers(table) {
        Ok(labels) => build_table(&labels, rows),
        Err(ScrapeError::ColumnCountMismatch { headers, .. }) => build_positional(rows, headers),
        Err(e) => {
            warn!(error = %e, "header extraction failed");
            build_positional(rows, 0)
        }
    }
}

/// Parse `markup`, pick the requested table, type it and sort it.
#[instrument(level = "info", skip(markup, options), fields(bytes = markup.len()))]
pub fn run(markup: &str, options: &PipelineOptions) -> Result<TypedTable, ScrapeError> {
    let doc = Document::parse(markup);
    let located = doc.table(options.table_index)?;
    info!(index = options.table_index, id = %located.id, "using table");

    let table = process_table(&located.table);
    let table = match &options.sort {
        Some(spec) => sort_table(table, spec),
        None => table,
    };
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        diagnostics = table.diagnostics.len(),
        "pipeline finished"
    );
    Ok(table)
}

/// Summaries of every table in `markup`.
pub fn list_tables(markup: &str) -> Result<Vec<TableSummary>, ScrapeError> {
    let doc = Document::parse(markup);
    Ok(doc
        .tables()?
        .into_iter()
        .enumerate()
        .map(|(index, located)| TableSummary {
            index,
            rows: extract_rows(&located.table).len(),
            headers: extract_headers(&located.table).map_or(0, |h| h.len()),
            id: located.id,
        })
        .collect())
}

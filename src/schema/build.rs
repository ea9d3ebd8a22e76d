// src/schema/build.rs

use tracing::{debug, info};

use super::derive::coerce_column;
use super::mapping::map_columns;
use super::types::{Column, ColumnType, TypedTable, Value};
use crate::error::{Diagnostic, Diagnostics};

/// Assemble a typed table from header labels and body rows.
///
/// Labels go through the column mapper. When the label count disagrees
/// with the body's column count the table falls back to positional
/// labels and sorting is disabled.
pub fn build_table(labels: &[String], rows: Vec<Vec<String>>) -> TypedTable {
    let mut diagnostics = Diagnostics::new();
    let mapped = map_columns(labels);
    for label in &mapped.unknown {
        diagnostics.record(Diagnostic::UnknownColumnMapping {
            label: label.clone(),
        });
    }

    let width = rows.first().map_or(labels.len(), Vec::len);
    if labels.len() != width {
        diagnostics.record(Diagnostic::ColumnCountMismatch {
            headers: labels.len(),
            columns: width,
        });
        return assemble(positional_columns(width), rows, true, diagnostics);
    }

    let columns = mapped
        .names
        .into_iter()
        .zip(labels)
        .map(|(name, label)| (name, label.clone()))
        .collect();
    assemble(columns, rows, false, diagnostics)
}

/// Assemble a table whose headers could not be trusted. `headers_seen` is
/// the label count that was rejected upstream.
pub fn build_positional(rows: Vec<Vec<String>>, headers_seen: usize) -> TypedTable {
    let mut diagnostics = Diagnostics::new();
    let width = rows.first().map_or(0, Vec::len);
    diagnostics.record(Diagnostic::ColumnCountMismatch {
        headers: headers_seen,
        columns: width,
    });
    assemble(positional_columns(width), rows, true, diagnostics)
}

fn positional_columns(width: usize) -> Vec<(String, String)> {
    (0..width).map(|i| (i.to_string(), String::new())).collect()
}

fn assemble(
    columns: Vec<(String, String)>,
    rows: Vec<Vec<String>>,
    sorting_disabled: bool,
    mut diagnostics: Diagnostics,
) -> TypedTable {
    let width = columns.len();
    let num_rows = rows.len();

    // transpose into columns, evening out ragged rows
    let mut cells_by_column: Vec<Vec<String>> = vec![Vec::with_capacity(num_rows); width];
    for (idx, mut row) in rows.into_iter().enumerate() {
        if row.len() != width {
            diagnostics.record(Diagnostic::RaggedRow {
                row: idx,
                cells: row.len(),
                expected: width,
            });
            row.resize(width, String::new());
        }
        for (col, cell) in cells_by_column.iter_mut().zip(row) {
            col.push(cell);
        }
    }

    let mut typed_columns = Vec::with_capacity(width);
    let mut values_by_column: Vec<std::vec::IntoIter<Value>> = Vec::with_capacity(width);
    for ((name, label), cells) in columns.into_iter().zip(cells_by_column) {
        let coerced = coerce_column(&name, cells, &mut diagnostics);
        let ty: ColumnType = coerced.ty();
        typed_columns.push(Column { name, label, ty });
        values_by_column.push(coerced.into_values().into_iter());
    }

    let rows: Vec<Vec<Value>> = (0..num_rows)
        .map(|_| {
            values_by_column
                .iter_mut()
                .filter_map(Iterator::next)
                .collect()
        })
        .collect();

    debug!(
        columns = typed_columns.len(),
        rows = rows.len(),
        sorting_disabled,
        "assembled typed table"
    );
    if !diagnostics.is_empty() {
        info!(count = diagnostics.len(), "table built with diagnostics");
    }

    TypedTable {
        columns: typed_columns,
        rows,
        sorting_disabled,
        diagnostics,
    }
}

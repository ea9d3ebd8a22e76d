// src/process/rows.rs

use scraper::ElementRef;
use tracing::debug;

use super::utils::clean_cell;
use super::{child_elements, RawTable};

/// `<td>` texts of every data row in the first `<tbody>`, in source order.
///
/// Rows without any `<td>` (separators, header rows) are skipped. A table
/// without a body yields no rows.
pub fn extract_rows(table: &RawTable<'_>) -> Vec<Vec<String>> {
    let Some(tbody) = table.sections("tbody").next() else {
        debug!("table has no body region");
        return Vec::new();
    };

    let rows: Vec<Vec<String>> = child_elements(tbody, "tr")
        .map(row_cells)
        .filter(|cells| !cells.is_empty())
        .collect();
    debug!(rows = rows.len(), "extracted body rows");
    rows
}

/// Number of `<td>` cells in the first data row of the first `<tbody>`,
/// or 0 when there is none.
pub fn data_column_count(table: &RawTable<'_>) -> usize {
    table
        .sections("tbody")
        .next()
        .and_then(|tbody| {
            child_elements(tbody, "tr")
                .map(|tr| child_elements(tr, "td").count())
                .find(|n| *n > 0)
        })
        .unwrap_or(0)
}

fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    child_elements(tr, "td")
        .map(|td| clean_cell(&td.text().collect::<String>()))
        .collect()
}

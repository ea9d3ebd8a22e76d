// src/process/headers.rs

use scraper::ElementRef;
use tracing::{debug, trace};

use super::utils::clean_header_label;
use super::{child_elements, rows, RawTable};
use crate::error::ScrapeError;

type Strategy = fn(&RawTable<'_>) -> Option<Vec<String>>;

/// Header strategies, most trusted first. The flag marks labels that were
/// synthesized from a data row and so must be checked against the body.
const STRATEGIES: &[(&str, Strategy, bool)] = &[
    ("header_region", from_header_region, false),
    ("last_row", from_last_row, true),
];

/// Ordered header labels of `table`. An empty result is valid.
///
/// Fails only when the last-row fallback produced a label count that
/// disagrees with the body's column count.
pub fn extract_headers(table: &RawTable<'_>) -> Result<Vec<String>, ScrapeError> {
    for (name, strategy, synthesized) in STRATEGIES {
        let Some(labels) = strategy(table) else {
            trace!(strategy = name, "no headers");
            continue;
        };
        debug!(strategy = name, count = labels.len(), "extracted headers");

        if *synthesized {
            let columns = rows::data_column_count(table);
            if columns != 0 && columns != labels.len() {
                return Err(ScrapeError::ColumnCountMismatch {
                    headers: labels.len(),
                    columns,
                });
            }
        }
        return Ok(labels);
    }
    Ok(Vec::new())
}

/// `<th>` cells of the first `<thead>` row that has any.
fn from_header_region(table: &RawTable<'_>) -> Option<Vec<String>> {
    let thead = table.sections("thead").next()?;
    child_elements(thead, "tr")
        .map(|tr| child_elements(tr, "th").map(header_cell_text).collect::<Vec<_>>())
        .find(|labels| !labels.is_empty())
}

/// Legacy layout: header cells sitting in the table's last row.
fn from_last_row(table: &RawTable<'_>) -> Option<Vec<String>> {
    let last = table.all_rows().pop()?;
    let labels: Vec<String> = child_elements(last, "th").map(header_cell_text).collect();
    (!labels.is_empty()).then_some(labels)
}

/// Text of one header cell.
///
/// Plain cells use their full text. Cells with nested markup (`<br>`,
/// annotation spans) keep only the non-blank text fragments, joined by a
/// single space.
fn header_cell_text(th: ElementRef<'_>) -> String {
    let nested = th.children().any(|n| n.value().is_element());
    if !nested {
        return clean_header_label(&th.text().collect::<String>());
    }
    let fragments: Vec<String> = th
        .text()
        .map(clean_header_label)
        .filter(|f| !f.is_empty())
        .collect();
    clean_header_label(&fragments.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::canonical_name;
    use crate::process::Document;

    fn headers_of(markup: &str) -> Result<Vec<String>, ScrapeError> {
        let doc = Document::parse(markup);
        let located = doc.first_table()?;
        extract_headers(&located.table)
    }

    #[test]
    fn plain_header_region() -> anyhow::Result<()> {
        let labels = headers_of(
            "<table><thead><tr><th>Country,\nOther</th><th> TotalCases </th><th>NewCases</th></tr></thead>\
             <tbody><tr><td>USA</td><td>1</td><td>2</td></tr></tbody></table>",
        )?;
        assert_eq!(labels, vec!["Country,Other", "TotalCases", "NewCases"]);
        Ok(())
    }

    #[test]
    fn nested_markup_joins_fragments() -> anyhow::Result<()> {
        let labels = headers_of(
            "<table><thead><tr>\
               <th>Tot&nbsp;Cases/<br>\n  <span>1M pop</span></th>\
               <th>New<br>Cases<span class=\"note\"> + </span></th>\
             </tr></thead></table>",
        )?;
        assert_eq!(labels, vec!["Tot Cases/ 1M pop", "New Cases +"]);
        Ok(())
    }

    #[test]
    fn simple_and_nested_labels_map_alike() -> anyhow::Result<()> {
        let simple = headers_of("<table><thead><tr><th>NewCases +</th></tr></thead></table>")?;
        let nested = headers_of(
            "<table><thead><tr><th>New<br> <b>Cases</b><sup>+</sup></th></tr></thead></table>",
        )?;
        assert_eq!(canonical_name(&simple[0]), Some("NCases"));
        assert_eq!(canonical_name(&nested[0]), Some("NCases"));
        Ok(())
    }

    #[test]
    fn last_row_fallback_without_thead() -> anyhow::Result<()> {
        let labels = headers_of(
            "<table><tr><td>a</td><td>b</td></tr><tr><th>X</th><th>Y</th></tr></table>",
        )?;
        assert_eq!(labels, vec!["X", "Y"]);
        Ok(())
    }

    #[test]
    fn last_row_fallback_count_mismatch() {
        let err = headers_of(
            "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr><th>X</th><th>Y</th></tr></table>",
        )
        .expect_err("2 labels for 3 columns");
        assert!(matches!(
            err,
            ScrapeError::ColumnCountMismatch { headers: 2, columns: 3 }
        ));
    }

    #[test]
    fn no_headers_is_empty_not_error() -> anyhow::Result<()> {
        let labels = headers_of("<table><tr><td>a</td></tr></table>")?;
        assert!(labels.is_empty());
        Ok(())
    }
}

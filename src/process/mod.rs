// src/process/mod.rs
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::error::ScrapeError;

pub mod headers;
pub mod rows;
pub mod utils;

pub use headers::extract_headers;
pub use rows::extract_rows;

/// A parsed HTML document. Owns the DOM every [`RawTable`] borrows from.
pub struct Document {
    html: Html,
}

/// Handle to one `<table>` element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct RawTable<'a> {
    element: ElementRef<'a>,
}

/// A table paired with its `id` attribute (empty when absent).
pub struct LocatedTable<'a> {
    pub id: String,
    pub table: RawTable<'a>,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Every `<table>` in document order. Errors only when there are none.
    pub fn tables(&self) -> Result<Vec<LocatedTable<'_>>, ScrapeError> {
        let selector = Selector::parse("table").expect("table selector should parse");
        let tables: Vec<LocatedTable<'_>> = self
            .html
            .select(&selector)
            .map(|element| LocatedTable {
                id: element.value().attr("id").unwrap_or("").to_string(),
                table: RawTable { element },
            })
            .collect();

        if tables.is_empty() {
            return Err(ScrapeError::NoTablesFound);
        }
        debug!(count = tables.len(), "located tables");
        Ok(tables)
    }

    /// The table at `index` in document order.
    pub fn table(&self, index: usize) -> Result<LocatedTable<'_>, ScrapeError> {
        let mut tables = self.tables()?;
        let count = tables.len();
        if index >= count {
            return Err(ScrapeError::TableIndexOutOfRange { index, count });
        }
        Ok(tables.swap_remove(index))
    }

    pub fn first_table(&self) -> Result<LocatedTable<'_>, ScrapeError> {
        self.table(0)
    }
}

impl<'a> RawTable<'a> {
    /// Direct child sections named `name` (`thead`, `tbody`, `tfoot`).
    pub(crate) fn sections(&self, name: &'static str) -> impl Iterator<Item = ElementRef<'a>> {
        child_elements(self.element, name)
    }

    /// Every row belonging to this table, in order, skipping rows of
    /// nested tables.
    pub(crate) fn all_rows(&self) -> Vec<ElementRef<'a>> {
        let mut rows = Vec::new();
        for child in self.element.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "tr" => rows.push(child),
                "thead" | "tbody" | "tfoot" => rows.extend(child_elements(child, "tr")),
                _ => {}
            }
        }
        trace!(rows = rows.len(), "collected table rows");
        rows
    }
}

/// Direct element children of `parent` with the given tag name.
pub(crate) fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_all_tables_with_ids() -> anyhow::Result<()> {
        let doc = Document::parse(
            r#"<html><body>
            <table id="main_table_countries_today"><tr><td>a</td></tr></table>
            <p>between</p>
            <table><tr><td>b</td></tr></table>
            </body></html>"#,
        );
        let tables = doc.tables()?;
        let ids: Vec<&str> = tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["main_table_countries_today", ""]);
        Ok(())
    }

    #[test]
    fn no_tables_is_an_error() {
        let doc = Document::parse("<html><body><p>nothing here</p></body></html>");
        assert!(matches!(doc.tables(), Err(ScrapeError::NoTablesFound)));
        assert!(matches!(doc.first_table(), Err(ScrapeError::NoTablesFound)));
    }

    #[test]
    fn index_past_end_is_out_of_range() {
        let doc = Document::parse("<table><tr><td>x</td></tr></table>");
        match doc.table(3) {
            Err(ScrapeError::TableIndexOutOfRange { index, count }) => {
                assert_eq!((index, count), (3, 1));
            }
            other => panic!("unexpected: {:?}", other.map(|t| t.id)),
        }
    }

    #[test]
    fn rows_of_nested_tables_are_not_collected() -> anyhow::Result<()> {
        let doc = Document::parse(
            r#"<table id="outer"><tbody>
                <tr><td>1</td><td><table><tr><td>inner</td></tr></table></td></tr>
                <tr><td>2</td><td>z</td></tr>
            </tbody></table>"#,
        );
        let outer = doc.first_table()?;
        assert_eq!(outer.id, "outer");
        assert_eq!(outer.table.all_rows().len(), 2);
        Ok(())
    }
}

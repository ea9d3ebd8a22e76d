use prettytable::{format, Cell, Row, Table};

use crate::schema::TypedTable;

fn cell(text: &str, right: bool) -> Cell {
    let c = Cell::new(text);
    if right {
        c.style_spec("r")
    } else {
        c
    }
}

/// Boxed, row-numbered rendering of `table`. The first column holds the
/// 1-based row number; it and every numeric column are right-aligned.
#[must_use]
pub fn render_table(table: &TypedTable) -> String {
    let mut out = Table::new();
    out.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut titles = vec![cell("", true)];
    titles.extend(
        table
            .columns
            .iter()
            .map(|c| cell(&c.name, c.ty.is_numeric())),
    );
    out.set_titles(Row::new(titles));

    for (i, row) in table.rows.iter().enumerate() {
        let mut cells = vec![cell(&(i + 1).to_string(), true)];
        cells.extend(
            row.iter()
                .zip(&table.columns)
                .map(|(value, column)| cell(&value.to_string(), column.ty.is_numeric())),
        );
        out.add_row(Row::new(cells));
    }

    out.to_string().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::build_table;

    #[test]
    fn renders_boxed_numbered_rows() {
        let table = build_table(
            &["Country,Other".to_string(), "TotalCases".to_string()],
            vec![
                vec!["USA".into(), "1000000".into()],
                vec!["Côte d'Ivoire".into(), "7".into()],
            ],
        );
        let out = render_table(&table);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with('┌'));
        assert!(lines.last().unwrap().starts_with('└'));
        assert!(out.contains("│   │ Country       │   Cases │"));
        assert!(out.contains("│ 1 │ USA           │ 1000000 │"));
        assert!(out.contains("│ 2 │ Côte d'Ivoire │       7 │"));
    }

    #[test]
    fn header_only_table_still_renders() {
        let table = build_table(&["Country,Other".to_string()], Vec::new());
        let out = render_table(&table);
        assert!(out.starts_with('┌'));
        assert!(out.contains("│ Country │"));
        assert!(out.lines().last().unwrap().starts_with('└'));
    }
}

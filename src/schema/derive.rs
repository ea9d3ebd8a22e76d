use tracing::debug;

use super::types::{ColumnType, Value};
use crate::config::{is_numeric_candidate, placeholder_for};
use crate::error::{Diagnostic, Diagnostics};

/// Most offending values listed in one coercion diagnostic.
const MAX_REPORTED_VALUES: usize = 5;

/// A whole column after coercion. Every value shares the variant's type.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedColumn {
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl CoercedColumn {
    pub fn ty(&self) -> ColumnType {
        match self {
            CoercedColumn::Integer(_) => ColumnType::Integer,
            CoercedColumn::Float(_) => ColumnType::Float,
            CoercedColumn::Text(_) => ColumnType::String,
        }
    }

    fn len(&self) -> usize {
        match self {
            CoercedColumn::Integer(v) => v.len(),
            CoercedColumn::Float(v) => v.len(),
            CoercedColumn::Text(v) => v.len(),
        }
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            CoercedColumn::Integer(v) => v.into_iter().map(Value::Int).collect(),
            CoercedColumn::Float(v) => v.into_iter().map(Value::Float).collect(),
            CoercedColumn::Text(v) => v.into_iter().map(Value::Text).collect(),
        }
    }
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == "N/A"
}

/// Substitutions applied before parsing: missing numeric-candidate cells
/// become `0`, empty identifier cells get their placeholder label.
pub fn fill_missing(column: &str, cells: Vec<String>) -> Vec<String> {
    if is_numeric_candidate(column) {
        return cells
            .into_iter()
            .map(|c| if is_missing(&c) { "0".to_string() } else { c })
            .collect();
    }
    if let Some(placeholder) = placeholder_for(column) {
        return cells
            .into_iter()
            .map(|c| if c.is_empty() { placeholder.to_string() } else { c })
            .collect();
    }
    cells
}

fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer if every value parses as one, else float if every value does,
/// else text. An empty column proves nothing and stays text.
pub fn coerce(values: Vec<String>) -> CoercedColumn {
    if values.is_empty() {
        return CoercedColumn::Text(values);
    }
    if let Some(ints) = values
        .iter()
        .map(|v| v.parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()
    {
        return CoercedColumn::Integer(ints);
    }
    if let Some(floats) = values
        .iter()
        .map(|v| parse_float(v))
        .collect::<Option<Vec<_>>>()
    {
        return CoercedColumn::Float(floats);
    }
    CoercedColumn::Text(values)
}

/// Whether a column that stayed text is worth reporting. Identifier
/// columns are text by nature; so is a column where nothing parses as a
/// number. Numeric candidates are always reported.
fn reports_text_fallback(column: &str, values: &[String]) -> bool {
    if values.is_empty() || placeholder_for(column).is_some() {
        return false;
    }
    is_numeric_candidate(column) || values.iter().any(|v| parse_float(v).is_some())
}

/// Fill, then coerce one column. A column that should have been numeric
/// but stays text records a [`Diagnostic::TypeCoercionFailure`].
pub fn coerce_column(
    column: &str,
    cells: Vec<String>,
    diagnostics: &mut Diagnostics,
) -> CoercedColumn {
    let coerced = coerce(fill_missing(column, cells));

    if let CoercedColumn::Text(values) = &coerced {
        if reports_text_fallback(column, values) {
            let mut offending: Vec<String> = Vec::new();
            for v in values.iter().filter(|v| parse_float(v).is_none()) {
                if !offending.contains(v) {
                    offending.push(v.clone());
                }
                if offending.len() == MAX_REPORTED_VALUES {
                    break;
                }
            }
            diagnostics.record(Diagnostic::TypeCoercionFailure {
                column: column.to_string(),
                values: offending,
            });
        }
    }

    debug!(column, ty = ?coerced.ty(), rows = coerced.len(), "coerced column");
    coerced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::utils::clean_cell;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numeric_candidate_fills_and_parses_integers() {
        let cells: Vec<String> = ["1,234", "+56", "N/A", ""]
            .iter()
            .map(|s| clean_cell(s))
            .collect();
        let mut d = Diagnostics::new();
        let col = coerce_column("Cases", cells, &mut d);
        assert_eq!(col, CoercedColumn::Integer(vec![1234, 56, 0, 0]));
        assert!(d.is_empty());
    }

    #[test]
    fn one_float_makes_whole_column_float() {
        let col = coerce(strings(&["1", "2.5", "3"]));
        assert_eq!(col, CoercedColumn::Float(vec![1.0, 2.5, 3.0]));
    }

    #[test]
    fn one_bad_value_leaves_whole_column_text() {
        let mut d = Diagnostics::new();
        let col = coerce_column("Deaths", strings(&["1", "2", "lots", "lots"]), &mut d);
        assert_eq!(col.ty(), ColumnType::String);
        assert_eq!(
            d.iter().cloned().collect::<Vec<_>>(),
            vec![Diagnostic::TypeCoercionFailure {
                column: "Deaths".into(),
                values: vec!["lots".into()],
            }]
        );
    }

    #[test]
    fn text_columns_are_quietly_text() {
        let mut d = Diagnostics::new();
        let col = coerce_column("Country", strings(&["USA", ""]), &mut d);
        assert_eq!(col, CoercedColumn::Text(strings(&["USA", "Non-Country"])));
        assert!(d.is_empty());
    }

    #[test]
    fn non_candidate_missing_values_are_not_zeroed() {
        let col = coerce_column("Mystery", strings(&["1", "N/A"]), &mut Diagnostics::new());
        assert_eq!(col, CoercedColumn::Text(strings(&["1", "N/A"])));
    }

    #[test]
    fn unmapped_numeric_looking_column_reports_fallback() {
        let mut d = Diagnostics::new();
        let col = coerce_column("Vaccinated", strings(&["1000", "lots", "12.5"]), &mut d);
        assert_eq!(col.ty(), ColumnType::String);
        assert_eq!(
            d.iter().cloned().collect::<Vec<_>>(),
            vec![Diagnostic::TypeCoercionFailure {
                column: "Vaccinated".into(),
                values: vec!["lots".into()],
            }]
        );
    }

    #[test]
    fn purely_textual_column_is_not_reported() {
        let mut d = Diagnostics::new();
        let col = coerce_column("Notes", strings(&["yes", "no"]), &mut d);
        assert_eq!(col.ty(), ColumnType::String);
        assert!(d.is_empty());
    }

    #[test]
    fn non_finite_floats_are_text() {
        assert_eq!(coerce(strings(&["1.5", "NaN"])).ty(), ColumnType::String);
        assert_eq!(coerce(strings(&["inf"])).ty(), ColumnType::String);
    }

    #[test]
    fn coercion_is_idempotent_through_display() {
        for raw in [
            strings(&["1", "2", "3"]),
            strings(&["1", "2.0", "-0.5"]),
            strings(&["1e3", "4"]),
            strings(&["USA", "7"]),
        ] {
            let first = coerce(raw);
            let rendered: Vec<String> = first
                .clone()
                .into_values()
                .iter()
                .map(|v| v.to_string())
                .collect();
            assert_eq!(coerce(rendered).ty(), first.ty());
        }
    }

    #[test]
    fn empty_column_is_text() {
        assert_eq!(coerce(Vec::new()).ty(), ColumnType::String);
    }
}

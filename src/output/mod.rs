use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::config::RESET_NOTE;
use crate::schema::TypedTable;

pub mod export;
pub mod table;

/// How the final table is printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// `YYYY-MM-DD HH:MMUTC`
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d %H:%M%Z").to_string()
}

/// Lines printed above the table.
pub fn banner(now: DateTime<Utc>) -> String {
    format!("\nDate/Time >: {}\n{}\n", timestamp(now), RESET_NOTE)
}

/// Render `table` in the requested format.
pub fn render(
    table: &TypedTable,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(format!("{}\n{}", banner(now), table::render_table(table))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
            "timestamp": timestamp(now),
            "table": table,
        }))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::schema::build_table;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 4, 5, 9, 7, 0).unwrap()
    }

    #[test]
    fn timestamp_format() {
        assert_eq!(timestamp(fixed_now()), "2020-04-05 09:07UTC");
    }

    #[test]
    fn banner_mentions_reset() {
        let b = banner(fixed_now());
        assert!(b.contains("Date/Time >: 2020-04-05 09:07UTC"));
        assert!(b.contains(RESET_NOTE));
    }

    #[test]
    fn json_render_carries_columns_and_rows() -> anyhow::Result<()> {
        let table = build_table(
            &["Country,Other".to_string(), "TotalCases".to_string()],
            vec![vec!["USA".into(), "1000".into()]],
        );
        let rendered = render(&table, OutputFormat::Json, fixed_now())?;
        let v: serde_json::Value = serde_json::from_str(&rendered)?;
        assert_eq!(v["table"]["columns"][1]["name"], "Cases");
        assert_eq!(v["table"]["columns"][1]["ty"], "integer");
        assert_eq!(v["table"]["rows"][0][0], "USA");
        assert_eq!(v["table"]["rows"][0][1], 1000);
        Ok(())
    }
}

// src/output/export.rs

use chrono::{DateTime, Utc};
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::error::ScrapeError;
use crate::schema::TypedTable;

/// `YYYY-MM-DD HH-MMUTC.csv`, colons swapped out so the name is valid
/// on every filesystem.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{}.csv", now.format("%Y-%m-%d %H-%M%Z"))
}

/// Header record, then one record per row.
pub fn write_csv<W: Write>(table: &TypedTable, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(ToString::to_string))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` into `dir` under the run's timestamped name.
pub fn export_table(
    table: &TypedTable,
    dir: impl AsRef<Path>,
    now: DateTime<Utc>,
) -> Result<PathBuf, ScrapeError> {
    let path = dir.as_ref().join(export_file_name(now));
    let to_err = |source: csv::Error| ScrapeError::Export {
        path: path.display().to_string(),
        source,
    };

    let file = std::fs::File::create(&path).map_err(|e| to_err(e.into()))?;
    write_csv(table, file).map_err(to_err)?;
    info!(path = %path.display(), rows = table.rows.len(), "exported table");
    Ok(path)
}

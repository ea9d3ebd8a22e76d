use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_SORT_COLUMN;
use crate::output::OutputFormat;
use crate::pipeline::PipelineOptions;
use crate::sort::{validate_sort_column, SortSpec};

/// Fetch the daily statistics table, sort it and print or export it.
#[derive(Debug, Parser)]
#[command(name = "covscraper", version)]
pub struct Cli {
    /// Write the table to a timestamped CSV file
    #[arg(short, long)]
    pub export: bool,

    /// Directory the CSV export is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Column to sort by (canonical name, case-insensitive); `none` keeps source order
    #[arg(short, long, default_value = DEFAULT_SORT_COLUMN, value_parser = parse_sort_column)]
    pub sort: String,

    /// Sort ascending instead of largest first
    #[arg(short, long)]
    pub ascending: bool,

    /// Which table on the page to use, in document order
    #[arg(short, long, default_value_t = 0)]
    pub table: usize,

    /// Print the tables found on the page and exit
    #[arg(long)]
    pub list_tables: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_sort_column(raw: &str) -> Result<String, String> {
    validate_sort_column(raw).map_err(|e| e.to_string())
}

impl Cli {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            table_index: self.table,
            sort: SortSpec::parse(&self.sort, self.ascending),
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

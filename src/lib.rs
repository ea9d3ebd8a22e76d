pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod schema;
pub mod sort;

pub use error::{Diagnostic, Diagnostics, ScrapeError};
pub use pipeline::{run, PipelineOptions};
pub use schema::TypedTable;

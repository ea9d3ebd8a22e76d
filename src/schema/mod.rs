pub mod build;
pub mod derive;
pub mod mapping;
pub mod types;

pub use build::{build_positional, build_table};
pub use derive::{coerce, coerce_column, CoercedColumn};
pub use mapping::{lookup, map_columns, MappedColumns};
pub use types::{Column, ColumnType, TypedTable, Value};

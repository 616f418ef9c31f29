#![deny(unsafe_code)]

pub mod csv_table;
pub mod error;
pub mod memory;
pub mod paths;
pub mod table;

pub use crate::csv_table::CsvReferenceTable;
pub use crate::error::StandardsError;
pub use crate::memory::InMemoryReferenceTable;
pub use crate::paths::{
    TABLES_ENV_VAR, bundled_tables_dir, resolve_tables_dir, table_path, tables_dir_from,
};
pub use crate::table::{GradeBoundary, ReferenceTable};

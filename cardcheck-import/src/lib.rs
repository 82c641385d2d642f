//! Checklist classifier: turns a vendor checklist workbook into parallel rows.
//!
//! This crate owns the pipeline from workbook to output: loading the sheets,
//! extracting parallel names, projecting and de-duplicating insert rows,
//! serializing them as SQL or JSON, and applying them to the local database.

pub mod apply;
pub mod extract;
pub mod progress;
pub mod rows;
pub mod serialize;
pub mod workbook;

use std::path::PathBuf;

use cardcheck_db::OperationError;
use thiserror::Error;

pub use apply::{ApplyStats, apply_rows};
pub use extract::{
    PARALLELS_MARKER, classify_workbook, extract_auto_parallels, extract_base_parallels,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use rows::{ClassifyReport, classify, dedupe_rows, to_insert_rows};
pub use serialize::{NO_ROWS_SQL, sql_escape, to_json, to_sql_insert};
pub use workbook::{Cell, SheetColumn, Workbook, load_workbook};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) mod admin;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod run;

use std::path::PathBuf;

use cardcheck_catalog::{Parallel, ProductSummary};
use rusqlite::Connection;

use crate::CliError;
use crate::settings::Settings;

/// Open (creating if needed) the catalog database.
pub(crate) fn open_store(
    settings: &Settings,
    db: Option<PathBuf>,
) -> Result<(Connection, PathBuf), CliError> {
    let db_path = settings.db_path(db);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = cardcheck_db::open_database(&db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database at {}: {}",
            db_path.display(),
            e
        ))
    })?;
    Ok((conn, db_path))
}

/// Look up a set by slug or fail with `Set not found`.
pub(crate) fn require_product(conn: &Connection, slug: &str) -> Result<ProductSummary, CliError> {
    cardcheck_db::find_product_by_slug(conn, slug)?
        .ok_or_else(|| CliError::not_found(format!("Set not found: {slug}")))
}

/// Look up a parallel of a set by slug.
pub(crate) fn require_parallel(
    conn: &Connection,
    product: &ProductSummary,
    slug: &str,
) -> Result<Parallel, CliError> {
    cardcheck_db::find_parallel_by_slug(conn, &product.id, slug)?.ok_or_else(|| {
        CliError::not_found(format!("Parallel not found: {} in {}", slug, product.slug))
    })
}

/// Check mark or dash for a boolean, as used in listings.
pub(crate) fn mark(active: bool) -> &'static str {
    if active { "\u{2713}" } else { "\u{2013}" }
}

//! Read queries for the catalog database.
//!
//! Provides the product listing, set lookup by slug, parallels and their
//! images, and summary counts.

use cardcheck_catalog::types::*;
use rusqlite::{Connection, OptionalExtension, params};

use crate::operations::OperationError;

// ── Product Lookups ─────────────────────────────────────────────────────────

const PRODUCT_SUMMARY_SELECT: &str = "
    SELECT p.id, p.full_display_name, p.slug, p.year,
           COALESCE(m.name, 'Unknown'), COALESCE(m.slug, 'unknown'),
           COALESCE(s.name, 'Unknown'), COALESCE(s.slug, 'unknown')
    FROM products p
    LEFT JOIN manufacturers m ON m.id = p.manufacturer_id
    LEFT JOIN sports s ON s.id = p.sport_id";

/// All active products, newest year first, then by name.
pub fn active_products(conn: &Connection) -> Result<Vec<ProductSummary>, OperationError> {
    let sql = format!(
        "{PRODUCT_SUMMARY_SELECT}
         WHERE p.is_active = 1
         ORDER BY p.year DESC, p.full_display_name"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_product_summary)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Look up a product by its URL slug, active or not.
pub fn find_product_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<ProductSummary>, OperationError> {
    let sql = format!("{PRODUCT_SUMMARY_SELECT} WHERE p.slug = ?1");
    conn.query_row(&sql, params![slug], row_to_product_summary)
        .optional()
        .map_err(Into::into)
}

// ── Parallel Lookups ────────────────────────────────────────────────────────

const PARALLEL_SELECT: &str = "
    SELECT id, product_id, name, slug,
           is_hobby_exclusive, is_retail_exclusive, is_fotl_hit, is_numbered,
           is_auto, is_sp, is_ssp, serial_max, sort_order
    FROM parallels";

/// Parallels of a product: explicit sort order first, then by name.
pub fn parallels_for_product(
    conn: &Connection,
    product_id: &str,
) -> Result<Vec<Parallel>, OperationError> {
    let sql = format!(
        "{PARALLEL_SELECT}
         WHERE product_id = ?1
         ORDER BY sort_order IS NULL, sort_order, name"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![product_id], row_to_parallel)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a parallel of a product by slug.
///
/// Base and auto parallels may share a slug; the non-auto one is preferred.
pub fn find_parallel_by_slug(
    conn: &Connection,
    product_id: &str,
    slug: &str,
) -> Result<Option<Parallel>, OperationError> {
    let sql = format!(
        "{PARALLEL_SELECT}
         WHERE product_id = ?1 AND slug = ?2
         ORDER BY is_auto
         LIMIT 1"
    );
    conn.query_row(&sql, params![product_id, slug], row_to_parallel)
        .optional()
        .map_err(Into::into)
}

// ── Image Lookups ───────────────────────────────────────────────────────────

/// Every image row attached to any parallel of a product, oldest first.
pub fn images_for_product(
    conn: &Connection,
    product_id: &str,
) -> Result<Vec<ParallelImage>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.parallel_id, i.storage_path
         FROM parallel_images i
         JOIN parallels p ON p.id = i.parallel_id
         WHERE p.product_id = ?1
         ORDER BY i.id",
    )?;
    let rows = stmt.query_map(params![product_id], |row| {
        Ok(ParallelImage {
            id: row.get(0)?,
            parallel_id: row.get(1)?,
            storage_path: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let count = |sql: &str| -> Result<i64, OperationError> {
        Ok(conn.query_row(sql, [], |r| r.get(0))?)
    };

    Ok(CatalogStats {
        manufacturers: count("SELECT COUNT(*) FROM manufacturers")?,
        sports: count("SELECT COUNT(*) FROM sports")?,
        products: count("SELECT COUNT(*) FROM products")?,
        active_products: count("SELECT COUNT(*) FROM products WHERE is_active = 1")?,
        parallels: count("SELECT COUNT(*) FROM parallels")?,
        auto_parallels: count("SELECT COUNT(*) FROM parallels WHERE is_auto = 1")?,
        images: count("SELECT COUNT(*) FROM parallel_images")?,
    })
}

/// Summary statistics for the catalog.
#[derive(Debug)]
pub struct CatalogStats {
    pub manufacturers: i64,
    pub sports: i64,
    pub products: i64,
    pub active_products: i64,
    pub parallels: i64,
    pub auto_parallels: i64,
    pub images: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_product_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProductSummary> {
    Ok(ProductSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        year: row.get(3)?,
        manufacturer_name: row.get(4)?,
        manufacturer_slug: row.get(5)?,
        sport_name: row.get(6)?,
        sport_slug: row.get(7)?,
    })
}

fn row_to_parallel(row: &rusqlite::Row<'_>) -> rusqlite::Result<Parallel> {
    Ok(Parallel {
        id: row.get(0)?,
        product_id: row.get(1)?,
        name: row.get(2)?,
        slug: row.get(3)?,
        badges: BadgeSet {
            is_hobby_exclusive: row.get(4)?,
            is_retail_exclusive: row.get(5)?,
            is_fotl_hit: row.get(6)?,
            is_numbered: row.get(7)?,
            is_auto: row.get(8)?,
            is_sp: row.get(9)?,
            is_ssp: row.get(10)?,
            serial_max: row.get(11)?,
        },
        sort_order: row.get(12)?,
    })
}

//! Write operations for catalog entities.

use cardcheck_catalog::types::*;
use cardcheck_catalog::yaml::YamlError;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Catalog data error: {0}")]
    Yaml(#[from] YamlError),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

impl OperationError {
    fn not_found(entity_type: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

// ── Reference Data ──────────────────────────────────────────────────────────

/// Insert or update a manufacturer.
pub fn upsert_manufacturer(
    conn: &Connection,
    manufacturer: &Manufacturer,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO manufacturers (id, name, slug)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             slug = excluded.slug",
        params![manufacturer.id, manufacturer.name, manufacturer.slug],
    )?;
    Ok(())
}

/// Insert or update a sport.
pub fn upsert_sport(conn: &Connection, sport: &Sport) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO sports (id, name, slug)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             slug = excluded.slug",
        params![sport.id, sport.name, sport.slug],
    )?;
    Ok(())
}

// ── Product Operations ──────────────────────────────────────────────────────

/// Insert or update a product set.
pub fn upsert_product(conn: &Connection, product: &Product) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO products (id, full_display_name, slug, year, is_active, manufacturer_id, sport_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
             full_display_name = excluded.full_display_name,
             slug = excluded.slug,
             year = excluded.year,
             is_active = excluded.is_active,
             manufacturer_id = excluded.manufacturer_id,
             sport_id = excluded.sport_id,
             updated_at = datetime('now')",
        params![
            product.id,
            product.full_display_name,
            product.slug,
            product.year,
            product.is_active,
            product.manufacturer_id,
            product.sport_id,
        ],
    )?;
    Ok(())
}

// ── Parallel Operations ─────────────────────────────────────────────────────

/// Check whether a parallel with this natural key already exists.
pub fn parallel_exists(
    conn: &Connection,
    product_id: &str,
    slug: &str,
    is_auto: bool,
) -> Result<bool, OperationError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM parallels WHERE product_id = ?1 AND slug = ?2 AND is_auto = ?3)",
        params![product_id, slug, is_auto],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Insert a parallel from a classified checklist row. Returns the new id.
///
/// `row.product_id` must already be the real product id.
pub fn insert_parallel(
    conn: &Connection,
    row: &InsertRow,
    sort_order: Option<i64>,
) -> Result<String, OperationError> {
    let b = &row.badges;
    let id = conn.query_row(
        "INSERT INTO parallels (product_id, name, slug, is_auto, is_numbered, serial_max,
                                is_fotl_hit, is_hobby_exclusive, is_retail_exclusive,
                                is_sp, is_ssp, sort_order)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         RETURNING id",
        params![
            row.product_id,
            row.name,
            row.slug,
            b.is_auto,
            b.is_numbered,
            b.serial_max,
            b.is_fotl_hit,
            b.is_hobby_exclusive,
            b.is_retail_exclusive,
            b.is_sp,
            b.is_ssp,
            sort_order,
        ],
        |r| r.get(0),
    )?;
    Ok(id)
}

/// Save the toggleable badge flags of a parallel.
///
/// `serial_max` is not a toggle and is left as stored.
pub fn update_parallel_badges(
    conn: &Connection,
    parallel_id: &str,
    badges: &BadgeSet,
) -> Result<(), OperationError> {
    let updated = conn.execute(
        "UPDATE parallels SET
             is_hobby_exclusive = ?2,
             is_retail_exclusive = ?3,
             is_fotl_hit = ?4,
             is_numbered = ?5,
             is_auto = ?6,
             is_sp = ?7,
             is_ssp = ?8,
             updated_at = datetime('now')
         WHERE id = ?1",
        params![
            parallel_id,
            badges.is_hobby_exclusive,
            badges.is_retail_exclusive,
            badges.is_fotl_hit,
            badges.is_numbered,
            badges.is_auto,
            badges.is_sp,
            badges.is_ssp,
        ],
    )?;
    if updated == 0 {
        return Err(OperationError::not_found("parallel", parallel_id));
    }
    Ok(())
}

// ── Image Operations ────────────────────────────────────────────────────────

/// Record an uploaded image for a parallel. Returns the new row id.
pub fn insert_parallel_image(
    conn: &Connection,
    parallel_id: &str,
    storage_path: &str,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO parallel_images (parallel_id, storage_path) VALUES (?1, ?2)",
        params![parallel_id, storage_path],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete an image record by id, returning its storage path.
pub fn delete_parallel_image(conn: &Connection, image_id: i64) -> Result<String, OperationError> {
    let path: Option<String> = conn
        .query_row(
            "DELETE FROM parallel_images WHERE id = ?1 RETURNING storage_path",
            params![image_id],
            |row| row.get(0),
        )
        .optional()?;
    path.ok_or_else(|| OperationError::not_found("parallel_image", image_id))
}

// ── Seeding ─────────────────────────────────────────────────────────────────

/// Load the YAML catalog directory and upsert everything into the database.
///
/// Reference data is written before products so foreign keys resolve.
pub fn seed_from_catalog(
    conn: &Connection,
    catalog_dir: &std::path::Path,
) -> Result<SeedStats, OperationError> {
    let (manufacturers, sports, products) = cardcheck_catalog::yaml::load_catalog(catalog_dir)?;

    let mut stats = SeedStats::default();
    let tx = conn.unchecked_transaction()?;

    for manufacturer in &manufacturers {
        upsert_manufacturer(&tx, manufacturer)?;
        stats.manufacturers += 1;
    }

    for sport in &sports {
        upsert_sport(&tx, sport)?;
        stats.sports += 1;
    }

    for product in &products {
        upsert_product(&tx, product)?;
        stats.products += 1;
    }

    tx.commit()?;
    Ok(stats)
}

/// Statistics from seeding the database.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub manufacturers: usize,
    pub sports: usize,
    pub products: usize,
}

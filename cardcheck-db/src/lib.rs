//! SQLite persistence layer for the card catalog.
//!
//! Mirrors the backend schema (manufacturers, sports, products, parallels,
//! parallel images) locally, backed by SQLite (via rusqlite with bundled
//! feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, SeedStats, delete_parallel_image, insert_parallel, insert_parallel_image,
    parallel_exists, seed_from_catalog, update_parallel_badges, upsert_manufacturer,
    upsert_product, upsert_sport,
};
pub use queries::{
    CatalogStats, active_products, catalog_stats, find_parallel_by_slug, find_product_by_slug,
    images_for_product, parallels_for_product,
};
pub use schema::{SchemaError, open_database, open_memory};

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::commands::open_store;
use crate::settings::Settings;

pub(crate) fn run_catalog_stats(settings: &Settings, db: Option<PathBuf>) -> Result<(), CliError> {
    let db_path = settings.db_path(db.clone());

    if !db_path.exists() {
        log::warn!("No catalog database found at {}", db_path.display());
        log::info!("Run 'cardcheck catalog seed' to create one.");
        return Ok(());
    }

    let (conn, db_path) = open_store(settings, db)?;

    let stats = cardcheck_db::catalog_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query catalog stats: {}", e)))?;

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Manufacturers:  {:>8}", stats.manufacturers);
    log::info!("  Sports:         {:>8}", stats.sports);
    log::info!(
        "  Sets:           {:>8} ({} active)",
        stats.products,
        stats.active_products,
    );
    log::info!(
        "  Parallels:      {:>8} ({} autograph)",
        stats.parallels,
        stats.auto_parallels,
    );
    log::info!("  Images:         {:>8}", stats.images);

    Ok(())
}

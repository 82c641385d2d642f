use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::commands::open_store;
use crate::settings::Settings;

/// Load the YAML catalog into the database.
pub(crate) fn run_catalog_seed(
    settings: &Settings,
    db: Option<PathBuf>,
    catalog_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let catalog_dir = settings.catalog_dir(catalog_dir);
    if !catalog_dir.is_dir() {
        return Err(CliError::not_found(format!(
            "Catalog directory not found at {}",
            catalog_dir.display()
        )));
    }

    let (conn, db_path) = open_store(settings, db)?;

    let stats = cardcheck_db::seed_from_catalog(&conn, &catalog_dir).map_err(|e| {
        CliError::database(format!(
            "Failed to seed from {}: {}",
            catalog_dir.display(),
            e
        ))
    })?;

    log::info!(
        "{}",
        format!("Seeded {}", db_path.display()).if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("  Manufacturers: {}", stats.manufacturers);
    log::info!("  Sports:        {}", stats.sports);
    log::info!("  Sets:          {}", stats.products);

    Ok(())
}

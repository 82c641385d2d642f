//! Card image upload and delete.
//!
//! Images are stored under the configured image root at the path recorded in
//! `parallel_images.storage_path`.

use std::path::{Path, PathBuf};

use cardcheck_catalog::{ImageIndex, ImageSide, new_image_path, short_path};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::commands::{open_store, require_parallel, require_product};
use crate::settings::Settings;

/// Copy an image into storage and record it for the parallel.
pub(crate) fn run_image_upload(
    settings: &Settings,
    db: Option<PathBuf>,
    product_slug: &str,
    parallel_slug: &str,
    side: ImageSide,
    file: &Path,
) -> Result<(), CliError> {
    if !file.is_file() {
        return Err(CliError::not_found(format!(
            "File not found: {}",
            file.display()
        )));
    }
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (conn, _) = open_store(settings, db)?;
    let product = require_product(&conn, product_slug)?;
    let parallel = require_parallel(&conn, &product, parallel_slug)?;

    let storage_path = new_image_path(&product.id, &parallel.id, side, &file_name);
    let dest = settings.image_root().join(&storage_path);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::storage(format!("{}: {}", parent.display(), e)))?;
    }
    std::fs::copy(file, &dest)
        .map_err(|e| CliError::storage(format!("Failed to upload {} image: {}", side, e)))?;

    if let Err(e) = cardcheck_db::insert_parallel_image(&conn, &parallel.id, &storage_path) {
        // Leave no unreferenced file behind
        if let Err(rm) = std::fs::remove_file(&dest) {
            log::warn!("Could not remove {}: {}", dest.display(), rm);
        }
        return Err(e.into());
    }

    log::info!(
        "{} {} image for {}: {}",
        "Uploaded".if_supports_color(Stderr, |t| t.green()),
        side,
        parallel.slug,
        short_path(&storage_path, 60),
    );
    Ok(())
}

/// Delete the primary image of one side: stored file first, then the row.
pub(crate) fn run_image_delete(
    settings: &Settings,
    db: Option<PathBuf>,
    product_slug: &str,
    parallel_slug: &str,
    side: ImageSide,
) -> Result<(), CliError> {
    let (conn, _) = open_store(settings, db)?;
    let product = require_product(&conn, product_slug)?;
    let parallel = require_parallel(&conn, &product, parallel_slug)?;

    let images = ImageIndex::build(&cardcheck_db::images_for_product(&conn, &product.id)?);
    let image = images
        .image(&parallel.id, side)
        .ok_or_else(|| CliError::not_found(format!("No {side} image found to delete.")))?;

    let stored = settings.image_root().join(&image.storage_path);
    match std::fs::remove_file(&stored) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("Stored file already missing: {}", stored.display());
        }
        Err(e) => {
            return Err(CliError::storage(format!(
                "Failed to delete {} image: {}",
                side, e
            )));
        }
    }

    cardcheck_db::delete_parallel_image(&conn, image.id)?;

    log::info!(
        "{} {} image for {}: {}",
        "Deleted".if_supports_color(Stderr, |t| t.yellow()),
        side,
        parallel.slug,
        short_path(&image.storage_path, 60),
    );
    Ok(())
}

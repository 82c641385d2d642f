use std::path::{Path, PathBuf};

use cardcheck_import::{ImportProgress, LogProgress, apply_rows, classify, load_workbook};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::commands::{open_store, require_product};
use crate::progress::BarProgress;
use crate::settings::Settings;

/// Classify a checklist workbook and insert its parallels into a set.
pub(crate) fn run_catalog_apply(
    settings: &Settings,
    db: Option<PathBuf>,
    path: &Path,
    product_slug: &str,
    dry_run: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let (conn, _) = open_store(settings, db)?;
    let product = require_product(&conn, product_slug)?;

    let workbook = load_workbook(path)?;
    let report = classify(&workbook, &LogProgress);

    if report.rows.is_empty() {
        log::warn!("No parallels found in {}", path.display());
        return Ok(());
    }

    if dry_run {
        log::info!(
            "{}",
            format!(
                "Would apply {} parallel(s) to {}",
                report.rows.len(),
                product.name
            )
            .if_supports_color(Stderr, |t| t.bold()),
        );
        for row in &report.rows {
            let exists =
                cardcheck_db::parallel_exists(&conn, &product.id, &row.slug, row.badges.is_auto)?;
            let status = if exists { "exists" } else { "new" };
            log::info!("  {:<6} {}  ({})", status, row.name, row.slug);
        }
        return Ok(());
    }

    let progress = BarProgress::new(quiet);
    progress.on_phase(&format!(
        "Applying {} row(s) to {}",
        report.rows.len(),
        product.slug
    ));
    let stats = apply_rows(&conn, &product.id, &report.rows, Some(&progress))?;
    progress.finish();

    log::info!(
        "{}",
        format!("Applied checklist to {}", product.name).if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("  Created:  {}", stats.created);
    log::info!("  Existing: {}", stats.existing);

    Ok(())
}

use std::path::PathBuf;

use cardcheck_catalog::{ImageIndex, ImageSide, badge_checklist, display_parallel_name, short_path};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::commands::{mark, open_store, require_product};
use crate::settings::Settings;

/// Show a set with each parallel's badge checklist and images.
pub(crate) fn run_catalog_show(
    settings: &Settings,
    db: Option<PathBuf>,
    slug: &str,
) -> Result<(), CliError> {
    let (conn, _) = open_store(settings, db)?;
    let product = require_product(&conn, slug)?;
    let parallels = cardcheck_db::parallels_for_product(&conn, &product.id)?;
    let images = ImageIndex::build(&cardcheck_db::images_for_product(&conn, &product.id)?);

    log::info!("{}", product.name.if_supports_color(Stderr, |t| t.bold()));
    log::info!(
        "  {} \u{2022} {} \u{2022} {}",
        product.sport_name,
        product.manufacturer_name,
        product.year,
    );
    log::info!("  {} parallel(s)", parallels.len());
    crate::log_blank();

    if parallels.is_empty() {
        log::info!("No parallels have been added to this set yet.");
        return Ok(());
    }

    for parallel in &parallels {
        let kind = if parallel.badges.is_auto { " (auto)" } else { "" };
        log::info!(
            "{}{}  {}",
            display_parallel_name(&parallel.name).if_supports_color(Stderr, |t| t.cyan()),
            kind,
            parallel.slug.if_supports_color(Stderr, |t| t.dimmed()),
        );

        for item in badge_checklist(&parallel.badges) {
            log::info!("    {} {}", mark(item.active), item.label);
        }

        for side in [ImageSide::Front, ImageSide::Back] {
            match images.image(&parallel.id, side) {
                Some(image) => log::info!(
                    "    {:<5} {}",
                    side.as_str(),
                    short_path(&image.storage_path, 60)
                ),
                None => log::info!(
                    "    {:<5} {}",
                    side.as_str(),
                    "(no image)".if_supports_color(Stderr, |t| t.dimmed())
                ),
            }
        }
    }

    Ok(())
}

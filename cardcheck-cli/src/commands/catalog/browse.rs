use std::path::PathBuf;

use cardcheck_catalog::{BrowseFilter, Facets, facets, filter_and_sort, group_products};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use super::truncate_str;
use crate::CliError;
use crate::commands::open_store;
use crate::settings::Settings;

/// List active sets matching the filter, grouped by sport and manufacturer.
pub(crate) fn run_catalog_browse(
    settings: &Settings,
    db: Option<PathBuf>,
    filter: BrowseFilter,
    show_facets: bool,
) -> Result<(), CliError> {
    let (conn, _) = open_store(settings, db)?;
    let products = cardcheck_db::active_products(&conn)?;

    if show_facets {
        log_facets(&facets(&products));
    }

    let matching = filter_and_sort(&products, &filter);
    if matching.is_empty() {
        log::info!("No sets match these filters.");
        return Ok(());
    }

    for group in group_products(&matching) {
        log::info!("{}", group.label.if_supports_color(Stderr, |t| t.bold()));
        for p in &group.products {
            log::info!(
                "  {}  {:<50}  {}",
                p.year,
                truncate_str(&p.name, 50),
                p.slug.if_supports_color(Stderr, |t| t.dimmed()),
            );
        }
        crate::log_blank();
    }

    log::info!(
        "{} of {} set(s), sorted {}",
        matching.len(),
        products.len(),
        filter.sort.as_str(),
    );
    Ok(())
}

fn log_facets(facets: &Facets) {
    let join = |items: Vec<String>| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    };

    log::info!(
        "Sports:        {}",
        join(facets.sports.iter().map(|f| format!("{} ({})", f.name, f.slug)).collect())
    );
    log::info!(
        "Manufacturers: {}",
        join(
            facets
                .manufacturers
                .iter()
                .map(|f| format!("{} ({})", f.name, f.slug))
                .collect()
        )
    );
    log::info!(
        "Years:         {}",
        join(facets.years.iter().map(i32::to_string).collect())
    );
    crate::log_blank();
}

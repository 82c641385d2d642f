use std::path::PathBuf;

use cardcheck_catalog::{BadgeKey, BadgeSet, Parallel, changed_badges, display_parallel_name};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::commands::catalog::truncate_str;
use crate::commands::{mark, open_store, require_parallel, require_product};
use crate::settings::Settings;

/// Show the badge grid of a set, or show and toggle one parallel's badges.
pub(crate) fn run_admin_badges(
    settings: &Settings,
    db: Option<PathBuf>,
    product_slug: &str,
    parallel_slug: Option<&str>,
    assignments: &[(BadgeKey, bool)],
) -> Result<(), CliError> {
    let (conn, _) = open_store(settings, db)?;
    let product = require_product(&conn, product_slug)?;

    let Some(parallel_slug) = parallel_slug else {
        if !assignments.is_empty() {
            return Err(CliError::usage("--set requires a parallel slug"));
        }
        let parallels = cardcheck_db::parallels_for_product(&conn, &product.id)?;
        log_badge_grid(&product.name, &parallels);
        return Ok(());
    };

    let parallel = require_parallel(&conn, &product, parallel_slug)?;
    if assignments.is_empty() {
        log_badges(&parallel, &parallel.badges);
        return Ok(());
    }

    let edited = apply_assignments(parallel.badges, assignments);
    let changed = changed_badges(&parallel.badges, &edited);
    if changed.is_empty() {
        log::info!("No badge changes to save.");
        return Ok(());
    }

    cardcheck_db::update_parallel_badges(&conn, &parallel.id, &edited)?;

    let labels: Vec<String> = changed
        .iter()
        .map(|&key| format!("{}={}", key.label(), edited.get(key)))
        .collect();
    log::info!(
        "{} {}",
        "Saved".if_supports_color(Stderr, |t| t.green()),
        labels.join(", "),
    );
    log_badges(&parallel, &edited);
    Ok(())
}

/// Apply `KEY=BOOL` assignments in order; later ones win.
fn apply_assignments(initial: BadgeSet, assignments: &[(BadgeKey, bool)]) -> BadgeSet {
    let mut badges = initial;
    for &(key, value) in assignments {
        badges.set(key, value);
    }
    badges
}

fn log_badges(parallel: &Parallel, badges: &BadgeSet) {
    log::info!(
        "{}  {}",
        display_parallel_name(&parallel.name).if_supports_color(Stderr, |t| t.cyan()),
        parallel.slug.if_supports_color(Stderr, |t| t.dimmed()),
    );
    for key in BadgeKey::ALL {
        log::info!("  {} {:<7} {}", mark(badges.get(key)), key.label(), key.column());
    }
    if let Some(max) = badges.serial_max {
        log::info!("  serial_max = {}", max);
    }
}

fn log_badge_grid(product_name: &str, parallels: &[Parallel]) {
    log::info!("{}", product_name.if_supports_color(Stderr, |t| t.bold()));
    if parallels.is_empty() {
        log::info!("No parallels have been added to this set yet.");
        return;
    }

    let header: Vec<String> = BadgeKey::ALL
        .iter()
        .map(|k| format!("{:^7}", k.label()))
        .collect();
    log::info!("  {:<36} {}", "Parallel", header.join(""));

    for p in parallels {
        let cells: Vec<String> = BadgeKey::ALL
            .iter()
            .map(|&k| format!("{:^7}", mark(p.badges.get(k))))
            .collect();
        log::info!("  {:<36} {}", truncate_str(&p.slug, 36), cells.join(""));
    }
}

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;
use crate::settings::{Settings, settings_path};

/// Show the settings file and the paths it resolves to.
pub(crate) fn run_config_show(settings: &Settings, db: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "cardcheck Configuration".if_supports_color(Stderr, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stderr, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    log::info!("  Database:    {}", settings.db_path(db).display());
    log::info!("  Image root:  {}", settings.image_root().display());
    log::info!("  Catalog dir: {}", settings.catalog_dir(None).display());

    let contents = toml::to_string_pretty(settings)
        .map_err(|e| CliError::config(format!("Failed to render settings: {}", e)))?;
    if !contents.trim().is_empty() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}

//! cardcheck CLI
//!
//! Command-line interface for classifying trading-card checklists and
//! curating the parallels of each set.

mod cli_types;
mod commands;
mod error;
mod progress;
mod settings;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{AdminAction, CatalogAction, Cli, Commands, ConfigAction, ImageAction};
pub(crate) use error::CliError;
use settings::Settings;

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Log sink that copies every line to a file with ANSI codes removed.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn init_logger(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    if let Some(path) = logfile {
        let file = File::create(path).map_err(|e| {
            CliError::other(format!("Failed to create log file {}: {}", path.display(), e))
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Failed to initialize logging: {}", e)))
}

fn dispatch(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();
    let quiet = cli.quiet;
    let db = cli.db;

    match cli.command {
        Commands::Run(args) => commands::run::run_classify(args),
        Commands::Catalog { action } => match action {
            CatalogAction::Seed { catalog_dir } => {
                commands::catalog::seed::run_catalog_seed(&settings, db, catalog_dir)
            }
            CatalogAction::Browse {
                search,
                sport,
                manufacturer,
                year,
                sort,
                facets,
            } => {
                let filter = cardcheck_catalog::BrowseFilter {
                    search,
                    sport,
                    manufacturer,
                    year,
                    sort,
                };
                commands::catalog::browse::run_catalog_browse(&settings, db, filter, facets)
            }
            CatalogAction::Show { product } => {
                commands::catalog::show::run_catalog_show(&settings, db, &product)
            }
            CatalogAction::Apply {
                path,
                product,
                dry_run,
            } => commands::catalog::apply::run_catalog_apply(
                &settings, db, &path, &product, dry_run, quiet,
            ),
            CatalogAction::Stats => commands::catalog::stats::run_catalog_stats(&settings, db),
        },
        Commands::Admin { action } => match action {
            AdminAction::Badges {
                product,
                parallel,
                set,
            } => commands::admin::badges::run_admin_badges(
                &settings,
                db,
                &product,
                parallel.as_deref(),
                &set,
            ),
            AdminAction::Image { action } => match action {
                ImageAction::Upload {
                    product,
                    parallel,
                    side,
                    file,
                } => commands::admin::images::run_image_upload(
                    &settings, db, &product, &parallel, side, &file,
                ),
                ImageAction::Delete {
                    product,
                    parallel,
                    side,
                } => commands::admin::images::run_image_delete(
                    &settings, db, &product, &parallel, side,
                ),
            },
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, db),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = init_logger(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = dispatch(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

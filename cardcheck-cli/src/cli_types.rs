//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use cardcheck_catalog::{BadgeKey, ImageSide, SortOrder};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(about = "Classify trading-card checklists and curate parallel catalogs", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database path (overrides settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Classify the parallels of a checklist workbook and print SQL and/or JSON
    Run(RunArgs),

    /// Seed, browse, and populate the local catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Curate parallel badges and card images
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Checklist workbook (.xlsx, .xls, .xlsb, .ods)
    #[arg(allow_hyphen_values = true)]
    pub path: Option<String>,

    /// Print the SQL insert block (default when no format is given)
    #[arg(long)]
    pub sql: bool,

    /// Print the classification as JSON
    #[arg(long)]
    pub json: bool,

    /// Write SQL to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Set when a format flag came before the workbook path.
    #[arg(skip)]
    pub flag_before_path: bool,
}

impl Cli {
    /// Parse the process arguments, exiting on a clap error.
    pub(crate) fn parse_args() -> Self {
        Self::from_matches(Self::command().get_matches()).unwrap_or_else(|e| e.exit())
    }

    pub(crate) fn from_matches(matches: ArgMatches) -> Result<Self, clap::Error> {
        let mut cli = Self::from_arg_matches(&matches)?;
        if let (Commands::Run(args), Some(("run", run))) = (&mut cli.command, matches.subcommand())
        {
            args.flag_before_path = flag_before_path(run);
        }
        Ok(cli)
    }
}

/// The workbook must be the first `run` argument; flags only follow it.
fn flag_before_path(run: &ArgMatches) -> bool {
    let Some(path_idx) = run.index_of("path") else {
        return false;
    };
    ["sql", "json", "out"]
        .into_iter()
        .filter(|id| run.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|id| run.index_of(id))
        .any(|idx| idx < path_idx)
}

#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// Load manufacturers, sports, and products from YAML into the database
    Seed {
        /// Path to catalog YAML directory
        #[arg(long)]
        catalog_dir: Option<PathBuf>,
    },

    /// List active sets grouped by sport and manufacturer
    Browse {
        /// Match set, manufacturer, or sport name, or year
        #[arg(short, long)]
        search: Option<String>,

        /// Sport slug
        #[arg(long)]
        sport: Option<String>,

        /// Manufacturer slug
        #[arg(long)]
        manufacturer: Option<String>,

        /// Release year
        #[arg(long)]
        year: Option<i32>,

        /// Sort order: newest, oldest, az
        #[arg(long, default_value = "newest")]
        sort: SortOrder,

        /// Also list the available filter values
        #[arg(long)]
        facets: bool,
    },

    /// Show a set with its parallels, badges, and images
    Show {
        /// Set slug
        product: String,
    },

    /// Classify a checklist workbook and add its parallels to a set
    Apply {
        /// Checklist workbook
        path: PathBuf,

        /// Set slug to attach the parallels to
        #[arg(short, long)]
        product: String,

        /// Show what would be inserted without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show catalog database statistics
    Stats,
}

#[derive(Subcommand)]
pub(crate) enum AdminAction {
    /// Show or toggle the badges of a set's parallels
    Badges {
        /// Set slug
        product: String,

        /// Parallel slug (all parallels when omitted)
        parallel: Option<String>,

        /// Badge assignment such as sp=true or is_fotl_hit=false (repeatable)
        #[arg(long = "set", value_name = "KEY=BOOL", value_parser = parse_badge_assignment)]
        set: Vec<(BadgeKey, bool)>,
    },

    /// Upload or delete front/back card images
    Image {
        #[command(subcommand)]
        action: ImageAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ImageAction {
    /// Store an image file for one side of a parallel
    Upload {
        /// Set slug
        product: String,
        /// Parallel slug
        parallel: String,
        /// front or back
        side: ImageSide,
        /// Image file to upload
        file: PathBuf,
    },

    /// Delete the image shown for one side of a parallel
    Delete {
        /// Set slug
        product: String,
        /// Parallel slug
        parallel: String,
        /// front or back
        side: ImageSide,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and resolved paths
    Show,

    /// Print the settings file path
    Path,
}

/// Parse `KEY=BOOL` for `--set`.
pub(crate) fn parse_badge_assignment(s: &str) -> Result<(BadgeKey, bool), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=BOOL, got '{s}'"))?;
    let key: BadgeKey = key.parse()?;
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        other => return Err(format!("expected true or false, got '{other}'")),
    };
    Ok((key, value))
}

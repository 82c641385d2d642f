use std::path::{Path, PathBuf};

use cardcheck_import::{LogProgress, classify, load_workbook, to_json, to_sql_insert};

use crate::CliError;
use crate::cli_types::RunArgs;

const USAGE: &str = "Usage: cardcheck run <path-to-workbook> [--sql] [--json] [--out=FILE.sql]";

/// Which outputs to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutputConfig {
    pub sql: bool,
    pub json: bool,
    /// Redirects SQL only; JSON always goes to stdout.
    pub out: Option<PathBuf>,
}

impl OutputConfig {
    /// No format flag means SQL.
    pub(crate) fn from_flags(sql: bool, json: bool, out: Option<PathBuf>) -> Self {
        Self {
            sql: sql || !json,
            json,
            out,
        }
    }
}

/// Classify a checklist workbook and print or write the results.
pub(crate) fn run_classify(args: RunArgs) -> Result<(), CliError> {
    let path = match args.path.as_deref() {
        Some(p) if !p.starts_with("--") && !args.flag_before_path => p,
        _ => return Err(CliError::usage(USAGE)),
    };
    let output = OutputConfig::from_flags(args.sql, args.json, args.out);

    let full_path = std::path::absolute(Path::new(path))?;
    if !full_path.exists() {
        return Err(CliError::not_found(format!(
            "File not found: {}",
            full_path.display()
        )));
    }

    let workbook = load_workbook(&full_path)?;
    let report = classify(&workbook, &LogProgress);

    if output.json {
        let json = to_json(&report.classified).map_err(|e| CliError::import(e.to_string()))?;
        println!("{json}");
    }

    if output.sql {
        let sql = to_sql_insert(&report.rows);
        match &output.out {
            Some(out) => {
                std::fs::write(std::path::absolute(out)?, &sql).map_err(|e| {
                    CliError::other(format!("Failed to write {}: {}", out.display(), e))
                })?;
                println!("Wrote SQL to {}", out.display());
            }
            None => print!("{sql}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_sql() {
        let config = OutputConfig::from_flags(false, false, None);
        assert!(config.sql);
        assert!(!config.json);
    }

    #[test]
    fn json_alone_skips_sql() {
        let config = OutputConfig::from_flags(false, true, None);
        assert!(!config.sql);
        assert!(config.json);
    }

    #[test]
    fn both_flags_kept() {
        let config = OutputConfig::from_flags(true, true, Some(PathBuf::from("a.sql")));
        assert!(config.sql && config.json);
        assert_eq!(config.out, Some(PathBuf::from("a.sql")));
    }

    #[test]
    fn missing_path_is_usage_error() {
        let args = RunArgs {
            path: None,
            sql: false,
            json: false,
            out: None,
            flag_before_path: false,
        };
        assert!(matches!(run_classify(args), Err(CliError::Usage(_))));

        let args = RunArgs {
            path: Some("--bogus".to_string()),
            sql: false,
            json: false,
            out: None,
            flag_before_path: false,
        };
        assert!(matches!(run_classify(args), Err(CliError::Usage(_))));

        let args = RunArgs {
            path: Some("list.xlsx".to_string()),
            sql: false,
            json: true,
            out: None,
            flag_before_path: true,
        };
        assert!(matches!(run_classify(args), Err(CliError::Usage(_))));
    }

    #[test]
    fn missing_file_reports_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.xlsx");
        let args = RunArgs {
            path: Some(missing.display().to_string()),
            sql: true,
            json: false,
            out: None,
            flag_before_path: false,
        };
        match run_classify(args) {
            Err(CliError::NotFound(msg)) => {
                assert_eq!(msg, format!("File not found: {}", missing.display()));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}

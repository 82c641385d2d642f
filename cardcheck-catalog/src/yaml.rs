//! YAML loading for human-curated catalog data.
//!
//! Loads manufacturer, sport, and product definitions from the `catalog/`
//! directory.

use crate::types::{Manufacturer, Product, Sport};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Result type for [`load_catalog`] containing all loaded catalog data.
pub type CatalogData = (Vec<Manufacturer>, Vec<Sport>, Vec<Product>);

/// Load all manufacturer definitions from YAML files in a directory.
///
/// Each `.yaml` file in the directory should contain a single `Manufacturer`.
pub fn load_manufacturers(dir: &Path) -> Result<Vec<Manufacturer>, YamlError> {
    load_yaml_dir(dir)
}

/// Load all sport definitions from YAML files in a directory.
///
/// Each `.yaml` file should contain a single `Sport`.
pub fn load_sports(dir: &Path) -> Result<Vec<Sport>, YamlError> {
    load_yaml_dir(dir)
}

/// Load all product definitions from YAML files in a directory.
///
/// Each `.yaml` file should contain a YAML sequence (list) of `Product`
/// entries, typically one file per release year.
pub fn load_products(dir: &Path) -> Result<Vec<Product>, YamlError> {
    let mut all = Vec::new();
    for path in yaml_files(dir)? {
        let products: Vec<Product> = parse_file(&path)?;
        all.extend(products);
    }
    Ok(all)
}

/// Load all catalog data from the standard directory layout.
///
/// Expected structure:
/// ```text
/// catalog_dir/
///   manufacturers/
///     panini.yaml
///     topps.yaml
///   sports/
///     basketball.yaml
///     football.yaml
///   products/
///     2024.yaml
///     2025.yaml
/// ```
pub fn load_catalog(catalog_dir: &Path) -> Result<CatalogData, YamlError> {
    let manufacturers = load_manufacturers(&catalog_dir.join("manufacturers"))?;
    let sports = load_sports(&catalog_dir.join("sports"))?;
    let products = load_products(&catalog_dir.join("products"))?;
    Ok((manufacturers, sports, products))
}

/// Generic helper: load all YAML files in a directory, each containing a single `T`.
fn load_yaml_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>, YamlError> {
    yaml_files(dir)?.iter().map(|path| parse_file(path)).collect()
}

/// `.yaml`/`.yml` files in a directory, sorted by file name.
///
/// A missing directory yields no files.
fn yaml_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries.into_iter().map(|e| e.path()).collect())
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

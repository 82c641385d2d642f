//! Persistent settings (`~/.config/cardcheck/settings.toml`) and path
//! resolution.
//!
//! ```toml
//! [store]
//! db_path = "/srv/cards/catalog.db"
//! image_root = "/srv/cards/images"
//!
//! [catalog]
//! dir = "/srv/cards/catalog"
//! ```
//!
//! Every path resolves CLI flag first, then the settings file, then a
//! default under the platform data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub store: StoreSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct StoreSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_root: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct CatalogSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cardcheck").join("settings.toml")
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("cardcheck")
}

impl Settings {
    /// Load the settings file. A missing file gives defaults; an unreadable
    /// one is reported and ignored.
    pub(crate) fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub(crate) fn db_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.store.db_path.clone())
            .unwrap_or_else(|| data_dir().join("catalog.db"))
    }

    pub(crate) fn image_root(&self) -> PathBuf {
        self.store
            .image_root
            .clone()
            .unwrap_or_else(|| data_dir().join("images"))
    }

    pub(crate) fn catalog_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.catalog.dir.clone())
            .unwrap_or_else(|| PathBuf::from("catalog"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let settings = Settings::parse("").unwrap();
        assert!(settings.store.db_path.is_none());
        assert_eq!(settings.catalog_dir(None), PathBuf::from("catalog"));
        assert!(settings.db_path(None).ends_with("cardcheck/catalog.db"));
        assert!(settings.image_root().ends_with("cardcheck/images"));
    }

    #[test]
    fn flag_beats_file() {
        let settings = Settings::parse("[store]\ndb_path = \"/data/a.db\"\n").unwrap();
        assert_eq!(settings.db_path(None), PathBuf::from("/data/a.db"));
        assert_eq!(
            settings.db_path(Some(PathBuf::from("b.db"))),
            PathBuf::from("b.db")
        );
    }

    #[test]
    fn partial_tables_parse() {
        let settings =
            Settings::parse("[catalog]\ndir = \"seed\"\n[store]\nimage_root = \"img\"\n").unwrap();
        assert_eq!(settings.catalog_dir(None), PathBuf::from("seed"));
        assert_eq!(settings.image_root(), PathBuf::from("img"));
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(Settings::parse("[store\n").is_err());
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{error::SettingsError, page::Tab};

pub const DEFAULT_SETTINGS_FILE: &str = "initmd.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Replaces the built-in catalog when set.
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
    pub start_tab: Tab,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "info".into(),
            start_tab: Tab::Overview,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    catalog_path: Option<PathBuf>,
    log_filter: Option<String>,
    start_tab: Option<String>,
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |name| {
        std::env::var(name).ok()
    })
}

/// Reads `path` if it exists, then applies environment overrides looked up
/// through `env`. Later sources win.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_cfg: SettingsFile =
            toml::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(v) = file_cfg.catalog_path {
            settings.catalog_path = Some(v);
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
        if let Some(v) = file_cfg.start_tab {
            settings.start_tab = parse_tab(&v)?;
        }
    }

    let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = lookup("INITMD_CATALOG") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("APP__CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    if let Some(v) = lookup("INITMD_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = lookup("APP__START_TAB") {
        settings.start_tab = parse_tab(&v)?;
    }

    Ok(settings)
}

fn parse_tab(raw: &str) -> Result<Tab, SettingsError> {
    Tab::from_key(raw).ok_or_else(|| SettingsError::InvalidValue {
        key: "start_tab",
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings =
            load_settings_from(&dir.path().join("initmd.toml"), no_env).expect("settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_are_applied() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("initmd.toml");
        fs::write(
            &path,
            "catalog_path = \"./catalog.toml\"\nlog_filter = \"debug\"\nstart_tab = \"templates\"\n",
        )
        .expect("write settings");

        let settings = load_settings_from(&path, no_env).expect("settings");
        assert_eq!(settings.catalog_path, Some(PathBuf::from("./catalog.toml")));
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.start_tab, Tab::Templates);
    }

    #[test]
    fn env_overrides_file_and_app_prefix_wins() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("initmd.toml");
        fs::write(&path, "log_filter = \"warn\"\n").expect("write settings");

        let vars: HashMap<&str, &str> = HashMap::from([
            ("INITMD_LOG", "trace"),
            ("APP__LOG_FILTER", "gallery_core=debug"),
            ("INITMD_CATALOG", "/tmp/a.toml"),
            ("APP__CATALOG_PATH", "  "),
            ("APP__START_TAB", "Guide"),
        ]);
        let settings =
            load_settings_from(&path, |name| vars.get(name).map(|v| v.to_string()))
                .expect("settings");

        assert_eq!(settings.log_filter, "gallery_core=debug");
        assert_eq!(settings.catalog_path, Some(PathBuf::from("/tmp/a.toml")));
        assert_eq!(settings.start_tab, Tab::Guide);
    }

    #[test]
    fn unknown_tab_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_settings_from(&dir.path().join("none.toml"), |name| {
            (name == "APP__START_TAB").then(|| "pricing".to_string())
        })
        .expect_err("invalid tab");
        assert!(matches!(
            err,
            SettingsError::InvalidValue { key: "start_tab", .. }
        ));
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("initmd.toml");
        fs::write(&path, "log_filter = [").expect("write settings");
        let err = load_settings_from(&path, no_env).expect_err("parse error");
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}

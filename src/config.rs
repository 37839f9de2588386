//! User configuration and metadata resolution.
//!
//! The generator itself never asks the OS who the current user is. Author
//! and license come from, in order: an explicit CLI flag, the
//! `SKELGEN_AUTHOR`/`SKELGEN_LICENSE` environment variables, the optional
//! `~/.skelgen/config.toml`, and finally built-in defaults.

use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Datelike;
use serde::Deserialize;

use crate::builder::Metadata;

pub const AUTHOR_ENV: &str = "SKELGEN_AUTHOR";
pub const LICENSE_ENV: &str = "SKELGEN_LICENSE";

const DEFAULT_AUTHOR: &str = "unknown";
const DEFAULT_LICENSE: &str = "GNU GPLv3";

/// Contents of `~/.skelgen/config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub author: Option<String>,
    pub license: Option<String>,
}

/// Default config location, `~/.skelgen/config.toml`.
pub fn default_config_path() -> Option<Utf8PathBuf> {
    let home = dirs::home_dir()?;
    let path = home.join(".skelgen").join("config.toml");
    Utf8PathBuf::from_path_buf(path).ok()
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> Result<UserConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {path}"))
}

/// Load `~/.skelgen/config.toml` when it exists, an empty config otherwise.
pub fn load_default() -> Result<UserConfig> {
    match default_config_path() {
        Some(path) if path.as_std_path().exists() => load_from_path(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Resolve the metadata bag for one generation run from explicit flags, the
/// environment, and an already-loaded config.
pub fn resolve_metadata(
    author_flag: Option<String>,
    license_flag: Option<String>,
    config: UserConfig,
) -> Metadata {
    let author = author_flag
        .or_else(|| std::env::var(AUTHOR_ENV).ok())
        .or(config.author)
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_owned());

    let license = license_flag
        .or_else(|| std::env::var(LICENSE_ENV).ok())
        .or(config.license)
        .unwrap_or_else(|| DEFAULT_LICENSE.to_owned());

    Metadata {
        author,
        license,
        year: chrono::Local::now().year(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file(contents: &str) -> Utf8PathBuf {
        let mut path = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        path.push(format!("skelgen-config-{ts}.toml"));
        fs::write(&path, contents).unwrap();
        Utf8PathBuf::from_path_buf(path).unwrap()
    }

    #[test]
    fn parses_full_config() {
        let path = unique_temp_file("author = 'Grace Hopper'\nlicense = 'BSD-3-Clause'\n");
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.author.as_deref(), Some("Grace Hopper"));
        assert_eq!(config.license.as_deref(), Some("BSD-3-Clause"));
        let _ = fs::remove_file(path.as_std_path());
    }

    #[test]
    fn missing_fields_default_to_none() {
        let path = unique_temp_file("");
        let config = load_from_path(&path).unwrap();
        assert!(config.author.is_none());
        assert!(config.license.is_none());
        let _ = fs::remove_file(path.as_std_path());
    }

    #[test]
    fn garbage_config_is_an_error() {
        let path = unique_temp_file("author = [not toml");
        assert!(load_from_path(&path).is_err());
        let _ = fs::remove_file(path.as_std_path());
    }

    #[test]
    fn flags_win_over_everything() {
        let config = UserConfig {
            author: Some("Config Author".to_owned()),
            license: Some("Config License".to_owned()),
        };
        let metadata = resolve_metadata(
            Some("Flag Author".to_owned()),
            Some("Flag License".to_owned()),
            config,
        );
        assert_eq!(metadata.author, "Flag Author");
        assert_eq!(metadata.license, "Flag License");
        assert!(metadata.year >= 2026);
    }

    #[test]
    fn flags_win_over_config_values() {
        let config = UserConfig {
            author: Some("Config Author".to_owned()),
            license: None,
        };
        let metadata = resolve_metadata(None, Some("Flag License".to_owned()), config);
        // Author may come from the config or an ambient SKELGEN_AUTHOR, but
        // never the built-in default once the config supplies one.
        assert_ne!(metadata.author, "unknown");
        assert_eq!(metadata.license, "Flag License");
    }
}

use crate::error::{Result, ShelfError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_DIR: &str = "snipshelf";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

/// User configuration, read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base of the gallery location used in the header and embed markup
    pub base_url: String,
    pub download_dir: PathBuf,
    /// JSON catalog replacing the built-in snippets
    pub catalog: Option<PathBuf>,
    pub redirect_delay_ms: u64,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            catalog: None,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            log_file: data_dir.join("snipshelf.log"),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit `path`, which must exist, or from the default
    /// location, where a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(ShelfError::ConfigNotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content).map_err(|source| ShelfError::Config { path, source })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().redirect_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn keys_override_defaults() {
        let config = Config::from_toml(
            r#"
            base_url = "https://snippets.example.com"
            redirect_delay_ms = 10
            catalog = "/tmp/catalog.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://snippets.example.com");
        assert_eq!(config.redirect_delay_ms, 10);
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.download_dir, Config::default().download_dir);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        match Config::load(Some(&absent)) {
            Err(ShelfError::ConfigNotFound(reported)) => assert_eq!(reported, absent),
            other => panic!("expected missing config error, got {other:?}"),
        }
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "redirect_delay_ms = 250").unwrap();
        assert_eq!(
            Config::load(Some(&path)).unwrap().redirect_delay(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn unknown_keys_are_reported_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = \"pink\"").unwrap();

        match Config::load(Some(&path)) {
            Err(ShelfError::Config { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}

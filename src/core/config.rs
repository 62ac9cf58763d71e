//! Application configuration.
//!
//! Read once at startup from `config.toml` in the user's config directory
//! (typically ~/.config/soundscape/config.toml). Every key is optional; a
//! missing file yields the built-in sample catalog with default settings.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use super::catalog::{Catalog, builtin_items};
use super::error::{Result, SoundscapeError};
use super::playback::{DEFAULT_VOLUME, sanitize_volume};
use super::types::CatalogItem;

const APP_DIR: &str = "soundscape";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f32,
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
    #[serde(default = "default_paused_icon")]
    pub paused_icon: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default = "builtin_items")]
    pub items: Vec<CatalogItem>,
}

fn default_initial_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}

fn default_paused_icon() -> PathBuf {
    PathBuf::from("icons/pause.svg")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// XDG_CONFIG_HOME wins when set; an empty value counts as unset.
fn config_dir_from(xdg_config: Option<String>) -> Result<PathBuf> {
    let config_dir = match xdg_config.filter(|v| !v.is_empty()) {
        Some(xdg_config) => PathBuf::from(xdg_config).join(APP_DIR),
        None => dirs::config_dir()
            .ok_or(SoundscapeError::NoConfigDir)?
            .join(APP_DIR),
    };
    Ok(config_dir)
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            asset_root: default_asset_root(),
            paused_icon: default_paused_icon(),
            log_level: default_log_level(),
            log_file: None,
            items: builtin_items(),
        }
    }

    pub fn config_dir() -> Result<PathBuf> {
        config_dir_from(std::env::var("XDG_CONFIG_HOME").ok())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| SoundscapeError::io(path, e))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Validated catalog with asset paths joined onto `asset_root`.
    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::new(self.items.clone())?.resolve(&self.asset_root))
    }

    pub fn paused_icon_path(&self) -> PathBuf {
        self.asset_root.join(&self.paused_icon)
    }

    pub fn volume(&self) -> f32 {
        sanitize_volume(self.initial_volume, default_initial_volume())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.initial_volume, 0.5);
        assert_eq!(config.asset_root, PathBuf::from("assets"));
        assert_eq!(
            config.paused_icon_path(),
            PathBuf::from("assets/icons/pause.svg")
        );
        assert_eq!(config.level_filter(), LevelFilter::Info);
        assert_eq!(config.items.len(), 3);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.items, builtin_items());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "initial_volume = 0.8\nlog_level = \"debug\"\n");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.initial_volume, 0.8);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.asset_root, PathBuf::from("assets"));
        assert_eq!(config.items.len(), 3);
    }

    #[test]
    fn test_custom_items() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
asset_root = "/srv/ambience"

[[items]]
id = 10
sound = "sounds/forest.ogg"
bg = "bg/forest.jpg"
icon = "icons/tree.svg"

[[items]]
id = 11
sound = "sounds/sea.ogg"
background = "bg/sea.jpg"
icon = "icons/wave.png"
"#,
        );

        let config = Config::load_from(&path).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);

        let forest = catalog.get(10).unwrap();
        assert_eq!(forest.background, PathBuf::from("/srv/ambience/bg/forest.jpg"));
        assert_eq!(
            catalog.get(11).unwrap().sound,
            PathBuf::from("/srv/ambience/sounds/sea.ogg")
        );
    }

    #[test]
    fn test_duplicate_ids_rejected_at_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
[[items]]
id = 1
sound = "a.mp3"
bg = "a.jpg"
icon = "a.svg"

[[items]]
id = 1
sound = "b.mp3"
bg = "b.jpg"
icon = "b.svg"
"#,
        );

        let config = Config::load_from(&path).unwrap();
        assert!(matches!(
            config.catalog(),
            Err(SoundscapeError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "initial_volume = [oops");

        assert!(matches!(
            Config::load_from(&path),
            Err(SoundscapeError::Toml(_))
        ));
    }

    #[test]
    fn test_non_finite_volume_uses_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "initial_volume = nan\n");

        let config = Config::load_from(&path).unwrap();
        assert!(config.initial_volume.is_nan());
        assert_eq!(config.volume(), 0.5);
    }

    #[test]
    fn test_config_dir_from_xdg() {
        assert_eq!(
            config_dir_from(Some("/tmp/xdg".to_string())).unwrap(),
            PathBuf::from("/tmp/xdg/soundscape")
        );

        // empty means unset: never a relative "soundscape" dir
        if let Ok(dir) = config_dir_from(Some(String::new())) {
            assert!(dir.is_absolute());
            assert!(dir.ends_with(APP_DIR));
        }
    }

    #[test]
    fn test_volume_is_clamped_and_bad_level_falls_back() {
        let config = Config {
            initial_volume: 3.0,
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert_eq!(config.volume(), 1.0);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}

use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::gallery::{Catalog, WallpaperDescriptor};

const CONFIG_PATH_ENV_VAR: &str = "DESKPICK_CONFIG_FILE";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("deskpick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".deskpick.toml"));
    }

    locations
}

/// Loads the configuration from `path` if given, otherwise from the first
/// existing default location. Falls back to the defaults if there is none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => Config::from_file(&path),
        None => {
            log::info!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    initial_selected_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    tick_rate_ms: u64,
    pub wallpaper_dir: PathBuf,
    pub calendar: CalendarConfig,
    wallpapers: Option<Vec<WallpaperDescriptor>>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            wallpaper_dir: PathBuf::from("."),
            calendar: CalendarConfig::default(),
            wallpapers: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        log::info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Config::parse(&content).map_err(|e| {
            let msg = format!(
                "{} (in '{}')",
                e.message.as_deref().unwrap_or_default(),
                path.display()
            );
            e.with_msg(&msg)
        })
    }

    pub fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;

        // Surface bad values at load time rather than when first used
        config.catalog()?;
        config.initial_selected_date()?;

        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.wallpapers {
            Some(wallpapers) => Catalog::new(wallpapers.clone()),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn initial_selected_date(&self) -> Result<Option<NaiveDate>> {
        match &self.calendar.initial_selected_date {
            Some(date) => Ok(Some(NaiveDate::parse_from_str(date, DATE_FORMAT)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::gallery::WallpaperId;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
        assert_eq!(config.wallpaper_dir, PathBuf::from("."));
        assert_eq!(config.catalog().unwrap().len(), 9);
        assert_eq!(config.initial_selected_date().unwrap(), None);
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            tick_rate_ms = 250
            wallpaper_dir = "/usr/share/backgrounds"

            [calendar]
            initial_selected_date = "2024-02-29"

            [[wallpapers]]
            id = 7
            src = "dunes.jpg"
            alt = "Dunes"

            [[wallpapers]]
            id = 2
            src = "lake.png"
            alt = "Lake"
            "#,
        )
        .unwrap();

        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(
            config.initial_selected_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().id, WallpaperId(7));
        assert_eq!(catalog.get(1).unwrap().alt, "Lake");
    }

    #[test]
    fn empty_wallpaper_list_is_allowed() {
        let config = Config::parse("wallpapers = []").unwrap();
        assert!(config.catalog().unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_date() {
        let err = Config::parse("[calendar]\ninitial_selected_date = \"2023-02-29\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidDate));
    }

    #[test]
    fn rejects_duplicate_wallpapers() {
        let err = Config::parse(
            r#"
            [[wallpapers]]
            id = 1
            src = "a.jpg"
            alt = "A"

            [[wallpapers]]
            id = 1
            src = "b.jpg"
            alt = "B"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::DuplicateWallpaper));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse("tick_rate_ms = \"fast\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }
}

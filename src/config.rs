use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::engine::Rules;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "DOOR_CRAWL_CONFIG";

/// Settings file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "door-crawl.toml";

pub const DEFAULT_MAP_PATH: &str = "maps/custommap.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file '{path}' is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("settings file '{path}': {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Everything the binary needs before the first prompt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub map_path: PathBuf,
    /// Fixed seed for a reproducible game; entropy when absent.
    pub seed: Option<u64>,
    pub rules: Rules,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            seed: None,
            rules: Rules::default(),
        }
    }
}

impl Settings {
    /// Read settings from `$DOOR_CRAWL_CONFIG`, else `./door-crawl.toml` if it
    /// exists, else use the defaults.
    pub fn discover() -> Result<Settings, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Settings::load(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Settings::load(local);
        }

        debug!("no settings file, using defaults");
        Ok(Settings::default())
    }

    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Settings::parse(&contents, path)?;
        info!("loaded settings from '{}'", path.display());
        Ok(settings)
    }

    /// Parse settings text that did not come from a file.
    pub fn from_toml(contents: &str) -> Result<Settings, ConfigError> {
        Settings::parse(contents, Path::new(""))
    }

    fn parse(contents: &str, path: &Path) -> Result<Settings, ConfigError> {
        let settings: Settings = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.check().map_err(|message| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(settings)
    }

    fn check(&self) -> Result<(), String> {
        let r = &self.rules;
        let chances = [
            ("move_encounter_chance", r.move_encounter_chance),
            ("rest_encounter_chance", r.rest_encounter_chance),
            ("flee_encounter_chance", r.flee_encounter_chance),
            ("ignore_escape_chance", r.ignore_escape_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("rules.{} must be between 0 and 100, got {}", name, value));
            }
        }
        if !(0.0..=1.0).contains(&r.rest_heal_fraction) {
            return Err(format!(
                "rules.rest_heal_fraction must be between 0 and 1, got {}",
                r.rest_heal_fraction
            ));
        }
        Ok(())
    }
}

use crate::constants::{get_reference_year_override, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_REFERENCE_YEAR};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user settings read from `<config dir>/classroom/config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub current_year: Option<i32>,
    pub color: Option<bool>,
}

impl Settings {
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring malformed settings at {}: {}", path.display(), e);
                Settings::default()
            }),
            Err(_) => {
                debug!("No settings file at {}", path.display());
                Settings::default()
            }
        }
    }

    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Settings::default(),
        }
    }

    /// Year ages are computed against: CLI flag, then environment, then file, then default.
    pub fn reference_year(&self, cli_override: Option<i32>) -> i32 {
        resolve_reference_year(cli_override, get_reference_year_override(), self.current_year)
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

pub fn resolve_reference_year(cli: Option<i32>, env: Option<i32>, file: Option<i32>) -> i32 {
    cli.or(env).or(file).unwrap_or(DEFAULT_REFERENCE_YEAR)
}

pub fn get_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
    debug!("Settings path: {}", path.display());
    Some(path)
}

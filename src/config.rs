use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::collector::EmptyCheck;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) date_column: Option<String>,
    #[serde(default)]
    pub(crate) sum_column: Option<String>,
    #[serde(default)]
    pub(crate) day_title: Option<String>,
    #[serde(default)]
    pub(crate) sum_title: Option<String>,
    #[serde(default)]
    pub(crate) total_title: Option<String>,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) sum_format: Option<String>,
    #[serde(default)]
    pub(crate) empty_check: Option<EmptyCheck>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) summary: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/txcollect/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("txcollect").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/txcollect/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("txcollect").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.txcollect.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".txcollect.toml"));
        }

        paths
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted user preferences.
///
/// The original tool remembered its heading-level sliders between runs;
/// this is the same idea as a config file: the stored values become the
/// defaults for any flag not given on the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toc: TocPrefs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocPrefs {
    /// Lowest heading level included in a generated TOC (1-6)
    #[serde(default = "default_min_level")]
    pub min_level: u8,

    /// Highest heading level included in a generated TOC (1-6)
    #[serde(default = "default_max_level")]
    pub max_level: u8,

    /// Default output format: "markdown" or "html"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for TocPrefs {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            max_level: default_max_level(),
            format: default_format(),
        }
    }
}

fn default_min_level() -> u8 {
    1
}

fn default_max_level() -> u8 {
    6
}

fn default_format() -> String {
    "markdown".to_string()
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdtoc/config.toml
    /// - Linux: ~/.config/mdtoc/config.toml
    /// - Windows: %APPDATA%/mdtoc/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdtoc").join("config.toml"))
    }

    /// Load config from file, or return defaults if the file doesn't exist.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                fs::read_to_string(&path)
                    .ok()
                    .and_then(|contents| toml::from_str(&contents).ok())
            })
            .unwrap_or_default()
    }

    /// Save config to file.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        Ok(())
    }
}

//! Global namedays configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{NamedayError, NamedayResult};
use crate::statistics::SLOVAK_ALPHABET;

fn default_alphabet() -> String {
    SLOVAK_ALPHABET.to_string()
}

fn is_default_alphabet(alphabet: &String) -> bool {
    alphabet == SLOVAK_ALPHABET
}

/// Global configuration at ~/.config/namedays/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedaysConfig {
    /// Calendar file used when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_file: Option<PathBuf>,

    /// Collation order for first-letter statistics.
    #[serde(default = "default_alphabet", skip_serializing_if = "is_default_alphabet")]
    pub alphabet: String,
}

impl Default for NamedaysConfig {
    fn default() -> Self {
        NamedaysConfig {
            calendar_file: None,
            alphabet: default_alphabet(),
        }
    }
}

impl NamedaysConfig {
    pub fn config_path() -> NamedayResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NamedayError::Config("Could not determine config directory".into()))?
            .join("namedays");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first use.
    pub fn load() -> NamedayResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> NamedayResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| NamedayError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| NamedayError::Config(e.to_string()))
    }

    /// The configured calendar file with `~` expanded.
    pub fn calendar_path(&self) -> Option<PathBuf> {
        self.calendar_file.as_ref().map(|file| {
            PathBuf::from(shellexpand::tilde(&file.to_string_lossy()).into_owned())
        })
    }

    pub fn save_to(&self, path: &Path) -> NamedayResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| NamedayError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NamedayError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| NamedayError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> NamedayResult<()> {
        let contents = format!(
            "\
# namedays configuration

# Calendar file to use when --file is not given:
# calendar_file = \"~/namedays.csv\"

# Letter order for first-letter statistics:
# alphabet = \"{}\"
",
            SLOVAK_ALPHABET
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                NamedayError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| NamedayError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

//! The main config loading module for fuzzy-filer.
//!
//! Handles loading and deserializing settings from `config.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for
//! parsing and processing.
//!
//! Also implements writing the default config file for `ff --init`.

use crate::config::{Display, General, InternalGeneral, Keys};
use crate::error::{Error, Result};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FUZZY_FILER_CONFIG";

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    keys: Keys,
}

/// Main configuration struct for fuzzy-filer
/// This struct holds the processed configuration options handed to the session.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    keys: Keys,
}

/// Conversion from RawConfig to Config
/// This handles clamping and parsing of the raw values
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display.clamped(),
            keys: raw.keys,
        }
    }
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from `path`.
    /// If the file does not exist, returns the default configuration.
    /// If it fails to parse, warns on stderr and returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[fuzzy-filer] {}. Using internal defaults.", e);
                tracing::warn!(error = %e, "config rejected");
                Self::default()
            }
        }
    }

    /// Strict variant of [Config::load]: read and parse errors are returned.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Turns the preview pane off regardless of the file (`--no-preview`).
    pub fn disable_preview(&mut self) {
        self.display.set_preview(false);
    }

    /// Determine the default configuration file path.
    /// Checks the FUZZY_FILER_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/fuzzy-filer/config.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("fuzzy-filer/config.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/fuzzy-filer/config.toml");
        }
        PathBuf::from("fuzzy-filer.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

pub(crate) const DEFAULT_TOML: &str = r##"# config.toml - default configuration for fuzzy-filer (ff)

# Note:
# Commented values are the internal defaults.
# Run 'ff --config-help' for a description of every option.

[general]
# Substrings of the relative path, or "*.ext" suffixes. Matching directories are pruned.
exclude_patterns = [
    "node_modules", ".git", ".svn", ".hg", "target", "dist", "build",
    "*.log", ".DS_Store", "__pycache__", ".pytest_cache", ".venv", "venv",
]
# max_depth = 10
# max_files = 100000

[display]
# preview = true
# preview_lines = 20
# icons = false

[keys]
# quit = ["Ctrl+d", "Ctrl+c", "Esc"]
# up = ["Ctrl+p", "Up"]
# down = ["Ctrl+n", "Down"]
# confirm = ["Enter"]
# erase = ["Backspace", "Ctrl+h"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;
    use std::result::Result;
    use tempfile::tempdir;

    #[test]
    fn default_toml_matches_internal_defaults() -> Result<(), Box<dyn error::Error>> {
        let from_file = Config::from_toml(DEFAULT_TOML)?;
        let internal = Config::default();
        assert_eq!(
            from_file.general().exclude_patterns(),
            internal.general().exclude_patterns()
        );
        assert_eq!(
            from_file.display().preview_lines(),
            internal.display().preview_lines()
        );
        assert_eq!(from_file.keys().quit(), internal.keys().quit());
        Ok(())
    }

    #[test]
    fn generate_default_refuses_overwrite() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.toml");
        Config::generate_default(&path)?;
        assert!(path.exists());

        let err = Config::generate_default(&path).err().ok_or("expected an error")?;
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        Ok(())
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nmax_depth = ")?;

        assert!(matches!(
            Config::from_file(&path),
            Err(Error::ConfigParse { .. })
        ));
        let config = Config::load(&path);
        assert!(config.display().preview());
        Ok(())
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = Config::load(Path::new("/path/does/not/exist/config.toml"));
        assert_eq!(config.keys().confirm(), ["Enter".to_string()]);
    }
}

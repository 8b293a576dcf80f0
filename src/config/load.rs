//! The main config loading module for lsr.
//!
//! Handles loading and deserializing invocation defaults from `lsr.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal
//! [RawConfig] used for parsing, and default config generation for `--init`.

use crate::config::{Defaults, General};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::PathBuf};

/// Raw configuration as read from the toml file.
/// Deserialized directly and then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
}

/// Main configuration struct for lsr, holding the processed invocation
/// defaults.
#[derive(Debug)]
pub struct Config {
    general: Defaults,
}

/// Conversion from RawConfig to Config, validating the raw values.
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: Defaults::from(raw.general),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing config file silently falls back to the built-in defaults;
    /// a file that exists but fails to parse is reported and ignored.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("[lsr] Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    #[inline]
    pub fn general(&self) -> &Defaults {
        &self.general
    }

    /// Determine the default configuration file path.
    /// Checks the LSR_CONFIG environment variable first,
    /// checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/lsr/lsr.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LSR_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lsr/lsr.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lsr/lsr.toml");
        }
        PathBuf::from("lsr.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &PathBuf) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = r##"# lsr.toml - default configuration for lsr

# Note:
# Commented values are the internal defaults of lsr.
# Command-line flags switch options on over these defaults.

[general]
# show_hidden = false       # list entries whose name starts with '.', as with -a
# long_listing = false      # one detailed line per entry, as with -l
# sort = "name"             # "name", "time" or "size"
# reverse = false           # reverse the sort order, as with -r
"##;

        fs::write(path, content)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options.
impl Default for Config {
    fn default() -> Self {
        Config {
            general: Defaults::from(General::default()),
        }
    }
}

//! Configuration constants and the optional settings file
//!
//! The settings file lives at `<config_dir>/rid/config.toml` (or wherever
//! `RID_CONFIG` points) and supplies defaults for the display flags.
//! Command line flags always win over it.

use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::options::DisplayOptions;
use crate::error::RidError;

// Digest layout
pub const DIGEST_BYTES: usize = 20; // SHA-1
pub const HEX_PER_BYTE: usize = 2;
pub const DIGEST_HEX_LEN: usize = DIGEST_BYTES * HEX_PER_BYTE;

// Display defaults
pub const DEFAULT_CHUNK_SIZE: usize = 10;

// ANSI highlight for the leading digit of each chunk
pub const COLOR_BOLD_GREEN: &str = "\x1b[32;1m";
pub const COLOR_RESET: &str = "\x1b[0m";

// Repository discovery
pub const MANIFEST_FILENAME: &str = ".mgit";

// Settings file location
pub const SETTINGS_ENV_VAR: &str = "RID_CONFIG";
pub const SETTINGS_DIR_NAME: &str = "rid";
pub const SETTINGS_FILENAME: &str = "config.toml";

/// Values read from the settings file; every key is optional
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub chunk_size: Option<usize>,
    pub no_color: bool,
    pub clear_screen: bool,
    pub flip: bool,
    pub align_right: bool,
    /// Manifest file name, relative to the working directory
    pub manifest: Option<String>,
}

impl Settings {
    /// Location of the settings file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILENAME))
    }

    /// Loads the settings file from its default location
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(RidError::Config {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };

        let settings = toml::from_str(&content).map_err(|e| RidError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(settings)
    }

    /// Manifest file name to look for during discovery
    pub fn manifest_name(&self) -> &str {
        self.manifest.as_deref().unwrap_or(MANIFEST_FILENAME)
    }

    /// Display options before command line flags are applied
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            no_color: self.no_color,
            clear_screen: self.clear_screen,
            flip: self.flip,
            align_right: self.align_right,
            debug: false,
        }
    }
}

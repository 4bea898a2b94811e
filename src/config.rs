// Configuration management
//
// Ambient settings only: the emulator core has no host I/O or save-state
// surface to configure, so this is a much smaller cousin of the teacher's
// `emulator/config.rs` — just log verbosity and where to look for a TOML
// override, loaded from a fixed-name file next to the executable.

#![cfg(feature = "config")]

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const CONFIG_FILE: &str = "nes-rs.toml";

/// Emulator configuration, loaded from `nes-rs.toml` if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// `log` crate filter string, e.g. `"info"` or `"nes_rs::cpu=trace"`.
    pub log_level: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            log_level: "info".to_string(),
        }
    }
}

impl EmulatorConfig {
    /// Load `nes-rs.toml` from the current directory, falling back to
    /// defaults (and writing them out) if it doesn't exist or fails to
    /// parse.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

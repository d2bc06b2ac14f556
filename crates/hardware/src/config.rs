//! Configuration system for the AruXI simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline boot and run-control constants.
//! 2. **Structures:** Hierarchical config for general settings and boot state.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Every field is optional in JSON; missing fields take their documented default,
//! so `{}` is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Cycles a run may take before the core is forced to halt.
    pub const MAX_RUN_CYCLES: u32 = constants::DEFAULT_MAX_RUN_CYCLES;

    /// Boot entry point (start of kernel text).
    pub const BOOT_ENTRY: u32 = constants::KERN_TEXT;

    /// Boot stack pointer (top of the kernel stack).
    pub const BOOT_STACK_POINTER: u32 = constants::KERN_STACK_LIMIT;
}

/// Errors produced while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Initial core state
    #[serde(default)]
    pub boot: BootConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `text` - JSON document; missing sections and fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit per-stage instruction trace events at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Cycles since the last halt after which the core is forced to HALTED.
    #[serde(default = "GeneralConfig::default_max_run_cycles")]
    pub max_run_cycles: u32,
}

impl GeneralConfig {
    const fn default_max_run_cycles() -> u32 {
        defaults::MAX_RUN_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_run_cycles: defaults::MAX_RUN_CYCLES,
        }
    }
}

/// Initial core state applied by `boot`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BootConfig {
    /// Initial instruction pointer.
    #[serde(default = "BootConfig::default_entry")]
    pub entry: u32,

    /// Initial stack pointer.
    #[serde(default = "BootConfig::default_stack_pointer")]
    pub stack_pointer: u32,
}

impl BootConfig {
    const fn default_entry() -> u32 {
        defaults::BOOT_ENTRY
    }

    const fn default_stack_pointer() -> u32 {
        defaults::BOOT_STACK_POINTER
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            entry: defaults::BOOT_ENTRY,
            stack_pointer: defaults::BOOT_STACK_POINTER,
        }
    }
}

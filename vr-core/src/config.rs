//! Model configuration.
//!
//! Configuration is a TOML document with one table per model module and a
//! `[core]` table for settings shared between modules. Each module owns the
//! schema of its own table and reads it with [`Config::section`]; missing
//! tables and missing keys fall back to the module defaults.
//!
//! ```rust
//! use vr_core::config::Config;
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     [core.layers]
//!     canopy_layers = 3
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.core().unwrap().layers.canopy_layers, 3);
//! ```

use crate::errors::{VRError, VRResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Vertical layer structure shared by all modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Number of canopy layers.
    /// Default: 10
    pub canopy_layers: usize,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self { canopy_layers: 10 }
    }
}

/// The `[core]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub layers: LayerConfig,
}

/// A parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    table: toml::Table,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> VRResult<Self> {
        let table = contents
            .parse::<toml::Table>()
            .map_err(|e| VRError::Config(e.to_string()))?;
        Ok(Self { table })
    }

    pub fn from_file(path: impl AsRef<Path>) -> VRResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| VRError::Config(format!("could not read {}: {}", path.display(), e)))?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Test if a top level table is present
    pub fn has_section(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Deserialise a top level table.
    ///
    /// Returns `T::default()` if the table is absent.
    pub fn section<T: DeserializeOwned + Default>(&self, name: &str) -> VRResult<T> {
        match self.table.get(name) {
            Some(value) => value
                .clone()
                .try_into()
                .map_err(|e: toml::de::Error| VRError::Config(format!("[{}]: {}", name, e))),
            None => {
                log::debug!("No [{}] table in configuration, using defaults", name);
                Ok(T::default())
            }
        }
    }

    pub fn core(&self) -> VRResult<CoreConfig> {
        self.section("core")
    }

    /// Replace a top level table with the serialised form of `value`.
    pub fn set_section<T: Serialize>(&mut self, name: &str, value: &T) -> VRResult<()> {
        let value = toml::Value::try_from(value).map_err(|e| VRError::Config(e.to_string()))?;
        self.table.insert(name.to_string(), value);
        Ok(())
    }

    pub fn to_toml_string(&self) -> VRResult<String> {
        toml::to_string(&self.table).map_err(|e| VRError::Config(e.to_string()))
    }
}

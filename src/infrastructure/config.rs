//! Plant configuration loaded from TOML.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [solver]
//! backend = "microlp"
//!
//! [limits]
//! total_gas = 85000.0
//! total_coke = 300.0
//! required_production = 650.0
//!
//! [[furnace]]
//! name = "BF-1"
//! base_gas = 15000.0
//! # ...
//! ```
//!
//! Furnace data is given either as `[[furnace]]` records or as a single
//! `[columns]` table of parallel arrays, never both.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::domain::{
    Furnace, FurnaceColumns, FurnaceSet, InvalidConfiguration, PlantLimits, SolverBackend,
    SolverConfig,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Plant(#[from] InvalidConfiguration),
}

/// `[solver]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    pub backend: SolverBackend,
    pub verbose: bool,
}

/// Complete configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub solver: SolverSection,
    pub limits: PlantLimits,
    #[serde(default)]
    pub furnace: Vec<Furnace>,
    #[serde(default)]
    pub columns: Option<FurnaceColumns>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        raw.parse()
    }

    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            backend: self.solver.backend,
            verbose: self.solver.verbose,
        }
    }

    /// Validated furnace set from whichever furnace section is present
    pub fn furnace_set(&self) -> Result<FurnaceSet, ConfigError> {
        let set = match (&self.columns, self.furnace.is_empty()) {
            (Some(_), false) => {
                return Err(InvalidConfiguration(
                    "give furnaces either as [[furnace]] records or as [columns], not both"
                        .to_string(),
                )
                .into())
            }
            (Some(columns), true) => columns.clone().into_furnace_set(self.limits)?,
            (None, _) => FurnaceSet::new(self.furnace.clone(), self.limits)?,
        };
        Ok(set)
    }
}

impl FromStr for AppConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

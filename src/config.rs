//! Input files.
//!
//! Readings and emission factors can be supplied as a TOML or JSON document:
//!
//! ```toml
//! [readings]
//! electricity = 100.0
//! gasoline = 50.0
//!
//! [factors]
//! electricity = 0.081
//! ```
//!
//! Both tables are optional. Missing readings are 0.0 and missing factors
//! fall back to the default table. Unknown keys are rejected.

use crate::errors::{ShellError, ShellResult};
use footprint_core::{ConsumptionReadings, EmissionFactors};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Readings and factors for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FootprintInput {
    pub readings: ConsumptionReadings,
    pub factors: EmissionFactors,
}

impl FootprintInput {
    pub fn from_toml_str(contents: &str) -> ShellResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> ShellResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load an input file, choosing the format from its extension.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> ShellResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ShellError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let input = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        info!("Loaded input from {}", path.display());
        if input.factors != EmissionFactors::default() {
            warn!(
                "{} overrides the default emission factors",
                path.display()
            );
        }
        Ok(input)
    }

    /// Reject readings or factors the model cannot use.
    pub fn validate(&self) -> ShellResult<()> {
        self.readings.validate()?;
        self.factors.validate()?;
        Ok(())
    }
}

use serde::Deserialize;

use super::error::{LightsOutError, LightsOutResult};
use crate::constants::{DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_NCOLS, DEFAULT_NROWS};

/// Per-session board parameters.
///
/// Deserializes from the JS object `{ nrows, ncols, chanceLightStartsOn }`;
/// any missing key falls back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub nrows: usize,
    pub ncols: usize,
    /// Threshold for the initializer: a cell starts lit when its draw exceeds it
    pub chance_light_starts_on: f64,
}

impl GameConfig {
    pub fn new(nrows: usize, ncols: usize, chance_light_starts_on: f64) -> Self {
        Self {
            nrows,
            ncols,
            chance_light_starts_on,
        }
    }

    /// Zero-sized boards are rejected; any chance value is allowed.
    pub fn validate(&self) -> LightsOutResult<()> {
        if self.nrows == 0 || self.ncols == 0 {
            return Err(LightsOutError::InvalidDimensions {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.nrows * self.ncols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NROWS, DEFAULT_NCOLS, DEFAULT_CHANCE_LIGHT_STARTS_ON)
    }
}

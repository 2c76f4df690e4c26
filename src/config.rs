//! Engine configuration.
//!
//! The vector dimension is an engine-wide constant shared by every layer;
//! [`EngineConfig`] exists so that small models (tests, demos) and seeded
//! random sources can be requested without touching the default surface.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrataError};

/// Vector dimension shared by every layer in the engine.
pub const ENGINE_DIMENSION: usize = 200;

/// Default ceiling on the total number of layers a model may allocate.
pub const DEFAULT_MAX_TOTAL_LAYERS: usize = 1024;

/// Tunable engine parameters.
///
/// `Default` matches the engine-wide constants; deserializing a partial JSON
/// document fills the missing fields from those defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Vector dimension for every layer in the model.
    pub dimension: usize,

    /// Seed for the model's random source. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Ceiling on `layer_count * sub_layer_count` at construction time.
    pub max_total_layers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension: ENGINE_DIMENSION,
            seed: None,
            max_total_layers: DEFAULT_MAX_TOTAL_LAYERS,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StrataError::ConfigReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Builder-style override of the dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Builder-style override of the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

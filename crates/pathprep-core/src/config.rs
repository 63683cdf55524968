//! Configuration management for pathprep.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`PATHPREP__` prefix, `__` separator)
//! 2. Config file (`pathprep.toml` by default)
//! 3. Defaults

use serde::{Deserialize, Serialize};

use crate::error::{PathprepError, Result};

/// Names of the attributes written by the synthesizer and the resetter.
///
/// Both must stay the same between generating a graph and later reading or
/// resetting it, otherwise values written under the old name are not seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeNames {
    /// Edge attribute holding the generated weight (default: "weight").
    #[serde(default = "default_weight")]
    pub weight: String,

    /// Node attribute holding the shortest-path distance (default: "distance").
    #[serde(default = "default_distance")]
    pub distance: String,

    /// Optional node attribute stamped with a random `[0, 1)` value at creation.
    #[serde(default)]
    pub node_value: Option<String>,
}

fn default_weight() -> String {
    "weight".to_string()
}

fn default_distance() -> String {
    "distance".to_string()
}

impl Default for AttributeNames {
    fn default() -> Self {
        Self {
            weight: default_weight(),
            distance: default_distance(),
            node_value: None,
        }
    }
}

/// Top-level pathprep configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathprepConfig {
    #[serde(default)]
    pub attributes: AttributeNames,

    /// Seed for the random source. Unseeded runs draw from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Load configuration from `<file_prefix>.{toml,json,yaml,...}` and the environment.
///
/// A missing file is not an error; malformed content is.
pub fn load(file_prefix: &str) -> Result<PathprepConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("PATHPREP")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| PathprepError::Config(e.to_string()))?;

    let loaded: PathprepConfig = cfg
        .try_deserialize()
        .map_err(|e| PathprepError::Config(e.to_string()))?;

    tracing::debug!(
        file_prefix,
        weight = %loaded.attributes.weight,
        distance = %loaded.attributes.distance,
        seed = ?loaded.seed,
        "Loaded configuration"
    );
    Ok(loaded)
}

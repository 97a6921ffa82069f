//! Configuration for the feature selection engine.
//!
//! Loaded once at startup from a single YAML file with sensible defaults;
//! never re-read per scan.
//!
//! ## Example YAML
//!
//! ```yaml
//! selection:
//!   enabled: true
//!   corners_keep_percentile: 0.5
//!   surfs_keep_percentile: 0.5
//!
//! resolution:
//!   corners_min: 0.05
//!   corners_max: 0.6
//!   surfs_min: 0.1
//!   surfs_max: 1.0
//!
//! sensor:
//!   horizontal_resolution: 0.00613592315
//!   vertical_resolution: 0.03862995413
//!   neighborhood_radius: 0.6
//!   range_bin_step: 0.2
//! ```

mod defaults;
mod error;
mod sections;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigLoadError;
pub use sections::{ResolutionSection, SelectionSection, SensorSection};

/// Full feature selection configuration.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SelectionConfig {
    /// Selection behavior settings.
    #[serde(default)]
    pub selection: SelectionSection,

    /// Per-class resolution bounds.
    #[serde(default)]
    pub resolution: ResolutionSection,

    /// Sensor scan geometry.
    #[serde(default)]
    pub sensor: SensorSection,
}

impl SelectionConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/selection.yaml), falling
    /// back to built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/selection.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

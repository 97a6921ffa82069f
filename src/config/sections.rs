//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature selection behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionSection {
    /// Enable gradient-based selection. When false the engine passes all
    /// candidates through untouched.
    #[serde(default = "defaults::disabled")]
    pub enabled: bool,

    /// Fraction of the sorted corner gradient list that sets the cutoff value,
    /// in [0, 1].
    #[serde(default = "defaults::keep_percentile")]
    pub corners_keep_percentile: f32,

    /// Fraction of the sorted surface gradient list that sets the cutoff
    /// value, in [0, 1].
    #[serde(default = "defaults::keep_percentile")]
    pub surfs_keep_percentile: f32,
}

impl Default for SelectionSection {
    fn default() -> Self {
        Self {
            enabled: false,
            corners_keep_percentile: 0.5,
            surfs_keep_percentile: 0.5,
        }
    }
}

/// Adaptive mapping-resolution bounds per feature class.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolutionSection {
    /// Minimum corner voxel resolution (meters).
    #[serde(default = "defaults::corners_resolution_min")]
    pub corners_min: f32,

    /// Maximum corner voxel resolution (meters).
    #[serde(default = "defaults::corners_resolution_max")]
    pub corners_max: f32,

    /// Minimum surface voxel resolution (meters).
    #[serde(default = "defaults::surfs_resolution_min")]
    pub surfs_min: f32,

    /// Maximum surface voxel resolution (meters).
    #[serde(default = "defaults::surfs_resolution_max")]
    pub surfs_max: f32,
}

impl Default for ResolutionSection {
    fn default() -> Self {
        Self {
            corners_min: 0.05,
            corners_max: 0.6,
            surfs_min: 0.1,
            surfs_max: 1.0,
        }
    }
}

impl ResolutionSection {
    /// Midpoint of the corner resolution bounds, used when selection is
    /// disabled or a scan is degenerate.
    pub fn corners_midpoint(&self) -> f32 {
        (self.corners_min + self.corners_max) / 2.0
    }

    /// Midpoint of the surface resolution bounds.
    pub fn surfs_midpoint(&self) -> f32 {
        (self.surfs_min + self.surfs_max) / 2.0
    }
}

/// Sensor scan geometry used to build the angular window table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorSection {
    /// Horizontal angular step between azimuth columns (radians).
    #[serde(default = "defaults::horizontal_resolution")]
    pub horizontal_resolution: f32,

    /// Vertical angular step between sensor rings (radians).
    #[serde(default = "defaults::vertical_resolution")]
    pub vertical_resolution: f32,

    /// Fixed Euclidean radius the angular window table must cover (meters).
    #[serde(default = "defaults::neighborhood_radius")]
    pub neighborhood_radius: f32,

    /// Range quantization step of the window table (meters per bin).
    #[serde(default = "defaults::range_bin_step")]
    pub range_bin_step: f32,
}

impl Default for SensorSection {
    fn default() -> Self {
        Self {
            horizontal_resolution: defaults::horizontal_resolution(),
            vertical_resolution: defaults::vertical_resolution(),
            neighborhood_radius: 0.6,
            range_bin_step: 0.2,
        }
    }
}

//! Serde default functions for configuration values.

use std::f32::consts::TAU;

pub fn disabled() -> bool {
    false
}

pub fn keep_percentile() -> f32 {
    0.5
}

pub fn corners_resolution_min() -> f32 {
    0.05
}

pub fn corners_resolution_max() -> f32 {
    0.6
}

pub fn surfs_resolution_min() -> f32 {
    0.1
}

pub fn surfs_resolution_max() -> f32 {
    1.0
}

/// Horizontal angular step of the sensor (1024 azimuth columns per turn).
pub fn horizontal_resolution() -> f32 {
    TAU / 1024.0
}

/// Vertical angular step between sensor rings.
pub fn vertical_resolution() -> f32 {
    0.038_629_954
}

/// Fixed Euclidean radius covered by the angular window table.
pub fn neighborhood_radius() -> f32 {
    0.6
}

/// Range quantization step of the angular window table.
pub fn range_bin_step() -> f32 {
    0.2
}

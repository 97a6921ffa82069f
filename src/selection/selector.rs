//! Per-class selection: gather, score, cut at the keep-percentile.

use crate::core::types::{CandidateCloud, Point3};

use super::gradient::estimate_gradients;
use super::neighbors::gather_neighbors;
use super::window::WindowTable;

/// Sentinel statistics value for a class with zero candidates.
pub const DEGENERATE_STAT: f32 = -1.0;

/// Diagnostics sentinel carried by standalone features in the sorted
/// gradient sequence.
const STANDALONE_GRADIENT: f32 = 1.0;

/// Output of one class's selection pass.
#[derive(Debug, Clone)]
pub struct ClassSelection {
    /// Selected feature positions: standalone features first, then scored
    /// features passing the cutoff in descending gradient order.
    pub points: Vec<Point3>,
    /// Full gradient sequence for diagnostics: a 1.0 sentinel per standalone
    /// feature, then every normalized gradient in sorted order (selected or
    /// not).
    pub gradients_sorted: Vec<f32>,
    /// Mean normalized gradient, or -1.0 for a zero-candidate class.
    pub mean: f32,
    /// Gradient standard deviation, or -1.0 for a zero-candidate class.
    pub std_dev: f32,
    /// Cutoff threshold value, or -1.0 for a zero-candidate class.
    pub cutoff: f32,
}

impl ClassSelection {
    fn degenerate() -> Self {
        Self {
            points: Vec::new(),
            gradients_sorted: Vec::new(),
            mean: DEGENERATE_STAT,
            std_dev: DEGENERATE_STAT,
            cutoff: DEGENERATE_STAT,
        }
    }
}

/// Run the full selection pipeline for one feature class.
///
/// The cutoff is the gradient VALUE at sorted position
/// `floor(keep_percentile * N)` (clamped to the last entry), reused as a
/// value threshold: a feature is selected when its gradient is >= cutoff or
/// it is standalone. Standalone features are always kept.
pub fn select_class(
    cloud: &CandidateCloud,
    per_row_indices: &[Vec<u32>],
    windows: &WindowTable,
    search_radius: f32,
    keep_percentile: f32,
) -> ClassSelection {
    let candidate_count: usize = per_row_indices.iter().map(Vec::len).sum();
    if candidate_count == 0 {
        return ClassSelection::degenerate();
    }

    let table = cloud.build_ordered_table(per_row_indices);
    let neighbors = gather_neighbors(cloud, per_row_indices, &table, windows, search_radius);
    let estimate = estimate_gradients(cloud, per_row_indices, &neighbors, candidate_count);

    let cutoff = if estimate.scored.is_empty() {
        // Every candidate is standalone: nothing to rank, keep them all.
        0.0
    } else {
        let pos = (keep_percentile * estimate.scored.len() as f32).floor() as usize;
        estimate.scored[pos.min(estimate.scored.len() - 1)].gradient
    };

    let mut points = Vec::with_capacity(candidate_count);
    let mut gradients_sorted = Vec::with_capacity(candidate_count);

    for &idx in &estimate.standalone {
        points.push(cloud.point(idx));
        gradients_sorted.push(STANDALONE_GRADIENT);
    }

    for feature in &estimate.scored {
        gradients_sorted.push(feature.gradient);
        if feature.gradient >= cutoff {
            points.push(cloud.point(feature.index));
        }
    }

    ClassSelection {
        points,
        gradients_sorted,
        mean: estimate.mean,
        std_dev: estimate.std_dev,
        cutoff,
    }
}

//! Gradient estimation over gathered neighborhoods.
//!
//! The "gradient" of a feature is the magnitude of the mean displacement
//! vector from the feature to its neighbors, a proxy for local geometric
//! sharpness. Scores are normalized by the scan's maximum so they lie in
//! (0, 1] for every scored feature.

use std::collections::HashMap;

use crate::core::types::{CandidateCloud, Point3};

/// A candidate feature index paired with its normalized gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredFeature {
    /// Index into the candidate cloud.
    pub index: u32,
    /// Normalized gradient in (0, 1], or 0.0 when every displacement is zero.
    pub gradient: f32,
}

/// Result of one class's gradient pass.
#[derive(Debug, Clone)]
pub struct GradientEstimate {
    /// Candidates with no neighbors inside the search radius. Always kept.
    pub standalone: Vec<u32>,
    /// Scored candidates, sorted descending by normalized gradient.
    pub scored: Vec<ScoredFeature>,
    /// Mean of the normalized gradients over the scored population.
    pub mean: f32,
    /// Standard deviation of the normalized gradients. The denominator is the
    /// FULL candidate count including standalone features: dispersion is
    /// measured against the whole population, not just the scored subset.
    pub std_dev: f32,
}

/// Score every candidate of one class from its gathered neighborhood.
///
/// Candidates missing from `neighbors` (or present with an empty list) are
/// collected as standalone and carry no score.
pub fn estimate_gradients(
    cloud: &CandidateCloud,
    per_row_indices: &[Vec<u32>],
    neighbors: &HashMap<u32, Vec<Point3>>,
    candidate_count: usize,
) -> GradientEstimate {
    let mut standalone = Vec::new();
    let mut scored = Vec::new();
    let mut max_gradient = 0.0f32;

    for row_indices in per_row_indices {
        for &idx in row_indices {
            match neighbors.get(&idx) {
                Some(positions) if !positions.is_empty() => {
                    let point = cloud.point(idx);
                    let mut sum = Point3::zero();
                    for neighbor in positions {
                        sum = sum + (*neighbor - point);
                    }
                    let count = positions.len() as f32;
                    let mean_displacement =
                        Point3::new(sum.x / count, sum.y / count, sum.z / count);
                    let gradient = mean_displacement.norm();

                    scored.push(ScoredFeature {
                        index: idx,
                        gradient,
                    });
                    max_gradient = max_gradient.max(gradient);
                }
                _ => standalone.push(idx),
            }
        }
    }

    // Normalize by the scan's max so the top score is exactly 1.0. A scan
    // where every displacement cancels out keeps all-zero scores.
    if max_gradient > 0.0 {
        for feature in &mut scored {
            feature.gradient /= max_gradient;
        }
    }

    let mut mean = 0.0f32;
    for feature in &scored {
        mean += feature.gradient;
    }
    if !scored.is_empty() {
        mean /= scored.len() as f32;
    }

    let mut std_dev = 0.0f32;
    for feature in &scored {
        std_dev += (feature.gradient - mean).powi(2);
    }
    if candidate_count > 0 {
        std_dev = (std_dev / candidate_count as f32).sqrt();
    }

    scored.sort_by(|a, b| {
        b.gradient
            .partial_cmp(&a.gradient)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    GradientEstimate {
        standalone,
        scored,
        mean,
        std_dev,
    }
}

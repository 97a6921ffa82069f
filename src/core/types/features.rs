//! Extractor output consumed by feature selection.

use serde::{Deserialize, Serialize};

use super::cloud::CandidateCloud;

/// Geometric class of a candidate feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureClass {
    /// Edge-like points with high local curvature.
    Corner,
    /// Planar points with low local curvature.
    Surface,
}

/// One scan's worth of extracted candidate features.
///
/// The candidate index lists are partitioned by originating scan row for
/// spatial locality; indices point into `cloud`. Immutable for the duration
/// of one scan's selection pass.
#[derive(Debug, Clone)]
pub struct ExtractedFeatures {
    /// Filtered cloud holding all candidate points of both classes.
    pub cloud: CandidateCloud,
    /// Corner candidate indices, one list per scan row.
    pub corner_indices: Vec<Vec<u32>>,
    /// Surface candidate indices, one list per scan row.
    pub surface_indices: Vec<Vec<u32>>,
}

impl ExtractedFeatures {
    /// Candidate index lists for a class.
    pub fn class_indices(&self, class: FeatureClass) -> &[Vec<u32>] {
        match class {
            FeatureClass::Corner => &self.corner_indices,
            FeatureClass::Surface => &self.surface_indices,
        }
    }

    /// Total candidate count for a class.
    pub fn class_count(&self, class: FeatureClass) -> usize {
        self.class_indices(class).iter().map(Vec::len).sum()
    }

    /// Total corner candidates in this scan.
    pub fn corner_count(&self) -> usize {
        self.class_count(FeatureClass::Corner)
    }

    /// Total surface candidates in this scan.
    pub fn surface_count(&self) -> usize {
        self.class_count(FeatureClass::Surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Point3;

    #[test]
    fn test_class_counts() {
        let mut cloud = CandidateCloud::new(8, 2);
        let a = cloud.push(Point3::new(1.0, 0.0, 0.0), 0, 0);
        let b = cloud.push(Point3::new(1.0, 0.1, 0.0), 0, 1);
        let c = cloud.push(Point3::new(1.0, 0.2, 0.0), 1, 2);

        let features = ExtractedFeatures {
            cloud,
            corner_indices: vec![vec![a, b], vec![]],
            surface_indices: vec![vec![], vec![c]],
        };

        assert_eq!(features.corner_count(), 2);
        assert_eq!(features.surface_count(), 1);
        assert_eq!(features.class_count(FeatureClass::Corner), 2);
    }
}

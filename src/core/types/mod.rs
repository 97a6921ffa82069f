//! Core data types for feature selection.

mod cloud;
mod features;
mod point;

pub use cloud::{CandidateCloud, OrderedFeatureTable};
pub use features::{ExtractedFeatures, FeatureClass};
pub use point::Point3;

//! Gradient-based feature selection pipeline.
//!
//! Stages, in order: the precomputed angular [`window`] table bounds the
//! neighbor search, [`neighbors`] gathers true-radius neighborhoods over the
//! organized grid, [`gradient`] scores each feature, [`selector`] ranks and
//! cuts at the keep-percentile, and [`resolution`] maps the cutoff to the
//! downstream voxel size. [`engine`] orchestrates both feature classes per
//! scan and carries the adaptive resolution state.

pub mod diagnostics;
pub mod engine;
pub mod gradient;
pub mod neighbors;
pub mod resolution;
pub mod selector;
pub mod window;

pub use diagnostics::{ClassDiagnostics, SelectionDiagnostics};
pub use engine::{FeatureSelector, SelectionResult};
pub use gradient::{GradientEstimate, ScoredFeature, estimate_gradients};
pub use neighbors::gather_neighbors;
pub use resolution::estimate_resolution;
pub use selector::{ClassSelection, select_class};
pub use window::{RangeBinWindow, WindowTable};

//! TikshnaSelect - Adaptive feature selection for organized LiDAR scans
//!
//! Decides, for each incoming scan, which extracted geometric features
//! (edge/"corner" points and planar/"surface" points) are worth keeping for
//! scan registration and map fusion, and what voxel resolution those stages
//! should use.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   selection/                        │  ← Selection pipeline
//! │   (window, neighbors, gradient, selector,           │
//! │    resolution, engine, diagnostics)                  │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    config/                          │  ← Configuration
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                    (types)                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # How it works
//!
//! A spinning LiDAR samples on a fixed angular grid, so a fixed Euclidean
//! radius around a point maps to a bounded (row, col) window whose size
//! depends only on the point's range. The crate precomputes those windows per
//! quantized range bin once at startup, then per scan:
//!
//! 1. Gathers each candidate's neighbors through the window table and an
//!    ordered (row, col) → candidate lookup, verifying true distances.
//! 2. Scores each candidate with the norm of its mean neighbor displacement
//!    and normalizes by the scan maximum.
//! 3. Sorts descending, draws a cutoff value at the configured
//!    keep-percentile, and keeps every feature at or above it. Features with
//!    no neighbors are always kept.
//! 4. Maps the cutoff linearly into the configured resolution bounds per
//!    class, feeding the result back as the next scan's search radius and
//!    the downstream map's voxel size.
//!
//! Corner and surface classes are independent and processed in parallel.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Configuration (depends on core)
// ============================================================================
pub mod config;

// ============================================================================
// Layer 3: Selection pipeline (depends on core, config)
// ============================================================================
pub mod selection;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::types::{
    CandidateCloud, ExtractedFeatures, FeatureClass, OrderedFeatureTable, Point3,
};

pub use config::{
    ConfigLoadError, ResolutionSection, SelectionConfig, SelectionSection, SensorSection,
};

pub use selection::{
    ClassDiagnostics, FeatureSelector, SelectionDiagnostics, SelectionResult, WindowTable,
};

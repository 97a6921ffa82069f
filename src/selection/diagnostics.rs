//! Per-scan selection diagnostics.
//!
//! Best-effort telemetry for a downstream publisher; never consulted by the
//! selection logic itself.

use serde::{Deserialize, Serialize};

/// Diagnostics for one feature class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDiagnostics {
    /// Candidate count handed in by the extractor.
    pub features_in: usize,
    /// Selected feature count handed downstream.
    pub features_out: usize,
    /// Estimated input payload size in kilobytes.
    pub kb_in: f32,
    /// Estimated output payload size in kilobytes.
    pub kb_out: f32,
    /// Wall time spent selecting this class, in milliseconds.
    pub time_ms: f32,
    /// Configured keep-percentile.
    pub keep_percentile: f32,
    /// Gradient cutoff threshold (-1.0 for a degenerate scan).
    pub cutoff: f32,
    /// Mean normalized gradient (-1.0 for a degenerate scan).
    pub gradient_mean: f32,
    /// Gradient standard deviation (-1.0 for a degenerate scan).
    pub gradient_stddev: f32,
    /// Adaptive resolution emitted for this class.
    pub resolution: f32,
    /// Full sorted gradient sequence (standalone sentinels first).
    pub gradient_sorted: Vec<f32>,
}

/// Diagnostics for one scan's selection pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionDiagnostics {
    /// Whether gradient-based selection was active.
    pub enabled: bool,
    /// Total candidates in (both classes).
    pub features_in: usize,
    /// Total features out (both classes).
    pub features_out: usize,
    /// Corner class detail.
    pub corners: ClassDiagnostics,
    /// Surface class detail.
    pub surfs: ClassDiagnostics,
}

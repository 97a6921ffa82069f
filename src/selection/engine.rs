//! Selection engine: per-scan orchestration of both feature classes.

use std::thread;
use std::time::Instant;

use crate::config::SelectionConfig;
use crate::core::types::{ExtractedFeatures, FeatureClass, Point3};

use super::diagnostics::{ClassDiagnostics, SelectionDiagnostics};
use super::resolution::estimate_resolution;
use super::selector::{ClassSelection, select_class};
use super::window::WindowTable;

const POINT_SIZE: usize = std::mem::size_of::<Point3>();

/// Output of one scan's selection pass, handed to the registration and
/// mapping stages.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    /// Selected corner feature positions.
    pub corners: Vec<Point3>,
    /// Selected surface feature positions.
    pub surfs: Vec<Point3>,
    /// Adaptive corner voxel resolution for the downstream map.
    pub corners_resolution: f32,
    /// Adaptive surface voxel resolution for the downstream map.
    pub surfs_resolution: f32,
    /// Telemetry side channel.
    pub diagnostics: SelectionDiagnostics,
}

/// Gradient-based feature selection engine.
///
/// Holds the configuration, the precomputed angular window table, and the
/// current per-class resolutions. The resolutions double as the neighbor
/// search radius for the next scan, closing the adaptation loop: each scan's
/// cutoff sets the radius and voxel size used after it. They start at the
/// configured midpoints.
///
/// Processes one scan at a time; the two feature classes within a scan are
/// independent and run on separate threads, sharing the read-only window
/// table.
#[derive(Debug)]
pub struct FeatureSelector {
    config: SelectionConfig,
    windows: WindowTable,
    corners_resolution: f32,
    surfs_resolution: f32,
}

impl FeatureSelector {
    /// Create a selector, building the angular window table from the
    /// configured sensor geometry.
    pub fn new(config: SelectionConfig) -> Self {
        let windows = WindowTable::build(
            config.sensor.horizontal_resolution,
            config.sensor.vertical_resolution,
            config.sensor.neighborhood_radius,
            config.sensor.range_bin_step,
        );
        let corners_resolution = config.resolution.corners_midpoint();
        let surfs_resolution = config.resolution.surfs_midpoint();

        log::info!(
            "feature selector ready: enabled={}, window bins={}, initial resolutions {:.3}/{:.3} m",
            config.selection.enabled,
            windows.len(),
            corners_resolution,
            surfs_resolution,
        );

        Self {
            config,
            windows,
            corners_resolution,
            surfs_resolution,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Current (corner, surface) resolutions.
    pub fn resolutions(&self) -> (f32, f32) {
        (self.corners_resolution, self.surfs_resolution)
    }

    /// Select features from one scan's extractor output.
    pub fn select(&mut self, features: &ExtractedFeatures) -> SelectionResult {
        let corners_in = features.corner_count();
        let surfs_in = features.surface_count();

        let mut diag = SelectionDiagnostics {
            enabled: self.config.selection.enabled,
            features_in: corners_in + surfs_in,
            ..Default::default()
        };
        diag.corners.features_in = corners_in;
        diag.surfs.features_in = surfs_in;
        diag.corners.kb_in = kilobytes(corners_in);
        diag.surfs.kb_in = kilobytes(surfs_in);
        diag.corners.keep_percentile = self.config.selection.corners_keep_percentile;
        diag.surfs.keep_percentile = self.config.selection.surfs_keep_percentile;

        if !self.config.selection.enabled {
            return self.pass_through(features, diag);
        }

        let this = &*self;
        let ((corner_sel, corners_ms), (surf_sel, surfs_ms)) = thread::scope(|scope| {
            let corner_handle = scope.spawn(move || {
                this.run_class(
                    features,
                    FeatureClass::Corner,
                    this.corners_resolution,
                    this.config.selection.corners_keep_percentile,
                )
            });

            let surfs = this.run_class(
                features,
                FeatureClass::Surface,
                this.surfs_resolution,
                this.config.selection.surfs_keep_percentile,
            );

            let corners = corner_handle
                .join()
                .expect("corner selection thread panicked");
            (corners, surfs)
        });

        self.corners_resolution = estimate_resolution(
            corner_sel.cutoff,
            self.config.resolution.corners_min,
            self.config.resolution.corners_max,
        );
        self.surfs_resolution = estimate_resolution(
            surf_sel.cutoff,
            self.config.resolution.surfs_min,
            self.config.resolution.surfs_max,
        );

        fill_class_diag(&mut diag.corners, &corner_sel, corners_ms, self.corners_resolution);
        fill_class_diag(&mut diag.surfs, &surf_sel, surfs_ms, self.surfs_resolution);
        diag.features_out = corner_sel.points.len() + surf_sel.points.len();

        log::debug!(
            "selected {}/{} corners, {}/{} surfs in {:.1} ms; resolutions {:.3}/{:.3} m",
            corner_sel.points.len(),
            corners_in,
            surf_sel.points.len(),
            surfs_in,
            corners_ms + surfs_ms,
            self.corners_resolution,
            self.surfs_resolution,
        );

        SelectionResult {
            corners: corner_sel.points,
            surfs: surf_sel.points,
            corners_resolution: self.corners_resolution,
            surfs_resolution: self.surfs_resolution,
            diagnostics: diag,
        }
    }

    fn run_class(
        &self,
        features: &ExtractedFeatures,
        class: FeatureClass,
        search_radius: f32,
        keep_percentile: f32,
    ) -> (ClassSelection, f32) {
        let start = Instant::now();
        let selection = select_class(
            &features.cloud,
            features.class_indices(class),
            &self.windows,
            search_radius,
            keep_percentile,
        );
        (selection, start.elapsed().as_secs_f32() * 1000.0)
    }

    /// Selection disabled: hand every candidate through untouched at the
    /// fixed midpoint resolution. No gradients are computed.
    fn pass_through(
        &self,
        features: &ExtractedFeatures,
        mut diag: SelectionDiagnostics,
    ) -> SelectionResult {
        let corners = collect_class(features, FeatureClass::Corner);
        let surfs = collect_class(features, FeatureClass::Surface);

        let corners_resolution = self.config.resolution.corners_midpoint();
        let surfs_resolution = self.config.resolution.surfs_midpoint();

        diag.features_out = corners.len() + surfs.len();
        diag.corners.features_out = corners.len();
        diag.surfs.features_out = surfs.len();
        diag.corners.kb_out = kilobytes(corners.len());
        diag.surfs.kb_out = kilobytes(surfs.len());
        diag.corners.resolution = corners_resolution;
        diag.surfs.resolution = surfs_resolution;

        SelectionResult {
            corners,
            surfs,
            corners_resolution,
            surfs_resolution,
            diagnostics: diag,
        }
    }
}

fn collect_class(features: &ExtractedFeatures, class: FeatureClass) -> Vec<Point3> {
    features
        .class_indices(class)
        .iter()
        .flatten()
        .map(|&idx| features.cloud.point(idx))
        .collect()
}

fn fill_class_diag(
    diag: &mut ClassDiagnostics,
    selection: &ClassSelection,
    time_ms: f32,
    resolution: f32,
) {
    diag.features_out = selection.points.len();
    diag.kb_out = kilobytes(selection.points.len());
    diag.time_ms = time_ms;
    diag.cutoff = selection.cutoff;
    diag.gradient_mean = selection.mean;
    diag.gradient_stddev = selection.std_dev;
    diag.resolution = resolution;
    diag.gradient_sorted = selection.gradients_sorted.clone();
}

fn kilobytes(count: usize) -> f32 {
    (count * POINT_SIZE) as f32 / 1024.0
}

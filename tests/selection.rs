//! End-to-end selection properties over synthetic organized scans.

use tikshna_select::{
    CandidateCloud, ExtractedFeatures, FeatureSelector, Point3, SelectionConfig,
};

const SCAN_WIDTH: usize = 1024;
const SCAN_HEIGHT: usize = 16;
const HRES: f32 = std::f32::consts::TAU / 1024.0;
const VRES: f32 = 0.038_629_954;

fn enabled_config() -> SelectionConfig {
    let mut config = SelectionConfig::default();
    config.selection.enabled = true;
    config
}

/// Position of the scan cell (row, col) projected onto a wall `depth` meters
/// out, using the default sensor geometry.
fn cell_on_wall(row: u16, col: u16, depth: f32) -> Point3 {
    let azimuth = col as f32 * HRES;
    let elevation = (row as f32 - SCAN_HEIGHT as f32 / 2.0) * VRES;
    let range = depth / (azimuth.cos() * elevation.cos());
    Point3::new(
        range * elevation.cos() * azimuth.cos(),
        range * elevation.cos() * azimuth.sin(),
        range * elevation.sin(),
    )
}

struct ScanBuilder {
    cloud: CandidateCloud,
    corner_indices: Vec<Vec<u32>>,
    surface_indices: Vec<Vec<u32>>,
}

impl ScanBuilder {
    fn new() -> Self {
        Self {
            cloud: CandidateCloud::new(SCAN_WIDTH, SCAN_HEIGHT),
            corner_indices: vec![Vec::new(); SCAN_HEIGHT],
            surface_indices: vec![Vec::new(); SCAN_HEIGHT],
        }
    }

    fn corner(&mut self, row: u16, col: u16, point: Point3) -> &mut Self {
        let idx = self.cloud.push(point, row, col);
        self.corner_indices[row as usize].push(idx);
        self
    }

    fn surface(&mut self, row: u16, col: u16, point: Point3) -> &mut Self {
        let idx = self.cloud.push(point, row, col);
        self.surface_indices[row as usize].push(idx);
        self
    }

    fn corner_on_wall(&mut self, row: u16, col: u16, depth: f32) -> &mut Self {
        self.corner(row, col, cell_on_wall(row, col, depth))
    }

    fn surface_on_wall(&mut self, row: u16, col: u16, depth: f32) -> &mut Self {
        self.surface(row, col, cell_on_wall(row, col, depth))
    }

    fn build(self) -> ExtractedFeatures {
        ExtractedFeatures {
            cloud: self.cloud,
            corner_indices: self.corner_indices,
            surface_indices: self.surface_indices,
        }
    }
}

/// A scan with a dense corner strip, a surface patch, and one isolated
/// corner far away from everything else.
fn mixed_scan() -> ExtractedFeatures {
    let mut builder = ScanBuilder::new();
    for col in 100..140u16 {
        builder.corner_on_wall(6, col, 3.0);
    }
    // Isolated corner on the other side of the scan, 40 m out.
    builder.corner(10, 900, cell_on_wall(10, 900, 40.0));

    for row in 4..10u16 {
        for col in 20..50u16 {
            builder.surface_on_wall(row, col, 4.0);
        }
    }
    builder.build()
}

#[test]
fn test_selected_subset_within_bounds() {
    let features = mixed_scan();
    let mut selector = FeatureSelector::new(enabled_config());

    let result = selector.select(&features);

    // At least the isolated (standalone) corner, at most every candidate.
    assert!(!result.corners.is_empty());
    assert!(result.corners.len() <= features.corner_count());
    assert!(!result.surfs.is_empty());
    assert!(result.surfs.len() <= features.surface_count());
}

#[test]
fn test_standalone_survives_any_percentile() {
    let features = mixed_scan();
    let lone = cell_on_wall(10, 900, 40.0);

    for &p in &[0.0f32, 0.1, 0.5, 0.9, 1.0] {
        let mut config = enabled_config();
        config.selection.corners_keep_percentile = p;
        let mut selector = FeatureSelector::new(config);

        let result = selector.select(&features);
        assert!(
            result.corners.iter().any(|&c| c.distance(&lone) < 1e-4),
            "isolated corner missing at percentile {p}"
        );
    }
}

#[test]
fn test_normalized_gradients_in_unit_interval() {
    // Surface patch only: every candidate has neighbors, so the gradient
    // sequence holds no standalone sentinels. Depth jitter keeps any
    // neighborhood from cancelling to an exactly-zero mean displacement.
    let mut builder = ScanBuilder::new();
    for row in 4..10u16 {
        for col in 20..50u16 {
            let depth = 4.0 + 0.02 * ((row * 7 + col * 3) % 5) as f32;
            builder.surface_on_wall(row, col, depth);
        }
    }
    let features = builder.build();

    let mut selector = FeatureSelector::new(enabled_config());
    let result = selector.select(&features);

    let gradients = &result.diagnostics.surfs.gradient_sorted;
    assert_eq!(gradients.len(), features.surface_count());
    assert!((gradients[0] - 1.0).abs() < 1e-6);
    for &g in gradients {
        assert!(g > 0.0);
        assert!(g <= 1.0);
    }
}

#[test]
fn test_selection_count_monotone_in_percentile() {
    let features = mixed_scan();

    let mut previous = 0usize;
    for &p in &[0.0f32, 0.2, 0.4, 0.6, 0.8, 1.0] {
        let mut config = enabled_config();
        config.selection.surfs_keep_percentile = p;
        let mut selector = FeatureSelector::new(config);

        let count = selector.select(&features).surfs.len();
        assert!(
            count >= previous,
            "surface count shrank from {previous} to {count} at percentile {p}"
        );
        previous = count;
    }
}

#[test]
fn test_resolutions_within_configured_bounds() {
    let features = mixed_scan();
    let config = enabled_config();
    let bounds = config.resolution.clone();
    let mut selector = FeatureSelector::new(config);

    let result = selector.select(&features);

    assert!(result.corners_resolution >= bounds.corners_min);
    assert!(result.corners_resolution <= bounds.corners_max);
    assert!(result.surfs_resolution >= bounds.surfs_min);
    assert!(result.surfs_resolution <= bounds.surfs_max);
}

#[test]
fn test_disabled_reproduces_input_exactly() {
    let features = mixed_scan();
    let config = SelectionConfig::default();
    assert!(!config.selection.enabled);
    let mut selector = FeatureSelector::new(config);

    let result = selector.select(&features);

    assert_eq!(result.corners.len(), features.corner_count());
    assert_eq!(result.surfs.len(), features.surface_count());
    assert!((result.corners_resolution - 0.325).abs() < 1e-6);
    assert!((result.surfs_resolution - 0.55).abs() < 1e-6);
    assert_eq!(
        result.diagnostics.features_out,
        result.corners.len() + result.surfs.len()
    );
}

#[test]
fn test_empty_class_sentinels_and_midpoint() {
    // Surfaces only; the corner class is empty.
    let mut builder = ScanBuilder::new();
    for row in 4..8u16 {
        for col in 20..40u16 {
            builder.surface_on_wall(row, col, 4.0);
        }
    }
    let features = builder.build();

    let mut selector = FeatureSelector::new(enabled_config());
    let result = selector.select(&features);

    assert!(result.corners.is_empty());
    assert_eq!(result.diagnostics.corners.gradient_mean, -1.0);
    assert_eq!(result.diagnostics.corners.gradient_stddev, -1.0);
    assert_eq!(result.diagnostics.corners.cutoff, -1.0);
    assert!(result.diagnostics.corners.gradient_sorted.is_empty());
    assert!((result.corners_resolution - 0.325).abs() < 1e-6);
    // The populated class is unaffected.
    assert!(!result.surfs.is_empty());
}

#[test]
fn test_identical_positions_all_kept_at_min_resolution() {
    let p = Point3::new(2.0, 0.0, 0.0);
    let mut builder = ScanBuilder::new();
    for col in 0..10u16 {
        builder.corner(6, col, p);
    }
    let features = builder.build();

    let config = enabled_config();
    let min_res = config.resolution.corners_min;
    let mut selector = FeatureSelector::new(config);

    let result = selector.select(&features);

    assert_eq!(result.corners.len(), 10);
    assert_eq!(result.diagnostics.corners.cutoff, 0.0);
    assert_eq!(result.diagnostics.corners.gradient_mean, 0.0);
    assert_eq!(result.diagnostics.corners.gradient_stddev, 0.0);
    assert!((result.corners_resolution - min_res).abs() < 1e-6);
}

#[test]
fn test_single_isolated_candidate_forced_in() {
    let mut builder = ScanBuilder::new();
    builder.corner(8, 500, cell_on_wall(8, 500, 20.0));
    let features = builder.build();

    let mut config = enabled_config();
    config.selection.corners_keep_percentile = 0.0;
    let mut selector = FeatureSelector::new(config);

    let result = selector.select(&features);

    assert_eq!(result.corners.len(), 1);
    assert_eq!(result.diagnostics.corners.gradient_sorted, vec![1.0]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let features = mixed_scan();

    let mut first = FeatureSelector::new(enabled_config());
    let mut second = FeatureSelector::new(enabled_config());

    let a = first.select(&features);
    let b = second.select(&features);

    assert_eq!(a.corners.len(), b.corners.len());
    assert_eq!(a.surfs.len(), b.surfs.len());
    assert_eq!(a.corners_resolution, b.corners_resolution);
    assert_eq!(a.surfs_resolution, b.surfs_resolution);
    assert_eq!(
        a.diagnostics.surfs.gradient_sorted,
        b.diagnostics.surfs.gradient_sorted
    );
}

//! Feature selection benchmarks.
//!
//! Covers the per-scan hot path: window table construction, neighbor
//! gathering + gradient scoring, and the full two-class selection pass.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tikshna_select::{
    CandidateCloud, ExtractedFeatures, FeatureSelector, Point3, SelectionConfig, WindowTable,
};

const SCAN_WIDTH: usize = 1024;
const SCAN_HEIGHT: usize = 16;
const HRES: f32 = std::f32::consts::TAU / 1024.0;
const VRES: f32 = 0.038_629_954;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Create a scan with candidates spread across a noisy room-like environment.
///
/// Roughly `corner_count` corners along vertical structures and `surf_count`
/// surfaces on walls, with range noise so gradients are non-trivial.
fn create_scan(corner_count: usize, surf_count: usize) -> ExtractedFeatures {
    let mut rng = StdRng::seed_from_u64(42);
    let mut cloud = CandidateCloud::new(SCAN_WIDTH, SCAN_HEIGHT);
    let mut corner_indices: Vec<Vec<u32>> = vec![Vec::new(); SCAN_HEIGHT];
    let mut surface_indices: Vec<Vec<u32>> = vec![Vec::new(); SCAN_HEIGHT];

    fn place(rng: &mut StdRng) -> (u16, u16, Point3) {
        let row = rng.gen_range(0..SCAN_HEIGHT as u16);
        let col = rng.gen_range(0..SCAN_WIDTH as u16);
        let depth = rng.gen_range(2.0f32..8.0) + rng.gen_range(-0.05f32..0.05);
        let azimuth = col as f32 * HRES;
        let elevation = (row as f32 - SCAN_HEIGHT as f32 / 2.0) * VRES;
        let point = Point3::new(
            depth * elevation.cos() * azimuth.cos(),
            depth * elevation.cos() * azimuth.sin(),
            depth * elevation.sin(),
        );
        (row, col, point)
    }

    for _ in 0..corner_count {
        let (row, col, point) = place(&mut rng);
        let idx = cloud.push(point, row, col);
        corner_indices[row as usize].push(idx);
    }
    for _ in 0..surf_count {
        let (row, col, point) = place(&mut rng);
        let idx = cloud.push(point, row, col);
        surface_indices[row as usize].push(idx);
    }

    ExtractedFeatures {
        cloud,
        corner_indices,
        surface_indices,
    }
}

fn enabled_config() -> SelectionConfig {
    let mut config = SelectionConfig::default();
    config.selection.enabled = true;
    config
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_window_table_build(c: &mut Criterion) {
    c.bench_function("window_table_build", |b| {
        b.iter(|| {
            black_box(WindowTable::build(
                black_box(HRES),
                black_box(VRES),
                0.6,
                0.2,
            ))
        })
    });
}

fn bench_select_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_scan");

    for &(corners, surfs) in &[(200usize, 1000usize), (500, 4000)] {
        let features = create_scan(corners, surfs);
        group.bench_function(format!("{corners}c_{surfs}s"), |b| {
            let mut selector = FeatureSelector::new(enabled_config());
            b.iter(|| black_box(selector.select(black_box(&features))))
        });
    }

    group.finish();
}

fn bench_pass_through(c: &mut Criterion) {
    let features = create_scan(500, 4000);
    c.bench_function("select_scan_disabled", |b| {
        let mut selector = FeatureSelector::new(SelectionConfig::default());
        b.iter(|| black_box(selector.select(black_box(&features))))
    });
}

criterion_group!(
    benches,
    bench_window_table_build,
    bench_select_scan,
    bench_pass_through
);
criterion_main!(benches);

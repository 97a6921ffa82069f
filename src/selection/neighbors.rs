//! Neighbor gathering over the organized scan grid.
//!
//! Two-stage bound-then-verify search: the angular window table bounds the
//! (row, col) cells that could hold a neighbor, then every resolved candidate
//! is verified against the true Euclidean radius. The angular bound is a
//! superset of the spherical neighborhood, never a subset.

use std::collections::HashMap;

use crate::core::types::{CandidateCloud, OrderedFeatureTable, Point3};

use super::window::WindowTable;

/// Collect, for every candidate feature, the positions of nearby candidates
/// within `max_range` meters.
///
/// Candidates that resolve no neighbors are absent from the returned map;
/// the caller treats them as standalone. A candidate whose range lies beyond
/// the window table's extent gets no expansion and is likewise standalone.
pub fn gather_neighbors(
    cloud: &CandidateCloud,
    per_row_indices: &[Vec<u32>],
    table: &OrderedFeatureTable,
    windows: &WindowTable,
    max_range: f32,
) -> HashMap<u32, Vec<Point3>> {
    let mut neighbors: HashMap<u32, Vec<Point3>> = HashMap::new();

    let width = table.width() as i32;
    let height = table.height() as i32;

    for row_indices in per_row_indices {
        for &idx in row_indices {
            let (this_row, this_col) = cloud.row_col(idx);
            let this_row = this_row as i32;
            let this_col = this_col as i32;

            let Some(window) = windows.window(cloud.range(idx)) else {
                continue;
            };

            let point = cloud.point(idx);

            let v_max = window.max_row_offset() as i32;
            let row_min = (this_row - v_max).max(0);
            let row_max = (this_row + v_max + 1).min(height);

            for row in row_min..row_max {
                let dv = (row - this_row).unsigned_abs() as usize;
                let h_max = window.col_limit(dv) as i32;
                let col_min = (this_col - h_max).max(0);
                let col_max = (this_col + h_max + 1).min(width);

                for col in col_min..col_max {
                    if row == this_row && col == this_col {
                        continue;
                    }

                    let Some(neighbor_idx) = table.get(row as usize, col as usize) else {
                        continue;
                    };

                    let neighbor = cloud.point(neighbor_idx);
                    if point.distance(&neighbor) < max_range {
                        neighbors.entry(idx).or_default().push(neighbor);
                    }
                }
            }
        }
    }

    neighbors
}

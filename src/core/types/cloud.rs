//! Candidate cloud types for feature selection.
//!
//! The upstream extractor hands over a filtered cloud of candidate points.
//! Every candidate remembers its (row, col) cell in the raw organized scan,
//! which lets the neighbor search index by scan geometry instead of running
//! a generic radius search.

use super::point::Point3;

/// Filtered cloud of candidate feature points from one scan.
///
/// Points are stored in extraction order. Each point carries its cell in the
/// raw organized scan (row = sensor ring, col = azimuth step) and its range
/// from the sensor.
#[derive(Debug, Clone)]
pub struct CandidateCloud {
    points: Vec<Point3>,
    cells: Vec<(u16, u16)>,
    ranges: Vec<f32>,
    width: usize,
    height: usize,
}

impl CandidateCloud {
    /// Create an empty cloud for a raw scan of `height` rows by `width` columns.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            points: Vec::new(),
            cells: Vec::new(),
            ranges: Vec::new(),
            width,
            height,
        }
    }

    /// Create an empty cloud with preallocated capacity.
    pub fn with_capacity(width: usize, height: usize, capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            cells: Vec::with_capacity(capacity),
            ranges: Vec::with_capacity(capacity),
            width,
            height,
        }
    }

    /// Append a candidate point located at the given raw-scan cell.
    ///
    /// Returns the index of the new candidate.
    pub fn push(&mut self, point: Point3, row: u16, col: u16) -> u32 {
        let idx = self.points.len() as u32;
        self.ranges.push(point.norm());
        self.points.push(point);
        self.cells.push((row, col));
        idx
    }

    /// Number of candidate points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the cloud holds no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Columns per row in the raw organized scan.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows (sensor rings) in the raw organized scan.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Position of a candidate.
    #[inline]
    pub fn point(&self, idx: u32) -> Point3 {
        self.points[idx as usize]
    }

    /// Range from the sensor of a candidate.
    #[inline]
    pub fn range(&self, idx: u32) -> f32 {
        self.ranges[idx as usize]
    }

    /// (row, col) cell of a candidate in the raw organized scan.
    #[inline]
    pub fn row_col(&self, idx: u32) -> (u16, u16) {
        self.cells[idx as usize]
    }

    /// Build the ordered feature table for a set of per-row candidate lists.
    ///
    /// The table maps every (row, col) cell of the raw scan back to the
    /// candidate occupying it, so row/column neighbors resolve in O(1).
    pub fn build_ordered_table(&self, per_row_indices: &[Vec<u32>]) -> OrderedFeatureTable {
        let mut table = OrderedFeatureTable::new(self.width, self.height);
        for row_indices in per_row_indices {
            for &idx in row_indices {
                let (row, col) = self.row_col(idx);
                table.set(row as usize, col as usize, idx);
            }
        }
        table
    }
}

/// Dense (row, col) → candidate-index lookup over one scan.
///
/// Cells without a candidate hold a sentinel. Rebuilt per class per scan,
/// discarded at scan end.
#[derive(Debug, Clone)]
pub struct OrderedFeatureTable {
    cells: Vec<i32>,
    width: usize,
    height: usize,
}

const EMPTY_CELL: i32 = -1;

impl OrderedFeatureTable {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![EMPTY_CELL; width * height],
            width,
            height,
        }
    }

    fn set(&mut self, row: usize, col: usize, idx: u32) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = idx as i32;
        }
    }

    /// Candidate index at a cell, or `None` when the cell holds no candidate.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        let cell = self.cells[row * self.width + col];
        if cell == EMPTY_CELL {
            None
        } else {
            Some(cell as u32)
        }
    }

    /// Columns per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

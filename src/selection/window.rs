//! Precomputed angular neighbor window table.
//!
//! A spinning LiDAR samples on a fixed angular grid, so the set of (row, col)
//! cells that can possibly lie within a fixed Euclidean radius of a point
//! depends only on the point's range. This table precomputes that bound per
//! quantized range bin, replacing a generic radius search with two array
//! lookups per feature.

/// Search window for one quantized range bin.
///
/// `col_limits[dv]` is the maximum column offset to scan at row offset `dv`;
/// the maximum row offset is `col_limits.len() - 1`. Offsets shrink
/// monotonically as range grows, collapsing to a zero-by-zero window at the
/// table's last bin.
#[derive(Debug, Clone)]
pub struct RangeBinWindow {
    col_limits: Vec<u32>,
}

impl RangeBinWindow {
    /// Maximum row offset covered by this window.
    #[inline]
    pub fn max_row_offset(&self) -> usize {
        self.col_limits.len() - 1
    }

    /// Maximum column offset at the given row offset.
    #[inline]
    pub fn col_limit(&self, row_offset: usize) -> u32 {
        self.col_limits[row_offset]
    }
}

/// Range-quantized lookup of angular search windows.
///
/// Built once at engine construction; strictly read-only afterward, so it can
/// be shared across scan-processing threads without synchronization.
#[derive(Debug, Clone)]
pub struct WindowTable {
    bins: Vec<RangeBinWindow>,
    range_step: f32,
}

impl WindowTable {
    /// Build the table for the given sensor geometry.
    ///
    /// For each range bin `r = bin * range_step`, the vertical extent is
    /// `v_max = floor(atan2(radius, r) / vertical_resolution)`; at each row
    /// offset `i` the chord `k = r * tan(i * vertical_resolution)` leaves
    /// `sqrt(radius^2 - k^2)` of the sphere for the horizontal extent.
    /// Generation stops after the first bin whose window covers only the
    /// point itself.
    pub fn build(
        horizontal_resolution: f32,
        vertical_resolution: f32,
        radius: f32,
        range_step: f32,
    ) -> Self {
        let mut bins = Vec::new();
        let mut bin = 0u32;

        loop {
            let range = bin as f32 * range_step;
            let v_max = (radius.atan2(range) / vertical_resolution).floor() as usize;

            let mut col_limits = Vec::with_capacity(v_max + 1);
            let mut collapsed = false;

            for i in 0..=v_max {
                let k = range * (i as f32 * vertical_resolution).tan();
                let chord = (radius * radius - k * k).max(0.0).sqrt();
                let h_max = (chord.atan2(range) / horizontal_resolution).floor() as u32;

                col_limits.push(h_max);

                if v_max == 0 && h_max == 0 {
                    collapsed = true;
                }
            }

            bins.push(RangeBinWindow { col_limits });
            bin += 1;

            if collapsed {
                break;
            }
        }

        log::debug!(
            "built angular window table: {} bins, step {:.2} m, radius {:.2} m",
            bins.len(),
            range_step,
            radius
        );

        Self { bins, range_step }
    }

    /// Look up the window for a point at the given range from the sensor.
    ///
    /// Ranges beyond the table's built extent return `None`: such points are
    /// treated as having no neighbors, never as an error.
    #[inline]
    pub fn window(&self, range: f32) -> Option<&RangeBinWindow> {
        if range < 0.0 {
            return None;
        }
        let bin = (range / self.range_step).floor() as usize;
        self.bins.get(bin)
    }

    /// Number of range bins in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// True if the table holds no bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Range (meters) beyond which lookups return no window.
    #[inline]
    pub fn max_range(&self) -> f32 {
        self.bins.len() as f32 * self.range_step
    }
}

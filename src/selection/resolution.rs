//! Adaptive voxel resolution from the gradient cutoff.

/// Map a normalized gradient cutoff linearly into `[min_res, max_res]`.
///
/// Scans with more distinctive geometry produce cutoffs near 1 and therefore
/// coarser downstream resolution; sparse or ambiguous scans produce finer
/// resolution. A degenerate sentinel cutoff (negative, from a zero-candidate
/// scan) falls back to the midpoint instead of feeding the formula.
pub fn estimate_resolution(cutoff: f32, min_res: f32, max_res: f32) -> f32 {
    if cutoff < 0.0 {
        return (min_res + max_res) / 2.0;
    }
    min_res + cutoff * (max_res - min_res)
}

use crate::shared::constants::{DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR, MIN_FACE_SIZE};

/// Sensitivity knobs for multi-scale cascade detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionParams {
    /// Growth factor between successive search window sizes. Must exceed 1.0.
    pub scale_factor: f64,
    /// Overlapping candidates required before a detection is kept.
    pub min_neighbors: u32,
    /// Smallest reported face, `(width, height)` in pixels.
    pub min_size: (i32, i32),
}

impl DetectionParams {
    pub fn new(scale_factor: f64, min_neighbors: u32) -> Self {
        Self {
            scale_factor,
            min_neighbors,
            min_size: MIN_FACE_SIZE,
        }
    }
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_FACTOR, DEFAULT_MIN_NEIGHBORS)
    }
}

use image::RgbaImage;
use crate::error::Result;

/// A single pixel-level transform applied by the pipeline.
pub trait ImageFilter: Send + Sync {
    /// Apply the filter, producing a new image of the same dimensions
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage>;

    /// Human-readable stage announcement, e.g. "Removing background..."
    fn describe(&self) -> String;
}

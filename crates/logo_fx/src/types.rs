use std::path::PathBuf;

use image::{Rgb, RgbaImage};

/// Plain white, used for outlines and the white glow preset.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Light purple accent (#a78bfa) used for the purple glow preset.
pub const LIGHT_PURPLE: Rgb<u8> = Rgb([167, 139, 250]);

/// Output of a single pipeline run together with where it came from and
/// where it was written.
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub image: RgbaImage,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ProcessingResult {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

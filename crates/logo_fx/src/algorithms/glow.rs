use image::{GrayImage, Luma, Rgb, RgbaImage};
use crate::{
    algorithms::composite::{composite_over, extract_alpha, solid_layer},
    error::Result,
    traits::ImageFilter,
    types::{LIGHT_PURPLE, WHITE},
};

/// Blur an alpha mask with a Gaussian of standard deviation `radius`.
///
/// Non-positive or non-finite radii leave the mask as it is.
pub fn blur_mask(mask: &GrayImage, radius: f32) -> GrayImage {
    if radius > 0.0 && radius.is_finite() {
        imageproc::filter::gaussian_blur_f32(mask, radius)
    } else {
        mask.clone()
    }
}

/// Surround the image with a soft halo of `color`.
///
/// The halo alpha is the blurred source alpha scaled by `intensity` and
/// truncated to 8 bits.
pub fn add_glow(image: &RgbaImage, radius: f32, intensity: f32, color: Rgb<u8>) -> Result<RgbaImage> {
    let blurred = blur_mask(&extract_alpha(image), radius);

    let (width, height) = blurred.dimensions();
    let glow_alpha = GrayImage::from_fn(width, height, |x, y| {
        let scaled = blurred.get_pixel(x, y)[0] as f32 * intensity;
        Luma([scaled.clamp(0.0, 255.0) as u8])
    });
    let glow_layer = solid_layer(color, &glow_alpha);

    composite_over(image, &glow_layer)
}

/// Gaussian glow effect
#[derive(Debug, Clone)]
pub struct Glow {
    pub radius: f32,
    pub intensity: f32,
    pub color: Rgb<u8>,
}

impl Glow {
    pub fn white(radius: f32, intensity: f32) -> Self {
        Self { radius, intensity, color: WHITE }
    }

    pub fn purple(radius: f32, intensity: f32) -> Self {
        Self { radius, intensity, color: LIGHT_PURPLE }
    }

    fn color_name(&self) -> &'static str {
        if self.color == WHITE {
            "white"
        } else if self.color == LIGHT_PURPLE {
            "purple"
        } else {
            "custom"
        }
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self::white(5.0, 0.8)
    }
}

impl ImageFilter for Glow {
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        add_glow(image, self.radius, self.intensity, self.color)
    }

    fn describe(&self) -> String {
        format!("Adding {} glow effect (radius={})...", self.color_name(), self.radius)
    }
}

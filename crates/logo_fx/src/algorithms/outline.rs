use image::{GrayImage, Luma, RgbaImage};
use crate::{
    algorithms::composite::{composite_over, extract_alpha, solid_layer},
    error::Result,
    traits::ImageFilter,
    types::WHITE,
};

/// One pass of a 3x3 maximum filter.
///
/// Each output pixel takes the largest value of its 8-neighbourhood and
/// itself; the neighbourhood is clipped at the image border.
pub fn max_filter_3x3(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        let mut max_val = 0u8;
        for sy in y.saturating_sub(1)..=(y + 1).min(height - 1) {
            for sx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                max_val = max_val.max(mask.get_pixel(sx, sy)[0]);
            }
        }
        Luma([max_val])
    })
}

/// Grow a mask by `passes` pixels (Chebyshev distance) using repeated
/// 3x3 maximum filters.
pub fn dilate(mask: &GrayImage, passes: u32) -> GrayImage {
    let mut dilated = mask.clone();
    for _ in 0..passes {
        dilated = max_filter_3x3(&dilated);
    }
    dilated
}

/// Put a solid white outline `width` pixels wide behind the image.
///
/// A width of zero returns the image untouched.
pub fn add_white_outline(image: &RgbaImage, width: u32) -> Result<RgbaImage> {
    if width == 0 {
        return Ok(image.clone());
    }

    let outline = dilate(&extract_alpha(image), width);
    let outline_layer = solid_layer(WHITE, &outline);

    composite_over(image, &outline_layer)
}

/// Morphological white outline
#[derive(Debug, Clone)]
pub struct WhiteOutline {
    pub width: u32,
}

impl Default for WhiteOutline {
    fn default() -> Self {
        Self { width: 3 }
    }
}

impl ImageFilter for WhiteOutline {
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        add_white_outline(image, self.width)
    }

    fn describe(&self) -> String {
        format!("Adding {}px white outline...", self.width)
    }
}

use image::RgbaImage;
use crate::{error::Result, traits::ImageFilter};

/// Invert RGB of every visible pixel; fully transparent pixels get black RGB.
pub fn invert_colors(image: &RgbaImage) -> RgbaImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let visible = pixel[3] > 0;
        for c in 0..3 {
            let value = if visible { 255 - pixel[c] } else { 0 };
            pixel[c] = value;
        }
    }
    output
}

/// Paint every visible pixel white; fully transparent pixels get black RGB.
pub fn convert_to_white(image: &RgbaImage) -> RgbaImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let value = if pixel[3] > 0 { 255 } else { 0 };
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
    }
    output
}

#[derive(Debug, Clone, Default)]
pub struct InvertColors;

impl ImageFilter for InvertColors {
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        Ok(invert_colors(image))
    }

    fn describe(&self) -> String {
        "Inverting colors...".to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvertToWhite;

impl ImageFilter for ConvertToWhite {
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        Ok(convert_to_white(image))
    }

    fn describe(&self) -> String {
        "Converting all colors to white...".to_string()
    }
}

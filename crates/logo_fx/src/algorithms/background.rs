use image::RgbaImage;
use crate::{
    algorithms::classify::{is_background, is_non_white},
    error::Result,
    traits::ImageFilter,
};

/// Make near-white pixels transparent and everything else fully opaque.
///
/// Alpha is reset unconditionally, so pixels that were already
/// transparent become opaque again unless they are near-white.
pub fn remove_background_simple(image: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let alpha = if is_background(pixel, threshold) { 0 } else { 255 };
        pixel[3] = alpha;
    }
    output
}

/// Keep only near-white pixels; everything else becomes transparent.
///
/// Same unconditional alpha reset as [`remove_background_simple`].
pub fn extract_white_pixels(image: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let alpha = if is_non_white(pixel, threshold) { 0 } else { 255 };
        pixel[3] = alpha;
    }
    output
}

/// Background removal for logos on white or light backgrounds
#[derive(Debug, Clone)]
pub struct RemoveBackground {
    pub threshold: u8,
}

impl Default for RemoveBackground {
    fn default() -> Self {
        Self { threshold: 240 }
    }
}

impl ImageFilter for RemoveBackground {
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        Ok(remove_background_simple(image, self.threshold))
    }

    fn describe(&self) -> String {
        "Removing background...".to_string()
    }
}

/// White-pixel extraction for logos that are white on a dark or colored background
#[derive(Debug, Clone)]
pub struct ExtractWhitePixels {
    pub threshold: u8,
}

impl Default for ExtractWhitePixels {
    fn default() -> Self {
        Self { threshold: 200 }
    }
}

impl ImageFilter for ExtractWhitePixels {
    fn apply(&self, image: &RgbaImage) -> Result<RgbaImage> {
        Ok(extract_white_pixels(image, self.threshold))
    }

    fn describe(&self) -> String {
        "Extracting only white pixels...".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient_image() -> RgbaImage {
        RgbaImage::from_fn(16, 16, |x, y| {
            let v = (x * 16 + y) as u8;
            Rgba([v, v.wrapping_add(7), 255 - v, (x * 10) as u8])
        })
    }

    #[test]
    fn test_white_image_becomes_fully_transparent() {
        let image = RgbaImage::from_pixel(5, 5, Rgba([255, 255, 255, 255]));
        let result = remove_background_simple(&image, 240);

        assert_eq!(result.dimensions(), (5, 5));
        assert!(result.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_background_removal_alpha_is_binary() {
        let result = remove_background_simple(&gradient_image(), 240);
        assert!(result.pixels().all(|p| p[3] == 0 || p[3] == 255));
    }

    #[test]
    fn test_background_removal_resets_existing_transparency() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let result = remove_background_simple(&image, 240);

        assert!(result.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_extract_white_keeps_only_bright_pixels() {
        let mut image = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([230, 210, 255, 10]));
        image.put_pixel(2, 0, Rgba([255, 199, 255, 255]));

        let result = extract_white_pixels(&image, 200);
        assert_eq!(result.get_pixel(0, 0)[3], 0);
        assert_eq!(result.get_pixel(1, 0)[3], 255);
        assert_eq!(result.get_pixel(2, 0)[3], 0);
        assert!(result.pixels().all(|p| p[3] == 0 || p[3] == 255));
    }

    #[test]
    fn test_filters_preserve_dimensions_and_color() {
        let image = gradient_image();
        let removed = RemoveBackground::default().apply(&image).expect("Should apply");
        let extracted = ExtractWhitePixels::default().apply(&image).expect("Should apply");

        for result in [&removed, &extracted] {
            assert_eq!(result.dimensions(), image.dimensions());
            for (before, after) in image.pixels().zip(result.pixels()) {
                assert_eq!(before.0[..3], after.0[..3]);
            }
        }
    }
}

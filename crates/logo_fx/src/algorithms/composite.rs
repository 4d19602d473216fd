//! Porter-Duff "over" compositing and small layer helpers.

use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};
use crate::error::{LogoFxError, Result};

/// Composite `top` over `bottom`, pixel by pixel.
///
/// Both layers store straight (non-premultiplied) color; blending is done
/// on premultiplied values and rounded back to 8 bits.
pub fn composite_over(top: &RgbaImage, bottom: &RgbaImage) -> Result<RgbaImage> {
    if top.dimensions() != bottom.dimensions() {
        return Err(LogoFxError::DimensionMismatch {
            top: top.dimensions(),
            bottom: bottom.dimensions(),
        });
    }

    let (width, height) = top.dimensions();
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        blend_over(top.get_pixel(x, y), bottom.get_pixel(x, y))
    }))
}

/// Blend a single source pixel over a destination pixel.
#[inline]
pub fn blend_over(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3];
    let dst_a = dst[3];

    // Nothing underneath, or nothing shows through: the top pixel wins as-is
    if dst_a == 0 || src_a == 255 {
        return *src;
    }
    if src_a == 0 {
        return *dst;
    }

    let src_af = src_a as f32 / 255.0;
    let dst_af = dst_a as f32 / 255.0;
    let out_a = src_af + dst_af * (1.0 - src_af);

    let mut out = [0u8; 4];
    for c in 0..3 {
        let value = (src[c] as f32 * src_af + dst[c] as f32 * dst_af * (1.0 - src_af)) / out_a;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;

    Rgba(out)
}

/// Copy the alpha channel out into a single-channel mask.
pub fn extract_alpha(image: &RgbaImage) -> GrayImage {
    let (width, height) = image.dimensions();
    GrayImage::from_fn(width, height, |x, y| Luma([image.get_pixel(x, y)[3]]))
}

/// Build a layer of one flat color whose alpha is taken from `mask`.
pub fn solid_layer(color: Rgb<u8>, mask: &GrayImage) -> RgbaImage {
    let (width, height) = mask.dimensions();
    let [r, g, b] = color.0;
    RgbaImage::from_fn(width, height, |x, y| Rgba([r, g, b, mask.get_pixel(x, y)[0]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> RgbaImage {
        RgbaImage::from_fn(4, 3, |x, y| {
            Rgba([(x * 60) as u8, (y * 80) as u8, 17, ((x + y) * 40) as u8])
        })
    }

    #[test]
    fn test_transparent_bottom_is_identity() {
        let image = sample_image();
        let bottom = RgbaImage::new(4, 3);

        let result = composite_over(&image, &bottom).expect("Same dimensions");
        assert_eq!(result, image);
    }

    #[test]
    fn test_opaque_top_hides_bottom() {
        let top = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        let bottom = RgbaImage::from_pixel(2, 2, Rgba([200, 200, 200, 255]));

        let result = composite_over(&top, &bottom).expect("Same dimensions");
        assert_eq!(result, top);
    }

    #[test]
    fn test_transparent_top_shows_bottom() {
        let top = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let bottom = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 180]));

        let result = composite_over(&top, &bottom).expect("Same dimensions");
        assert_eq!(result, bottom);
    }

    #[test]
    fn test_half_transparent_over_opaque() {
        let blended = blend_over(&Rgba([255, 0, 0, 128]), &Rgba([0, 0, 255, 255]));
        assert_eq!(blended, Rgba([128, 0, 127, 255]));
    }

    #[test]
    fn test_dimension_mismatch_is_reported() {
        let top = RgbaImage::new(2, 2);
        let bottom = RgbaImage::new(3, 2);

        let err = composite_over(&top, &bottom).unwrap_err();
        assert!(matches!(err, LogoFxError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_solid_layer_takes_alpha_from_mask() {
        let mut mask = GrayImage::new(2, 1);
        mask.put_pixel(1, 0, Luma([99]));

        let layer = solid_layer(Rgb([1, 2, 3]), &mask);
        assert_eq!(*layer.get_pixel(0, 0), Rgba([1, 2, 3, 0]));
        assert_eq!(*layer.get_pixel(1, 0), Rgba([1, 2, 3, 99]));
        assert_eq!(extract_alpha(&layer), mask);
    }
}

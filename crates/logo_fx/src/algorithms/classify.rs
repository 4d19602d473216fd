//! Per-pixel classification against a brightness threshold.
//!
//! The two predicates are intentionally not negations of each other: a
//! channel exactly equal to the threshold is neither "background" nor
//! "non-white".

use image::Rgba;

/// True when every color channel is strictly above `threshold`.
pub fn is_background(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// True when any color channel is strictly below `threshold`.
pub fn is_non_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r < threshold || g < threshold || b < threshold
}

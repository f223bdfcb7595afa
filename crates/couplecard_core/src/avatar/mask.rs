//! Center-fill scaling and circular masking.
//!
//! # Responsibility
//! - Scale the upright bitmap so it fills the target square, cropped around
//!   the center.
//! - Zero the alpha channel outside the inscribed circle, with a one-pixel
//!   antialiased rim.
//!
//! # Invariants
//! - `center_fill` output is exactly `target_px × target_px`.
//! - `circular_mask` only ever lowers alpha; fully transparent input stays
//!   transparent.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Uniform-scales by `max(target/w, target/h)` and center-crops to the
/// target square, the usual fill-then-crop recipe.
pub(crate) fn center_fill(image: &RgbaImage, target_px: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return RgbaImage::new(target_px, target_px);
    }
    if width == target_px && height == target_px {
        return image.clone();
    }

    let scale = f64::from(target_px) / f64::from(width.min(height));
    let scaled_width = ((f64::from(width) * scale).round() as u32).max(target_px);
    let scaled_height = ((f64::from(height) * scale).round() as u32).max(target_px);
    let resized = imageops::resize(image, scaled_width, scaled_height, FilterType::Triangle);

    let x0 = (scaled_width - target_px) / 2;
    let y0 = (scaled_height - target_px) / 2;
    imageops::crop_imm(&resized, x0, y0, target_px, target_px).to_image()
}

/// Multiplies alpha by circular coverage around the image center.
///
/// Coverage ramps from 1 to 0 over one pixel at the rim, standing in for
/// the antialiased paint the platform canvases use.
pub(crate) fn circular_mask(image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 2.0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
        let alpha = f32::from(pixel[3]) * coverage;
        pixel[3] = alpha.round() as u8;
    }
}

//! Bounded decode and orientation correction.
//!
//! # Responsibility
//! - Probe image dimensions from the header before committing to a decode.
//! - Pick a power-of-two downsample factor so the working bitmap stays near
//!   the requested size.
//! - Read the EXIF orientation tag and map it to a rotation.
//!
//! # Invariants
//! - The downsample factor never shrinks either dimension below the request.
//! - EXIF read failures mean "no rotation", never an error.

use super::AvatarResult;
use exif::{In, Tag};
use image::RgbaImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Rotation in degrees needed to display the file upright.
///
/// Only the pure-rotation orientations (3, 6, 8) are corrected. Mirrored
/// orientations and unreadable or absent EXIF data yield 0.
pub(crate) fn exif_rotation_degrees(path: &Path) -> u32 {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return 0,
    };
    let mut reader = BufReader::new(file);
    let data = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(data) => data,
        Err(_) => return 0,
    };
    let orientation = data
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0));
    rotation_for_orientation(orientation.unwrap_or(1))
}

pub(crate) fn rotation_for_orientation(orientation: u32) -> u32 {
    match orientation {
        3 => 180,
        6 => 90,
        8 => 270,
        _ => 0,
    }
}

/// Largest power-of-two factor whose halved dimensions still cover the
/// requested size.
pub(crate) fn downsample_factor(width: u32, height: u32, req_width: u32, req_height: u32) -> u32 {
    let mut factor = 1;
    if width > req_width || height > req_height {
        let half_width = width / 2;
        let half_height = height / 2;
        while half_width / factor >= req_width && half_height / factor >= req_height {
            factor *= 2;
        }
    }
    factor
}

/// Decodes the file and immediately downsamples it by the selected factor.
pub(crate) fn decode_downsampled(path: &Path, target_px: u32) -> AvatarResult<RgbaImage> {
    let (width, height) = image::image_dimensions(path)?;
    let factor = downsample_factor(width, height, target_px, target_px);
    let decoded = image::open(path)?;
    if factor > 1 {
        let bounded = decoded.thumbnail((width / factor).max(1), (height / factor).max(1));
        Ok(bounded.to_rgba8())
    } else {
        Ok(decoded.to_rgba8())
    }
}

/// Applies a 0/90/180/270 degree clockwise rotation.
pub(crate) fn apply_rotation(image: RgbaImage, degrees: u32) -> RgbaImage {
    match degrees {
        90 => image::imageops::rotate90(&image),
        180 => image::imageops::rotate180(&image),
        270 => image::imageops::rotate270(&image),
        _ => image,
    }
}

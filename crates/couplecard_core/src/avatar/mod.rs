//! Avatar thumbnail pipeline.
//!
//! # Responsibility
//! - Turn an avatar file path into a fixed-size, upright, circularly-masked
//!   RGBA thumbnail for the widget card.
//! - Keep decode memory bounded via power-of-two downsampling before any
//!   full-resolution pixel work.
//!
//! # Invariants
//! - Successful output is always exactly `target_px × target_px`.
//! - EXIF rotations 90/180/270 are corrected; mirrored orientations pass
//!   through unrotated, matching the host widgets.
//! - `try_load_circular_avatar` never surfaces an error; callers fall back
//!   to the initial badge.

use image::RgbaImage;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod decode;
mod mask;

use decode::{apply_rotation, decode_downsampled, exif_rotation_degrees};
use mask::{center_fill, circular_mask};

/// Default thumbnail edge length in pixels. Shells pass their own
/// density-scaled size; this is the CLI/probe default.
pub const AVATAR_TARGET_PX: u32 = 128;

pub type AvatarResult<T> = Result<T, AvatarError>;

/// Failure cases of the avatar pipeline.
///
/// All of them degrade to badge fallback at the render layer; the enum
/// exists so logs can say what actually went wrong.
#[derive(Debug)]
pub enum AvatarError {
    EmptyPath,
    NotFound(PathBuf),
    ZeroTarget,
    Io(std::io::Error),
    Decode(image::ImageError),
}

impl Display for AvatarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "avatar path is empty"),
            Self::NotFound(path) => write!(f, "avatar file not found: {}", path.display()),
            Self::ZeroTarget => write!(f, "avatar target size must be non-zero"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AvatarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::EmptyPath | Self::NotFound(_) | Self::ZeroTarget => None,
        }
    }
}

impl From<std::io::Error> for AvatarError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<image::ImageError> for AvatarError {
    fn from(value: image::ImageError) -> Self {
        Self::Decode(value)
    }
}

/// Runs the full pipeline: probe, downsampled decode, EXIF rotation,
/// center-fill scale, circular mask.
///
/// # Errors
/// - `EmptyPath` / `NotFound` when there is nothing to decode.
/// - `ZeroTarget` when `target_px` is zero.
/// - `Decode` / `Io` when the file exists but cannot be read as an image.
pub fn load_circular_avatar(path: &Path, target_px: u32) -> AvatarResult<RgbaImage> {
    if target_px == 0 {
        return Err(AvatarError::ZeroTarget);
    }
    if path.as_os_str().is_empty() {
        return Err(AvatarError::EmptyPath);
    }
    if !path.exists() {
        return Err(AvatarError::NotFound(path.to_path_buf()));
    }

    let started_at = Instant::now();
    let rotation = exif_rotation_degrees(path);
    let decoded = decode_downsampled(path, target_px)?;
    let upright = apply_rotation(decoded, rotation);
    let mut thumbnail = center_fill(&upright, target_px);
    circular_mask(&mut thumbnail);

    debug!(
        "event=avatar_load module=avatar status=ok duration_ms={} rotation={} target_px={}",
        started_at.elapsed().as_millis(),
        rotation,
        target_px
    );
    Ok(thumbnail)
}

/// Degrade-only wrapper around [`load_circular_avatar`].
///
/// Absence (empty path, missing file) logs at debug; real decode failures
/// log at warn. Either way the caller gets `None` and shows the initial
/// badge instead.
pub fn try_load_circular_avatar(path: &Path, target_px: u32) -> Option<RgbaImage> {
    match load_circular_avatar(path, target_px) {
        Ok(thumbnail) => Some(thumbnail),
        Err(err @ (AvatarError::EmptyPath | AvatarError::NotFound(_))) => {
            debug!("event=avatar_load module=avatar status=absent reason={err}");
            None
        }
        Err(err) => {
            warn!(
                "event=avatar_load module=avatar status=error path={} error={err}",
                path.display()
            );
            None
        }
    }
}

/// Encodes a thumbnail as PNG bytes for transport across FFI.
pub fn encode_png(image: &RgbaImage) -> AvatarResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

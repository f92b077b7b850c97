// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! Errors raised while decoding, validating and windowing images.
//!
//! Every variant is terminal for the call that produced it. These are
//! deterministic input validation failures, not transient faults, so
//! nothing here is ever retried or silently recovered.

use std::{error::Error, fmt, io};

/// Crate wide result alias.
pub type Result<T> = std::result::Result<T, SsimError>;

#[derive(Debug)]
pub enum SsimError {
    /// The two images differ in width or height.
    DimensionMismatch {
        ref_width: u32,
        ref_height: u32,
        comp_width: u32,
        comp_height: u32,
    },
    /// The two images declare different per channel bit depths.
    BitDepthMismatch { reference: u32, comparison: u32 },
    /// The codec could not interpret the bytes as an image.
    Decode(image::ImageError),
    /// The underlying byte source was unreadable.
    Io(io::Error),
    /// Alignment produced zero windows, the image is smaller than one window.
    EmptyWindowSet {
        width: u32,
        height: u32,
        window_size: u32,
    },
    /// A requested block lies partially or fully outside image bounds.
    WindowOutOfBounds {
        x: u32,
        y: u32,
        size: u32,
        width: u32,
        height: u32,
    },
    /// The reference and comparison window sequences differ in length.
    WindowCountMismatch { reference: usize, comparison: usize },
}

impl fmt::Display for SsimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SsimError::DimensionMismatch {
                ref_width,
                ref_height,
                comp_width,
                comp_height,
            } => write!(
                f,
                "image dimensions are not the same: {}x{} vs {}x{}",
                ref_width, ref_height, comp_width, comp_height
            ),
            SsimError::BitDepthMismatch {
                reference,
                comparison,
            } => write!(
                f,
                "bits per channel of images don't match: {} vs {}",
                reference, comparison
            ),
            SsimError::Decode(err) => write!(f, "image decode error: {}", err),
            SsimError::Io(err) => write!(f, "io error: {}", err),
            SsimError::EmptyWindowSet {
                width,
                height,
                window_size,
            } => write!(
                f,
                "{}x{} image yields no {}x{} windows",
                width, height, window_size, window_size
            ),
            SsimError::WindowOutOfBounds {
                x,
                y,
                size,
                width,
                height,
            } => write!(
                f,
                "{0}x{0} window at ({1},{2}) exceeds {3}x{4} image bounds",
                size, x, y, width, height
            ),
            SsimError::WindowCountMismatch {
                reference,
                comparison,
            } => write!(
                f,
                "window count mismatch: {} reference vs {} comparison",
                reference, comparison
            ),
        }
    }
}

impl Error for SsimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SsimError::Decode(err) => Some(err),
            SsimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SsimError {
    fn from(err: io::Error) -> SsimError {
        SsimError::Io(err)
    }
}

impl From<image::ImageError> for SsimError {
    fn from(err: image::ImageError) -> SsimError {
        SsimError::Decode(err)
    }
}

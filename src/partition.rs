// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! Validates two decoded images, aligns them to the window grid and
//! cuts both into paired luma windows.
//!
//! Alignment truncates each dimension down to a multiple of the window
//! size, never rounds up. Images whose native size already sits on the
//! grid are used as-is, otherwise both are resampled with the same
//! linear filter to the same aligned size so the windows stay
//! comparable.

use crate::config::SsimConfig;
use crate::error::{Result, SsimError};
use crate::pair::PairedWindowSet;
use crate::window::LumaWindow;
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use log::debug;
use std::borrow::Cow;

pub struct WindowPartitioner {
    config: SsimConfig,
}

impl WindowPartitioner {
    pub fn new(config: SsimConfig) -> WindowPartitioner {
        WindowPartitioner { config }
    }

    /// Cuts both images into aligned non-overlapping blocks and pairs
    /// them up, x blocks in the outer loop and y blocks in the inner
    /// loop for both images.
    pub fn partition(
        &self,
        reference: &DynamicImage,
        comparison: &DynamicImage,
    ) -> Result<PairedWindowSet> {
        let (ref_width, ref_height) = reference.dimensions();
        let (comp_width, comp_height) = comparison.dimensions();
        if ref_width != comp_width || ref_height != comp_height {
            return Err(SsimError::DimensionMismatch {
                ref_width,
                ref_height,
                comp_width,
                comp_height,
            });
        }

        let win = self.config.window_size;
        let width = aligned_dimension(ref_width, win);
        let height = aligned_dimension(ref_height, win);
        // an image smaller than one window yields zero windows and an
        // undefined mean, refuse it up front instead of dividing by zero
        if width == 0 || height == 0 {
            return Err(SsimError::EmptyWindowSet {
                width: ref_width,
                height: ref_height,
                window_size: win,
            });
        }

        let reference = rescale(reference, width, height);
        let comparison = rescale(comparison, width, height);

        let num_win_x = width / win;
        let num_win_y = height / win;
        debug!(
            "partition {}x{} into {} window pairs of {}x{}",
            width,
            height,
            num_win_x * num_win_y,
            win,
            win
        );

        let ref_windows = windows_for_image(&reference, win, num_win_x, num_win_y)?;
        let comp_windows = windows_for_image(&comparison, win, num_win_x, num_win_y)?;

        PairedWindowSet::new(ref_windows, comp_windows)
    }
}

/// Truncates a dimension down to a multiple of the window size.
fn aligned_dimension(dimension: u32, window_size: u32) -> u32 {
    if window_size == 0 {
        return 0;
    }
    dimension / window_size * window_size
}

fn rescale(image: &DynamicImage, width: u32, height: u32) -> Cow<'_, DynamicImage> {
    if image.width() == width && image.height() == height {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(image.resize_exact(width, height, FilterType::Triangle))
    }
}

fn windows_for_image(
    image: &DynamicImage,
    window_size: u32,
    num_win_x: u32,
    num_win_y: u32,
) -> Result<Vec<LumaWindow>> {
    let mut windows = Vec::with_capacity((num_win_x * num_win_y) as usize);
    for i in 0..num_win_x {
        for j in 0..num_win_y {
            windows.push(LumaWindow::new(
                image,
                window_size,
                i * window_size,
                j * window_size,
            )?);
        }
    }
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn gray_image(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            width,
            height,
            Rgb([value, value, value]),
        ))
    }

    #[test]
    fn test_aligned_dimension_truncates() {
        assert_eq!(aligned_dimension(64, 8), 64);
        assert_eq!(aligned_dimension(63, 8), 56);
        assert_eq!(aligned_dimension(7, 8), 0);
        assert_eq!(aligned_dimension(0, 8), 0);
    }

    #[test]
    fn test_64x64_yields_64_pairs_of_64_samples() {
        let a = gray_image(64, 64, 100);
        let b = gray_image(64, 64, 100);
        let set = WindowPartitioner::new(SsimConfig::default())
            .partition(&a, &b)
            .unwrap();
        assert_eq!(set.len(), 64);
        for (r, c) in set.pairs() {
            assert_eq!(r.luma_values().len(), 64);
            assert_eq!(c.luma_values().len(), 64);
        }
    }

    #[test]
    fn test_dimension_mismatch_fails() {
        let a = gray_image(64, 64, 0);
        let b = gray_image(32, 32, 0);
        let result = WindowPartitioner::new(SsimConfig::default()).partition(&a, &b);
        assert!(matches!(result, Err(SsimError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_sub_window_image_is_an_empty_window_set() {
        let a = gray_image(4, 4, 0);
        let b = gray_image(4, 4, 0);
        let result = WindowPartitioner::new(SsimConfig::default()).partition(&a, &b);
        assert!(matches!(result, Err(SsimError::EmptyWindowSet { .. })));
    }

    #[test]
    fn test_unaligned_images_are_resampled_to_the_grid() {
        // 20 truncates to 16, a 2x2 grid of 8x8 windows
        let a = gray_image(20, 20, 60);
        let b = gray_image(20, 20, 60);
        let set = WindowPartitioner::new(SsimConfig::default())
            .partition(&a, &b)
            .unwrap();
        assert_eq!(set.len(), 4);
        // resampling a constant image keeps it constant up to rounding
        for (r, _) in set.pairs() {
            assert!((r.average_luma() - 60.0).abs() < 0.5);
        }
    }

    #[test]
    fn test_window_origins_follow_x_major_order() {
        let a = gray_image(16, 24, 0);
        let b = gray_image(16, 24, 0);
        let set = WindowPartitioner::new(SsimConfig::default())
            .partition(&a, &b)
            .unwrap();
        let origins: Vec<(u32, u32)> = set.pairs().map(|(r, _)| (r.x(), r.y())).collect();
        assert_eq!(
            origins,
            vec![(0, 0), (0, 8), (0, 16), (8, 0), (8, 8), (8, 16)]
        );
    }
}

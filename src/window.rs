// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! A fixed-size square block of a decoded image.
//!
//! Each window eagerly converts its pixels to luma at construction time
//! and caches the arithmetic mean. The sample buffer is owned, it is a
//! derived copy and not a view into the source image. Sample order is
//! fixed with x in the outer loop and y in the inner loop, so index i of
//! a window cut from one image lines up with the spatially identical
//! pixel of a window cut from the same spot of another image.

use crate::error::{Result, SsimError};
use image::{DynamicImage, GenericImageView, Rgba};

// REC 601 coefficients for standard def digital formats
// http://en.wikipedia.org/wiki/Luma_(video)
const RED_COEFFICIENT: f64 = 0.212655;
const GREEN_COEFFICIENT: f64 = 0.715158;
const BLUE_COEFFICIENT: f64 = 0.072187;

#[derive(Debug, Clone)]
pub struct LumaWindow {
    x: u32,
    y: u32,
    size: u32,
    luma_values: Vec<f64>,
    average_luma: f64,
}

impl LumaWindow {
    /// Samples the `size` x `size` block whose top left corner is at
    /// (`x`, `y`). Luma always comes from the 8 bit RGB view of the
    /// pixel, whatever bit depth the image declares.
    pub fn new(image: &DynamicImage, size: u32, x: u32, y: u32) -> Result<LumaWindow> {
        let (width, height) = image.dimensions();
        let in_bounds = x.checked_add(size).is_some_and(|mx| mx <= width)
            && y.checked_add(size).is_some_and(|my| my <= height);
        if !in_bounds {
            return Err(SsimError::WindowOutOfBounds {
                x,
                y,
                size,
                width,
                height,
            });
        }

        let mut luma_values = Vec::with_capacity((size * size) as usize);
        for i in x..x + size {
            for j in y..y + size {
                let Rgba([red, green, blue, _]) = image.get_pixel(i, j);
                let luma = red as f64 * RED_COEFFICIENT
                    + green as f64 * GREEN_COEFFICIENT
                    + blue as f64 * BLUE_COEFFICIENT;
                luma_values.push(luma);
            }
        }
        let average_luma = luma_values.iter().sum::<f64>() / luma_values.len() as f64;

        Ok(LumaWindow {
            x,
            y,
            size,
            luma_values,
            average_luma,
        })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// One luma sample per pixel, size squared in total.
    pub fn luma_values(&self) -> &[f64] {
        &self.luma_values
    }

    pub fn average_luma(&self) -> f64 {
        self.average_luma
    }
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
    fn test_sample_order_is_x_major() {
        // gray levels encode the pixel position so the buffer order is visible
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_fn(2, 2, |x, y| {
            Rgb([(x * 100 + y * 10) as u8; 3])
        }));
        let win = LumaWindow::new(&img, 2, 0, 0).unwrap();
        // the coefficients sum to 1.0, gray pixels map to their own level
        let expected = [0.0, 10.0, 100.0, 110.0];
        for (sample, want) in win.luma_values().iter().zip(expected) {
            assert!((sample - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_average_luma() {
        let img = gray_image(8, 8, 200);
        let win = LumaWindow::new(&img, 8, 0, 0).unwrap();
        assert_eq!(win.luma_values().len(), 64);
        assert!((win.average_luma() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_bounds_block_fails() {
        let img = gray_image(4, 4, 0);
        assert!(matches!(
            LumaWindow::new(&img, 8, 0, 0),
            Err(SsimError::WindowOutOfBounds { .. })
        ));
        assert!(matches!(
            LumaWindow::new(&img, 2, 3, 0),
            Err(SsimError::WindowOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_grayscale_source_uses_rgb_view() {
        let img = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(8, 8, image::Luma([77u8])));
        let win = LumaWindow::new(&img, 8, 0, 0).unwrap();
        assert!((win.average_luma() - 77.0).abs() < 1e-9);
    }
}

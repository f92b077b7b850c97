// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! Owns the reference image and turns window pairs into a mean SSIM
//! score, reference
//! http://en.wikipedia.org/wiki/Structural_similarity
//!
//! The dynamic range constant L is derived from the declared per
//! channel bit depth of the reference image, while luma samples always
//! come from the 8 bit RGB view of each pixel. The asymmetry is
//! deliberate, a 16 bit image is compared in the 8 bit luma domain
//! against constants sized for 16 bits.
//!
//! The engine keeps no mutable state, one instance can serve any number
//! of comparisons, concurrently if wrapped in a shared reference.

use crate::config::SsimConfig;
use crate::error::{Result, SsimError};
use crate::partition::WindowPartitioner;
use crate::window::LumaWindow;
use image::{DynamicImage, GenericImageView};
use log::{debug, info};
use std::fs;
use std::path::Path;

pub struct SsimEngine {
    reference: DynamicImage,
    config: SsimConfig,
}

impl SsimEngine {
    /// Loads and decodes the reference image from a file. A failure
    /// here is terminal, no engine is constructed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SsimEngine> {
        Self::open_with_config(path, SsimConfig::default())
    }

    pub fn open_with_config<P: AsRef<Path>>(path: P, config: SsimConfig) -> Result<SsimEngine> {
        let bytes = fs::read(path)?;
        Self::from_bytes_with_config(&bytes, config)
    }

    /// Decodes the reference image from an in-memory byte source.
    pub fn from_bytes(bytes: &[u8]) -> Result<SsimEngine> {
        Self::from_bytes_with_config(bytes, SsimConfig::default())
    }

    pub fn from_bytes_with_config(bytes: &[u8], config: SsimConfig) -> Result<SsimEngine> {
        let reference = image::load_from_memory(bytes)?;
        Ok(Self::with_config(reference, config))
    }

    /// Wraps an already decoded reference image.
    pub fn from_image(reference: DynamicImage) -> SsimEngine {
        Self::with_config(reference, SsimConfig::default())
    }

    pub fn with_config(reference: DynamicImage, config: SsimConfig) -> SsimEngine {
        info!(
            "ssim engine: {}x{} reference, {} bits per channel",
            reference.width(),
            reference.height(),
            bit_depth(&reference)
        );
        SsimEngine { reference, config }
    }

    pub fn config(&self) -> &SsimConfig {
        &self.config
    }

    pub fn reference(&self) -> &DynamicImage {
        &self.reference
    }

    /// Reads, decodes and scores a comparison image from a file.
    pub fn compare_to<P: AsRef<Path>>(&self, path: P) -> Result<f64> {
        let bytes = fs::read(path)?;
        self.compare_to_bytes(&bytes)
    }

    /// Decodes and scores a comparison image from an in-memory byte
    /// source.
    pub fn compare_to_bytes(&self, bytes: &[u8]) -> Result<f64> {
        let comparison = image::load_from_memory(bytes)?;
        self.compare_to_image(&comparison)
    }

    /// Scores an already decoded comparison image against the
    /// reference. Returns the mean of the per window SSIM values,
    /// nominally in [-1, 1] with 1.0 meaning identical.
    pub fn compare_to_image(&self, comparison: &DynamicImage) -> Result<f64> {
        let ref_depth = bit_depth(&self.reference);
        let comp_depth = bit_depth(comparison);
        if ref_depth != comp_depth {
            return Err(SsimError::BitDepthMismatch {
                reference: ref_depth,
                comparison: comp_depth,
            });
        }

        let windows = WindowPartitioner::new(self.config).partition(&self.reference, comparison)?;

        // stabilizing constants sized for the declared dynamic range
        let l = (1u64 << ref_depth) as f64 - 1.0;
        let c1 = (self.config.k1 * l).powi(2);
        let c2 = (self.config.k2 * l).powi(2);

        let mut sum = 0.0;
        let mut num_windows = 0u32;
        for (reference, comparison) in windows.pairs() {
            sum += window_ssim(reference, comparison, c1, c2);
            num_windows += 1;
        }
        // the partitioner refuses zero-window inputs, keep the guard anyway
        if num_windows == 0 {
            return Err(SsimError::EmptyWindowSet {
                width: self.reference.width(),
                height: self.reference.height(),
                window_size: self.config.window_size,
            });
        }

        let mssim = sum / num_windows as f64;
        debug!("mssim {} over {} windows", mssim, num_windows);
        Ok(mssim)
    }
}

/// Declared bits per channel, the first channel is authoritative (all
/// channels of an image crate color type share one depth).
fn bit_depth(image: &DynamicImage) -> u32 {
    let color = image.color();
    u32::from(color.bits_per_pixel()) / u32::from(color.channel_count())
}

/// SSIM of one window pair, using unbiased sample statistics (N-1
/// divisor) over the luma buffers.
fn window_ssim(w1: &LumaWindow, w2: &LumaWindow, c1: f64, c2: f64) -> f64 {
    let yx = w1.luma_values();
    let yy = w2.luma_values();
    let mx = w1.average_luma();
    let my = w2.average_luma();

    let mut sigsq_x = 0.0;
    let mut sigsq_y = 0.0;
    let mut sig_xy = 0.0;
    for (x, y) in yx.iter().zip(yy) {
        sigsq_x += (x - mx).powi(2);
        sigsq_y += (y - my).powi(2);
        sig_xy += (x - mx) * (y - my);
    }
    let n = yx.len() as f64 - 1.0;
    sigsq_x /= n;
    sigsq_y /= n;
    sig_xy /= n;

    let numerator = (2.0 * mx * my + c1) * (2.0 * sig_xy + c2);
    let denominator = (mx.powi(2) + my.powi(2) + c1) * (sigsq_x + sigsq_y + c2);

    numerator / denominator
}

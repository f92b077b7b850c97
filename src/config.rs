// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! Tunable constants of the SSIM computation.
//!
//! The defaults are the values from the SSIM paper: 8x8 windows and the
//! K1/K2 stabilizing factors 0.01 and 0.03. They are plumbed through a
//! config struct so a caller can pin different constants, but 8 is the
//! documented window contract and no alternative windowing strategy
//! (Gaussian weighting etc.) is offered.

use serde::{Deserialize, Serialize};

/// side length of the square comparison window
pub const DEFAULT_WINDOW_SIZE: u32 = 8;
/// luminance stabilizing factor from the SSIM paper
pub const DEFAULT_K1: f64 = 0.01;
/// contrast stabilizing factor from the SSIM paper
pub const DEFAULT_K2: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SsimConfig {
    /// Window size for local statistics.
    pub window_size: u32,
    /// K1 constant, stabilizes the luminance term near zero.
    pub k1: f64,
    /// K2 constant, stabilizes the contrast term near zero.
    pub k2: f64,
}

impl Default for SsimConfig {
    fn default() -> Self {
        SsimConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            k1: DEFAULT_K1,
            k2: DEFAULT_K2,
        }
    }
}

impl SsimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set window size.
    pub fn window_size(mut self, size: u32) -> Self {
        self.window_size = size;
        self
    }

    /// Set the K1 constant.
    pub fn k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    /// Set the K2 constant.
    pub fn k2(mut self, k2: f64) -> Self {
        self.k2 = k2;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SsimConfig::default();
        assert_eq!(config.window_size, 8);
        assert_eq!(config.k1, 0.01);
        assert_eq!(config.k2, 0.03);
    }

    #[test]
    fn test_builder_setters() {
        let config = SsimConfig::new().window_size(16).k1(0.02).k2(0.06);
        assert_eq!(config.window_size, 16);
        assert_eq!(config.k1, 0.02);
        assert_eq!(config.k2, 0.06);
    }
}

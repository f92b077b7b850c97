// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! PixelSsim computes the structural similarity index (SSIM) between two
//! decoded raster images of equal dimensions and reports the arithmetic
//! mean over all windows (MSSIM), a single score that is nominally in
//! [-1, 1] with 1.0 meaning identical.
//!
//! Both images are cut into aligned non-overlapping 8x8 blocks. Each
//! block carries a luminance signal derived from its 8 bit RGB pixels
//! with the REC. 601 weights, and each pair of blocks is compared with
//! the SSIM formula over unbiased sample statistics. Decoding the image
//! bytes is delegated to the image crate.
//!
//! ```no_run
//! use pixel_ssim::SsimEngine;
//!
//! let engine = SsimEngine::open("reference.png")?;
//! let mssim = engine.compare_to("comparison.png")?;
//! println!("mssim: {}", mssim);
//! # Ok::<(), pixel_ssim::SsimError>(())
//! ```

/// typed errors for decode, validation and windowing failures
pub mod error;

/// tunable constants: window size, K1 and K2
pub mod config;

/// log
pub mod log;

/// a square block of luma samples cut from a decoded image
pub mod window;

/// index aligned reference and comparison window sequences
pub mod pair;

/// validates, aligns and cuts both images into paired windows
pub mod partition;

/// owns the reference image and aggregates per window SSIM into MSSIM
pub mod engine;

pub use config::SsimConfig;
pub use engine::SsimEngine;
pub use error::{Result, SsimError};
pub use pair::PairedWindowSet;
pub use partition::WindowPartitioner;
pub use window::LumaWindow;

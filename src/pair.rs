// PixelSsim
// copyright zipxing@hotmail.com 2022～2025

//! Index aligned reference and comparison window sequences.
//!
//! Index i of the reference sequence corresponds to index i of the
//! comparison sequence by construction order. The set owns both
//! sequences and exposes no mutation surface, pairwise iteration
//! borrows and can therefore be restarted.

use crate::error::{Result, SsimError};
use crate::window::LumaWindow;
use itertools::zip_eq;

#[derive(Debug)]
pub struct PairedWindowSet {
    reference: Vec<LumaWindow>,
    comparison: Vec<LumaWindow>,
}

impl PairedWindowSet {
    /// Binds the two sequences, failing if their lengths differ.
    pub fn new(reference: Vec<LumaWindow>, comparison: Vec<LumaWindow>) -> Result<PairedWindowSet> {
        if reference.len() != comparison.len() {
            return Err(SsimError::WindowCountMismatch {
                reference: reference.len(),
                comparison: comparison.len(),
            });
        }
        Ok(PairedWindowSet {
            reference,
            comparison,
        })
    }

    /// Number of window pairs.
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// Iterates (reference, comparison) pairs in construction order.
    /// zip_eq would panic on length drift, the constructor has already
    /// ruled that out.
    pub fn pairs(&self) -> impl Iterator<Item = (&LumaWindow, &LumaWindow)> {
        zip_eq(&self.reference, &self.comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    fn windows(count: usize, value: u8) -> Vec<LumaWindow> {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(8, 8, Rgb([value; 3])));
        (0..count)
            .map(|_| LumaWindow::new(&img, 8, 0, 0).unwrap())
            .collect()
    }

    #[test]
    fn test_length_mismatch_fails() {
        let result = PairedWindowSet::new(windows(2, 0), windows(3, 0));
        assert!(matches!(
            result,
            Err(SsimError::WindowCountMismatch {
                reference: 2,
                comparison: 3
            })
        ));
    }

    #[test]
    fn test_pairs_line_up_and_restart() {
        let set = PairedWindowSet::new(windows(4, 10), windows(4, 20)).unwrap();
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        // two full passes over the same borrowed set
        for _ in 0..2 {
            let mut count = 0;
            for (r, c) in set.pairs() {
                assert!((r.average_luma() - 10.0).abs() < 1e-9);
                assert!((c.average_luma() - 20.0).abs() < 1e-9);
                count += 1;
            }
            assert_eq!(count, 4);
        }
    }
}

//! pixlabel-test - Regression test framework for pixlabel
//!
//! This crate provides a small regression test harness and deterministic
//! synthetic test images.
//!
//! - **Compare** (default): every mismatch fails the test
//! - **Display**: mismatches are reported but do not fail the test
//!
//! # Usage
//!
//! ```
//! use pixlabel_test::{RegParams, make_rect_image};
//!
//! let fpix = make_rect_image(10, 10, 2, 2, 5, 5, 1.0).unwrap();
//! let mut rp = RegParams::new("example");
//! rp.compare_values(9.0, fpix.count_present() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixlabel_core::FPix;

/// Create an image with the listed pixels set to 1.0
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or a pixel lies outside
/// the image.
pub fn make_image_from_pixels(width: u32, height: u32, pixels: &[(u32, u32)]) -> TestResult<FPix> {
    let mut fpix = new_image("pixels", width, height)?;
    for &(x, y) in pixels {
        if x >= width || y >= height {
            return Err(TestError::PixelOutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        fpix.set_pixel_unchecked(x, y, 1.0);
    }
    Ok(fpix)
}

/// Create an image with `value` in `[x0, x1) x [y0, y1)` and 0.0 elsewhere
///
/// The rectangle is clipped to the image.
pub fn make_rect_image(
    width: u32,
    height: u32,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    value: f32,
) -> TestResult<FPix> {
    let mut fpix = new_image("rect", width, height)?;
    for y in y0..y1.min(height) {
        for x in x0..x1.min(width) {
            fpix.set_pixel_unchecked(x, y, value);
        }
    }
    Ok(fpix)
}

/// Create a reproducible random image
///
/// Each pixel is foreground with probability `density`; foreground pixels
/// get a value in `(0, 1]`, so the same seed always yields the same image.
pub fn make_random_image(width: u32, height: u32, density: f64, seed: u32) -> TestResult<FPix> {
    let mut fpix = new_image("random", width, height)?;
    let mut rng = SimpleRng::new(seed);
    for v in fpix.data_mut() {
        if rng.next_f64() < density {
            *v = (1.0 - rng.next_f64()) as f32;
        }
    }
    Ok(fpix)
}

fn new_image(name: &str, width: u32, height: u32) -> TestResult<FPix> {
    FPix::new(width, height).map_err(|e| TestError::ImageBuild {
        name: name.to_string(),
        source: e,
    })
}

/// 64-bit linear congruential generator
///
/// Uses Knuth's MMIX multiplier and increment.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;

    fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Uniform value in [0, 1) from the high 53 bits of the next state
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

//! LabelPix - Integer label grid
//!
//! `LabelPix` stores one `u32` label per pixel. It is the output of the
//! connected component labelers: 0 marks background, positive values
//! identify a region.
//!
//! # Examples
//!
//! ```
//! use pixlabel_core::LabelPix;
//!
//! let mut labels = LabelPix::new(4, 4).unwrap();
//! labels.set_label(1, 1, 3).unwrap();
//! assert_eq!(labels.max_label(), 3);
//! assert_eq!(labels.count_labeled(), 1);
//! ```

use crate::error::{Error, Result};
use crate::fpix::FPix;

/// Label grid
///
/// Data is stored in row-major order with no padding, like [`FPix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPix {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl LabelPix {
    /// Create a new label grid with every pixel set to background (0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        Ok(LabelPix {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Create a background label grid with the same dimensions as `fpix`
    pub fn new_like(fpix: &FPix) -> Self {
        LabelPix {
            width: fpix.width(),
            height: fpix.height(),
            data: vec![0; fpix.data().len()],
        }
    }

    /// Create a label grid from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(LabelPix {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the label at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_label(&self, x: u32, y: u32) -> Result<u32> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_label_unchecked(x, y))
    }

    /// Set the label at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_label(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_label_unchecked(x, y, label);
        Ok(())
    }

    /// Get the label at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_label_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the label at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_label_unchecked(&mut self, x: u32, y: u32, label: u32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = label;
    }

    /// Get raw access to the label data
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable access to the label data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get a row of labels
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Largest label in the grid, 0 if every pixel is background
    ///
    /// For a densely numbered labeling this is the number of components.
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Number of non-background pixels
    pub fn count_labeled(&self) -> usize {
        self.data.iter().filter(|&&l| l != 0).count()
    }
}

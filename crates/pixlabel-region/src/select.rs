//! Component selection by area
//!
//! This module removes connected components that are smaller than a
//! minimum pixel count while leaving the values of the surviving pixels
//! untouched.

use crate::conncomp::{LabelMethod, label_with};
use crate::error::{RegionError, RegionResult};
use crate::label::dense_size_table;
use log::debug;
use pixlabel_core::FPix;

/// Options for area filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaFilterOptions {
    /// Minimum number of pixels a component needs to be kept (must be > 0)
    pub min_size: u32,
    /// Labeling algorithm used to find the components
    pub method: LabelMethod,
}

impl AreaFilterOptions {
    /// Create new options with the specified minimum size
    pub fn new(min_size: u32) -> Self {
        Self {
            min_size,
            method: LabelMethod::default(),
        }
    }

    /// Set the labeling algorithm
    pub fn with_method(mut self, method: LabelMethod) -> Self {
        self.method = method;
        self
    }
}

/// Remove the 4-connected components with fewer than `min_size` pixels
///
/// Pixels of components with at least `min_size` pixels keep their original
/// value; every other pixel of the output is 0.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `min_size` is 0.
///
/// # Examples
///
/// ```
/// use pixlabel_core::FPix;
/// use pixlabel_region::filter_by_area;
///
/// let fpix = FPix::from_rows(&[
///     &[0.5, 0.7, 0.0, 0.0],
///     &[0.0, 0.9, 0.0, 2.0],
/// ]).unwrap();
///
/// let filtered = filter_by_area(&fpix, 2).unwrap();
/// assert_eq!(filtered.data(), &[0.5, 0.7, 0.0, 0.0, 0.0, 0.9, 0.0, 0.0]);
/// ```
pub fn filter_by_area(fpix: &FPix, min_size: u32) -> RegionResult<FPix> {
    filter_by_area_with(fpix, &AreaFilterOptions::new(min_size))
}

/// Remove small components using explicit options
///
/// The result depends only on the component partition, so every
/// [`LabelMethod`] gives the same output.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `options.min_size` is 0.
pub fn filter_by_area_with(fpix: &FPix, options: &AreaFilterOptions) -> RegionResult<FPix> {
    if options.min_size == 0 {
        return Err(RegionError::InvalidParameters(
            "min_size must be > 0".to_string(),
        ));
    }

    let labels = label_with(fpix, options.method);
    let sizes = dense_size_table(&labels);

    let mut output = fpix.create_template();
    for ((dst, &src), &label) in output
        .data_mut()
        .iter_mut()
        .zip(fpix.data())
        .zip(labels.data())
    {
        if label > 0 && sizes[label as usize] >= options.min_size {
            *dst = src;
        }
    }

    debug!(
        "area filter (min_size={}): kept {} of {} components",
        options.min_size,
        sizes.iter().skip(1).filter(|&&n| n >= options.min_size).count(),
        sizes.len() - 1
    );
    Ok(output)
}

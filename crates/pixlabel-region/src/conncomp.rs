//! Connected component analysis
//!
//! This module labels the 4-connected components of an [`FPix`]. A pixel is
//! part of the foreground when its value is non-zero; two foreground pixels
//! belong to the same component when a chain of horizontally or vertically
//! adjacent foreground pixels joins them.
//!
//! Two labelers produce the same partition:
//!
//! - [`label_connected_components`] grows one component at a time with an
//!   explicit stack, numbering components in raster order of their first
//!   pixel.
//! - [`label_connected_components_two_pass`](crate::twopass::label_connected_components_two_pass)
//!   assigns provisional labels in a single forward scan and reconciles them
//!   afterwards.
//!
//! Numeric label values may differ between the two; only the grouping of
//! pixels is guaranteed to agree.

use crate::label::get_component_stats;
use crate::twopass::label_connected_components_two_pass;
use log::{debug, trace};
use pixlabel_core::{Box, FPix, LabelPix};

/// Labeling algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMethod {
    /// Depth-first flood fill from each unlabeled seed
    #[default]
    FloodFill,
    /// Forward raster scan with deferred equivalence resolution
    TwoPass,
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Unique label for this component
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// In-bounds 4-neighbors of (x, y): left, up, down, right
pub(crate) fn neighbors_4(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> impl Iterator<Item = (u32, u32)> {
    // wrapping_sub turns a step off the left/top edge into u32::MAX, which
    // the bounds filter rejects
    [
        (x.wrapping_sub(1), y),
        (x, y.wrapping_sub(1)),
        (x, y + 1),
        (x + 1, y),
    ]
    .into_iter()
    .filter(move |&(nx, ny)| nx < width && ny < height)
}

/// Label all 4-connected components by flood fill
///
/// Pixels are scanned in raster order. Every foreground pixel that has not
/// been labeled yet seeds a new component; the k-th seed found gets label k.
/// The component is then explored with an explicit stack, so region size is
/// never limited by call-stack depth.
///
/// # Returns
///
/// A label grid of the same size as `fpix` with 0 at background pixels and
/// labels `1..=K` on the K components.
///
/// # Examples
///
/// ```
/// use pixlabel_core::FPix;
/// use pixlabel_region::label_connected_components;
///
/// let fpix = FPix::from_rows(&[
///     &[1.0, 0.0, 1.0],
///     &[1.0, 0.0, 0.0],
///     &[0.0, 0.0, 3.0],
/// ]).unwrap();
///
/// let labels = label_connected_components(&fpix);
/// assert_eq!(labels.data(), &[1, 0, 2, 1, 0, 0, 0, 0, 3]);
/// ```
pub fn label_connected_components(fpix: &FPix) -> LabelPix {
    let (width, height) = fpix.dimensions();
    let mut labels = LabelPix::new_like(fpix);
    let mut stack = Vec::new();
    let mut next_label = 1u32;

    for y in 0..height {
        for x in 0..width {
            if !fpix.is_present(x, y) || labels.get_label_unchecked(x, y) != 0 {
                continue;
            }
            let count = fill_component(fpix, &mut labels, &mut stack, (x, y), next_label);
            trace!("component {} seeded at ({}, {}): {} pixels", next_label, x, y, count);
            next_label += 1;
        }
    }

    debug!(
        "flood fill labeling: {} components in {}x{} image",
        next_label - 1,
        width,
        height
    );
    labels
}

/// Assign `label` to every foreground pixel reachable from `seed`
///
/// A pixel is labeled as it is pushed, so it enters the stack at most once.
/// Returns the number of pixels labeled.
fn fill_component(
    fpix: &FPix,
    labels: &mut LabelPix,
    stack: &mut Vec<(u32, u32)>,
    seed: (u32, u32),
    label: u32,
) -> u32 {
    let (width, height) = fpix.dimensions();
    let mut count = 1u32;

    labels.set_label_unchecked(seed.0, seed.1, label);
    stack.push(seed);

    while let Some((x, y)) = stack.pop() {
        for (nx, ny) in neighbors_4(x, y, width, height) {
            if fpix.is_present(nx, ny) && labels.get_label_unchecked(nx, ny) == 0 {
                labels.set_label_unchecked(nx, ny, label);
                stack.push((nx, ny));
                count += 1;
            }
        }
    }

    count
}

/// Label components with the selected algorithm
pub fn label_with(fpix: &FPix, method: LabelMethod) -> LabelPix {
    match method {
        LabelMethod::FloodFill => label_connected_components(fpix),
        LabelMethod::TwoPass => label_connected_components_two_pass(fpix),
    }
}

/// Find all connected components in an image
///
/// Returns one entry per component, ordered by label, each with its pixel
/// count and bounding box.
///
/// # Examples
///
/// ```
/// use pixlabel_core::FPix;
/// use pixlabel_region::{LabelMethod, find_connected_components};
///
/// let mut fpix = FPix::new(100, 100).unwrap();
/// fpix.set_pixel(10, 10, 1.0).unwrap();
/// fpix.set_pixel(11, 10, 1.0).unwrap();
/// fpix.set_pixel(50, 50, 1.0).unwrap();
///
/// let components = find_connected_components(&fpix, LabelMethod::FloodFill);
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[0].pixel_count, 2);
/// ```
pub fn find_connected_components(fpix: &FPix, method: LabelMethod) -> Vec<ConnectedComponent> {
    let labels = label_with(fpix, method);
    get_component_stats(&labels)
        .into_iter()
        .map(|s| ConnectedComponent::new(s.label, s.pixel_count, s.bounds))
        .collect()
}

/// Count the connected components in an image
pub fn count_components(fpix: &FPix, method: LabelMethod) -> u32 {
    label_with(fpix, method).max_label()
}

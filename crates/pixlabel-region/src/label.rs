//! Label grid analysis
//!
//! This module provides functions for measuring and comparing the
//! components of an existing label grid, independently of the algorithm
//! that produced it.

use crate::error::{RegionError, RegionResult};
use pixlabel_core::{Box, FPix, LabelPix};
use std::collections::{BTreeMap, HashMap};

/// Component statistics
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Component label
    pub label: u32,
    /// Bounding box
    pub bounds: Box,
    /// Number of pixels
    pub pixel_count: u32,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

/// Count pixels for every label present in the grid
///
/// Keyed by label, so the cost depends on the pixel count and not on how
/// large the label values are.
fn component_size_map(labeled: &LabelPix) -> BTreeMap<u32, u32> {
    let mut counts = BTreeMap::new();
    for &label in labeled.data().iter().filter(|&&l| l > 0) {
        *counts.entry(label).or_insert(0u32) += 1;
    }
    counts
}

/// Count pixels per label into a table indexed by label
///
/// Entry 0 is always 0. The table has `max_label() + 1` entries, so this is
/// only for the dense `1..=K` labelings the labelers produce.
pub(crate) fn dense_size_table(labeled: &LabelPix) -> Vec<u32> {
    let mut counts = vec![0u32; labeled.max_label() as usize + 1];
    for &label in labeled.data().iter().filter(|&&l| l > 0) {
        counts[label as usize] += 1;
    }
    counts
}

/// Get pixel count for each component
///
/// # Arguments
///
/// * `labeled` - Label grid
///
/// # Returns
///
/// A vector of pixel counts ordered by label. For a dense labeling the
/// index corresponds to (label - 1).
pub fn get_component_sizes(labeled: &LabelPix) -> Vec<u32> {
    component_size_map(labeled).into_values().collect()
}

/// Get bounding boxes for all components
///
/// # Returns
///
/// A vector of bounding boxes ordered by label. For a dense labeling the
/// index corresponds to (label - 1).
pub fn get_component_bounds(labeled: &LabelPix) -> Vec<Box> {
    get_component_stats(labeled)
        .into_iter()
        .map(|s| s.bounds)
        .collect()
}

/// Get detailed statistics for all components
///
/// # Returns
///
/// A vector of component statistics, ordered by label.
pub fn get_component_stats(labeled: &LabelPix) -> Vec<ComponentStats> {
    struct Accum {
        count: u32,
        sum_x: u64,
        sum_y: u64,
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    }

    let mut stats: BTreeMap<u32, Accum> = BTreeMap::new();

    for y in 0..labeled.height() {
        for (x, &label) in labeled.row(y).iter().enumerate() {
            if label == 0 {
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            let acc = stats.entry(label).or_insert(Accum {
                count: 0,
                sum_x: 0,
                sum_y: 0,
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            });

            acc.count += 1;
            acc.sum_x += x as u64;
            acc.sum_y += y as u64;
            acc.min_x = acc.min_x.min(x);
            acc.min_y = acc.min_y.min(y);
            acc.max_x = acc.max_x.max(x);
            acc.max_y = acc.max_y.max(y);
        }
    }

    stats
        .into_iter()
        .map(|(label, acc)| ComponentStats {
            label,
            bounds: Box::from_extremes(acc.min_x, acc.min_y, acc.max_x, acc.max_y),
            pixel_count: acc.count,
            centroid_x: acc.sum_x as f64 / acc.count as f64,
            centroid_y: acc.sum_y as f64 / acc.count as f64,
        })
        .collect()
}

/// Transform a label grid so each pixel contains the area of its component
///
/// Background pixels stay 0.
pub fn component_area_transform(labeled: &LabelPix) -> LabelPix {
    let sizes = component_size_map(labeled);
    let mut areas = labeled.clone();
    for label in areas.data_mut().iter_mut().filter(|l| **l != 0) {
        *label = sizes.get(&*label).copied().unwrap_or(0);
    }
    areas
}

/// Extract a single component as a mask
///
/// Returns an image of the same size with 1.0 on the pixels carrying
/// `label` and 0.0 elsewhere.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `label` is 0 or does not
/// occur in the grid.
pub fn extract_component(labeled: &LabelPix, label: u32) -> RegionResult<FPix> {
    if label == 0 {
        return Err(RegionError::InvalidParameters(
            "label 0 is background, not a component".to_string(),
        ));
    }

    let (width, height) = labeled.dimensions();
    if !labeled.data().contains(&label) {
        return Err(RegionError::InvalidParameters(format!(
            "label {} not found in {}x{} label grid",
            label, width, height
        )));
    }

    let data: Vec<f32> = labeled
        .data()
        .iter()
        .map(|&l| if l == label { 1.0 } else { 0.0 })
        .collect();
    Ok(FPix::from_data(width, height, data)?)
}

/// Whether two label grids describe the same partition
///
/// True when both grids have the same dimensions, the same background
/// pixels, and their positive labels correspond one-to-one. The label
/// values themselves may differ.
///
/// # Examples
///
/// ```
/// use pixlabel_core::LabelPix;
/// use pixlabel_region::same_partition;
///
/// let a = LabelPix::from_data(3, 1, vec![1, 0, 2]).unwrap();
/// let b = LabelPix::from_data(3, 1, vec![7, 0, 3]).unwrap();
/// let c = LabelPix::from_data(3, 1, vec![1, 0, 1]).unwrap();
/// assert!(same_partition(&a, &b));
/// assert!(!same_partition(&a, &c));
/// ```
pub fn same_partition(a: &LabelPix, b: &LabelPix) -> bool {
    if a.dimensions() != b.dimensions() {
        return false;
    }

    let mut forward: HashMap<u32, u32> = HashMap::new();
    let mut backward: HashMap<u32, u32> = HashMap::new();

    for (&la, &lb) in a.data().iter().zip(b.data()) {
        if (la == 0) != (lb == 0) {
            return false;
        }
        if la == 0 {
            continue;
        }
        if *forward.entry(la).or_insert(lb) != lb || *backward.entry(lb).or_insert(la) != la {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(width: u32, height: u32, data: &[u32]) -> LabelPix {
        LabelPix::from_data(width, height, data.to_vec()).unwrap()
    }

    #[test]
    fn test_get_component_sizes() {
        let lab = labels(4, 2, &[1, 1, 0, 2, 0, 1, 0, 3]);
        assert_eq!(get_component_sizes(&lab), vec![3, 1, 1]);
    }

    #[test]
    fn test_sparse_labels() {
        let lab = labels(3, 1, &[1, 0, 400_000_000]);
        assert_eq!(get_component_sizes(&lab), vec![1, 1]);
        assert_eq!(component_area_transform(&lab).data(), &[1, 0, 1]);

        let lab = labels(2, 2, &[u32::MAX, u32::MAX, 7, 0]);
        assert_eq!(get_component_sizes(&lab), vec![1, 2]);
        assert_eq!(component_area_transform(&lab).data(), &[2, 2, 1, 0]);
    }

    #[test]
    fn test_dense_size_table() {
        let lab = labels(4, 1, &[2, 0, 2, 1]);
        assert_eq!(dense_size_table(&lab), vec![0, 1, 2]);
    }

    #[test]
    fn test_get_component_bounds() {
        let lab = labels(4, 3, &[1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 2]);
        let bounds = get_component_bounds(&lab);

        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds[0], Box::new_unchecked(0, 0, 3, 2));
        assert_eq!(bounds[1], Box::new_unchecked(3, 2, 1, 1));
    }

    #[test]
    fn test_get_component_stats() {
        // (0, 0), (2, 0), (1, 1) under one label
        let lab = labels(3, 2, &[1, 0, 1, 0, 1, 0]);
        let stats = get_component_stats(&lab);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].pixel_count, 3);
        assert!((stats[0].centroid_x - 1.0).abs() < 0.01);
        assert!((stats[0].centroid_y - 1.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_label_grid() {
        let lab = LabelPix::new(10, 10).unwrap();
        assert!(get_component_sizes(&lab).is_empty());
        assert!(get_component_bounds(&lab).is_empty());
        assert!(get_component_stats(&lab).is_empty());
        assert_eq!(component_area_transform(&lab), lab);
    }

    #[test]
    fn test_component_area_transform() {
        let lab = labels(3, 2, &[1, 1, 0, 2, 0, 1]);
        let areas = component_area_transform(&lab);
        assert_eq!(areas.data(), &[3, 3, 0, 1, 0, 3]);
    }

    #[test]
    fn test_extract_component() {
        let lab = labels(3, 1, &[2, 0, 1]);
        let mask = extract_component(&lab, 2).unwrap();
        assert_eq!(mask.data(), &[1.0, 0.0, 0.0]);

        assert!(extract_component(&lab, 0).is_err());
        assert!(extract_component(&lab, 5).is_err());
    }

    #[test]
    fn test_same_partition() {
        let a = labels(3, 2, &[1, 1, 0, 2, 0, 3]);
        let b = labels(3, 2, &[3, 3, 0, 1, 0, 2]);
        assert!(same_partition(&a, &b));

        // Merged components
        let c = labels(3, 2, &[1, 1, 0, 2, 0, 2]);
        assert!(!same_partition(&a, &c));
        assert!(!same_partition(&c, &a));

        // Background mismatch
        let d = labels(3, 2, &[1, 1, 1, 2, 0, 3]);
        assert!(!same_partition(&a, &d));

        // Shape mismatch
        let e = labels(2, 3, &[1, 1, 0, 2, 0, 3]);
        assert!(!same_partition(&a, &e));
    }
}

//! Two-pass connected component labeling
//!
//! The first pass walks the image once in raster order. Each foreground
//! pixel only looks at its left and upper neighbors, which have already been
//! visited: it inherits a label from them or starts a new provisional label.
//! When the two neighbors carry different labels, the pair is recorded in a
//! [`LabelEquivalences`] forest.
//!
//! The second pass replaces every provisional label by the root of its tree
//! and renumbers the roots densely as `1..=K`, in the raster order in which
//! they are first met.

use crate::error::{RegionError, RegionResult};
use log::{debug, trace};
use pixlabel_core::{FPix, LabelPix};

/// Equivalences between provisional labels
///
/// A forest in which every provisional label points to at most one
/// successor. A label with no successor is a root. Links are only ever
/// recorded between two distinct roots, so no cycle can form and
/// [`root`](Self::root) always terminates.
///
/// Label 0 is reserved for background and is never issued.
#[derive(Debug, Clone)]
pub struct LabelEquivalences {
    /// `successor[l]` is the label `l` was merged into, or 0 for a root.
    /// Index 0 is unused.
    successor: Vec<u32>,
}

impl Default for LabelEquivalences {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelEquivalences {
    /// Create an empty forest
    pub fn new() -> Self {
        Self { successor: vec![0] }
    }

    /// Issue the next provisional label, starting at 1
    pub fn new_label(&mut self) -> u32 {
        self.successor.push(0);
        (self.successor.len() - 1) as u32
    }

    /// Number of provisional labels issued so far
    pub fn len(&self) -> usize {
        self.successor.len() - 1
    }

    /// Whether no label has been issued yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Follow successor links from `label` until a root is reached
    ///
    /// A label that was never issued is its own root.
    pub fn root(&self, mut label: u32) -> u32 {
        while let Some(&next) = self.successor.get(label as usize) {
            if next == 0 {
                break;
            }
            label = next;
        }
        label
    }

    /// Whether `label` was handed out by [`new_label`](Self::new_label)
    pub fn is_issued(&self, label: u32) -> bool {
        label != 0 && (label as usize) < self.successor.len()
    }

    /// Record that `current` and `other` name the same component
    ///
    /// Both labels are resolved to their roots first; if the roots differ,
    /// the root of `current` is linked to the root of `other`.
    ///
    /// Returns `true` if two trees were merged.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if either label is the
    /// background label 0 or was not issued by [`new_label`](Self::new_label).
    pub fn record(&mut self, current: u32, other: u32) -> RegionResult<bool> {
        if let Some(bad) = [current, other].into_iter().find(|&l| !self.is_issued(l)) {
            return Err(RegionError::InvalidParameters(format!(
                "label {} is not an issued provisional label (1..={})",
                bad,
                self.len()
            )));
        }
        Ok(self.link(current, other))
    }

    /// Link the roots of two issued labels
    fn link(&mut self, current: u32, other: u32) -> bool {
        let current_root = self.root(current);
        let other_root = self.root(other);
        if current_root == other_root {
            return false;
        }
        self.successor[current_root as usize] = other_root;
        true
    }
}

/// Label all 4-connected components with a two-pass scan
///
/// Produces the same partition of foreground pixels as
/// [`label_connected_components`](crate::conncomp::label_connected_components).
/// Final labels are dense `1..=K`, numbered in the raster order in which the
/// root of each component is first met during the second pass.
///
/// # Examples
///
/// ```
/// use pixlabel_core::FPix;
/// use pixlabel_region::label_connected_components_two_pass;
///
/// // A "U": the two arms only meet in the bottom row
/// let fpix = FPix::from_rows(&[
///     &[1.0, 0.0, 1.0],
///     &[1.0, 0.0, 1.0],
///     &[1.0, 1.0, 1.0],
/// ]).unwrap();
///
/// let labels = label_connected_components_two_pass(&fpix);
/// assert_eq!(labels.max_label(), 1);
/// ```
pub fn label_connected_components_two_pass(fpix: &FPix) -> LabelPix {
    let (width, height) = fpix.dimensions();
    let mut labels = LabelPix::new_like(fpix);
    let mut equivalences = LabelEquivalences::new();

    // Pass 1: provisional labels
    for y in 0..height {
        for x in 0..width {
            if !fpix.is_present(x, y) {
                continue;
            }

            let left = if x > 0 {
                labels.get_label_unchecked(x - 1, y)
            } else {
                0
            };
            let up = if y > 0 {
                labels.get_label_unchecked(x, y - 1)
            } else {
                0
            };

            let label = match (left, up) {
                (0, 0) => equivalences.new_label(),
                (l, 0) | (0, l) => l,
                (l, u) => {
                    let current = l.min(u);
                    // Both neighbors were labeled by this pass, so both are issued
                    if l != u && equivalences.link(current, l.max(u)) {
                        trace!("merged provisional labels {} and {} at ({}, {})", l, u, x, y);
                    }
                    current
                }
            };
            labels.set_label_unchecked(x, y, label);
        }
    }

    // Pass 2: resolve roots and compact them to 1..=K
    let mut compact = vec![0u32; equivalences.len() + 1];
    let mut next_label = 1u32;

    for label in labels.data_mut().iter_mut().filter(|l| **l != 0) {
        let root = equivalences.root(*label) as usize;
        if compact[root] == 0 {
            compact[root] = next_label;
            next_label += 1;
        }
        *label = compact[root];
    }

    debug!(
        "two-pass labeling: {} provisional labels, {} components in {}x{} image",
        equivalences.len(),
        next_label - 1,
        width,
        height
    );
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalences_new_labels() {
        let mut eq = LabelEquivalences::new();
        assert!(eq.is_empty());
        assert_eq!(eq.new_label(), 1);
        assert_eq!(eq.new_label(), 2);
        assert_eq!(eq.len(), 2);
        assert_eq!(eq.root(2), 2);
    }

    #[test]
    fn test_equivalences_chain() {
        let mut eq = LabelEquivalences::new();
        for _ in 0..4 {
            eq.new_label();
        }

        assert!(eq.record(1, 2).unwrap());
        assert!(eq.record(3, 4).unwrap());
        assert!(eq.record(1, 3).unwrap());
        // Already in one tree
        assert!(!eq.record(2, 4).unwrap());

        let root = eq.root(1);
        assert!((1..=4).all(|l| eq.root(l) == root));
    }

    #[test]
    fn test_equivalences_never_cycle() {
        let mut eq = LabelEquivalences::new();
        for _ in 0..3 {
            eq.new_label();
        }
        eq.record(1, 2).unwrap();
        eq.record(2, 3).unwrap();
        eq.record(3, 1).unwrap();
        eq.record(1, 3).unwrap();

        // Every root lookup terminates on the same root
        assert_eq!(eq.root(1), eq.root(3));
        assert_eq!(eq.root(2), eq.root(3));
    }

    #[test]
    fn test_equivalences_reject_unknown_labels() {
        let mut eq = LabelEquivalences::new();
        let a = eq.new_label();

        assert!(matches!(eq.record(5, a), Err(RegionError::InvalidParameters(_))));
        assert!(eq.record(a, 5).is_err());
        assert!(eq.record(0, a).is_err());
        assert!(eq.record(a, 0).is_err());

        // Rejected calls leave the forest untouched
        assert_eq!(eq.root(0), 0);
        assert_eq!(eq.root(a), a);
        assert_eq!(eq.root(5), 5);
        assert!(!eq.record(a, a).unwrap());
    }

    #[test]
    fn test_single_row_and_column() {
        let row = FPix::from_rows(&[&[1.0, 1.0, 0.0, 1.0]]).unwrap();
        assert_eq!(label_connected_components_two_pass(&row).data(), &[1, 1, 0, 2]);

        let col = FPix::from_rows(&[&[1.0], &[0.0], &[1.0], &[1.0]]).unwrap();
        assert_eq!(label_connected_components_two_pass(&col).data(), &[1, 0, 2, 2]);
    }

    #[test]
    fn test_c_shape_joined_by_bottom_row() {
        // The right arm starts its own provisional label and only meets the
        // left bar in the last pixel of the bottom row
        let fpix = FPix::from_rows(&[
            &[0.0, 0.0, 0.0, 1.0, 1.0],
            &[1.0, 0.0, 0.0, 0.0, 1.0],
            &[1.0, 0.0, 0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0, 1.0],
        ])
        .unwrap();

        let labels = label_connected_components_two_pass(&fpix);
        assert_eq!(labels.max_label(), 1);
        assert_eq!(labels.count_labeled(), fpix.count_present());
    }

    #[test]
    fn test_staircase_merges_many_labels() {
        // Every row starts a fresh run that only touches the row above at
        // its right end, producing one merge per row
        let n = 12;
        let mut fpix = FPix::new(n + 1, n).unwrap();
        for y in 0..n {
            for x in (n - y)..=n {
                fpix.set_pixel(x, y, 1.0).unwrap();
            }
        }

        let labels = label_connected_components_two_pass(&fpix);
        assert_eq!(labels.max_label(), 1);
        assert_eq!(labels.count_labeled(), fpix.count_present());
    }

    #[test]
    fn test_compaction_order() {
        // Provisional labels 1 (top left) and 2 (top right) merge through
        // the bottom row; the lone pixel keeps its own component
        let fpix = FPix::from_rows(&[
            &[1.0, 0.0, 1.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 0.0, 0.0],
        ])
        .unwrap();
        let labels = label_connected_components_two_pass(&fpix);
        assert_eq!(labels.row(0), &[1, 0, 1, 0, 2]);
        assert_eq!(labels.row(1), &[1, 1, 1, 0, 0]);
    }
}

//! pixlabel - Pixel-grid analysis for Rust
//!
//! Connected component labeling and area filtering for grayscale images
//! stored as dense grids of `f32` values.
//!
//! # Overview
//!
//! - [`FPix`] - input images; any non-zero pixel is foreground
//! - [`LabelPix`] - label grids, 0 for background and `1..=K` for components
//! - [`region`] - flood fill and two-pass labelers, area filtering and
//!   component statistics
//!
//! # Example
//!
//! ```
//! use pixlabel::FPix;
//! use pixlabel::region::{LabelMethod, count_components, filter_by_area};
//!
//! let fpix = FPix::from_rows(&[
//!     &[0.0, 1.0, 0.0, 0.0, 0.0],
//!     &[1.0, 1.0, 1.0, 0.0, 0.0],
//!     &[0.0, 1.0, 0.0, 0.0, 1.0],
//! ]).unwrap();
//!
//! assert_eq!(count_components(&fpix, LabelMethod::TwoPass), 2);
//!
//! let filtered = filter_by_area(&fpix, 5).unwrap();
//! assert_eq!(filtered.count_present(), 5);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixlabel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixlabel_region as region;

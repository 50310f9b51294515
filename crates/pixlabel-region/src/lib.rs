//! pixlabel-region - Connected component labeling for pixlabel
//!
//! This crate provides region processing functionality including:
//!
//! - **Connected component labeling** - Flood fill and two-pass labelers
//!   over 4-connectivity
//! - **Area filtering** - Removing components below a minimum pixel count
//! - **Component analysis** - Sizes, bounding boxes, centroids and
//!   partition comparison on label grids
//!
//! Any non-zero pixel of the input [`FPix`](pixlabel_core::FPix) is
//! foreground.
//!
//! # Examples
//!
//! ## Labeling components
//!
//! ```
//! use pixlabel_core::FPix;
//! use pixlabel_region::{
//!     label_connected_components, label_connected_components_two_pass, same_partition,
//! };
//!
//! let mut fpix = FPix::new(6, 6).unwrap();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (4, 4), (5, 4), (4, 5), (5, 5)] {
//!     fpix.set_pixel(x, y, 1.0).unwrap();
//! }
//!
//! let flood = label_connected_components(&fpix);
//! let two_pass = label_connected_components_two_pass(&fpix);
//! assert_eq!(flood.max_label(), 2);
//! assert!(same_partition(&flood, &two_pass));
//! ```
//!
//! ## Area filtering
//!
//! ```
//! use pixlabel_core::FPix;
//! use pixlabel_region::filter_by_area;
//!
//! let mut fpix = FPix::new(10, 10).unwrap();
//! fpix.set_pixel(1, 1, 1.0).unwrap();
//!
//! let filtered = filter_by_area(&fpix, 2).unwrap();
//! assert_eq!(filtered.count_present(), 0);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod select;
pub mod twopass;

// Re-export core types
pub use pixlabel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ConnectedComponent, LabelMethod, count_components, find_connected_components,
    label_connected_components, label_with,
};

// Re-export two-pass labeling
pub use twopass::{LabelEquivalences, label_connected_components_two_pass};

// Re-export label analysis types and functions
pub use label::{
    ComponentStats, component_area_transform, extract_component, get_component_bounds,
    get_component_sizes, get_component_stats, same_partition,
};

// Re-export selection types and functions
pub use select::{AreaFilterOptions, filter_by_area, filter_by_area_with};

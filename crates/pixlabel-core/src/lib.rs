//! pixlabel core - Grid data structures for pixel analysis
//!
//! This crate provides the fundamental data structures used throughout
//! pixlabel:
//!
//! - [`FPix`] - Floating-point image, the input to labeling and filtering
//! - [`LabelPix`] - Integer label grid produced by the labelers
//! - [`Box`] - Rectangle regions (component bounding boxes)

pub mod box_;
pub mod error;
pub mod fpix;
pub mod lpix;

pub use box_::Box;
pub use error::{Error, Result};
pub use fpix::FPix;
pub use lpix::LabelPix;

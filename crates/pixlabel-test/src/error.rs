//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// A test image could not be constructed
    #[error("failed to build test image '{name}': {source}")]
    ImageBuild {
        name: String,
        #[source]
        source: pixlabel_core::Error,
    },

    /// A pixel list referenced coordinates outside the image
    #[error("pixel ({x}, {y}) outside {width}x{height} test image")]
    PixelOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

//! Error types for contrast slice computation.

use thiserror::Error;

/// Main error type for the contrast engine and its helpers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CubeError {
    #[error("Invalid contrast threshold '{input}': expected a number")]
    InvalidThreshold { input: String },

    #[error("Invalid hex color '{value}': expected #rrggbb")]
    InvalidHexColor { value: String },

    #[error("No masks to combine")]
    NoMasks,

    #[error("Invalid reference color slot {index}")]
    InvalidReferenceIndex { index: usize },

    #[error("Expected 1 to 3 reference colors, got {count}")]
    ReferenceCount { count: usize },

    #[error("Invalid upscale factor {scale}: must be between 1 and {max}")]
    InvalidScale { scale: u32, max: u32 },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, CubeError>;

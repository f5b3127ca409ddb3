//! Error types for gridfill-morph

use thiserror::Error;

/// Errors that can occur during morphological reconstruction
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridfill_core::Error),

    /// Seed and mask dimensions disagree
    #[error("size mismatch: seed {}x{}, mask {}x{}", .seed.0, .seed.1, .mask.0, .mask.1)]
    SizeMismatch { seed: (u32, u32), mask: (u32, u32) },
}

/// Result type for morphological reconstruction operations
pub type MorphResult<T> = Result<T, MorphError>;

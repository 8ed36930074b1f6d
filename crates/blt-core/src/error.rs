//! Error types for blt-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the contract violations a caller can commit
//! when requesting a surface layout: non-positive dimensions or an
//! unusable bits-per-pixel value. These are the only local failure modes
//! in the workspace; an unsupported (generation, command, tiling)
//! combination is a normal empty-set query result from `blt-caps`, never
//! an error.
//!
//! # Usage
//!
//! ```rust
//! use blt_core::{Error, Result};
//!
//! fn check_dimensions(width: u32, height: u32) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when computing surface layouts.
///
/// Both variants are caller contract violations; neither is recoverable
/// locally, and no partial result accompanies them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero.
    ///
    /// Surface geometry is undefined for empty surfaces; callers must
    /// reject them before requesting a layout.
    #[error("invalid surface dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Bits-per-pixel is zero or not a whole number of bytes.
    ///
    /// Stride arithmetic works in bytes per pixel; a bpp that is zero or
    /// not a multiple of 8 would produce a degenerate stride.
    #[error("invalid bits-per-pixel {bpp}: must be a positive multiple of 8")]
    InvalidBitsPerPixel {
        /// Requested bits per pixel
        bpp: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Creates an [`Error::InvalidBitsPerPixel`] error.
    #[inline]
    pub fn invalid_bits_per_pixel(bpp: u32) -> Self {
        Self::InvalidBitsPerPixel { bpp }
    }

    /// Returns `true` if this is a dimension error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }

    /// Returns `true` if this is a bits-per-pixel error.
    #[inline]
    pub fn is_bpp_error(&self) -> bool {
        matches!(self, Self::InvalidBitsPerPixel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 100);
        let msg = err.to_string();
        assert!(msg.contains("0x100"));
        assert!(err.is_dimension_error());
        assert!(!err.is_bpp_error());
    }

    #[test]
    fn test_invalid_bpp() {
        let err = Error::invalid_bits_per_pixel(12);
        assert!(err.to_string().contains("12"));
        assert!(err.is_bpp_error());
        assert!(!err.is_dimension_error());
    }
}

//! Compression control surface (CCS) geometry.
//!
//! A render-compressed surface carries an auxiliary metadata surface
//! describing which main-surface tiles are compressed and how. The
//! CCS-to-main mapping ratio changed at gen12, so both dimensions are
//! generation-dependent.
//!
//! # Geometry
//!
//! - **Gen12+**: one 64-byte CCS unit maps four main-surface tiles, so a
//!   CCS unit spans 4*32 = 128 pixels of main-surface width and 32 pixel
//!   rows of main-surface height.
//! - **Earlier**: one 128-byte CCS cacheline row maps 1024 pixels of
//!   main-surface width; 32 CCS rows map 512 main-surface rows.

use blt_core::Generation;

/// CCS width in bytes for a main surface `width_px` pixels wide.
///
/// `width_px` is the *aligned* pixel width, i.e. the main-surface stride
/// divided by bytes per pixel.
///
/// # Example
///
/// ```rust
/// use blt_core::Generation;
/// use blt_layout::ccs;
///
/// assert_eq!(ccs::width(Generation::Gen12, 512), 256);
/// assert_eq!(ccs::width(Generation::Gen8, 1024), 128);
/// ```
#[inline]
pub const fn width(generation: Generation, width_px: u32) -> u32 {
    if generation.uses_gen12_ccs() {
        width_px.div_ceil(128) * 64
    } else {
        width_px.div_ceil(1024) * 128
    }
}

/// CCS height in rows for a main surface `height` pixel rows tall.
///
/// # Example
///
/// ```rust
/// use blt_core::Generation;
/// use blt_layout::ccs;
///
/// assert_eq!(ccs::height(Generation::Gen12, 512), 16);
/// assert_eq!(ccs::height(Generation::Gen8, 512), 32);
/// ```
#[inline]
pub const fn height(generation: Generation, height: u32) -> u32 {
    if generation.uses_gen12_ccs() {
        height.div_ceil(32)
    } else {
        height.div_ceil(512) * 32
    }
}

//! # blt-layout
//!
//! Tiled-surface and compression-surface geometry computation.
//!
//! Given a requested width, height, bits-per-pixel, tiling layout, and an
//! optional compression flag, this crate computes the physical layout a
//! GPU-addressable surface needs: row stride, total allocation size, and,
//! when render compression is enabled, the offset and stride of the
//! auxiliary compression control surface (CCS) that rides in the same
//! allocation.
//!
//! The computation is pure: no device access, no allocation. Callers hand
//! the resulting [`SurfaceLayout`] to whatever buffer allocator they use.
//! Tiling legality for the blit command a caller intends to issue is
//! checked beforehand against the `blt-caps` tables; this crate does not
//! re-validate it.
//!
//! # Usage
//!
//! ```rust
//! use blt_core::{Generation, Tiling};
//! use blt_layout::SurfaceLayout;
//!
//! let layout = SurfaceLayout::compute(
//!     Generation::Gen8, 512, 512, 32, Tiling::Linear, false,
//! ).unwrap();
//!
//! assert_eq!(layout.stride, 2048);
//! assert_eq!(layout.size, 2048 * 512);
//! assert!(layout.ccs.is_none());
//! ```
//!
//! # Dependencies
//!
//! - [`blt-core`] - Tiling, generation, and error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod align;
pub mod ccs;
pub mod surface;

pub use align::align_up;
pub use surface::{CcsLayout, SurfaceLayout, HEIGHT_ALIGN, STRIDE_ALIGN};

//! # blt-core
//!
//! Core types for modeling GPU blitter capabilities and tiled-surface
//! layouts.
//!
//! This crate provides the foundational types used throughout the BLT-RS
//! workspace:
//!
//! - [`Tiling`] - Hardware tiling layouts for 2D surfaces
//! - [`TilingSet`] - Set of tiling layouts, used for capability queries
//! - [`BlitCommand`] - Classes of GPU copy/blit instructions
//! - [`Generation`] - Hardware generation families
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Design Philosophy
//!
//! Hardware capability data is modeled as **typed sets over closed enums**
//! rather than raw integer bitmasks. A capability query returns a
//! [`TilingSet`] whose membership operations are named and type-checked;
//! an empty set is a legitimate "unsupported" answer, not an error.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of BLT-RS and has no internal dependencies.
//! All other BLT-RS crates depend on `blt-core`:
//!
//! ```text
//! blt-core (this crate)
//!    ^
//!    |
//!    +-- blt-caps (per-generation capability tables)
//!    +-- blt-layout (surface/CCS geometry)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for the public value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod command;
pub mod error;
pub mod generation;
pub mod tiling;

// Re-exports for convenience
pub use command::*;
pub use error::*;
pub use generation::*;
pub use tiling::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use blt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::command::BlitCommand;
    pub use crate::error::{Error, Result};
    pub use crate::generation::Generation;
    pub use crate::tiling::{Tiling, TilingSet};
}

//! # blt-caps
//!
//! Per-generation blitter tiling capability tables.
//!
//! For every hardware generation family this crate tabulates which tiling
//! layouts each blit command class may operate on. The tables are plain
//! static data: hardware capability sets are additive across generations
//! for most commands, and the table form keeps the real divergences (gen11
//! dropping X-major from fast-copy, Meteor Lake narrowing it again after
//! DG2 restored it) visible and auditable at a glance.
//!
//! # Usage
//!
//! ```rust
//! use blt_caps::{supported_tilings, supports};
//! use blt_core::{BlitCommand, Generation, Tiling};
//!
//! let set = supported_tilings(Generation::Gen12Dg2, BlitCommand::XyBlockCopy);
//! assert!(set.supports(Tiling::Tile4));
//!
//! // An unsupported command yields the empty set, not an error.
//! let none = supported_tilings(Generation::Gen8, BlitCommand::XyBlockCopy);
//! assert!(none.is_empty());
//!
//! // Typical caller flow: pick a command for an intended tiling.
//! assert!(supports(Generation::Gen12Mtl, BlitCommand::XyFastCopy, Tiling::Tile4));
//! assert!(!supports(Generation::Gen12Mtl, BlitCommand::XyFastCopy, Tiling::XMajor));
//! ```
//!
//! # Dependencies
//!
//! - [`blt-core`] - Tiling, command, and generation types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use blt_core::{BlitCommand, Generation, Tiling, TilingSet};

// Per-command tiling sets. One constant per distinct hardware behavior;
// generations sharing a behavior share the constant.

const SRC_COPY: TilingSet = TilingSet::LINEAR;

const PRE_GEN8_XY_SRC_COPY: TilingSet = TilingSet::LINEAR.union(TilingSet::X_MAJOR);

const GEN8_XY_SRC_COPY: TilingSet = TilingSet::LINEAR
    .union(TilingSet::X_MAJOR)
    .union(TilingSet::Y_MAJOR);

const GEN11_XY_FAST_COPY: TilingSet = TilingSet::LINEAR
    .union(TilingSet::Y_MAJOR)
    .union(TilingSet::YF_MAJOR)
    .union(TilingSet::TILE64);

const GEN12_XY_FAST_COPY: TilingSet = TilingSet::LINEAR
    .union(TilingSet::Y_MAJOR)
    .union(TilingSet::TILE64);

const DG2_XY_FAST_COPY: TilingSet = TilingSet::LINEAR
    .union(TilingSet::X_MAJOR)
    .union(TilingSet::TILE4)
    .union(TilingSet::TILE64);

// MTL drops X-major from fast-copy again; DG2 having it is the exception,
// not the rule. Keep the narrowing exactly as the hardware documents it.
const MTL_XY_FAST_COPY: TilingSet = TilingSet::LINEAR
    .union(TilingSet::TILE4)
    .union(TilingSet::TILE64);

const GEN12_XY_BLOCK_COPY: TilingSet = TilingSet::LINEAR.union(TilingSet::Y_MAJOR);

const DG2_XY_BLOCK_COPY: TilingSet = TilingSet::LINEAR
    .union(TilingSet::X_MAJOR)
    .union(TilingSet::TILE4)
    .union(TilingSet::TILE64);

/// Table entry lookup. `None` means the generation has no entry for the
/// command at all; callers observe that as the empty set (the reference
/// tables treat "absent" and "present but empty" identically, and no
/// consumer distinguishes them).
const fn entry(generation: Generation, command: BlitCommand) -> Option<TilingSet> {
    use BlitCommand::*;
    use Generation::*;

    match (generation, command) {
        (PreGen8, SrcCopy) => Some(SRC_COPY),
        (PreGen8, XySrcCopy) => Some(PRE_GEN8_XY_SRC_COPY),

        (Gen8, SrcCopy) => Some(SRC_COPY),
        (Gen8, XySrcCopy) => Some(GEN8_XY_SRC_COPY),

        (Gen11, SrcCopy) => Some(SRC_COPY),
        (Gen11, XySrcCopy) => Some(GEN8_XY_SRC_COPY),
        (Gen11, XyFastCopy) => Some(GEN11_XY_FAST_COPY),

        (Gen12, SrcCopy) => Some(SRC_COPY),
        (Gen12, XySrcCopy) => Some(GEN8_XY_SRC_COPY),
        (Gen12, XyFastCopy) => Some(GEN12_XY_FAST_COPY),
        (Gen12, XyBlockCopy) => Some(GEN12_XY_BLOCK_COPY),

        (Gen12Dg2, SrcCopy) => Some(SRC_COPY),
        (Gen12Dg2, XySrcCopy) => Some(GEN8_XY_SRC_COPY),
        (Gen12Dg2, XyFastCopy) => Some(DG2_XY_FAST_COPY),
        (Gen12Dg2, XyBlockCopy) => Some(DG2_XY_BLOCK_COPY),

        // MTL retired the legacy copy commands entirely.
        (Gen12Mtl, XyFastCopy) => Some(MTL_XY_FAST_COPY),
        (Gen12Mtl, XyBlockCopy) => Some(DG2_XY_BLOCK_COPY),

        _ => None,
    }
}

/// Returns the tiling layouts `command` supports on `generation`.
///
/// The empty set signals "command unsupported on this generation" and is
/// a normal query result, not a fault. The lookup is pure static data and
/// never fails.
///
/// # Example
///
/// ```rust
/// use blt_caps::supported_tilings;
/// use blt_core::{BlitCommand, Generation, Tiling};
///
/// let set = supported_tilings(Generation::PreGen8, BlitCommand::XySrcCopy);
/// assert!(set.supports(Tiling::Linear));
/// assert!(set.supports(Tiling::XMajor));
/// assert!(!set.supports(Tiling::YMajor));
/// ```
#[inline]
pub const fn supported_tilings(generation: Generation, command: BlitCommand) -> TilingSet {
    match entry(generation, command) {
        Some(set) => set,
        None => TilingSet::empty(),
    }
}

/// Whether `command` may operate on a `tiling` surface on `generation`.
///
/// Convenience over [`supported_tilings`] for the common pre-submission
/// legality check.
#[inline]
pub const fn supports(generation: Generation, command: BlitCommand, tiling: Tiling) -> bool {
    supported_tilings(generation, command).supports(tiling)
}

/// Iterates the blit commands `generation` supports at all, in
/// [`BlitCommand::ALL`] declaration order.
pub fn supported_commands(generation: Generation) -> impl Iterator<Item = BlitCommand> {
    BlitCommand::ALL
        .into_iter()
        .filter(move |cmd| !supported_tilings(generation, *cmd).is_empty())
}

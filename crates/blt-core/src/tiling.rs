//! Tiling layouts and tiling-layout sets.
//!
//! A *tiling* is a hardware-defined memory layout for 2D pixel data. Linear
//! surfaces store rows contiguously; tiled surfaces swizzle pixels into
//! fixed-size blocks for cache locality. Which layouts a blit instruction
//! can address varies by instruction and hardware generation, so capability
//! queries answer with a [`TilingSet`].
//!
//! # Types
//!
//! - [`Tiling`] - A single tiling layout
//! - [`TilingSet`] - A set of tiling layouts (bitflags-backed)
//!
//! # Usage
//!
//! ```rust
//! use blt_core::tiling::{Tiling, TilingSet};
//!
//! let set = TilingSet::LINEAR | TilingSet::X_MAJOR;
//! assert!(set.supports(Tiling::Linear));
//! assert!(!set.supports(Tiling::Tile64));
//!
//! // Enumerate members in declaration order
//! let members: Vec<Tiling> = set.tilings().collect();
//! assert_eq!(members, [Tiling::Linear, Tiling::XMajor]);
//! ```
//!
//! # Dependencies
//!
//! - [`bitflags`] - Backing representation for [`TilingSet`]

use bitflags::bitflags;

/// A hardware tiling layout for a 2D surface.
///
/// Variants are declared in the order hardware documentation enumerates
/// them; iteration over [`Tiling::ALL`] follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tiling {
    /// Rows stored contiguously, no swizzling.
    Linear,
    /// X-major tiling: 512-byte-wide, row-major tiles.
    XMajor,
    /// Y-major tiling: 128-byte-wide, column-major tiles.
    YMajor,
    /// Tile4: 4KiB tiles, gen12 replacement for Y-major.
    Tile4,
    /// Tile64: 64KiB tiles for local-memory surfaces.
    Tile64,
    /// Yf variant of Y-major tiling.
    YfMajor,
}

impl Tiling {
    /// All tiling layouts, in declaration order.
    ///
    /// The set of layouts is closed; callers that need to enumerate
    /// candidate layouts and test capability membership iterate this
    /// array.
    pub const ALL: [Tiling; 6] = [
        Tiling::Linear,
        Tiling::XMajor,
        Tiling::YMajor,
        Tiling::Tile4,
        Tiling::Tile64,
        Tiling::YfMajor,
    ];

    /// Short lowercase name, matching kernel test-suite conventions.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::XMajor => "xmajor",
            Self::YMajor => "ymajor",
            Self::Tile4 => "tile4",
            Self::Tile64 => "tile64",
            Self::YfMajor => "yfmajor",
        }
    }

    /// Whether this layout swizzles pixel data (everything except linear).
    #[inline]
    pub const fn is_tiled(&self) -> bool {
        !matches!(self, Self::Linear)
    }

    /// The singleton [`TilingSet`] containing only this layout.
    #[inline]
    pub const fn as_set(self) -> TilingSet {
        match self {
            Self::Linear => TilingSet::LINEAR,
            Self::XMajor => TilingSet::X_MAJOR,
            Self::YMajor => TilingSet::Y_MAJOR,
            Self::Tile4 => TilingSet::TILE4,
            Self::Tile64 => TilingSet::TILE64,
            Self::YfMajor => TilingSet::YF_MAJOR,
        }
    }
}

impl std::fmt::Display for Tiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Tiling> for TilingSet {
    fn from(tiling: Tiling) -> Self {
        tiling.as_set()
    }
}

bitflags! {
    /// A set of [`Tiling`] layouts.
    ///
    /// Capability tables answer queries with a `TilingSet`; the empty set
    /// means "no layout supported" (a valid answer for an unsupported
    /// command, not an error).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TilingSet: u8 {
        /// [`Tiling::Linear`]
        const LINEAR = 1 << 0;
        /// [`Tiling::XMajor`]
        const X_MAJOR = 1 << 1;
        /// [`Tiling::YMajor`]
        const Y_MAJOR = 1 << 2;
        /// [`Tiling::Tile4`]
        const TILE4 = 1 << 3;
        /// [`Tiling::Tile64`]
        const TILE64 = 1 << 4;
        /// [`Tiling::YfMajor`]
        const YF_MAJOR = 1 << 5;
    }
}

impl TilingSet {
    /// Whether `tiling` is a member of this set.
    #[inline]
    pub const fn supports(&self, tiling: Tiling) -> bool {
        self.contains(tiling.as_set())
    }

    /// Iterates the member layouts in [`Tiling::ALL`] declaration order.
    ///
    /// The iteration is finite and restartable.
    pub fn tilings(self) -> impl Iterator<Item = Tiling> {
        Tiling::ALL.into_iter().filter(move |t| self.supports(*t))
    }
}

impl FromIterator<Tiling> for TilingSet {
    fn from_iter<I: IntoIterator<Item = Tiling>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TilingSet::empty(), |set, t| set | t.as_set())
    }
}

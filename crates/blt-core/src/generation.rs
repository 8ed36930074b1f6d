//! Hardware generation families.
//!
//! Capability tables and surface-geometry formulas are keyed by
//! architecture generation because instruction encodings, supported
//! layouts, and compression-surface geometry change across hardware
//! generations. Mapping a raw device ID to a generation is the job of an
//! external device classifier; this crate treats the generation as an
//! opaque, closed input.

/// A hardware generation family.
///
/// The set of families is closed: every device the wider system drives is
/// classified into exactly one of these by an external device-ID lookup.
/// Variants are declared oldest-first; iteration over
/// [`Generation::ALL`] follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generation {
    /// Everything before gen8 (Broadwell).
    PreGen8,
    /// Gen8 (Broadwell) and gen9/gen10 derivatives.
    Gen8,
    /// Gen11 (Ice Lake).
    Gen11,
    /// Gen12 integrated (Tiger Lake, Alder Lake).
    Gen12,
    /// Gen12 discrete (DG2 / Alchemist).
    Gen12Dg2,
    /// Gen12 Meteor Lake.
    Gen12Mtl,
}

impl Generation {
    /// All generation families, in declaration order (oldest first).
    pub const ALL: [Generation; 6] = [
        Generation::PreGen8,
        Generation::Gen8,
        Generation::Gen11,
        Generation::Gen12,
        Generation::Gen12Dg2,
        Generation::Gen12Mtl,
    ];

    /// Short lowercase name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PreGen8 => "pre-gen8",
            Self::Gen8 => "gen8",
            Self::Gen11 => "gen11",
            Self::Gen12 => "gen12",
            Self::Gen12Dg2 => "dg2",
            Self::Gen12Mtl => "mtl",
        }
    }

    /// Whether this family uses the gen12 CCS unit geometry.
    ///
    /// On gen12+ one 64-byte CCS unit maps four main-surface tiles
    /// (128x32 pixels); earlier generations use the 1024x512-pixel
    /// cacheline mapping.
    #[inline]
    pub const fn uses_gen12_ccs(&self) -> bool {
        matches!(self, Self::Gen12 | Self::Gen12Dg2 | Self::Gen12Mtl)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_declaration_order() {
        assert_eq!(Generation::ALL.len(), 6);
        assert_eq!(Generation::ALL[0], Generation::PreGen8);
        assert_eq!(Generation::ALL[5], Generation::Gen12Mtl);
    }

    #[test]
    fn test_ordering_oldest_first() {
        assert!(Generation::PreGen8 < Generation::Gen8);
        assert!(Generation::Gen8 < Generation::Gen11);
        assert!(Generation::Gen12 < Generation::Gen12Mtl);
    }

    #[test]
    fn test_gen12_ccs_split() {
        assert!(!Generation::PreGen8.uses_gen12_ccs());
        assert!(!Generation::Gen8.uses_gen12_ccs());
        assert!(!Generation::Gen11.uses_gen12_ccs());
        assert!(Generation::Gen12.uses_gen12_ccs());
        assert!(Generation::Gen12Dg2.uses_gen12_ccs());
        assert!(Generation::Gen12Mtl.uses_gen12_ccs());
    }

    #[test]
    fn test_names() {
        assert_eq!(Generation::PreGen8.name(), "pre-gen8");
        assert_eq!(Generation::Gen12Dg2.to_string(), "dg2");
    }
}

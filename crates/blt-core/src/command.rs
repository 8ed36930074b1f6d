//! Blit command classes.
//!
//! A *blit* is a GPU copy between two surfaces. The blitter engine exposes
//! several instruction classes, each with its own addressing limits and
//! tiling support; capability tables are keyed by command class.

/// A class of GPU copy/blit instruction.
///
/// Variants are declared oldest-first; iteration over
/// [`BlitCommand::ALL`] follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlitCommand {
    /// Legacy one-dimensional copy.
    SrcCopy,
    /// Two-dimensional copy with per-surface tiling bits.
    XySrcCopy,
    /// Fast copy with extended tiling support (gen11+).
    XyFastCopy,
    /// Block copy with compression-aware addressing (gen12+).
    XyBlockCopy,
}

impl BlitCommand {
    /// All blit command classes, in declaration order.
    pub const ALL: [BlitCommand; 4] = [
        BlitCommand::SrcCopy,
        BlitCommand::XySrcCopy,
        BlitCommand::XyFastCopy,
        BlitCommand::XyBlockCopy,
    ];

    /// Short lowercase name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SrcCopy => "src-copy",
            Self::XySrcCopy => "xy-src-copy",
            Self::XyFastCopy => "xy-fast-copy",
            Self::XyBlockCopy => "xy-block-copy",
        }
    }
}

impl std::fmt::Display for BlitCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_declaration_order() {
        assert_eq!(BlitCommand::ALL.len(), 4);
        assert_eq!(BlitCommand::ALL[0], BlitCommand::SrcCopy);
        assert_eq!(BlitCommand::ALL[3], BlitCommand::XyBlockCopy);
    }

    #[test]
    fn test_names() {
        assert_eq!(BlitCommand::SrcCopy.name(), "src-copy");
        assert_eq!(BlitCommand::XyFastCopy.to_string(), "xy-fast-copy");
    }
}

//! Surface layout computation.
//!
//! [`SurfaceLayout::compute`] turns requested surface parameters into the
//! physical layout the hardware's alignment rules require. The row stride
//! is padded to [`STRIDE_ALIGN`] bytes and the allocation covers
//! [`HEIGHT_ALIGN`]-row chunks; a compressed surface appends its CCS
//! immediately after the primary region in the same allocation.

use blt_core::{Error, Generation, Result, Tiling};

use crate::align::align_up;
use crate::ccs;

/// Row stride alignment in bytes.
pub const STRIDE_ALIGN: u32 = 128;

/// Surface height alignment in rows.
pub const HEIGHT_ALIGN: u32 = 32;

/// Layout of the compression control surface within an allocation.
///
/// Owned by the [`SurfaceLayout`] that computed it; there is no
/// standalone CCS lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CcsLayout {
    /// Byte offset of the CCS from the start of the allocation.
    ///
    /// Equals the primary surface's aligned size: the CCS is laid out
    /// immediately after the primary region.
    pub offset: u64,
    /// CCS row stride in bytes.
    pub stride: u32,
}

/// Physical layout of a tiled 2D surface.
///
/// Produced by [`SurfaceLayout::compute`]; consumed by whatever buffer
/// allocator actually reserves the memory.
///
/// # Invariants
///
/// - `stride` is a positive multiple of [`STRIDE_ALIGN`]
/// - `size` covers the primary surface and, when present, the CCS region,
///   with no overlap between the two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceLayout {
    /// Row stride of the primary surface in bytes.
    pub stride: u32,
    /// Total allocation size in bytes (primary plus CCS when present).
    pub size: u64,
    /// Tiling layout of the primary surface.
    pub tiling: Tiling,
    /// Bits per pixel.
    pub bpp: u32,
    /// CCS layout, present only when compression was requested.
    pub ccs: Option<CcsLayout>,
}

impl SurfaceLayout {
    /// Computes the layout for a surface of `width` x `height` pixels at
    /// `bpp` bits per pixel.
    ///
    /// The caller is responsible for having validated `tiling` against
    /// the capability tables for the command it intends to issue; this
    /// function only applies alignment rules.
    ///
    /// When `compression` is requested the CCS is placed immediately
    /// after the primary region and the total size grows to cover it;
    /// CCS dimensions follow the generation's unit geometry (see
    /// [`crate::ccs`]).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `width` or `height` is zero
    /// - [`Error::InvalidBitsPerPixel`] if `bpp` is zero or not a
    ///   multiple of 8
    ///
    /// # Example
    ///
    /// ```rust
    /// use blt_core::{Generation, Tiling};
    /// use blt_layout::SurfaceLayout;
    ///
    /// let layout = SurfaceLayout::compute(
    ///     Generation::Gen12, 512, 512, 32, Tiling::Tile4, true,
    /// ).unwrap();
    ///
    /// let ccs = layout.ccs.unwrap();
    /// assert_eq!(ccs.offset, 2048 * 512);
    /// assert_eq!(ccs.stride, 256);
    /// ```
    pub fn compute(
        generation: Generation,
        width: u32,
        height: u32,
        bpp: u32,
        tiling: Tiling,
        compression: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height));
        }
        if bpp == 0 || bpp % 8 != 0 {
            return Err(Error::invalid_bits_per_pixel(bpp));
        }

        let bytes_pp = bpp / 8;
        let stride = align_up(width * bytes_pp, STRIDE_ALIGN);
        let mut size = stride as u64 * align_up(height, HEIGHT_ALIGN) as u64;

        let ccs = if compression {
            // CCS geometry keys on the aligned pixel width, as recovered
            // from the padded stride.
            let ccs_stride = ccs::width(generation, stride / bytes_pp);
            let ccs_height = ccs::height(generation, height);
            let offset = size;

            size = offset + ccs_stride as u64 * ccs_height as u64;

            Some(CcsLayout {
                offset,
                stride: ccs_stride,
            })
        } else {
            None
        };

        Ok(Self {
            stride,
            size,
            tiling,
            bpp,
            ccs,
        })
    }

    /// Whether this surface carries a CCS.
    #[inline]
    pub const fn compression(&self) -> bool {
        self.ccs.is_some()
    }

    /// Aligned pixel width, i.e. the stride expressed in pixels.
    #[inline]
    pub const fn width_px(&self) -> u32 {
        self.stride / (self.bpp / 8)
    }

    /// Byte size of the primary surface region alone.
    #[inline]
    pub const fn primary_size(&self) -> u64 {
        match self.ccs {
            Some(ccs) => ccs.offset,
            None => self.size,
        }
    }

    /// Aligned row count of the primary surface region.
    #[inline]
    pub const fn aligned_height(&self) -> u32 {
        (self.primary_size() / self.stride as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_aligned() {
        // 512 * 4 = 2048, a multiple of 128; 512 is a multiple of 32
        let layout =
            SurfaceLayout::compute(Generation::Gen8, 512, 512, 32, Tiling::Linear, false)
                .unwrap();
        assert_eq!(layout.stride, 2048);
        assert_eq!(layout.size, 1_048_576);
        assert_eq!(layout.tiling, Tiling::Linear);
        assert_eq!(layout.bpp, 32);
        assert!(layout.ccs.is_none());
        assert!(!layout.compression());
    }

    #[test]
    fn test_padding_applied() {
        // 100 * 4 = 400 pads to 512; 100 rows pad to 128
        let layout =
            SurfaceLayout::compute(Generation::Gen8, 100, 100, 32, Tiling::Linear, false)
                .unwrap();
        assert_eq!(layout.stride, 512);
        assert_eq!(layout.size, 512 * 128);
        assert_eq!(layout.width_px(), 128);
        assert_eq!(layout.aligned_height(), 128);
    }

    #[test]
    fn test_stride_alignment_invariant() {
        for width in [1, 3, 100, 127, 128, 129, 511, 512, 1000, 4096] {
            for bpp in [8, 16, 32] {
                let layout = SurfaceLayout::compute(
                    Generation::Gen12,
                    width,
                    64,
                    bpp,
                    Tiling::YMajor,
                    false,
                )
                .unwrap();
                assert_eq!(layout.stride % STRIDE_ALIGN, 0, "width={width} bpp={bpp}");
                assert!(layout.stride > 0);
                assert!(layout.stride >= width * (bpp / 8));
            }
        }
    }

    #[test]
    fn test_size_sufficiency() {
        for (width, height) in [(1, 1), (100, 100), (640, 480), (1920, 1080)] {
            let layout = SurfaceLayout::compute(
                Generation::Gen12,
                width,
                height,
                32,
                Tiling::Tile4,
                false,
            )
            .unwrap();
            assert!(layout.size >= layout.stride as u64 * height as u64);
        }
    }

    #[test]
    fn test_gen12_compressed() {
        let layout =
            SurfaceLayout::compute(Generation::Gen12, 512, 512, 32, Tiling::Tile4, true)
                .unwrap();
        let ccs = layout.ccs.unwrap();

        assert!(layout.compression());
        assert_eq!(ccs.offset, 1_048_576);
        assert_eq!(ccs.stride, 256);
        // 16 CCS rows of 256 bytes follow the primary region
        assert_eq!(layout.size, 1_048_576 + 256 * 16);
        assert_eq!(layout.primary_size(), 1_048_576);
    }

    #[test]
    fn test_pre_gen12_compressed() {
        let layout =
            SurfaceLayout::compute(Generation::Gen8, 1024, 1024, 32, Tiling::YMajor, true)
                .unwrap();
        let ccs = layout.ccs.unwrap();

        assert_eq!(layout.stride, 4096);
        assert_eq!(ccs.offset, 4096 * 1024);
        assert_eq!(ccs.stride, 128);
        assert_eq!(layout.size, 4096 * 1024 + 128 * 64);
    }

    #[test]
    fn test_ccs_does_not_overlap_primary() {
        for generation in Generation::ALL {
            let layout =
                SurfaceLayout::compute(generation, 777, 333, 32, Tiling::Linear, true)
                    .unwrap();
            let ccs = layout.ccs.unwrap();
            assert_eq!(ccs.offset, layout.primary_size());
            assert!(
                layout.size >= ccs.offset + ccs.stride as u64,
                "{generation}: CCS region truncated"
            );
            assert!(layout.size >= layout.stride as u64 * 333);
        }
    }

    #[test]
    fn test_no_compression_no_ccs() {
        for generation in Generation::ALL {
            for tiling in Tiling::ALL {
                let layout =
                    SurfaceLayout::compute(generation, 256, 256, 16, tiling, false).unwrap();
                assert!(layout.ccs.is_none());
            }
        }
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = SurfaceLayout::compute(Generation::Gen8, 0, 100, 32, Tiling::Linear, false)
            .unwrap_err();
        assert_eq!(err, Error::invalid_dimensions(0, 100));
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = SurfaceLayout::compute(Generation::Gen8, 100, 0, 32, Tiling::Linear, false)
            .unwrap_err();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_bad_bpp_rejected() {
        for bpp in [0, 4, 12, 33] {
            let err =
                SurfaceLayout::compute(Generation::Gen8, 100, 100, bpp, Tiling::Linear, false)
                    .unwrap_err();
            assert_eq!(err, Error::invalid_bits_per_pixel(bpp));
        }
    }

    #[test]
    fn test_8bpp_surface() {
        // 100 * 1 = 100 pads to 128
        let layout =
            SurfaceLayout::compute(Generation::Gen11, 100, 64, 8, Tiling::XMajor, false)
                .unwrap();
        assert_eq!(layout.stride, 128);
        assert_eq!(layout.size, 128 * 64);
        assert_eq!(layout.width_px(), 128);
    }
}

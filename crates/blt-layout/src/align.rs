//! Alignment arithmetic.

/// Rounds `value` up to the nearest multiple of `align`.
///
/// # Panics
///
/// Panics if `align` is zero (debug and release: division by zero).
///
/// # Example
///
/// ```rust
/// use blt_layout::align::align_up;
///
/// assert_eq!(align_up(400, 128), 512);
/// assert_eq!(align_up(2048, 128), 2048);
/// assert_eq!(align_up(0, 128), 0);
/// ```
#[inline]
pub const fn align_up(value: u32, align: u32) -> u32 {
    value.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 32), 0);
        assert_eq!(align_up(1, 32), 32);
        assert_eq!(align_up(32, 32), 32);
        assert_eq!(align_up(33, 32), 64);
        assert_eq!(align_up(100, 32), 128);
        assert_eq!(align_up(400, 128), 512);
    }
}

/// Round `value` up to a multiple of `align`.
///
/// `align` must be a power of two; the caller ensures the addition cannot
/// overflow.
#[inline]
pub fn round_up(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (value + align - 1) & !(align - 1)
}

/// Round `value` down to a multiple of `align`.
#[inline]
pub fn round_down(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    value & !(align - 1)
}

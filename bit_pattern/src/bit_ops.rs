/// Mask with the low `bit_width` bits set.
#[inline(always)]
pub(crate) fn low_mask(bit_width: u32) -> u64 {
    if bit_width >= 64 {
        u64::MAX
    } else {
        (1u64 << bit_width) - 1
    }
}

/// Writes the low `bit_width` bits of `value` into `word` starting at
/// `bit_offset` (counted from the least significant bit).
pub(crate) fn set_bits(word: &mut u64, bit_offset: u32, bit_width: u32, value: u64) {
    if bit_width == 0 || bit_offset >= 64 {
        return;
    }
    let mask = low_mask(bit_width) << bit_offset;
    *word = (*word & !mask) | ((value << bit_offset) & mask);
}

/// Reads `bit_width` bits of `word` starting at `bit_offset`.
pub(crate) fn get_bits(word: u64, bit_offset: u32, bit_width: u32) -> u64 {
    if bit_width == 0 || bit_offset >= 64 {
        return 0;
    }
    (word >> bit_offset) & low_mask(bit_width)
}

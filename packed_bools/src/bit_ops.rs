use crate::index::BitPos;

/// Number of bytes needed to hold `bits` bits.
#[inline(always)]
pub(crate) const fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Mask of the logically valid bits in the last byte of a `bits`-long buffer.
#[inline(always)]
pub(crate) const fn tail_mask(bits: usize) -> u8 {
    match bits & 7 {
        0 => 0xFF,
        used => (1u8 << used) - 1,
    }
}

#[inline(always)]
pub(crate) fn get_bit(slice: &[u8], index: usize) -> bool {
    let pos = BitPos::from(index);
    slice[pos.byte] & pos.mask != 0
}

#[inline(always)]
pub(crate) fn set_bit(slice: &mut [u8], index: usize, value: bool) {
    let pos = BitPos::from(index);
    if value {
        slice[pos.byte] |= pos.mask;
    } else {
        slice[pos.byte] &= !pos.mask;
    }
}

/// Zeroes the don't-care bits past `bits` in the last byte.
#[inline]
pub(crate) fn clear_tail(slice: &mut [u8], bits: usize) {
    if let Some(last) = slice.last_mut() {
        *last &= tail_mask(bits);
    }
}

/// Compares the first `bits` bits of two buffers, ignoring the tail.
pub(crate) fn bits_eq(a: &[u8], b: &[u8], bits: usize) -> bool {
    let full = bits / 8;
    if a[..full] != b[..full] {
        return false;
    }
    match (a.get(full), b.get(full)) {
        (Some(x), Some(y)) if bits & 7 != 0 => (x ^ y) & tail_mask(bits) == 0,
        _ => true,
    }
}

//! The packed boolean array itself.
//!
//! # Examples
//!
//! ```rust
//! use packed_bools::PackedBitArray;
//!
//! let mut flags = PackedBitArray::new(16).expect("failed to create array");
//! flags.set(0, true);
//! flags.set(2, true);
//!
//! assert!(flags.get(0));
//! assert!(!flags.get(1));
//! assert_eq!(flags.to_string(), "1010000000000000");
//! ```
//!
//! ## Checked vs. unchecked access
//!
//! [`get`](PackedBitArray::get) and [`set`](PackedBitArray::set) skip the
//! logical bounds check so they can be used in hot loops. An index past
//! `len()` but inside the last allocated byte touches a don't-care bit and
//! yields a meaningless result; an index past the buffer panics. Use
//! [`get_safe`](PackedBitArray::get_safe) and
//! [`set_safe`](PackedBitArray::set_safe) when the index is not known to be
//! valid.
//!
//! ```rust
//! use packed_bools::{BitArrayError, PackedBitArray};
//!
//! let mut flags = PackedBitArray::new(16).unwrap();
//! assert_eq!(flags.set_safe(3, true), Ok(true));
//! assert_eq!(flags.get_safe(16), Err(BitArrayError::IndexOutOfBounds(16, 16)));
//! ```

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use core::hash::{Hash, Hasher};

use bytemuck::Pod;

use crate::bit_ops;
use crate::error::{BitArrayError, Result};

/// Fixed-length sequence of booleans stored one bit per element.
///
/// The length only changes through [`resize`](Self::resize).
#[derive(Clone)]
pub struct PackedBitArray {
    data: Vec<u8>,
    len: usize,
}

#[inline(always)]
fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        log::debug!("rejecting bit array size {}", size);
        Err(BitArrayError::InvalidSize(size))
    } else {
        Ok(())
    }
}

impl PackedBitArray {
    /// Creates an array of `size` bits, all `false`.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidSize`] if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::{BitArrayError, PackedBitArray};
    ///
    /// let flags = PackedBitArray::new(20).unwrap();
    /// assert_eq!(flags.len(), 20);
    /// assert_eq!(flags.as_raw_bytes().len(), 3);
    ///
    /// assert_eq!(PackedBitArray::new(0).unwrap_err(), BitArrayError::InvalidSize(0));
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        validate_size(size)?;
        let bytes = bit_ops::byte_len(size);
        log::trace!("allocating bit array: {} bits in {} bytes", size, bytes);
        Ok(Self {
            data: vec![0u8; bytes],
            len: size,
        })
    }

    /// Creates an array of `size` bits from plain-old-data words.
    ///
    /// The words are read as their in-memory byte sequence; bit `i` of the
    /// array is bit `i & 7` of byte `i >> 3`. Bytes past the array are
    /// ignored.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::InvalidSize`] if `size` is zero and
    /// [`BitArrayError::InsufficientBytes`] if `words` hold fewer than
    /// `ceil(size / 8)` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::PackedBitArray;
    ///
    /// let flags = PackedBitArray::from_words(10, &[0b0000_0101u8, 0b10]).unwrap();
    /// assert_eq!(flags.to_string(), "1010000001");
    /// ```
    pub fn from_words<T: Pod>(size: usize, words: &[T]) -> Result<Self> {
        validate_size(size)?;
        let bytes: &[u8] = bytemuck::cast_slice(words);
        let needed = bit_ops::byte_len(size);
        if bytes.len() < needed {
            log::debug!(
                "word slice too short for {} bits: {} of {} bytes",
                size,
                bytes.len(),
                needed
            );
            return Err(BitArrayError::InsufficientBytes {
                needed,
                found: bytes.len(),
            });
        }
        let mut data = bytes[..needed].to_vec();
        bit_ops::clear_tail(&mut data, size);
        Ok(Self { data, len: size })
    }

    /// Number of bits in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed array; the length is never zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing bytes, `ceil(len / 8)` of them, least-significant bit first.
    #[inline]
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Writes `value` at `index` without checking `index < len()`, returning `value`.
    ///
    /// An index past `len()` in the last byte writes a don't-care bit that no
    /// checked read, comparison, or conversion ever observes.
    ///
    /// # Panics
    ///
    /// Panics if `index / 8` is outside the buffer.
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: bool) -> bool {
        bit_ops::set_bit(&mut self.data, index, value);
        value
    }

    /// Reads the bit at `index` without checking `index < len()`.
    ///
    /// The result for an index past `len()` is unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `index / 8` is outside the buffer.
    #[inline(always)]
    pub fn get(&self, index: usize) -> bool {
        bit_ops::get_bit(&self.data, index)
    }

    /// Like [`set`](Self::set) but fails before mutating when `index >= len()`.
    pub fn set_safe(&mut self, index: usize, value: bool) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.set(index, value))
    }

    /// Like [`get`](Self::get) but fails when `index >= len()`.
    pub fn get_safe(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.get(index))
    }

    /// Writes `value` at `index` with no bounds check at all.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: bool) -> bool {
        debug_assert!(index < self.len);
        let mask = 1u8 << (index & 7);
        // SAFETY: index < len implies index >> 3 < data.len().
        let byte = unsafe { self.data.get_unchecked_mut(index >> 3) };
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        value
    }

    /// Reads the bit at `index` with no bounds check at all.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        // SAFETY: index < len implies index >> 3 < data.len().
        let byte = unsafe { *self.data.get_unchecked(index >> 3) };
        (byte >> (index & 7)) & 1 != 0
    }

    /// Sets every bit to `value`, one byte at a time.
    pub fn set_all(&mut self, value: bool) {
        self.data.fill(if value { 0xFF } else { 0x00 });
        bit_ops::clear_tail(&mut self.data, self.len);
    }

    /// Changes the length to `new_size`, keeping bits below `min(len, new_size)`.
    ///
    /// Bits gained by growing are `false`, including ones that were cut off
    /// by an earlier shrink.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::InvalidSize`] if `new_size` is zero; the
    /// array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::PackedBitArray;
    ///
    /// let mut flags = PackedBitArray::from_string("11111111").unwrap();
    /// flags.resize(4).unwrap();
    /// flags.resize(12).unwrap();
    /// assert_eq!(flags.to_string(), "111100000000");
    /// ```
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        validate_size(new_size)?;
        let new_bytes = bit_ops::byte_len(new_size);
        log::trace!(
            "resizing bit array: {} -> {} bits ({} -> {} bytes)",
            self.len,
            new_size,
            self.data.len(),
            new_bytes
        );

        let mut data = vec![0u8; new_bytes];
        let keep = new_bytes.min(self.data.len());
        data[..keep].copy_from_slice(&self.data[..keep]);
        // Bits between the kept length and the byte boundary must read false.
        let kept_bits = self.len.min(new_size);
        if kept_bits < keep * 8 {
            data[kept_bits >> 3] &= bit_ops::tail_mask(kept_bits);
        }

        self.data = data;
        self.len = new_size;
        Ok(())
    }

    /// `true` if both arrays have the same length and the same bits.
    pub fn equals(&self, other: &PackedBitArray) -> bool {
        self.len == other.len && bit_ops::bits_eq(&self.data, &other.data, self.len)
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            log::debug!("index {} out of bounds for length {}", index, self.len);
            Err(BitArrayError::IndexOutOfBounds(index, self.len))
        }
    }
}

impl PartialEq for PackedBitArray {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PackedBitArray {}

impl Hash for PackedBitArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let (last, body) = match self.data.split_last() {
            Some(parts) => parts,
            None => return,
        };
        body.hash(state);
        (last & bit_ops::tail_mask(self.len)).hash(state);
    }
}

impl core::fmt::Debug for PackedBitArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedBitArray")
            .field("len", &self.len)
            .field("bits", &format_args!("{}", self))
            .finish()
    }
}

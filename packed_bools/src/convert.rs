//! Conversions between [`PackedBitArray`] and strings or slices.
//!
//! # Examples
//!
//! ```rust
//! use packed_bools::PackedBitArray;
//!
//! let from_text = PackedBitArray::from_source("1010").unwrap();
//! let from_bools = PackedBitArray::from_source(&[true, false, true, false][..]).unwrap();
//! let from_ints = PackedBitArray::from_source(vec![1u8, 0, 1, 0]).unwrap();
//!
//! assert_eq!(from_text, from_bools);
//! assert_eq!(from_bools, from_ints);
//! assert_eq!(from_ints.to_string(), "1010");
//! ```

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use core::fmt;
use core::str::FromStr;

use crate::PackedBitArray;
use crate::error::{BitArrayError, Result};

/// Values that can be stored as a single bit.
///
/// Numbers are `true` when non-zero; floating point `NaN` is `false`.
pub trait BitValue {
    fn to_bit(&self) -> bool;
}

impl BitValue for bool {
    #[inline]
    fn to_bit(&self) -> bool {
        *self
    }
}

macro_rules! impl_bit_value_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl BitValue for $t {
                #[inline]
                fn to_bit(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_bit_value_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_bit_value_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl BitValue for $t {
                #[inline]
                fn to_bit(&self) -> bool {
                    // NaN != 0.0, so check it explicitly
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

impl_bit_value_float!(f32, f64);

impl<T: BitValue + ?Sized> BitValue for &T {
    #[inline]
    fn to_bit(&self) -> bool {
        (**self).to_bit()
    }
}

/// Inputs accepted by [`PackedBitArray::from_source`].
pub trait BitSource {
    fn into_bits(self) -> Result<PackedBitArray>;
}

impl BitSource for &str {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_string(self)
    }
}

impl BitSource for String {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_string(&self)
    }
}

impl BitSource for &String {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_string(self)
    }
}

impl<T: BitValue> BitSource for &[T] {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_array(self)
    }
}

impl<T: BitValue> BitSource for Vec<T> {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_array(&self)
    }
}

impl<T: BitValue> BitSource for &Vec<T> {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_array(self)
    }
}

impl<T: BitValue, const N: usize> BitSource for [T; N] {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_array(&self)
    }
}

impl<T: BitValue, const N: usize> BitSource for &[T; N] {
    fn into_bits(self) -> Result<PackedBitArray> {
        PackedBitArray::from_array(self)
    }
}

impl PackedBitArray {
    /// Builds an array with one bit per character of `text`.
    ///
    /// Bit `i` is `true` iff the `i`-th character is `'1'`; any other
    /// character reads as `false`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::InvalidSize`] if `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::PackedBitArray;
    ///
    /// let flags = PackedBitArray::from_string("1x01").unwrap();
    /// assert_eq!(flags.to_string(), "1001");
    /// ```
    pub fn from_string(text: &str) -> Result<Self> {
        let mut array = Self::new(text.chars().count())?;
        for (i, c) in text.chars().enumerate() {
            array.set(i, c == '1');
        }
        Ok(array)
    }

    /// Builds an array with one bit per element of `values`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::InvalidSize`] if `values` is empty.
    pub fn from_array<T: BitValue>(values: &[T]) -> Result<Self> {
        let mut array = Self::new(values.len())?;
        for (i, v) in values.iter().enumerate() {
            array.set(i, v.to_bit());
        }
        Ok(array)
    }

    /// Builds an array from a string, a slice, an array, or a vector.
    ///
    /// Strings go through [`from_string`](Self::from_string), everything else
    /// through [`from_array`](Self::from_array).
    pub fn from_source<S: BitSource>(source: S) -> Result<Self> {
        source.into_bits()
    }
}

impl fmt::Display for PackedBitArray {
    /// Writes one `'1'` or `'0'` per bit, index `0` first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(self.len());
        for bit in self.iter() {
            text.push(if bit { '1' } else { '0' });
        }
        f.pad(&text)
    }
}

impl FromStr for PackedBitArray {
    type Err = BitArrayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for PackedBitArray {
    type Error = BitArrayError;

    fn try_from(value: &str) -> Result<Self> {
        Self::from_string(value)
    }
}

impl<T: BitValue> TryFrom<&[T]> for PackedBitArray {
    type Error = BitArrayError;

    fn try_from(value: &[T]) -> Result<Self> {
        Self::from_array(value)
    }
}

impl<T: BitValue> TryFrom<Vec<T>> for PackedBitArray {
    type Error = BitArrayError;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::from_array(&value)
    }
}

impl From<&PackedBitArray> for Vec<bool> {
    fn from(array: &PackedBitArray) -> Self {
        array.to_vec()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn string_roundtrip() -> Result<()> {
        let flags = PackedBitArray::from_string("1010")?;
        assert_eq!(flags.len(), 4);
        assert_eq!(flags.to_string(), "1010");
        Ok(())
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(
            PackedBitArray::from_string(""),
            Err(BitArrayError::InvalidSize(0))
        );
        assert_eq!(
            PackedBitArray::from_array::<bool>(&[]),
            Err(BitArrayError::InvalidSize(0))
        );
    }

    #[test]
    fn non_one_characters_read_false() -> Result<()> {
        let flags = PackedBitArray::from_string("1a1 é")?;
        assert_eq!(flags.len(), 5);
        assert_eq!(flags.to_vec(), vec![true, false, true, false, false]);
        Ok(())
    }

    #[test]
    fn numbers_coerce_by_truthiness() -> Result<()> {
        let ints = PackedBitArray::from_array(&[0i32, 1, -3, 0])?;
        assert_eq!(ints.to_string(), "0110");

        let floats = PackedBitArray::from_array(&[0.0f64, 0.5, f64::NAN, -0.0])?;
        assert_eq!(floats.to_string(), "0100");
        Ok(())
    }

    #[test]
    fn from_source_dispatches_by_shape() -> Result<()> {
        let expected = PackedBitArray::from_string("011")?;
        assert_eq!(PackedBitArray::from_source("011")?, expected);
        assert_eq!(PackedBitArray::from_source(String::from("011"))?, expected);
        assert_eq!(PackedBitArray::from_source([false, true, true])?, expected);
        assert_eq!(PackedBitArray::from_source(&[0u8, 1, 1])?, expected);
        assert_eq!(PackedBitArray::from_source(vec![0u64, 7, 1])?, expected);
        Ok(())
    }

    #[test]
    fn std_conversion_traits() -> Result<()> {
        let parsed: PackedBitArray = "1100".parse()?;
        let tried = PackedBitArray::try_from(&[true, true, false, false][..])?;
        assert_eq!(parsed, tried);
        assert_eq!(Vec::<bool>::from(&parsed), vec![true, true, false, false]);
        assert!(PackedBitArray::try_from(Vec::<u8>::new()).is_err());
        Ok(())
    }

    #[test]
    fn display_respects_width() -> Result<()> {
        let flags = PackedBitArray::from_string("101")?;
        assert_eq!(format!("{:>5}", flags), "  101");
        Ok(())
    }
}

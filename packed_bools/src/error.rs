#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by the checked operations of [`PackedBitArray`].
///
/// [`PackedBitArray`]: crate::PackedBitArray
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(
        feature = "std",
        error("Size must be greater than 0, got {0}")
    )]
    InvalidSize(usize),

    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Length is fixed at {len} outside of resize, cannot set it to {requested}")
    )]
    UnsupportedMutation { requested: usize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("Insufficient bytes: need {needed}, found {found}")
    )]
    InsufficientBytes { needed: usize, found: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::InvalidSize(n) => {
                write!(f, "Size must be greater than 0, got {}", n)
            }
            BitArrayError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            BitArrayError::UnsupportedMutation { requested, len } => write!(
                f,
                "Length is fixed at {} outside of resize, cannot set it to {}",
                len, requested
            ),
            BitArrayError::InsufficientBytes { needed, found } => {
                write!(f, "Insufficient bytes: need {}, found {}", needed, found)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, BitArrayError>;

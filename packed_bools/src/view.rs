//! Array-like views that borrow a [`PackedBitArray`].
//!
//! Bits cannot be borrowed individually, so [`BitView`] implements
//! [`Index`] by handing out references to static `true`/`false` and
//! [`BitViewMut`] writes through an explicit [`BitViewMut::set_at`].
//!
//! ```rust
//! use packed_bools::PackedBitArray;
//!
//! let mut flags = PackedBitArray::new(8).unwrap();
//! {
//!     let mut view = flags.access_like_array_mut();
//!     view.set_at(2, true);
//!     assert!(view[2]);
//!     assert!(view.set_len(4).is_err());
//! }
//! assert_eq!(flags.access_like_array().get(2), Some(true));
//! ```

use core::ops::Index;

use crate::PackedBitArray;
use crate::error::{BitArrayError, Result};

static TRUE: bool = true;
static FALSE: bool = false;

/// Shared, read-only view.
#[derive(Clone, Copy, Debug)]
pub struct BitView<'a> {
    array: &'a PackedBitArray,
}

/// Exclusive view allowing writes.
#[derive(Debug)]
pub struct BitViewMut<'a> {
    array: &'a mut PackedBitArray,
}

impl PackedBitArray {
    pub fn access_like_array(&self) -> BitView<'_> {
        BitView { array: self }
    }

    pub fn access_like_array_mut(&mut self) -> BitViewMut<'_> {
        BitViewMut { array: self }
    }
}

impl<'a> BitView<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Unchecked read, same contract as [`PackedBitArray::get`].
    #[inline]
    pub fn at(&self, index: usize) -> bool {
        self.array.get(index)
    }

    /// Checked read; `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.array.get_safe(index).ok()
    }

    pub fn array(&self) -> &'a PackedBitArray {
        self.array
    }
}

impl<'a> BitViewMut<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    #[inline]
    pub fn at(&self, index: usize) -> bool {
        self.array.get(index)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.array.get_safe(index).ok()
    }

    /// Unchecked write, same contract as [`PackedBitArray::set`].
    #[inline]
    pub fn set_at(&mut self, index: usize, value: bool) -> bool {
        self.array.set(index, value)
    }

    /// Checked write; `None` past the end, leaving the array untouched.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) -> Option<bool> {
        self.array.set_safe(index, value).ok()
    }

    /// Rejects any attempt to change the length through the view.
    ///
    /// Setting the current length is a no-op. Use
    /// [`PackedBitArray::resize`] to change it.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        if len == self.array.len() {
            return Ok(());
        }
        log::debug!(
            "refusing to set length {} through view of length {}",
            len,
            self.array.len()
        );
        Err(BitArrayError::UnsupportedMutation {
            requested: len,
            len: self.array.len(),
        })
    }

    /// Downgrades to a shared view.
    pub fn as_view(&self) -> BitView<'_> {
        BitView { array: &*self.array }
    }
}

impl<'a> Index<usize> for BitView<'a> {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if self.at(index) { &TRUE } else { &FALSE }
    }
}

impl<'a> Index<usize> for BitViewMut<'a> {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if self.at(index) { &TRUE } else { &FALSE }
    }
}

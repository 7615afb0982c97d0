use core::iter::FusedIterator;

use crate::PackedBitArray;

/// Iterator over the bits of a [`PackedBitArray`] in index order.
///
/// Created by [`PackedBitArray::iter`]; call `iter()` again to restart.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    array: &'a PackedBitArray,
    front: usize,
    back: usize,
}

impl PackedBitArray {
    /// Returns an iterator over the bits, index `0` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bools::PackedBitArray;
    ///
    /// let flags = PackedBitArray::from_string("101").unwrap();
    /// let bits: Vec<bool> = flags.iter().collect();
    /// assert_eq!(bits, vec![true, false, true]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            None
        } else {
            let val = self.array.get(self.front);
            self.front += 1;
            Some(val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            None
        } else {
            self.back -= 1;
            Some(self.array.get(self.back))
        }
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a PackedBitArray {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

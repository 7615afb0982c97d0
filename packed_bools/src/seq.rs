//! Ordered sequence processing over the bits of a [`PackedBitArray`].
//!
//! Every callback receives `(value, index, &array)` and is called in index
//! order, `0` first.
//!
//! ```rust
//! use packed_bools::PackedBitArray;
//!
//! let flags = PackedBitArray::from_string("1011").unwrap();
//! let set: Vec<usize> = flags
//!     .map(|bit, i, _| (bit, i))
//!     .into_iter()
//!     .filter_map(|(bit, i)| bit.then_some(i))
//!     .collect();
//! assert_eq!(set, vec![0, 2, 3]);
//! assert_eq!(flags.reduce(|acc, bit, _, _| acc + bit as u32, 0), 3);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::PackedBitArray;

impl PackedBitArray {
    /// Collects the bits into a `Vec<bool>` of length `len()`.
    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(bool, usize, &PackedBitArray),
    {
        for i in 0..self.len() {
            f(self.get(i), i, self);
        }
    }

    /// Maps every bit to a new value, keeping index order.
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(bool, usize, &PackedBitArray) -> U,
    {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            out.push(f(self.get(i), i, self));
        }
        out
    }

    /// The bits for which `pred` returns `true`, in index order.
    pub fn filter<F>(&self, mut pred: F) -> Vec<bool>
    where
        F: FnMut(bool, usize, &PackedBitArray) -> bool,
    {
        let mut out = Vec::new();
        for i in 0..self.len() {
            let value = self.get(i);
            if pred(value, i, self) {
                out.push(value);
            }
        }
        out
    }

    /// `true` as soon as `pred` holds for one bit.
    pub fn some<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(bool, usize, &PackedBitArray) -> bool,
    {
        (0..self.len()).any(|i| pred(self.get(i), i, self))
    }

    /// `false` as soon as `pred` fails for one bit.
    pub fn every<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(bool, usize, &PackedBitArray) -> bool,
    {
        (0..self.len()).all(|i| pred(self.get(i), i, self))
    }

    /// Left fold starting from `init`.
    pub fn reduce<T, F>(&self, mut f: F, init: T) -> T
    where
        F: FnMut(T, bool, usize, &PackedBitArray) -> T,
    {
        let mut acc = init;
        for i in 0..self.len() {
            acc = f(acc, self.get(i), i, self);
        }
        acc
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::{BitArrayError, PackedBitArray};

    type Result<T> = core::result::Result<T, BitArrayError>;

    #[test]
    fn to_vec_matches_bits() -> Result<()> {
        let mut flags = PackedBitArray::new(4)?;
        flags.set(0, true);
        flags.set(1, false);
        flags.set(2, true);
        flags.set(3, false);
        assert_eq!(flags.to_vec(), vec![true, false, true, false]);
        Ok(())
    }

    #[test]
    fn for_each_visits_in_order() -> Result<()> {
        let flags = PackedBitArray::from_string("101")?;
        let mut seen = vec![];
        flags.for_each(|bit, i, arr| {
            assert_eq!(arr.len(), 3);
            seen.push((i, bit));
        });
        assert_eq!(seen, vec![(0, true), (1, false), (2, true)]);
        Ok(())
    }

    #[test]
    fn map_and_filter() -> Result<()> {
        let flags = PackedBitArray::from_string("1010")?;
        assert_eq!(flags.map(|bit, _, _| !bit), vec![false, true, false, true]);
        assert_eq!(flags.filter(|bit, _, _| bit), vec![true, true]);
        assert_eq!(flags.filter(|_, i, _| i >= 1), vec![false, true, false]);
        Ok(())
    }

    #[test]
    fn some_and_every_short_circuit() -> Result<()> {
        let flags = PackedBitArray::from_string("0100")?;
        let mut calls = 0;
        assert!(flags.some(|bit, _, _| {
            calls += 1;
            bit
        }));
        assert_eq!(calls, 2);

        calls = 0;
        assert!(!flags.every(|bit, _, _| {
            calls += 1;
            !bit
        }));
        assert_eq!(calls, 2);

        let mut all = PackedBitArray::new(9)?;
        all.set_all(true);
        assert!(all.every(|bit, _, _| bit));
        assert!(!all.some(|bit, _, _| !bit));
        Ok(())
    }

    #[test]
    fn reduce_folds_left() -> Result<()> {
        let flags = PackedBitArray::from_string("110")?;
        let rendered = flags.reduce(
            |mut acc, bit, i, _| {
                acc.push_str(&format!("{}:{} ", i, bit as u8));
                acc
            },
            String::new(),
        );
        assert_eq!(rendered, "0:1 1:1 2:0 ");
        Ok(())
    }
}

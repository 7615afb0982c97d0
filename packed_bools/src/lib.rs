//! # packed_bools
//!
//! A `no_std` compatible boolean array stored one bit per element.
//!
//! ```rust
//! use packed_bools::PackedBitArray;
//!
//! let mut flags = PackedBitArray::new(16).expect("Failed to create array");
//! flags.set(0, true);
//! flags.set(1, false);
//! flags.set(2, true);
//!
//! assert!(flags.get(0));
//! assert!(!flags.get(1));
//! assert!(flags.get(2));
//! assert!(flags.get_safe(16).is_err());
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use packed_bools::PackedBitArray;
//!
//! // Standard Vec<bool>: 10_000 elements × 1 byte = 10_000 bytes
//! let standard = vec![true; 10_000];
//!
//! // PackedBitArray: 10_000 elements × 1 bit = 1250 bytes
//! let mut packed = PackedBitArray::new(10_000).expect("Failed to create array");
//! packed.set_all(true);
//!
//! assert_eq!(standard.len(), packed.len());
//! assert_eq!(packed.as_raw_bytes().len(), 1250);
//! ```
//!
//! `get` and `set` do not check the index against `len()`; see
//! [`array`] for the exact contract and the checked `get_safe`/`set_safe`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitArrayError, Result};

mod bit_ops;
mod index;

pub mod array;
pub mod convert;
pub mod iter;
mod seq;
pub mod view;

pub use array::PackedBitArray;
pub use convert::{BitSource, BitValue};
pub use iter::Iter;
pub use view::{BitView, BitViewMut};

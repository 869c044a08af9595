//! # bool_vec
//!
//! A `no_std` compatible growable vector of booleans that stores one bit per
//! element.
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! let mut bits = BoolVec::new();
//! bits.push(true);
//! bits.push(false);
//! bits.insert(1, true).unwrap();
//!
//! assert_eq!(bits.get(1), Ok(true));
//! assert_eq!(bits.erase(0), Ok(true));
//! assert_eq!(bits.len(), 2);
//! ```
//!
//! ## Writable indexing
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! let mut bits = BoolVec::from(&[false; 3][..]);
//! let mut bit = bits.get_mut(2).unwrap();
//! bit.set(true);
//! assert_eq!(bit, true);
//!
//! // The handle borrows `bits`; it must be gone before the next push.
//! bits.push(false);
//! assert!(bits[2]);
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! // Standard Vec<bool>: 1000 elements × 1 byte = 1000 bytes
//! let standard: Vec<bool> = (0..1000).map(|i| i % 2 == 0).collect();
//!
//! // BoolVec: 1000 elements × 1 bit = 125 bytes
//! let packed: BoolVec = standard.iter().copied().collect();
//! assert_eq!(packed.byte_len(), 125);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BoolVecError;

mod bit_ops;
mod index;

pub mod container;
mod fmt;
pub mod handle;

pub use container::BoolVec;
pub use handle::BitMut;

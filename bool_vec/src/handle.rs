//! Writable access to a single packed bit.
//!
//! A [`BitMut`] borrows its [`BoolVec`](crate::BoolVec) mutably, so no push,
//! insert or erase can run while one is alive.
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! let mut bits = BoolVec::from(&[false, true][..]);
//! let mut bit = bits.get_mut(0).unwrap();
//! bit.set(true);
//! assert!(bit.get());
//! assert_eq!(bits.get(0), Ok(true));
//! ```

use crate::bit_ops;
use crate::index::BitAddr;

/// Handle to one bit: the byte that holds it and the mask that selects it.
#[derive(Debug)]
pub struct BitMut<'a> {
    byte: &'a mut u8,
    mask: u8,
}

impl<'a> BitMut<'a> {
    pub(crate) fn new(byte: &'a mut u8, addr: BitAddr) -> Self {
        Self {
            byte,
            mask: addr.mask(),
        }
    }

    #[inline]
    pub fn get(&self) -> bool {
        *self.byte & self.mask != 0
    }

    #[inline]
    pub fn set(&mut self, value: bool) {
        bit_ops::write_masked(self.byte, self.mask, value);
    }

    /// Assigns by value: the source is read once, then written here.
    pub fn assign(&mut self, value: impl Into<bool>) {
        self.set(value.into());
    }

    /// Writes `value` and returns what was stored before.
    pub fn replace(&mut self, value: bool) -> bool {
        let old = self.get();
        self.set(value);
        old
    }

    /// Flips the bit and returns the new value.
    pub fn toggle(&mut self) -> bool {
        *self.byte ^= self.mask;
        self.get()
    }
}

impl From<BitMut<'_>> for bool {
    fn from(bit: BitMut<'_>) -> Self {
        bit.get()
    }
}

impl From<&BitMut<'_>> for bool {
    fn from(bit: &BitMut<'_>) -> Self {
        bit.get()
    }
}

impl PartialEq<bool> for BitMut<'_> {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

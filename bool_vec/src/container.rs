//! Growable vector of booleans, packed eight to a byte.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! let mut bits = BoolVec::new();
//! bits.push(true);
//! bits.push(false);
//!
//! assert_eq!(bits.get(0), Ok(true));
//! assert!(!bits[1]);
//! assert_eq!(bits.len(), 2);
//! ```
//!
//! ## Positional insert and erase
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! let mut bits = BoolVec::from(&[true, false, true, true][..]);
//! bits.insert(2, false).unwrap();
//! assert_eq!(format!("{:#}", bits), "10011");
//!
//! assert_eq!(bits.erase(0), Ok(true));
//! assert_eq!(format!("{:#}", bits), "0011");
//! ```
//!
use crate::BoolVecError;
use crate::bit_ops;
use crate::handle::BitMut;
use crate::index::{BitAddr, bytes_for};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Packed sequence of booleans.
///
/// Bit `i` lives in byte `i / 8` at bit position `i % 8`. The backing store
/// always holds exactly `len().div_ceil(8)` bytes; bits of the last byte past
/// `len()` are unspecified.
#[derive(Clone, Default)]
pub struct BoolVec {
    storage: Vec<u8>,
    len: usize,
}

type Result<T> = core::result::Result<T, BoolVecError>;

impl BoolVec {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for at least `bits` bits.
    ///
    /// ```
    /// use bool_vec::BoolVec;
    ///
    /// let bits = BoolVec::with_capacity(100);
    /// assert!(bits.capacity() >= 100);
    /// assert_eq!(bits.len(), 0);
    /// assert!(bits.as_bytes().is_empty());
    /// ```
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            storage: Vec::with_capacity(bytes_for(bits)),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bits the current allocation can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity() * 8
    }

    /// The packed backing store. Bits past `len()` in the last byte are
    /// unspecified.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    pub fn byte_len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<BitAddr> {
        if index < self.len {
            Ok(BitAddr::of(index))
        } else {
            log::debug!("rejected index {} for length {}", index, self.len);
            Err(BoolVecError::IndexOutOfRange(index, self.len))
        }
    }

    /// Appends a bit, growing the backing store by one zero byte whenever the
    /// current bytes are full.
    ///
    /// ```
    /// use bool_vec::BoolVec;
    ///
    /// let mut bits = BoolVec::new();
    /// for _ in 0..9 {
    ///     bits.push(true);
    /// }
    /// assert_eq!(bits.len(), 9);
    /// assert_eq!(bits.byte_len(), 2);
    /// ```
    pub fn push(&mut self, value: bool) {
        if self.len % 8 == 0 {
            self.storage.push(0);
            log::trace!("grew storage to {} bytes", self.storage.len());
        }
        bit_ops::write_bit(&mut self.storage, BitAddr::of(self.len), value);
        self.len += 1;
    }

    /// Removes and returns the last bit, or `None` if empty.
    pub fn pop(&mut self) -> Option<bool> {
        let last = self.len.checked_sub(1)?;
        self.erase(last).ok()
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        let addr = self.check_index(index)?;
        Ok(bit_ops::read_bit(&self.storage, addr))
    }

    /// Returns a writable handle to the bit at `index`.
    ///
    /// ```
    /// use bool_vec::BoolVec;
    ///
    /// let mut bits = BoolVec::from(&[false, false][..]);
    /// bits.get_mut(1).unwrap().set(true);
    /// assert_eq!(bits.get(1), Ok(true));
    /// assert!(bits.get_mut(2).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<BitMut<'_>> {
        let addr = self.check_index(index)?;
        Ok(BitMut::new(&mut self.storage[addr.byte], addr))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        let addr = self.check_index(index)?;
        bit_ops::write_bit(&mut self.storage, addr, value);
        Ok(())
    }

    /// Forces the bit at `index` to 1.
    pub fn set_one(&mut self, index: usize) -> Result<()> {
        let addr = self.check_index(index)?;
        bit_ops::set_bit(&mut self.storage, addr);
        Ok(())
    }

    /// Forces the bit at `index` to 0.
    pub fn set_zero(&mut self, index: usize) -> Result<()> {
        let addr = self.check_index(index)?;
        bit_ops::clear_bit(&mut self.storage, addr);
        Ok(())
    }

    /// Flips the bit at `index` and returns its new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        Ok(self.get_mut(index)?.toggle())
    }

    pub fn first(&self) -> Option<bool> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<bool> {
        self.get(self.len.checked_sub(1)?).ok()
    }

    /// Inserts `value` at `index`, moving every later bit one slot up.
    /// `index == len()` appends.
    ///
    /// ```
    /// use bool_vec::BoolVec;
    ///
    /// let mut bits = BoolVec::from(&[true, false, true, true][..]);
    /// bits.insert(2, false).unwrap();
    /// assert_eq!(bits, BoolVec::from(&[true, false, false, true, true][..]));
    /// assert!(bits.insert(7, true).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: bool) -> Result<()> {
        if index > self.len {
            log::debug!("rejected insert at {} for length {}", index, self.len);
            return Err(BoolVecError::IndexOutOfRange(index, self.len));
        }
        // The placeholder is overwritten by the shift below (or by `value`).
        self.push(false);

        // Descending: each slot is read before it is overwritten.
        for i in (index + 1..self.len).rev() {
            bit_ops::copy_bit(&mut self.storage, BitAddr::of(i - 1), BitAddr::of(i));
        }
        bit_ops::write_bit(&mut self.storage, BitAddr::of(index), value);
        Ok(())
    }

    /// Removes the bit at `index` and returns it, moving every later bit one
    /// slot down.
    ///
    /// ```
    /// use bool_vec::BoolVec;
    ///
    /// let mut bits = BoolVec::from(&[true, true, false, true, true][..]);
    /// assert_eq!(bits.erase(3), Ok(true));
    /// assert_eq!(bits, BoolVec::from(&[true, true, false, true][..]));
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<bool> {
        let addr = self.check_index(index)?;
        let removed = bit_ops::read_bit(&self.storage, addr);

        // Ascending: each slot is read before it is overwritten.
        for i in index..self.len - 1 {
            bit_ops::copy_bit(&mut self.storage, BitAddr::of(i + 1), BitAddr::of(i));
        }
        self.len -= 1;

        if self.len % 8 == 0 {
            self.storage.pop();
            log::trace!("released trailing byte, {} bytes left", self.storage.len());
        }
        Ok(removed)
    }

    /// Drops every bit and releases the backing bytes.
    pub fn clear(&mut self) {
        log::debug!("clearing {} bits", self.len);
        self.storage.clear();
        self.len = 0;
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl core::ops::Index<usize> for BoolVec {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(true) => &TRUE,
            Ok(false) => &FALSE,
            Err(_) => panic!(
                "index out of range: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl PartialEq for BoolVec {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let full = self.len / 8;
        if self.storage[..full] != other.storage[..full] {
            return false;
        }
        // Compare the partial tail byte bit by bit, ignoring unspecified bits.
        (full * 8..self.len).all(|i| {
            let addr = BitAddr::of(i);
            bit_ops::read_bit(&self.storage, addr) == bit_ops::read_bit(&other.storage, addr)
        })
    }
}

impl Eq for BoolVec {}

impl From<&[bool]> for BoolVec {
    fn from(values: &[bool]) -> Self {
        let mut bits = BoolVec::with_capacity(values.len());
        bits.extend(values.iter().copied());
        bits
    }
}

impl FromIterator<bool> for BoolVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BoolVec::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<bool> for BoolVec {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

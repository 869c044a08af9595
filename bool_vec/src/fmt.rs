//! Textual rendering of a [`BoolVec`].
//!
//! # Examples
//!
//! ```rust
//! use bool_vec::BoolVec;
//!
//! let bits: BoolVec = [true, false, false, false, false, false, false, false, true]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(bits.render(), "Bits (9): [ 1 0 0 0 0 0 0 0 | 1 ]");
//! assert_eq!(format!("{:#}", bits), "100000001");
//! ```

use core::fmt;

use crate::BoolVec;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

impl BoolVec {
    /// Renders every bit in index order, grouped by byte.
    pub fn render(&self) -> String {
        self.to_string()
    }

    // Reads go through the bounds-checked accessor only.
    fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(|i| self.get(i).unwrap_or_default())
    }
}

impl fmt::Display for BoolVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for bit in self.bits() {
                f.write_str(if bit { "1" } else { "0" })?;
            }
            return Ok(());
        }

        write!(f, "Bits ({}): [ ", self.len())?;
        for (i, bit) in self.bits().enumerate() {
            write!(f, "{} ", u8::from(bit))?;
            if (i + 1) % 8 == 0 && i + 1 != self.len() {
                f.write_str("| ")?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for BoolVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.bits()).finish()
    }
}

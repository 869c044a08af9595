// Single-bit primitives over packed bytes. Bit 0 is the least significant bit
// of a byte. Callers are responsible for bounds; these index the slice directly.

use crate::index::BitAddr;

#[inline(always)]
pub fn read_bit(slice: &[u8], addr: BitAddr) -> bool {
    (slice[addr.byte] >> addr.shift) & 1 == 1
}

#[inline(always)]
pub fn set_bit(slice: &mut [u8], addr: BitAddr) {
    slice[addr.byte] |= addr.mask();
}

#[inline(always)]
pub fn clear_bit(slice: &mut [u8], addr: BitAddr) {
    slice[addr.byte] &= !addr.mask();
}

#[inline(always)]
pub fn write_bit(slice: &mut [u8], addr: BitAddr, value: bool) {
    if value {
        set_bit(slice, addr);
    } else {
        clear_bit(slice, addr);
    }
}

/// Same as [`write_bit`] but against a single byte, for the element handle.
#[inline(always)]
pub fn write_masked(byte: &mut u8, mask: u8, value: bool) {
    if value {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

/// Copies the bit at `from` into `to`. Insert and erase shift with this.
#[inline(always)]
pub fn copy_bit(slice: &mut [u8], from: BitAddr, to: BitAddr) {
    let bit = read_bit(slice, from);
    write_bit(slice, to, bit);
}

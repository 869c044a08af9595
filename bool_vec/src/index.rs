/// Location of a logical bit inside the packed backing store.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitAddr {
    pub byte: usize,
    pub shift: u32,
}

impl BitAddr {
    #[inline]
    pub const fn of(index: usize) -> Self {
        BitAddr {
            byte: index / 8,
            shift: (index % 8) as u32,
        }
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        1u8 << self.shift
    }
}

/// Number of bytes needed to hold `bits` packed bits.
#[inline]
pub const fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

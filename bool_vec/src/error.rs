#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolVecError {
    /// An index argument fell outside the valid range of the operation.
    /// Carries the rejected index and the length at the time of the call.
    #[cfg_attr(feature = "std", error("Index {0} is out of range for length {1}"))]
    IndexOutOfRange(usize, usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BoolVecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoolVecError::IndexOutOfRange(i, l) => {
                write!(f, "Index {} is out of range for length {}", i, l)
            }
        }
    }
}

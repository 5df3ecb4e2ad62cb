#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitPatternError {
    #[cfg_attr(
        feature = "std",
        error("Bit width must be in the range 1..=64, got {0}")
    )]
    InvalidWidth(u32),

    #[cfg_attr(feature = "std", error("Value {value} does not fit in {width} bits"))]
    ValueOverflow { value: u64, width: u32 },

    #[cfg_attr(
        feature = "std",
        error("Field of {len} bits at offset {offset} exceeds a {width}-bit word")
    )]
    FieldOutOfRange { offset: u32, len: u32, width: u32 },

    #[cfg_attr(
        feature = "std",
        error("Invalid binary digit {digit:?} at position {position}")
    )]
    InvalidDigit { digit: char, position: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitPatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitPatternError::InvalidWidth(w) => {
                write!(f, "Bit width must be in the range 1..=64, got {}", w)
            }
            BitPatternError::ValueOverflow { value, width } => {
                write!(f, "Value {} does not fit in {} bits", value, width)
            }
            BitPatternError::FieldOutOfRange { offset, len, width } => {
                write!(
                    f,
                    "Field of {} bits at offset {} exceeds a {}-bit word",
                    len, offset, width
                )
            }
            BitPatternError::InvalidDigit { digit, position } => {
                write!(f, "Invalid binary digit {:?} at position {}", digit, position)
            }
        }
    }
}

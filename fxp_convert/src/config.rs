use std::fmt;

use crate::error::{DomainError, Result};

/// Widest word whose integers an `f64` represents exactly.
pub const MAX_WORD_LENGTH: u32 = 53;

/// Sign mode, word length and fraction length of a fixed-point format.
///
/// The integer length is `word_length - fraction_length`. A signed format
/// spends one of its integer bits on the sign.
///
/// # Examples
///
/// ```
/// use fxp_convert::FixedPointConfig;
///
/// let config = FixedPointConfig::new(true, 12, 8)?;
/// assert_eq!(config.integer_length(), 4);
/// assert_eq!(config.to_string(), "s12.8");
///
/// // Fraction longer than the word
/// assert!(FixedPointConfig::new(true, 8, 9).is_err());
/// # Ok::<(), fxp_convert::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPointConfig {
    signed: bool,
    word_length: u32,
    fraction_length: u32,
}

impl FixedPointConfig {
    /// Creates a validated format.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WordLength` if `word_length` is zero or wider
    /// than [`MAX_WORD_LENGTH`], and `DomainError::FractionExceedsWord` if
    /// `fraction_length > word_length`.
    pub fn new(signed: bool, word_length: u32, fraction_length: u32) -> Result<Self> {
        if word_length == 0 || word_length > MAX_WORD_LENGTH {
            return Err(DomainError::WordLength {
                word_length,
                max: MAX_WORD_LENGTH,
            }
            .into());
        }
        if fraction_length > word_length {
            return Err(DomainError::FractionExceedsWord {
                word_length,
                fraction_length,
            }
            .into());
        }
        Ok(Self::preset(signed, word_length, fraction_length))
    }

    /// Creates a validated signed (two's-complement) format.
    pub fn signed(word_length: u32, fraction_length: u32) -> Result<Self> {
        Self::new(true, word_length, fraction_length)
    }

    /// Creates a validated unsigned format.
    pub fn unsigned(word_length: u32, fraction_length: u32) -> Result<Self> {
        Self::new(false, word_length, fraction_length)
    }

    // Only for constants whose lengths are known to be valid.
    pub(crate) const fn preset(signed: bool, word_length: u32, fraction_length: u32) -> Self {
        Self {
            signed,
            word_length,
            fraction_length,
        }
    }

    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    pub const fn word_length(&self) -> u32 {
        self.word_length
    }

    pub const fn fraction_length(&self) -> u32 {
        self.fraction_length
    }

    pub const fn integer_length(&self) -> u32 {
        self.word_length - self.fraction_length
    }

    /// `2^FL`, the factor between a value and its quantized integer.
    pub fn scale(&self) -> f64 {
        2f64.powi(self.fraction_length as i32)
    }
}

impl fmt::Display for FixedPointConfig {
    /// `s16.8` for a signed 16-bit word with 8 fraction bits, `u16.8` unsigned.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { 's' } else { 'u' };
        write!(f, "{}{}.{}", sign, self.word_length, self.fraction_length)
    }
}

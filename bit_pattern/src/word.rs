//! Fixed-width bit words with MSB-first indexing.
//!
//! # Examples
//!
//! ```rust
//! use bit_pattern::BitPattern;
//!
//! let word = BitPattern::from_unsigned(0b1010, 4).unwrap();
//! assert_eq!(word.bit(0), Some(true));
//! assert_eq!(word.bit(3), Some(false));
//!
//! let bits: Vec<bool> = word.iter().collect();
//! assert_eq!(bits, [true, false, true, false]);
//! ```
//!
use core::fmt;
use core::str::FromStr;

use crate::BitPatternError;
use crate::bit_ops;

/// Widest word a `BitPattern` can hold.
pub const MAX_WIDTH: u32 = 64;

type Result<T> = core::result::Result<T, BitPatternError>;

/// Validates the bit width.
#[inline(always)]
fn validate_width(width: u32) -> Result<()> {
    if (1..=MAX_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(BitPatternError::InvalidWidth(width))
    }
}

/// A word of `width` bits. Bit 0 is the most significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPattern {
    bits: u64,
    width: u32,
}

impl BitPattern {
    /// Encodes an unsigned integer into `width` bits.
    ///
    /// # Errors
    ///
    /// Returns `BitPatternError::ValueOverflow` if `value` needs more than
    /// `width` bits.
    ///
    /// ```
    /// use bit_pattern::{BitPattern, BitPatternError};
    ///
    /// assert!(BitPattern::from_unsigned(255, 8).is_ok());
    /// assert_eq!(
    ///     BitPattern::from_unsigned(256, 8),
    ///     Err(BitPatternError::ValueOverflow { value: 256, width: 8 })
    /// );
    /// ```
    pub fn from_unsigned(value: u64, width: u32) -> Result<Self> {
        validate_width(width)?;
        if value > bit_ops::low_mask(width) {
            return Err(BitPatternError::ValueOverflow { value, width });
        }
        Ok(Self { bits: value, width })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// The word read as an unsigned integer.
    pub fn as_unsigned(&self) -> u64 {
        self.bits
    }

    /// The word read as a two's-complement integer (sign-extended to 64 bits).
    ///
    /// ```
    /// use bit_pattern::BitPattern;
    ///
    /// let word = BitPattern::from_unsigned(0b1000_0000, 8).unwrap();
    /// assert_eq!(word.as_twos_complement(), -128);
    /// ```
    pub fn as_twos_complement(&self) -> i64 {
        if self.width < MAX_WIDTH && self.is_negative() {
            (self.bits | !bit_ops::low_mask(self.width)) as i64
        } else {
            self.bits as i64
        }
    }

    /// Returns `true` if the most significant bit is set.
    pub fn is_negative(&self) -> bool {
        bit_ops::get_bits(self.bits, self.width - 1, 1) == 1
    }

    /// Returns the bit at `index`, counting from the most significant bit,
    /// or `None` if out of bounds.
    pub fn bit(&self, index: u32) -> Option<bool> {
        if index >= self.width {
            return None;
        }
        Some(bit_ops::get_bits(self.bits, self.width - 1 - index, 1) == 1)
    }

    /// Reads `len` bits starting `offset` bits above the least significant bit.
    pub fn field(&self, offset: u32, len: u32) -> Result<u64> {
        match offset.checked_add(len) {
            Some(end) if end <= self.width => Ok(bit_ops::get_bits(self.bits, offset, len)),
            _ => Err(BitPatternError::FieldOutOfRange {
                offset,
                len,
                width: self.width,
            }),
        }
    }

    /// Splits the word at the binary point into its integer field (the high
    /// `width - fraction_bits` bits) and fraction field (the low
    /// `fraction_bits` bits).
    pub fn split_at_fraction(&self, fraction_bits: u32) -> Result<(u64, u64)> {
        let integer_bits = self.width.checked_sub(fraction_bits).ok_or(
            BitPatternError::FieldOutOfRange {
                offset: 0,
                len: fraction_bits,
                width: self.width,
            },
        )?;
        let integer = self.field(fraction_bits, integer_bits)?;
        let fraction = self.field(0, fraction_bits)?;
        Ok((integer, fraction))
    }

    /// Returns an iterator over the bits, most significant first.
    pub fn iter(&self) -> Bits {
        Bits {
            pattern: *self,
            index: 0,
        }
    }
}

impl fmt::Display for BitPattern {
    /// Writes the bits MSB first; `{:#}` adds a `0b` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitPattern {
    type Err = BitPatternError;

    /// Parses a string of `0`/`1` digits, MSB first, with an optional `0b`
    /// prefix. The width is the number of digits.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0b").unwrap_or(s);
        let width = u32::try_from(digits.chars().count()).unwrap_or(u32::MAX);
        let mut bits = 0u64;

        for (position, digit) in digits.chars().enumerate() {
            let bit = match digit {
                '0' => 0,
                '1' => 1,
                _ => return Err(BitPatternError::InvalidDigit { digit, position }),
            };
            bit_ops::set_bits(&mut bits, width - 1 - position as u32, 1, bit);
        }

        validate_width(width)?;
        Ok(Self { bits, width })
    }
}

/// Iterator over the bits of a `BitPattern`, most significant first.
#[derive(Debug, Clone)]
pub struct Bits {
    pattern: BitPattern,
    index: u32,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.pattern.bit(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.pattern.width - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {
    fn len(&self) -> usize {
        (self.pattern.width - self.index) as usize
    }
}

impl IntoIterator for &BitPattern {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

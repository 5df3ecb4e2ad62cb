//! Binary views of a quantized value.

use bit_pattern::BitPattern;

use crate::config::FixedPointConfig;
use crate::error::Result;

/// Integer and fractional parts read off a magnitude word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeParts {
    /// Weighted sum of the high `IL` bits, `2^(IL-1) .. 2^0`.
    pub dec: f64,
    /// Weighted sum of the low `FL` bits, `2^-1 .. 2^-FL`.
    pub frac: f64,
}

impl MagnitudeParts {
    pub fn value(&self) -> f64 {
        self.dec + self.frac
    }
}

/// Encodes the two's-complement integer into a `WL`-bit word.
///
/// # Errors
///
/// Returns `FixedPointError::Encoding` if `int` needs more than `WL` bits.
pub fn encode_twos_complement(int: u64, config: &FixedPointConfig) -> Result<BitPattern> {
    Ok(BitPattern::from_unsigned(int, config.word_length())?)
}

/// Encodes the magnitude integer into a `WL`-bit word and decodes it into
/// its integer and fractional parts.
///
/// ```
/// use fxp_convert::{FixedPointConfig, encode::decompose_magnitude};
///
/// let config = FixedPointConfig::unsigned(10, 6)?;
/// let (word, parts) = decompose_magnitude(362, &config)?;
/// assert_eq!(word.to_string(), "0101101010");
/// assert_eq!(parts.dec, 5.0);
/// assert_eq!(parts.frac, 0.65625);
/// # Ok::<(), fxp_convert::FixedPointError>(())
/// ```
pub fn decompose_magnitude(
    magnitude_int: u64,
    config: &FixedPointConfig,
) -> Result<(BitPattern, MagnitudeParts)> {
    let word = BitPattern::from_unsigned(magnitude_int, config.word_length())?;
    let (integer, fraction) = word.split_at_fraction(config.fraction_length())?;

    let parts = MagnitudeParts {
        dec: integer as f64,
        frac: fraction as f64 / config.scale(),
    };
    Ok((word, parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixedPointError;
    use bit_pattern::BitPatternError;

    #[test]
    fn test_twos_complement_word() {
        let config = FixedPointConfig::signed(8, 4).unwrap();
        let word = encode_twos_complement(216, &config).unwrap();
        assert_eq!(word.to_string(), "11011000");
        assert_eq!(word.as_twos_complement(), -40);
    }

    #[test]
    fn test_encoding_overflow() {
        let config = FixedPointConfig::unsigned(10, 6).unwrap();
        assert_eq!(
            encode_twos_complement(1024, &config),
            Err(FixedPointError::Encoding(BitPatternError::ValueOverflow {
                value: 1024,
                width: 10
            }))
        );
        assert!(decompose_magnitude(1024, &config).is_err());
    }

    #[test]
    fn test_decompose_bit_weights() {
        // 1011.0110 -> 8 + 2 + 1, 1/4 + 1/8
        let config = FixedPointConfig::unsigned(8, 4).unwrap();
        let (_, parts) = decompose_magnitude(0b1011_0110, &config).unwrap();
        assert_eq!(parts.dec, 11.0);
        assert_eq!(parts.frac, 0.375);
        assert_eq!(parts.value(), 11.375);
    }

    #[test]
    fn test_decompose_all_fraction() {
        let config = FixedPointConfig::signed(4, 4).unwrap();
        let (_, parts) = decompose_magnitude(0b0101, &config).unwrap();
        assert_eq!(parts.dec, 0.0);
        assert_eq!(parts.frac, 0.3125);
    }

    #[test]
    fn test_decompose_all_integer() {
        let config = FixedPointConfig::unsigned(8, 0).unwrap();
        let (_, parts) = decompose_magnitude(200, &config).unwrap();
        assert_eq!(parts.dec, 200.0);
        assert_eq!(parts.frac, 0.0);
    }

    #[test]
    fn test_magnitude_word_is_not_sign_adjusted() {
        // The magnitude of -2.5 in s8.4 is encoded as +2.5
        let config = FixedPointConfig::signed(8, 4).unwrap();
        let (word, parts) = decompose_magnitude(40, &config).unwrap();
        assert_eq!(word.to_string(), "00101000");
        assert_eq!(parts.value(), 2.5);
    }
}

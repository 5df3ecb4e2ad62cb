//! The record produced by one conversion.

use std::fmt;

use bit_pattern::BitPattern;

use crate::config::FixedPointConfig;

/// Full characterization of one converted scalar.
///
/// `int` and `bin` hold the two's-complement word, so for a negative value
/// `int` is `2^WL - |q|`. `dec` and `frac` are read from a separate
/// magnitude-only word, so `fxp = sgn · (dec + frac)`.
///
/// # Examples
///
/// ```
/// use fxp_convert::{OverflowPolicy, convert};
///
/// let value = convert(-2.5, true, 8, 4, OverflowPolicy::Wrap)?
///     .into_value()
///     .unwrap();
/// assert_eq!(value.int, 216);
/// assert_eq!(value.bin.to_string(), "11011000");
/// assert_eq!(value.signed_int(), -40);
/// assert_eq!((value.dec, value.frac), (2.0, 0.5));
/// assert_eq!(value.fxp, -2.5);
/// # Ok::<(), fxp_convert::FixedPointError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPointValue {
    pub config: FixedPointConfig,
    /// Quantized integer, two's-complement adjusted (the raw word).
    pub int: u64,
    /// `WL`-bit two's-complement word of `int`.
    pub bin: BitPattern,
    /// `+1` or `-1`.
    pub sgn: i8,
    /// Integer part of the magnitude word.
    pub dec: f64,
    /// Fractional part of the magnitude word.
    pub frac: f64,
    /// Reconstructed value, `sgn · (dec + frac)`.
    pub fxp: f64,
    /// Input after overflow handling.
    pub float: f64,
    pub max: f64,
    pub min: f64,
    /// `20·log10(max - 1)`
    pub dr_db: f64,
    /// `2^-FL`
    pub res: f64,
    /// `|float| - (dec + frac)`, absolute.
    pub err: f64,
    /// Set when the overflow policy changed the input.
    pub of_flag: bool,
}

impl FixedPointValue {
    /// `bin` read as a two's-complement integer (or unsigned, for unsigned
    /// formats). Dividing by `2^FL` gives the represented value.
    pub fn signed_int(&self) -> i64 {
        if self.config.is_signed() {
            self.bin.as_twos_complement()
        } else {
            self.int as i64
        }
    }

    /// The overflow flag as `0` or `1`.
    pub fn of_flag_bit(&self) -> u8 {
        self.of_flag as u8
    }
}

impl fmt::Display for FixedPointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} (float {})", self.config, self.fxp, self.float)?;
        writeln!(f, "  bin  {}  int {}", self.bin, self.int)?;
        writeln!(f, "  sgn  {:+}  dec {}  frac {}", self.sgn, self.dec, self.frac)?;
        writeln!(f, "  range [{}, {}]  res {}  DR {:.2} dB", self.min, self.max, self.res, self.dr_db)?;
        write!(f, "  err  {:e}  overflow {}", self.err, self.of_flag_bit())
    }
}

#[cfg(test)]
mod tests {
    use crate::{OverflowPolicy, convert};

    #[test]
    fn test_signed_int_for_unsigned_format() {
        let value = convert(200.0, false, 8, 0, OverflowPolicy::Wrap)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(value.int, 200);
        assert_eq!(value.signed_int(), 200);
    }

    #[test]
    fn test_of_flag_bit() {
        let value = convert(300.0, false, 8, 0, OverflowPolicy::Saturate)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(value.of_flag_bit(), 1);
        assert_eq!(value.fxp, 255.0);
    }

    #[test]
    fn test_display() {
        let value = convert(-2.5, true, 8, 4, OverflowPolicy::Wrap)
            .unwrap()
            .into_value()
            .unwrap();
        let text = value.to_string();
        assert!(text.starts_with("s8.4 -2.5"));
        assert!(text.contains("bin  11011000  int 216"));
        assert!(text.contains("sgn  -1"));
        assert!(text.contains("overflow 0"));
    }
}

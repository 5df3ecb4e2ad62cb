//! Scaling a value onto the integer grid of a format.

use crate::config::FixedPointConfig;

/// Rounds to the nearest integer, ties to even.
#[inline]
pub(crate) fn round(x: f64) -> f64 {
    x.round_ties_even()
}

/// Sign and scaled integers of a value that is already in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantized {
    /// `+1` or `-1`. Only signed formats produce `-1`.
    pub sgn: i8,
    /// `|x|`
    pub magnitude: f64,
    /// `round(|x| · 2^FL)`
    pub magnitude_int: u64,
    /// `(2^IL - |q|) · 2^FL` truncated to `WL` bits for negative values,
    /// else `magnitude_int`.
    pub twos_complement_int: u64,
}

/// Scales `value` by `2^FL` and rounds once.
///
/// The two's-complement integer is the magnitude integer negated modulo
/// `2^WL`, so both words describe the same code. A negative value whose
/// magnitude rounds to zero gets the all-zero word.
pub fn quantize(value: f64, config: &FixedPointConfig) -> Quantized {
    let negative = config.is_signed() && value < 0.0;
    let magnitude = value.abs();

    let magnitude_int = round(magnitude * config.scale()) as u64;
    let twos_complement_int = if negative {
        let mask = (1u64 << config.word_length()) - 1;
        magnitude_int.wrapping_neg() & mask
    } else {
        magnitude_int
    };

    let quantized = Quantized {
        sgn: if negative { -1 } else { 1 },
        magnitude,
        magnitude_int,
        twos_complement_int,
    };
    tracing::trace!(value, ?quantized, "quantized");
    quantized
}

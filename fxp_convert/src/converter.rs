//! The scalar conversion pipeline.

use crate::config::FixedPointConfig;
use crate::encode::{decompose_magnitude, encode_twos_complement};
use crate::error::{DomainError, Result};
use crate::overflow::OverflowPolicy;
use crate::quantize::quantize;
use crate::range::RangeModel;
use crate::requantize::PriorRecord;
use crate::value::FixedPointValue;

/// What to convert: a raw scalar, or a record produced by an earlier
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Scalar(f64),
    Prior(PriorRecord),
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Scalar(value)
    }
}

impl From<f32> for Input {
    fn from(value: f32) -> Self {
        Input::Scalar(value as f64)
    }
}

impl From<PriorRecord> for Input {
    fn from(record: PriorRecord) -> Self {
        Input::Prior(record)
    }
}

impl From<FixedPointValue> for Input {
    fn from(value: FixedPointValue) -> Self {
        Input::Prior(value.into())
    }
}

impl From<&FixedPointValue> for Input {
    fn from(value: &FixedPointValue) -> Self {
        Input::Prior(value.into())
    }
}

#[cfg(feature = "half_support")]
impl From<half::f16> for Input {
    fn from(value: half::f16) -> Self {
        Input::Scalar(value.to_f64())
    }
}

#[cfg(feature = "half_support")]
impl From<half::bf16> for Input {
    fn from(value: half::bf16) -> Self {
        Input::Scalar(value.to_f64())
    }
}

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Converted(FixedPointValue),
    /// The prior record already has the requested format; nothing was done.
    Unchanged,
}

impl Conversion {
    pub fn value(&self) -> Option<&FixedPointValue> {
        match self {
            Conversion::Converted(value) => Some(value),
            Conversion::Unchanged => None,
        }
    }

    pub fn into_value(self) -> Option<FixedPointValue> {
        match self {
            Conversion::Converted(value) => Some(value),
            Conversion::Unchanged => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Conversion::Unchanged)
    }
}

/// Converts scalars into one fixed-point format.
///
/// # Examples
///
/// ```
/// use fxp_convert::{Converter, FixedPointConfig, OverflowPolicy};
///
/// let converter = Converter::new(FixedPointConfig::signed(12, 8)?, OverflowPolicy::Saturate);
/// let value = converter.convert_scalar(5.65236589)?;
/// assert_eq!(value.fxp, 5.65234375);
/// assert_eq!(value.int, 1447);
///
/// let clamped = converter.convert_scalar(1e6)?;
/// assert_eq!(clamped.fxp, converter.range().max);
/// assert!(clamped.of_flag);
/// # Ok::<(), fxp_convert::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    config: FixedPointConfig,
    policy: OverflowPolicy,
    range: RangeModel,
}

impl Converter {
    pub fn new(config: FixedPointConfig, policy: OverflowPolicy) -> Self {
        let range = RangeModel::new(&config);
        tracing::trace!(%config, ?range, "derived range");
        Self {
            config,
            policy,
            range,
        }
    }

    pub fn config(&self) -> &FixedPointConfig {
        &self.config
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub fn range(&self) -> &RangeModel {
        &self.range
    }

    /// Converts a scalar or re-quantizes a prior record.
    pub fn convert(&self, input: impl Into<Input>) -> Result<Conversion> {
        match input.into() {
            Input::Scalar(value) => self.convert_scalar(value).map(Conversion::Converted),
            Input::Prior(record) => self.requantize(&record),
        }
    }

    /// Runs the scalar pipeline: overflow policy, quantization, encoding.
    ///
    /// # Errors
    ///
    /// - `DomainError::NonFinite` for NaN or infinite input.
    /// - `DomainError::NegativeUnsigned` for a negative input to an unsigned format.
    /// - `FixedPointError::Encoding` if a quantized integer does not fit the word.
    pub fn convert_scalar(&self, value: f64) -> Result<FixedPointValue> {
        if !value.is_finite() {
            return Err(DomainError::NonFinite { value }.into());
        }
        if !self.config.is_signed() && value < 0.0 {
            return Err(DomainError::NegativeUnsigned {
                value,
                config: self.config,
            }
            .into());
        }

        let adjusted = self.policy.apply(value, &self.range);
        let quantized = quantize(adjusted.value, &self.config);
        let bin = encode_twos_complement(quantized.twos_complement_int, &self.config)?;
        let (_, parts) = decompose_magnitude(quantized.magnitude_int, &self.config)?;

        let sgn = quantized.sgn as f64;
        let result = FixedPointValue {
            config: self.config,
            int: quantized.twos_complement_int,
            bin,
            sgn: quantized.sgn,
            dec: parts.dec,
            frac: parts.frac,
            fxp: sgn * parts.value(),
            float: adjusted.value,
            max: self.range.max,
            min: self.range.min,
            dr_db: self.range.dynamic_range_db,
            res: self.range.resolution,
            err: (quantized.magnitude - parts.value()).abs(),
            of_flag: adjusted.overflowed,
        };

        tracing::debug!(
            config = %self.config,
            policy = %self.policy,
            input = value,
            fxp = result.fxp,
            bin = %result.bin,
            of_flag = result.of_flag,
            "converted scalar"
        );
        Ok(result)
    }
}

/// Converts `input` into the format `(signed, word_length, fraction_length)`.
///
/// Returns `Conversion::Unchanged` when `input` is a prior record already in
/// that format.
///
/// # Examples
///
/// ```
/// use fxp_convert::{Conversion, OverflowPolicy, convert};
///
/// let value = convert(5.65236589, false, 10, 6, OverflowPolicy::Wrap)?
///     .into_value()
///     .unwrap();
/// assert_eq!(value.fxp, 5.65625);
/// assert_eq!(value.int, 362);
///
/// // Same format again: nothing to do
/// let again = convert(&value, false, 10, 6, OverflowPolicy::Wrap)?;
/// assert_eq!(again, Conversion::Unchanged);
/// # Ok::<(), fxp_convert::FixedPointError>(())
/// ```
pub fn convert(
    input: impl Into<Input>,
    signed: bool,
    word_length: u32,
    fraction_length: u32,
    policy: OverflowPolicy,
) -> Result<Conversion> {
    let config = FixedPointConfig::new(signed, word_length, fraction_length)?;
    Converter::new(config, policy).convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixedPointError;

    fn value_of(conversion: Result<Conversion>) -> FixedPointValue {
        conversion.unwrap().into_value().unwrap()
    }

    #[test]
    fn test_documented_scenarios() {
        let x = 5.65236589;
        let cases = [
            (false, 10, 6, 5.65625, 362),
            (true, 10, 6, 5.65625, 362),
            (true, 12, 6, 5.65625, 362),
            (true, 12, 8, 5.65234375, 1447),
        ];
        for (signed, wl, fl, fxp, int) in cases {
            let value = value_of(convert(x, signed, wl, fl, OverflowPolicy::Wrap));
            assert_eq!(value.fxp, fxp, "{}{}.{}", signed, wl, fl);
            assert_eq!(value.int, int, "{}{}.{}", signed, wl, fl);
            assert!(!value.of_flag);
            assert_eq!(value.float, x);
        }
    }

    #[test]
    fn test_full_record_for_negative_value() {
        let value = value_of(convert(-2.5, true, 8, 4, OverflowPolicy::Wrap));
        assert_eq!(value.config, FixedPointConfig::signed(8, 4).unwrap());
        assert_eq!(value.int, 216);
        assert_eq!(value.bin.to_string(), "11011000");
        assert_eq!(value.sgn, -1);
        assert_eq!(value.dec, 2.0);
        assert_eq!(value.frac, 0.5);
        assert_eq!(value.fxp, -2.5);
        assert_eq!(value.float, -2.5);
        assert_eq!(value.min, -8.0);
        assert_eq!(value.max, 7.9375);
        assert_eq!(value.res, 0.0625);
        assert_eq!(value.err, 0.0);
        assert!(!value.of_flag);
        assert_eq!(value.signed_int(), -40);
    }

    #[test]
    fn test_reconstruction_error() {
        let value = value_of(convert(5.65236589, true, 12, 8, OverflowPolicy::Wrap));
        assert!((value.err - (5.65236589 - 5.65234375)).abs() < 1e-12);
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        let result = convert(-1.0, false, 8, 4, OverflowPolicy::Wrap);
        assert!(matches!(
            result,
            Err(FixedPointError::Domain(DomainError::NegativeUnsigned { value, .. })) if value == -1.0
        ));
    }

    #[test]
    fn test_unsigned_rejects_negative_under_saturate() {
        let result = convert(-1.0, false, 8, 4, OverflowPolicy::Saturate);
        assert!(matches!(
            result,
            Err(FixedPointError::Domain(DomainError::NegativeUnsigned { .. }))
        ));
    }

    #[test]
    fn test_malformed_config() {
        let result = convert(1.0, true, 4, 6, OverflowPolicy::Wrap);
        assert!(matches!(
            result,
            Err(FixedPointError::Domain(DomainError::FractionExceedsWord { .. }))
        ));
    }

    #[test]
    fn test_non_finite_input() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                convert(value, true, 8, 4, OverflowPolicy::Saturate),
                Err(FixedPointError::Domain(DomainError::NonFinite { .. }))
            ));
        }
    }

    #[test]
    fn test_saturate_record() {
        let high = value_of(convert(100.0, true, 8, 4, OverflowPolicy::Saturate));
        assert_eq!(high.fxp, 7.9375);
        assert_eq!(high.float, 7.9375);
        assert_eq!(high.bin.to_string(), "01111111");
        assert!(high.of_flag);

        let low = value_of(convert(-100.0, true, 8, 4, OverflowPolicy::Saturate));
        assert_eq!(low.fxp, -8.0);
        assert_eq!(low.bin.to_string(), "10000000");
        assert_eq!(low.dec, 8.0);
        assert_eq!(low.signed_int(), -128);
    }

    #[test]
    fn test_wrap_record() {
        let value = value_of(convert(9.0, true, 8, 4, OverflowPolicy::Wrap));
        assert_eq!(value.fxp, -7.0);
        assert_eq!(value.float, -7.0);
        assert_eq!(value.signed_int(), -112);
        assert!(value.of_flag);
    }

    #[test]
    fn test_tiny_negative_is_negative_zero() {
        let value = value_of(convert(-0.01, true, 8, 4, OverflowPolicy::Wrap));
        assert_eq!(value.sgn, -1);
        assert_eq!(value.int, 0);
        assert_eq!(value.fxp, 0.0);
        assert!(value.fxp.is_sign_negative());
    }

    #[test]
    fn test_negative_just_past_a_tie_word_matches_fxp() {
        let value = value_of(convert(
            -(2f64.powi(-9) + 2f64.powi(-48)),
            true,
            16,
            8,
            OverflowPolicy::Wrap,
        ));
        assert_eq!(value.fxp, -0.00390625);
        assert_eq!(value.int, 0xFFFF);
        assert_eq!(value.bin.to_string(), "1111111111111111");
        assert_eq!(value.signed_int(), -1);
    }

    #[test]
    fn test_f32_input() {
        let value = value_of(convert(1.5f32, true, 8, 4, OverflowPolicy::Wrap));
        assert_eq!(value.fxp, 1.5);
    }

    #[cfg(feature = "half_support")]
    #[test]
    fn test_half_input() {
        let value = value_of(convert(half::f16::from_f32(-0.75), true, 8, 4, OverflowPolicy::Wrap));
        assert_eq!(value.fxp, -0.75);

        let value = value_of(convert(half::bf16::from_f32(3.0), false, 8, 4, OverflowPolicy::Wrap));
        assert_eq!(value.fxp, 3.0);
    }

    #[test]
    fn test_converter_accessors() {
        let config = FixedPointConfig::unsigned(10, 6).unwrap();
        let converter = Converter::new(config, OverflowPolicy::Saturate);
        assert_eq!(converter.config(), &config);
        assert_eq!(converter.policy(), OverflowPolicy::Saturate);
        assert_eq!(converter.range().max, 15.984375);
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
        assert_send_sync::<Conversion>();
        assert_send_sync::<FixedPointError>();

        let converter = Converter::new(crate::formats::Q8_8, OverflowPolicy::Saturate);
        let results: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| s.spawn(move || converter.convert_scalar(i as f64 * 1.5).unwrap().fxp))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, [0.0, 1.5, 3.0, 4.5]);
    }

    #[test]
    fn test_conversion_helpers() {
        assert!(Conversion::Unchanged.is_unchanged());
        assert!(Conversion::Unchanged.value().is_none());

        let converted = convert(1.0, true, 8, 4, OverflowPolicy::Wrap).unwrap();
        assert!(!converted.is_unchanged());
        assert_eq!(converted.value().map(|v| v.fxp), Some(1.0));
    }
}

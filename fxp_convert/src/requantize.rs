//! Re-quantizing the result of an earlier conversion into a new format.

use bit_pattern::BitPattern;

use crate::config::FixedPointConfig;
use crate::converter::{Conversion, Converter};
use crate::error::{ConfigError, FixedPointError, Result};
use crate::value::FixedPointValue;

/// A previously produced record, possibly with only some fields known.
///
/// Any one of `float`, `bin`, `int` or `dec` + `frac` is enough to recover
/// the value; they are tried in that order. A full [`FixedPointValue`]
/// converts into a record with every field set.
///
/// # Examples
///
/// ```
/// use bit_pattern::BitPattern;
/// use fxp_convert::{OverflowPolicy, PriorRecord, convert};
///
/// // Only the word of an s8.4 value is known
/// let record = PriorRecord::new(8, 4)
///     .with_signed(true)
///     .with_bin("11011000".parse::<BitPattern>()?);
///
/// let value = convert(record, true, 16, 8, OverflowPolicy::Wrap)?
///     .into_value()
///     .unwrap();
/// assert_eq!(value.fxp, -2.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriorRecord {
    /// Sign mode of the record, if known.
    pub signed: Option<bool>,
    pub word_length: u32,
    pub fraction_length: u32,
    pub float: Option<f64>,
    pub int: Option<u64>,
    pub bin: Option<BitPattern>,
    pub sgn: Option<i8>,
    pub dec: Option<f64>,
    pub frac: Option<f64>,
}

impl PriorRecord {
    /// A record of the given lengths with no fields known.
    pub fn new(word_length: u32, fraction_length: u32) -> Self {
        Self {
            word_length,
            fraction_length,
            ..Self::default()
        }
    }

    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = Some(signed);
        self
    }

    pub fn with_float(mut self, float: f64) -> Self {
        self.float = Some(float);
        self
    }

    pub fn with_int(mut self, int: u64) -> Self {
        self.int = Some(int);
        self
    }

    pub fn with_bin(mut self, bin: BitPattern) -> Self {
        self.bin = Some(bin);
        self
    }

    pub fn with_parts(mut self, sgn: i8, dec: f64, frac: f64) -> Self {
        self.sgn = Some(sgn);
        self.dec = Some(dec);
        self.frac = Some(frac);
        self
    }

    /// The `bin` word, or `int` encoded under the record's word length.
    fn stored_word(&self) -> Result<BitPattern> {
        match (self.bin, self.int) {
            (Some(bin), _) if bin.width() != self.word_length => {
                Err(ConfigError::WordWidthMismatch {
                    bin,
                    width: bin.width(),
                    word_length: self.word_length,
                }
                .into())
            }
            (Some(bin), _) => Ok(bin),
            (None, Some(int)) => BitPattern::from_unsigned(int, self.word_length).map_err(|_| {
                FixedPointError::from(ConfigError::IntOutOfRange {
                    int,
                    word_length: self.word_length,
                })
            }),
            (None, None) => Err(self.missing_fields()),
        }
    }

    fn missing_fields(&self) -> FixedPointError {
        ConfigError::MissingFields {
            word_length: self.word_length,
            fraction_length: self.fraction_length,
        }
        .into()
    }

    /// Recovers the value this record stands for. `signed` is used when the
    /// record does not say.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingFields` if no recoverable field is present.
    /// - `ConfigError::WordWidthMismatch` or `ConfigError::IntOutOfRange` if
    ///   `bin` or `int` does not fit the record's own word length.
    /// - `DomainError` if the record's own lengths are invalid and a word
    ///   has to be decoded under them.
    pub fn recover_float(&self, signed: bool) -> Result<f64> {
        if let Some(float) = self.float {
            return Ok(float);
        }

        if self.bin.is_some() || self.int.is_some() {
            let config = FixedPointConfig::new(
                self.signed.unwrap_or(signed),
                self.word_length,
                self.fraction_length,
            )?;
            let word = self.stored_word()?;
            let int = if config.is_signed() {
                word.as_twos_complement() as f64
            } else {
                word.as_unsigned() as f64
            };
            return Ok(int / config.scale());
        }

        if let (Some(dec), Some(frac)) = (self.dec, self.frac) {
            let sgn = self.sgn.unwrap_or(1) as f64;
            return Ok(sgn * (dec + frac));
        }

        Err(self.missing_fields())
    }
}

impl From<&FixedPointValue> for PriorRecord {
    fn from(value: &FixedPointValue) -> Self {
        Self {
            signed: Some(value.config.is_signed()),
            word_length: value.config.word_length(),
            fraction_length: value.config.fraction_length(),
            float: Some(value.float),
            int: Some(value.int),
            bin: Some(value.bin),
            sgn: Some(value.sgn),
            dec: Some(value.dec),
            frac: Some(value.frac),
        }
    }
}

impl From<FixedPointValue> for PriorRecord {
    fn from(value: FixedPointValue) -> Self {
        Self::from(&value)
    }
}

impl Converter {
    /// Converts a prior record into this converter's format.
    ///
    /// Returns `Conversion::Unchanged` when the record is already in this
    /// format. Otherwise the recovered value goes through
    /// [`Converter::convert_scalar`], which never takes a record, so this
    /// recurses at most once.
    ///
    /// # Errors
    ///
    /// - `ConfigError::SignMismatch` if the record's sign mode differs.
    /// - `ConfigError::MissingFields` if the value cannot be recovered.
    pub fn requantize(&self, record: &PriorRecord) -> Result<Conversion> {
        let requested = self.config().is_signed();
        match record.signed {
            Some(signed) if signed != requested => {
                return Err(ConfigError::SignMismatch {
                    record: signed,
                    requested,
                }
                .into());
            }
            _ => {}
        }

        if record.word_length == self.config().word_length()
            && record.fraction_length == self.config().fraction_length()
        {
            tracing::debug!(config = %self.config(), "record already in requested format");
            return Ok(Conversion::Unchanged);
        }

        let float = record.recover_float(requested)?;
        tracing::debug!(
            from_word_length = record.word_length,
            from_fraction_length = record.fraction_length,
            to = %self.config(),
            float,
            "re-quantizing record"
        );
        self.convert_scalar(float).map(Conversion::Converted)
    }
}

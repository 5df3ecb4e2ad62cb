//! # fxp_convert
//!
//! Converts a real-valued scalar into a fixed-point format and reports how it
//! is represented.
//!
//! A format is a sign mode, a word length `WL` and a fraction length `FL`.
//! Conversion runs a fixed pipeline:
//!
//! 1. derive the representable range and resolution ([`RangeModel`])
//! 2. map out-of-range input back into range ([`OverflowPolicy`])
//! 3. scale by `2^FL` and round, ties to even ([`quantize()`])
//! 4. encode the two's-complement word and decode the magnitude word into
//!    integer and fractional parts ([`encode`])
//! 5. assemble a [`FixedPointValue`]
//!
//! A previously produced record can be fed back in with a new format; see
//! [`PriorRecord`].
//!
//! ## Features
//!
//! - `half_support`: accept `half::f16` and `half::bf16` scalars
//!
//! ## Examples
//!
//! ```
//! use fxp_convert::{OverflowPolicy, convert};
//!
//! let value = convert(5.65236589, true, 12, 8, OverflowPolicy::Wrap)?
//!     .into_value()
//!     .unwrap();
//!
//! assert_eq!(value.fxp, 5.65234375);
//! assert_eq!(value.int, 1447);
//! assert_eq!(value.bin.to_string(), "010110100111");
//! assert_eq!(value.res, 1.0 / 256.0);
//! # Ok::<(), fxp_convert::FixedPointError>(())
//! ```
//!
//! Values outside the range are wrapped or saturated, and flagged:
//!
//! ```
//! use fxp_convert::{OverflowPolicy, convert};
//!
//! let policy: OverflowPolicy = "saturate".parse()?;
//! let value = convert(1000.0, true, 8, 4, policy)?.into_value().unwrap();
//! assert_eq!(value.fxp, 7.9375);
//! assert!(value.of_flag);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod converter;
pub mod encode;
pub mod error;
pub mod formats;
pub mod overflow;
pub mod quantize;
pub mod range;
pub mod requantize;
pub mod value;

pub use config::{FixedPointConfig, MAX_WORD_LENGTH};
pub use converter::{Conversion, Converter, Input, convert};
pub use error::{ConfigError, DomainError, FixedPointError, Result};
pub use overflow::{Adjusted, OverflowPolicy};
pub use quantize::{Quantized, quantize};
pub use range::RangeModel;
pub use requantize::PriorRecord;
pub use value::FixedPointValue;

pub use bit_pattern::BitPattern;

//! Overflow handling for values outside the representable range.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::quantize::round;
use crate::range::RangeModel;

/// What to do with a value outside `[min, max]`.
///
/// Parses from the tokens `"wrap"` and `"saturate"` (case-insensitive).
///
/// ```
/// use fxp_convert::OverflowPolicy;
///
/// assert_eq!("Saturate".parse::<OverflowPolicy>()?, OverflowPolicy::Saturate);
/// assert!("truncate".parse::<OverflowPolicy>().is_err());
/// # Ok::<(), fxp_convert::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Fold the value back into range modulo `2^IL`, like integer wrap-around.
    #[default]
    Wrap,
    /// Clamp the value to the violated bound.
    Saturate,
}

/// A value after the overflow policy has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjusted {
    pub value: f64,
    pub overflowed: bool,
}

impl OverflowPolicy {
    /// Maps `value` into the range. In-range values pass through untouched.
    ///
    /// The wrap result always quantizes into `[min, max]`: a fold landing in
    /// the last half step above `max` would round up to `min + span`, so it
    /// is placed on `min` directly.
    pub fn apply(self, value: f64, range: &RangeModel) -> Adjusted {
        if range.contains(value) {
            return Adjusted {
                value,
                overflowed: false,
            };
        }

        let adjusted = match self {
            OverflowPolicy::Saturate => value.clamp(range.min, range.max),
            OverflowPolicy::Wrap => {
                let folded = range.min + (value - range.min).rem_euclid(range.span);
                let scale = range.resolution.recip();
                if round(folded * scale) > round(range.max * scale) {
                    range.min
                } else {
                    folded
                }
            }
        };

        tracing::debug!(
            policy = %self,
            value,
            adjusted,
            min = range.min,
            max = range.max,
            "overflow policy engaged"
        );

        Adjusted {
            value: adjusted,
            overflowed: true,
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(OverflowPolicy::Wrap),
            "saturate" => Ok(OverflowPolicy::Saturate),
            _ => Err(ConfigError::UnknownPolicy {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            OverflowPolicy::Wrap => "wrap",
            OverflowPolicy::Saturate => "saturate",
        })
    }
}

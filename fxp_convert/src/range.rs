//! Representable range of a fixed-point format.

use crate::config::FixedPointConfig;

/// Bounds and step size derived from a [`FixedPointConfig`].
///
/// For a signed format `min = -2^(IL-1)` and `max = 2^(IL-1) - res`; for an
/// unsigned one `min = 0` and `max = 2^IL - res`.
///
/// # Examples
///
/// ```
/// use fxp_convert::{FixedPointConfig, RangeModel};
///
/// let range = RangeModel::new(&FixedPointConfig::signed(8, 4)?);
/// assert_eq!(range.min, -8.0);
/// assert_eq!(range.max, 7.9375);
/// assert_eq!(range.resolution, 0.0625);
/// # Ok::<(), fxp_convert::FixedPointError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeModel {
    /// `2^-FL`
    pub resolution: f64,
    pub min: f64,
    pub max: f64,
    /// `20·log10(max - 1)`. NaN when `max < 1`.
    pub dynamic_range_db: f64,
    /// `2^IL`, the period of the wrap-around.
    pub span: f64,
}

impl RangeModel {
    pub fn new(config: &FixedPointConfig) -> Self {
        let integer_length = config.integer_length() as i32;
        let resolution = 2f64.powi(-(config.fraction_length() as i32));
        let top = 2f64.powi(integer_length - config.is_signed() as i32);

        let min = if config.is_signed() { -top } else { 0.0 };
        let max = top - resolution;

        Self {
            resolution,
            min,
            max,
            dynamic_range_db: 20.0 * (max - 1.0).log10(),
            span: 2f64.powi(integer_length),
        }
    }

    /// Returns `true` if `min <= value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

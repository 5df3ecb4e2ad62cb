//! Common fixed-point formats.
//!
//! The naming convention is `QI_F` for a signed format with `I` integer bits
//! (sign included) and `F` fractional bits, and `UI_F` for unsigned.

use crate::config::FixedPointConfig;

/// 8.8 signed (s16.8).
///
/// Range: [-128.0, 127.99609375]
/// Resolution: 0.00390625
pub const Q8_8: FixedPointConfig = FixedPointConfig::preset(true, 16, 8);

/// 16.16 signed (s32.16).
///
/// Range: [-32768.0, 32767.999984741]
/// Resolution: ~0.000015259
pub const Q16_16: FixedPointConfig = FixedPointConfig::preset(true, 32, 16);

/// 4.12 signed (s16.12).
///
/// Range: [-8.0, 7.999755859]
/// Resolution: ~0.000244141
pub const Q4_12: FixedPointConfig = FixedPointConfig::preset(true, 16, 12);

/// 10.6 signed (s16.6).
///
/// Range: [-512.0, 511.984375]
/// Resolution: 0.015625
pub const Q10_6: FixedPointConfig = FixedPointConfig::preset(true, 16, 6);

/// 24.8 signed (s32.8).
///
/// Range: [-8388608.0, 8388607.99609375]
/// Resolution: 0.00390625
pub const Q24_8: FixedPointConfig = FixedPointConfig::preset(true, 32, 8);

/// 8.8 unsigned (u16.8).
///
/// Range: [0.0, 255.99609375]
/// Resolution: 0.00390625
pub const U8_8: FixedPointConfig = FixedPointConfig::preset(false, 16, 8);

/// Every preset, for iteration.
pub const ALL: [FixedPointConfig; 6] = [Q8_8, Q16_16, Q4_12, Q10_6, Q24_8, U8_8];

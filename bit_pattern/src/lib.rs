//! # bit_pattern
//!
//! A `no_std` compatible library for fixed-width, MSB-first bit words.
//!
//! ```rust
//! use bit_pattern::BitPattern;
//!
//! // -40 as an 8-bit two's-complement word
//! let word = BitPattern::from_unsigned(216, 8).unwrap();
//! assert_eq!(word.to_string(), "11011000");
//! assert_eq!(word.as_twos_complement(), -40);
//!
//! // Parse it back
//! let parsed: BitPattern = "11011000".parse().unwrap();
//! assert_eq!(parsed, word);
//! ```
//!
//! ## Fixed-point fields
//!
//! ```rust
//! use bit_pattern::BitPattern;
//!
//! // 4 integer bits, 6 fraction bits
//! let word = BitPattern::from_unsigned(362, 10).unwrap();
//! let (integer, fraction) = word.split_at_fraction(6).unwrap();
//! assert_eq!(integer, 5);
//! assert_eq!(fraction, 42);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitPatternError;

mod bit_ops;

pub mod word;
pub use word::{BitPattern, Bits, MAX_WIDTH};

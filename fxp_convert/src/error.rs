//! Error types for fixed-point conversion

use bit_pattern::{BitPattern, BitPatternError};
use thiserror::Error;

use crate::config::FixedPointConfig;

/// Errors for fixed-point conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FixedPointError {
    /// The input or format violates a precondition of the format.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// The request is contradictory or incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A quantized integer did not fit the word after overflow handling.
    #[error("Encoding error: {0}")]
    Encoding(#[from] BitPatternError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Word length {word_length} is outside 1..={max}")]
    WordLength { word_length: u32, max: u32 },

    #[error("Fraction length {fraction_length} exceeds word length {word_length}")]
    FractionExceedsWord {
        word_length: u32,
        fraction_length: u32,
    },

    #[error("Value {value} is negative but format {config} is unsigned")]
    NegativeUnsigned { value: f64, config: FixedPointConfig },

    #[error("Value {value} is not finite")]
    NonFinite { value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Record sign mode (signed = {record}) differs from requested (signed = {requested})")]
    SignMismatch { record: bool, requested: bool },

    #[error("Unsupported overflow policy {token:?}, expected \"wrap\" or \"saturate\"")]
    UnknownPolicy { token: String },

    #[error(
        "Record ({word_length}.{fraction_length}) carries none of float, int, bin or dec+frac"
    )]
    MissingFields {
        word_length: u32,
        fraction_length: u32,
    },

    #[error("Record word {bin} has {width} bits but the record says {word_length}")]
    WordWidthMismatch {
        bin: BitPattern,
        width: u32,
        word_length: u32,
    },

    #[error("Record int {int} does not fit the record's {word_length}-bit word")]
    IntOutOfRange { int: u64, word_length: u32 },
}

pub type Result<T> = std::result::Result<T, FixedPointError>;

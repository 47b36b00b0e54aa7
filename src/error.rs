//! Domain-specific error types for the calculator.
//!
//! Arithmetic and evaluation failures share one enum so callers can branch
//! on the kind; configuration failures live in their own type.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors produced by the arithmetic operations and the expression evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An operation was given input outside its domain.
    #[error("bad input: {0}")]
    InvalidArgument(String),

    /// A divisor in a division chain was zero.
    #[error("bad input: {dividend} / {divisor} (division by zero is undefined)")]
    DivisionByZero {
        /// The running quotient at the point of failure.
        dividend: f64,
        /// The offending divisor, `0` or `-0`.
        divisor: f64,
    },

    /// The expression does not have the supported `a <op> b` shape.
    #[error("could not parse expression: {0}")]
    Parse(String),

    /// A matched operand is not a valid floating-point number.
    #[error("invalid number '{input}': {source}")]
    NumberFormat {
        /// The operand text as matched.
        input: String,
        /// The underlying parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// A matched operand is too large to represent as an `f64`.
    #[error("invalid number '{input}': value out of range")]
    NumberOutOfRange {
        /// The operand text as matched.
        input: String,
    },

    /// The matched operator has no arithmetic operation behind it.
    #[error("unrecognized operator: {0}")]
    UnrecognizedOperator(String),
}

impl CalcError {
    /// Build an `InvalidArgument` error for an empty input sequence.
    pub(crate) fn empty_input(operation: &str) -> Self {
        Self::InvalidArgument(format!("{operation} requires at least one input"))
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}

//! Conversion error types.

use thiserror::Error;

/// Result type alias using `ConversionError`.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised while turning numbers and amounts into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No lexicon is configured for the requested locale tag.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// No currency rule is configured for the requested currency code.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Amount cannot be negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Amount is not a finite value or is out of the supported range.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConversionError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLocale(_) => "UNSUPPORTED_LOCALE",
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for ConversionError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

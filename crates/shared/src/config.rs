//! Application configuration management.

use rust_decimal::RoundingStrategy;
use serde::Deserialize;

use crate::error::ConversionResult;
use crate::types::{Currency, Locale};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Identifiers used when a request omits them.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Amount formatting policy.
    #[serde(default)]
    pub amount: AmountConfig,
}

/// Fallback locale and currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    /// Locale used when none is given.
    #[serde(default)]
    pub locale: Locale,
    /// Currency used when none is given.
    #[serde(default)]
    pub currency: Currency,
}

/// Amount formatting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AmountConfig {
    /// How amounts are rounded to whole hundredths.
    #[serde(default)]
    pub rounding: FractionRounding,
}

/// Rounding applied to the fractional part of an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionRounding {
    /// Midpoints round up (0.125 -> 0.13).
    #[default]
    HalfUp,
    /// Banker's rounding, midpoints round to even (0.125 -> 0.12).
    HalfEven,
}

impl FractionRounding {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `SLOWNIE__*` environment variables (e.g. `SLOWNIE__DEFAULTS__LOCALE`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> ConversionResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SLOWNIE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

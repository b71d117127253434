//! Converter service for numbers and amounts in words.
//!
//! This module provides the main service interface, combining the lexicon of
//! a locale with the word rule of a currency and the configured rounding.

use rust_decimal::Decimal;
use slownie_shared::{
    AppConfig, ConversionError, ConversionResult, Currency, FractionRounding, Locale, Money,
};
use tracing::{debug, warn};

use super::amount::{compose, decimal_from_f64, split_amount};
use super::number::render_number;
use crate::currency::rule_for;
use crate::lexicon::lexicon_for;

/// Converts integers and monetary amounts into words.
///
/// Holds only the defaults and rounding policy; all word data is static, so
/// the service is cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    locale: Locale,
    currency: Currency,
    rounding: FractionRounding,
}

impl Converter {
    /// Creates a converter from application configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            locale: config.defaults.locale,
            currency: config.defaults.currency,
            rounding: config.amount.rounding,
        }
    }

    /// Locale used when a request names none.
    #[must_use]
    pub const fn default_locale(&self) -> Locale {
        self.locale
    }

    /// Currency used when a request names none.
    #[must_use]
    pub const fn default_currency(&self) -> Currency {
        self.currency
    }

    /// Spells a non-negative integer.
    ///
    /// # Example
    ///
    /// ```
    /// use slownie_core::Converter;
    /// use slownie_shared::Locale;
    ///
    /// let converter = Converter::default();
    /// assert_eq!(converter.number_to_words(123, Locale::Polish), "sto dwadzieścia trzy");
    /// assert_eq!(converter.number_to_words(21, Locale::German), "einundzwanzig");
    /// ```
    #[must_use]
    pub fn number_to_words(&self, number: u128, locale: Locale) -> String {
        debug!(%locale, number, "Converting number to words");
        render_number(number, lexicon_for(locale))
    }

    /// Returns the currency word agreeing with an integer amount.
    #[must_use]
    pub fn currency_form(&self, amount: u128, currency: Currency) -> &'static str {
        rule_for(currency).form(amount)
    }

    /// Spells a monetary amount as `"<words> <currency>, <NN>/100"`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use slownie_core::Converter;
    /// use slownie_shared::{Currency, Locale};
    ///
    /// let converter = Converter::default();
    /// let words = converter
    ///     .amount_in_words(dec!(43.75), Locale::Polish, Currency::Pln)
    ///     .unwrap();
    /// assert_eq!(words, "czterdzieści trzy złote, 75/100");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` for amounts below zero.
    pub fn amount_in_words(
        &self,
        amount: Decimal,
        locale: Locale,
        currency: Currency,
    ) -> ConversionResult<String> {
        self.money_in_words(&Money::new(amount, currency), locale)
    }

    /// Spells a [`Money`] value in the given locale.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` for amounts below zero.
    pub fn money_in_words(&self, money: &Money, locale: Locale) -> ConversionResult<String> {
        let Money { amount, currency } = *money;
        debug!(%locale, %currency, %amount, "Converting amount to words");

        if money.is_negative() {
            warn!(%amount, "Rejected negative amount");
            return Err(ConversionError::NegativeAmount);
        }

        let split = split_amount(amount, self.rounding)?;
        if split.carried {
            debug!(%amount, whole = split.whole, "Fraction rounded up into whole units");
        }

        let integer_words = render_number(split.whole, lexicon_for(locale));
        let currency_word = self.currency_form(split.whole, currency);
        Ok(compose(&integer_words, currency_word, split.cents))
    }

    /// Spells a float amount, rejecting non-finite values.
    pub fn amount_f64_in_words(
        &self,
        amount: f64,
        locale: Locale,
        currency: Currency,
    ) -> ConversionResult<String> {
        self.amount_in_words(decimal_from_f64(amount)?, locale, currency)
    }

    /// Spells an integer using a locale tag, falling back to the default locale.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLocale` if the tag names no configured locale.
    pub fn number_to_words_str(
        &self,
        number: u128,
        locale: Option<&str>,
    ) -> ConversionResult<String> {
        let locale = self.resolve_locale(locale)?;
        Ok(self.number_to_words(number, locale))
    }

    /// Spells an amount using locale and currency tags, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLocale` / `UnsupportedCurrency` for unknown tags
    /// and `NegativeAmount` for amounts below zero.
    pub fn amount_in_words_str(
        &self,
        amount: Decimal,
        locale: Option<&str>,
        currency: Option<&str>,
    ) -> ConversionResult<String> {
        let locale = self.resolve_locale(locale)?;
        let currency = self.resolve_currency(currency)?;
        self.amount_in_words(amount, locale, currency)
    }

    /// Returns the currency word for a currency code.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCurrency` if the code names no configured currency.
    pub fn currency_form_str(&self, amount: u128, currency: &str) -> ConversionResult<&'static str> {
        let currency = self.resolve_currency(Some(currency))?;
        Ok(self.currency_form(amount, currency))
    }

    fn resolve_locale(&self, tag: Option<&str>) -> ConversionResult<Locale> {
        let Some(tag) = tag else {
            return Ok(self.locale);
        };
        tag.parse().inspect_err(|_| warn!(tag, "Rejected unsupported locale"))
    }

    fn resolve_currency(&self, code: Option<&str>) -> ConversionResult<Currency> {
        let Some(code) = code else {
            return Ok(self.currency);
        };
        code.parse().inspect_err(|_| warn!(code, "Rejected unsupported currency"))
    }
}

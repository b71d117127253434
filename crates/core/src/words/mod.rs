//! Numbers and monetary amounts in words.
//!
//! The free functions here use the built-in configuration. The typed ones
//! take a [`Locale`] / [`Currency`]; the `*_str` ones take tags (`"pl-PL"`,
//! `"USD"`) that default to Polish and PLN when omitted. Build a
//! [`Converter`] from an `AppConfig` to change defaults or rounding.

pub mod amount;
pub mod number;
pub mod service;

#[cfg(test)]
mod props;

use rust_decimal::Decimal;
use slownie_shared::{ConversionResult, Currency, Locale};

pub use amount::SplitAmount;
pub use number::ZERO_WORD;
pub use service::Converter;

/// Spells a non-negative integer.
#[must_use]
pub fn number_to_words(number: u128, locale: Locale) -> String {
    Converter::default().number_to_words(number, locale)
}

/// Returns the currency word agreeing with an integer amount.
#[must_use]
pub fn currency_form(amount: u128, currency: Currency) -> &'static str {
    Converter::default().currency_form(amount, currency)
}

/// Spells a monetary amount as `"<words> <currency>, <NN>/100"`.
///
/// # Errors
///
/// Returns `NegativeAmount` for amounts below zero.
pub fn amount_in_words(
    amount: Decimal,
    locale: Locale,
    currency: Currency,
) -> ConversionResult<String> {
    Converter::default().amount_in_words(amount, locale, currency)
}

/// Spells a non-negative integer; `locale` defaults to `pl-PL`.
///
/// # Errors
///
/// Returns `UnsupportedLocale` if the tag names no configured locale.
pub fn number_to_words_str(number: u128, locale: Option<&str>) -> ConversionResult<String> {
    Converter::default().number_to_words_str(number, locale)
}

/// Spells a monetary amount; `locale` defaults to `pl-PL`, `currency` to `PLN`.
///
/// # Errors
///
/// Returns `UnsupportedLocale`, `UnsupportedCurrency` or `NegativeAmount`.
pub fn amount_in_words_str(
    amount: Decimal,
    locale: Option<&str>,
    currency: Option<&str>,
) -> ConversionResult<String> {
    Converter::default().amount_in_words_str(amount, locale, currency)
}

/// Returns the currency word for a currency code.
///
/// # Errors
///
/// Returns `UnsupportedCurrency` if the code names no configured currency.
pub fn currency_form_str(amount: u128, currency: &str) -> ConversionResult<&'static str> {
    Converter::default().currency_form_str(amount, currency)
}

//! Currency names and their numeral agreement rules.

pub mod rules;

#[cfg(test)]
mod props;

pub use rules::{CurrencyRule, EUR, PLN, USD, rule_for};

//! Property-based tests for number and amount rendering.

use proptest::prelude::*;
use rust_decimal::Decimal;
use slownie_shared::{Currency, FractionRounding, Locale};

use super::amount::split_amount;
use super::Converter;

/// Strategy to pick one of the supported locales.
fn any_locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

/// Strategy to pick one of the supported currencies.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to generate amounts with up to four decimal places (0 to 10^12).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000_000_000).prop_map(|units| Decimal::new(units, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// *For any* number and locale, the words SHALL be trimmed and single-spaced.
    #[test]
    fn prop_words_are_single_spaced(
        number in any::<u128>(),
        locale in any_locale(),
    ) {
        let words = Converter::default().number_to_words(number, locale);
        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "), "double space in {:?}", words);
    }

    /// *For any* number below one thousand, no magnitude word SHALL appear.
    #[test]
    fn prop_small_numbers_have_no_magnitude(
        number in 1u128..1000,
    ) {
        let words = Converter::default().number_to_words(number, Locale::English);
        prop_assert!(!words.contains("thousand"));
    }

    /// *For any* amount, the composed string SHALL end with a two-digit fraction over 100.
    #[test]
    fn prop_amount_has_two_digit_fraction(
        amount in any_amount(),
        locale in any_locale(),
        currency in any_currency(),
    ) {
        let words = Converter::default().amount_in_words(amount, locale, currency).unwrap();
        let (head, fraction) = words.rsplit_once(", ").unwrap();
        prop_assert!(!head.is_empty());
        prop_assert_eq!(fraction.len(), "00/100".len());
        prop_assert!(fraction.ends_with("/100"));
        prop_assert!(fraction[..2].chars().all(|c| c.is_ascii_digit()));
        prop_assert!(!words.contains("  "));
    }

    /// *For any* amount, whole units and hundredths SHALL add back up to the rounded amount.
    #[test]
    fn prop_split_reassembles_rounded_amount(
        amount in any_amount(),
    ) {
        let split = split_amount(amount, FractionRounding::HalfUp).unwrap();
        prop_assert!(split.cents < 100);
        let reassembled = Decimal::from(u64::try_from(split.whole).unwrap())
            + Decimal::new(i64::from(split.cents), 2);
        prop_assert_eq!(
            reassembled,
            amount.round_dp_with_strategy(2, FractionRounding::HalfUp.strategy())
        );
    }
}

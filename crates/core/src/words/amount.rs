//! Monetary amount splitting and composition.
//!
//! The amount is rounded to whole hundredths *before* it is split, so a
//! fraction that rounds up to a full unit carries into the integer part
//! (1.999 -> 2 and 00/100) and the fraction is always two digits.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use slownie_shared::{ConversionError, ConversionResult, FractionRounding};

/// An amount split into whole units and hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitAmount {
    /// Whole units after rounding.
    pub whole: u128,
    /// Hundredths, 0..=99.
    pub cents: u8,
    /// True when rounding the fraction added one to the whole units.
    pub carried: bool,
}

/// Splits a non-negative amount into whole units and hundredths.
///
/// Callers reject negative amounts first (see `Money::is_negative`).
///
/// # Errors
///
/// Returns `InvalidAmount` if the amount is negative or its whole part does
/// not fit the integer converter.
pub fn split_amount(amount: Decimal, rounding: FractionRounding) -> ConversionResult<SplitAmount> {
    if amount.is_sign_negative() {
        if !amount.is_zero() {
            return Err(ConversionError::InvalidAmount(amount.to_string()));
        }
        return split_amount(Decimal::ZERO, rounding);
    }

    let rounded = amount.round_dp_with_strategy(2, rounding.strategy());
    let whole = rounded.trunc();
    let cents = ((rounded - whole) * Decimal::ONE_HUNDRED)
        .to_u8()
        .ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))?;

    Ok(SplitAmount {
        whole: whole
            .to_u128()
            .ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))?,
        cents,
        carried: whole > amount.trunc(),
    })
}

/// Converts a float amount to a `Decimal`.
///
/// # Errors
///
/// Returns `InvalidAmount` for NaN, infinities and values outside the
/// `Decimal` range.
pub fn decimal_from_f64(amount: f64) -> ConversionResult<Decimal> {
    Decimal::try_from(amount).map_err(|_| ConversionError::InvalidAmount(amount.to_string()))
}

/// Formats `"<integer words> <currency word>, <NN>/100"`.
#[must_use]
pub fn compose(integer_words: &str, currency_word: &str, cents: u8) -> String {
    format!("{integer_words} {currency_word}, {cents:02}/100")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn split(amount: Decimal) -> SplitAmount {
        split_amount(amount, FractionRounding::HalfUp).unwrap()
    }

    #[rstest]
    #[case(dec!(0), 0, 0)]
    #[case(dec!(1.0), 1, 0)]
    #[case(dec!(43.75), 43, 75)]
    #[case(dec!(100.5), 100, 50)]
    #[case(dec!(1000.99), 1000, 99)]
    #[case(dec!(0.05), 0, 5)]
    #[case(dec!(2.004), 2, 0)]
    #[case(dec!(2.005), 2, 1)]
    fn test_split_amount(#[case] amount: Decimal, #[case] whole: u128, #[case] cents: u8) {
        let split = split(amount);
        assert_eq!(split.whole, whole);
        assert_eq!(split.cents, cents);
        assert!(!split.carried);
    }

    #[test]
    fn test_fraction_carries_into_whole_units() {
        assert_eq!(
            split(dec!(1.999)),
            SplitAmount {
                whole: 2,
                cents: 0,
                carried: true,
            }
        );
        assert_eq!(split(dec!(0.995)).whole, 1);
    }

    #[test]
    fn test_half_even_rounding() {
        let split = split_amount(dec!(0.125), FractionRounding::HalfEven).unwrap();
        assert_eq!(split.cents, 12);

        let split = split_amount(dec!(0.125), FractionRounding::HalfUp).unwrap();
        assert_eq!(split.cents, 13);
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        assert_eq!(
            split_amount(dec!(-0.01), FractionRounding::HalfUp),
            Err(ConversionError::InvalidAmount("-0.01".into()))
        );
        assert_eq!(split(-Decimal::ZERO).whole, 0);
    }

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(decimal_from_f64(43.75).unwrap(), dec!(43.75));
        assert!(matches!(
            decimal_from_f64(f64::NAN),
            Err(ConversionError::InvalidAmount(_))
        ));
        assert!(matches!(
            decimal_from_f64(f64::INFINITY),
            Err(ConversionError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_compose_pads_fraction() {
        assert_eq!(compose("sto", "złotych", 5), "sto złotych, 05/100");
        assert_eq!(compose("one", "dollar", 0), "one dollar, 00/100");
    }
}

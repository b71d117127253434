//! Property-based tests for currency word rules.

use proptest::prelude::*;
use slownie_shared::Currency;

use super::rules::{PLN, rule_for};

/// Strategy to pick one of the supported currencies.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// *For any* amount and currency, the selected form index SHALL be in range.
    #[test]
    fn prop_form_index_in_range(
        amount in any::<u128>(),
        currency in any_currency(),
    ) {
        let rule = rule_for(currency);
        prop_assert!(rule.form_index(amount) < rule.forms.len());
        prop_assert!(!rule.form(amount).is_empty());
    }

    /// *For any* amount, the złoty form SHALL depend only on its last two digits.
    #[test]
    fn prop_pln_depends_on_last_two_digits(
        hundreds in 1u128..1_000_000_000,
        last_two in 0u128..100,
    ) {
        let amount = hundreds * 100 + last_two;
        let expected = if last_two == 1 { PLN.form(101) } else { PLN.form(last_two) };
        prop_assert_eq!(PLN.form(amount), expected);
    }
}

//! Per-currency word forms.
//!
//! The currency word depends only on the integer part of an amount, never on
//! the locale the number itself is spelled in.

use slownie_shared::Currency;

/// Word forms of a currency and the rule picking one for an amount.
#[derive(Debug)]
pub struct CurrencyRule {
    /// Currency the forms belong to.
    pub currency: Currency,
    /// Word forms, indexed by [`CurrencyRule::form_index`].
    pub forms: &'static [&'static str],
    select: fn(u128) -> usize,
}

impl CurrencyRule {
    /// Index into [`CurrencyRule::forms`] agreeing with `amount`.
    #[must_use]
    pub fn form_index(&self, amount: u128) -> usize {
        (self.select)(amount)
    }

    /// Currency word agreeing with `amount`.
    #[must_use]
    pub fn form(&self, amount: u128) -> &'static str {
        self.forms
            .get(self.form_index(amount))
            .copied()
            .unwrap_or_default()
    }
}

/// Polish złoty: "złoty", "złote" after 2-4 endings, "złotych" otherwise
/// (teens always take "złotych").
fn pln_form(amount: u128) -> usize {
    if amount == 1 {
        return 0;
    }
    let last_two = amount % 100;
    let last = amount % 10;
    if (10..20).contains(&last_two) {
        2
    } else if (2..=4).contains(&last) {
        1
    } else {
        2
    }
}

fn usd_form(amount: u128) -> usize {
    usize::from(amount != 1)
}

fn eur_form(_amount: u128) -> usize {
    0
}

/// Polish złoty.
pub static PLN: CurrencyRule = CurrencyRule {
    currency: Currency::Pln,
    forms: &["złoty", "złote", "złotych"],
    select: pln_form,
};

/// US dollar.
pub static USD: CurrencyRule = CurrencyRule {
    currency: Currency::Usd,
    forms: &["dollar", "dollars"],
    select: usd_form,
};

/// Euro, invariant.
pub static EUR: CurrencyRule = CurrencyRule {
    currency: Currency::Eur,
    forms: &["Euro"],
    select: eur_form,
};

/// Returns the word rule for a currency.
#[must_use]
pub fn rule_for(currency: Currency) -> &'static CurrencyRule {
    match currency {
        Currency::Pln => &PLN,
        Currency::Usd => &USD,
        Currency::Eur => &EUR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "złotych")]
    #[case(1, "złoty")]
    #[case(2, "złote")]
    #[case(4, "złote")]
    #[case(5, "złotych")]
    #[case(11, "złotych")]
    #[case(12, "złotych")]
    #[case(14, "złotych")]
    #[case(21, "złotych")]
    #[case(22, "złote")]
    #[case(43, "złote")]
    #[case(101, "złotych")]
    #[case(112, "złotych")]
    #[case(1002, "złote")]
    #[case(1_000_000, "złotych")]
    fn test_pln_forms(#[case] amount: u128, #[case] expected: &str) {
        assert_eq!(PLN.form(amount), expected);
    }

    #[rstest]
    #[case(0, "dollars")]
    #[case(1, "dollar")]
    #[case(2, "dollars")]
    #[case(21, "dollars")]
    #[case(101, "dollars")]
    fn test_usd_forms(#[case] amount: u128, #[case] expected: &str) {
        assert_eq!(USD.form(amount), expected);
    }

    #[test]
    fn test_eur_is_invariant() {
        for amount in [0, 1, 2, 5, 21, 1000, u128::MAX] {
            assert_eq!(EUR.form(amount), "Euro");
        }
    }

    #[test]
    fn test_rule_for_matches_currency() {
        for currency in Currency::ALL {
            assert_eq!(rule_for(currency).currency, currency);
        }
    }
}

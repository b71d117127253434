//! Per-locale word tables and grammatical agreement rules.
//!
//! Each supported locale has one immutable [`Lexicon`] stored as a `static`.
//! Locale-specific behaviour (German compound tens, Polish four-way plural,
//! English invariant magnitudes) lives behind the [`Grammar`] trait, so the
//! converter never branches on the locale itself.

mod english;
mod german;
mod polish;

pub use english::{ENGLISH, EnglishGrammar};
pub use german::{GERMAN, GermanGrammar};
pub use polish::{POLISH, PolishGrammar};

use slownie_shared::Locale;

/// Grammatical agreement strategy for a locale.
pub trait Grammar: Sync {
    /// Renders a tens digit and a ones digit (both non-teen) as one word,
    /// or `None` to fall back to `tens` followed by `ones` as separate words.
    fn compound_tens_and_ones(&self, _lexicon: &Lexicon, _tens: usize, _ones: usize) -> Option<String> {
        None
    }

    /// Picks which grammatical form of a magnitude name agrees with `group`.
    ///
    /// `group` is the non-zero value (1..=999) of the three-digit group the
    /// magnitude qualifies and `form_count` the number of forms defined.
    fn magnitude_form(&self, group: u16, form_count: usize) -> usize;
}

/// Immutable word tables for one locale.
pub struct Lexicon {
    /// Locale these tables spell.
    pub locale: Locale,
    /// Digits 0-9; index 0 is empty.
    pub ones: [&'static str; 10],
    /// Values 10-19.
    pub teens: [&'static str; 10],
    /// Multiples of ten; index 0 is empty.
    pub tens: [&'static str; 10],
    /// Multiples of one hundred; index 0 is empty.
    pub hundreds: [&'static str; 10],
    /// Magnitude names by power of one thousand, each with its grammatical forms.
    /// Power 0 (units) has no forms.
    pub magnitudes: &'static [&'static [&'static str]],
    /// Agreement rules.
    pub grammar: &'static dyn Grammar,
}

impl Lexicon {
    /// Highest power of one thousand with a magnitude name.
    #[must_use]
    pub fn max_power(&self) -> usize {
        self.magnitudes.len().saturating_sub(1)
    }

    /// Returns the magnitude word qualifying a three-digit `group` at `power`.
    ///
    /// Units (power 0), zero groups and powers beyond the table yield `""`.
    /// If the grammar selects a form the table lacks, form 1 and then form 0
    /// are used instead.
    #[must_use]
    pub fn magnitude_word(&self, power: usize, group: u16) -> &'static str {
        if power == 0 || group == 0 {
            return "";
        }
        let Some(forms) = self.magnitudes.get(power) else {
            return "";
        };

        let index = self.grammar.magnitude_form(group, forms.len());
        forms
            .get(index)
            .or_else(|| forms.get(1))
            .or_else(|| forms.first())
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("locale", &self.locale)
            .field("max_power", &self.max_power())
            .finish_non_exhaustive()
    }
}

/// Returns the lexicon for a locale.
#[must_use]
pub fn lexicon_for(locale: Locale) -> &'static Lexicon {
    match locale {
        Locale::Polish => &POLISH,
        Locale::English => &ENGLISH,
        Locale::German => &GERMAN,
    }
}

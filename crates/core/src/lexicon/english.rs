//! US English lexicon (short scale).

use slownie_shared::Locale;

use super::{Grammar, Lexicon};

/// English magnitudes never inflect ("two thousand").
#[derive(Debug, Clone, Copy)]
pub struct EnglishGrammar;

impl Grammar for EnglishGrammar {
    fn magnitude_form(&self, _group: u16, _form_count: usize) -> usize {
        0
    }
}

/// English word tables.
pub static ENGLISH: Lexicon = Lexicon {
    locale: Locale::English,
    ones: [
        "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    teens: [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundreds: [
        "",
        "one hundred",
        "two hundred",
        "three hundred",
        "four hundred",
        "five hundred",
        "six hundred",
        "seven hundred",
        "eight hundred",
        "nine hundred",
    ],
    magnitudes: &[
        &[],
        &["thousand"],
        &["million"],
        &["billion"],
        &["trillion"],
        &["quadrillion"],
        &["quintillion"],
        &["sextillion"],
        &["septillion"],
        &["octillion"],
        &["nonillion"],
        &["decillion"],
        &["undecillion"],
    ],
    grammar: &EnglishGrammar,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitudes_never_pluralize() {
        for group in [1, 2, 5, 21, 999] {
            assert_eq!(ENGLISH.magnitude_word(1, group), "thousand");
            assert_eq!(ENGLISH.magnitude_word(2, group), "million");
        }
    }

    #[test]
    fn test_no_compounding() {
        assert_eq!(EnglishGrammar.compound_tens_and_ones(&ENGLISH, 2, 1), None);
    }
}

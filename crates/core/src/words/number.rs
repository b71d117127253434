//! Integer-to-words rendering.

use crate::lexicon::Lexicon;

/// Word for zero, shared by every locale.
pub const ZERO_WORD: &str = "zero";

/// Space-separated word sequence that ignores empty words.
#[derive(Debug, Default)]
struct Phrase(String);

impl Phrase {
    fn push(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(word);
    }
}

/// Spells `number` with the given lexicon.
///
/// The number is split into three-digit groups; every non-zero group is
/// spelled and followed by its magnitude name in the form the locale's
/// grammar picks for that group.
#[must_use]
pub fn render_number(number: u128, lexicon: &Lexicon) -> String {
    if number == 0 {
        return ZERO_WORD.to_string();
    }

    let mut phrase = Phrase::default();
    for (power, group) in split_groups(number).into_iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        push_group(&mut phrase, group, lexicon);
        phrase.push(lexicon.magnitude_word(power, group));
    }
    phrase.0
}

/// Three-digit groups, least significant first.
fn split_groups(mut number: u128) -> Vec<u16> {
    let mut groups = Vec::with_capacity(13);
    while number > 0 {
        #[allow(clippy::cast_possible_truncation)]
        let group = (number % 1000) as u16;
        groups.push(group);
        number /= 1000;
    }
    groups
}

fn push_group(phrase: &mut Phrase, group: u16, lexicon: &Lexicon) {
    let hundreds = usize::from(group / 100);
    let rest = usize::from(group % 100);
    phrase.push(lexicon.hundreds[hundreds]);

    if (10..20).contains(&rest) {
        phrase.push(lexicon.teens[rest - 10]);
        return;
    }

    let (tens, ones) = (rest / 10, rest % 10);
    match lexicon.grammar.compound_tens_and_ones(lexicon, tens, ones) {
        Some(word) => phrase.push(&word),
        None => {
            phrase.push(lexicon.tens[tens]);
            phrase.push(lexicon.ones[ones]);
        }
    }
}

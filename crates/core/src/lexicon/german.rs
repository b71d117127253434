//! German lexicon (long scale) with ones-und-tens compounds.

use slownie_shared::Locale;

use super::{Grammar, Lexicon};

/// Bound form of "eins" inside a compound ("einundzwanzig").
const BOUND_ONE: &str = "ein";
const CONNECTIVE: &str = "und";

/// German agreement: reversed ones/tens compounds and singular/plural magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct GermanGrammar;

impl Grammar for GermanGrammar {
    fn compound_tens_and_ones(&self, lexicon: &Lexicon, tens: usize, ones: usize) -> Option<String> {
        if tens == 0 || ones == 0 {
            return None;
        }
        let ones_word = if ones == 1 { BOUND_ONE } else { lexicon.ones[ones] };
        Some(format!("{ones_word}{CONNECTIVE}{}", lexicon.tens[tens]))
    }

    fn magnitude_form(&self, group: u16, form_count: usize) -> usize {
        // "tausend" has a single invariant form.
        if form_count == 1 || group == 1 { 0 } else { 1 }
    }
}

/// German word tables.
pub static GERMAN: Lexicon = Lexicon {
    locale: Locale::German,
    ones: [
        "", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
    ],
    teens: [
        "zehn",
        "elf",
        "zwölf",
        "dreizehn",
        "vierzehn",
        "fünfzehn",
        "sechzehn",
        "siebzehn",
        "achtzehn",
        "neunzehn",
    ],
    tens: [
        "", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
        "neunzig",
    ],
    hundreds: [
        "",
        "einhundert",
        "zweihundert",
        "dreihundert",
        "vierhundert",
        "fünfhundert",
        "sechshundert",
        "siebenhundert",
        "achthundert",
        "neunhundert",
    ],
    magnitudes: &[
        &[],
        &["tausend"],
        &["Million", "Millionen"],
        &["Milliarde", "Milliarden"],
        &["Billion", "Billionen"],
        &["Billiarde", "Billiarden"],
        &["Trillion", "Trillionen"],
        &["Trilliarde", "Trilliarden"],
        &["Quadrillion", "Quadrillionen"],
        &["Quadrilliarde", "Quadrilliarden"],
        &["Quintillion", "Quintillionen"],
        &["Quintilliarde", "Quintilliarden"],
        &["Sextillion", "Sextillionen"],
    ],
    grammar: &GermanGrammar,
};

//! Polish lexicon (long scale) with four-way numeral agreement.

use slownie_shared::Locale;

use super::{Grammar, Lexicon};

/// Singular, used for a group of exactly one ("jeden tysiąc").
const SINGULAR: usize = 1;
/// Nominative plural after 2-4, 22-24, ... ("dwa tysiące").
const PAUCAL: usize = 2;
/// Genitive plural for everything else ("pięć tysięcy", "dwanaście tysięcy").
const GENITIVE_PLURAL: usize = 3;

/// Polish agreement: singular, paucal (2-4 endings outside 11-20) and genitive plural.
#[derive(Debug, Clone, Copy)]
pub struct PolishGrammar;

impl Grammar for PolishGrammar {
    fn magnitude_form(&self, group: u16, _form_count: usize) -> usize {
        let last_digit = group % 10;
        if group == 1 {
            SINGULAR
        } else if (2..=4).contains(&last_digit) && (group < 10 || group > 20) {
            PAUCAL
        } else {
            GENITIVE_PLURAL
        }
    }
}

/// Polish word tables. Form 0 of each magnitude repeats the singular.
pub static POLISH: Lexicon = Lexicon {
    locale: Locale::Polish,
    ones: [
        "", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
    ],
    teens: [
        "dziesięć",
        "jedenaście",
        "dwanaście",
        "trzynaście",
        "czternaście",
        "piętnaście",
        "szesnaście",
        "siedemnaście",
        "osiemnaście",
        "dziewiętnaście",
    ],
    tens: [
        "",
        "dziesięć",
        "dwadzieścia",
        "trzydzieści",
        "czterdzieści",
        "pięćdziesiąt",
        "sześćdziesiąt",
        "siedemdziesiąt",
        "osiemdziesiąt",
        "dziewięćdziesiąt",
    ],
    hundreds: [
        "",
        "sto",
        "dwieście",
        "trzysta",
        "czterysta",
        "pięćset",
        "sześćset",
        "siedemset",
        "osiemset",
        "dziewięćset",
    ],
    magnitudes: &[
        &[],
        &["tysiąc", "tysiąc", "tysiące", "tysięcy"],
        &["milion", "milion", "miliony", "milionów"],
        &["miliard", "miliard", "miliardy", "miliardów"],
        &["bilion", "bilion", "biliony", "bilionów"],
        &["biliard", "biliard", "biliardy", "biliardów"],
        &["trylion", "trylion", "tryliony", "trylionów"],
        &["tryliard", "tryliard", "tryliardy", "tryliardów"],
        &["kwadrylion", "kwadrylion", "kwadryliony", "kwadrylionów"],
        &["kwadryliard", "kwadryliard", "kwadryliardy", "kwadryliardów"],
        &["kwintylion", "kwintylion", "kwintyliony", "kwintylionów"],
        &["kwintyliard", "kwintyliard", "kwintyliardy", "kwintyliardów"],
        &["sekstylion", "sekstylion", "sekstyliony", "sekstylionów"],
    ],
    grammar: &PolishGrammar,
};

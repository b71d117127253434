//! Number and amount to words conversion for Slownie.
//!
//! This crate contains pure conversion logic with ZERO I/O dependencies.
//! All word tables are static data; every function is a pure function of
//! its inputs.
//!
//! # Modules
//!
//! - `lexicon` - Per-locale word tables and grammatical agreement
//! - `currency` - Currency names and their plural rules
//! - `words` - Integer and amount rendering, public entry points

pub mod currency;
pub mod lexicon;
pub mod words;

pub use words::{
    Converter, amount_in_words, amount_in_words_str, currency_form, currency_form_str,
    number_to_words, number_to_words_str,
};

// src/generators/charsets.rs
use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::models::{RandomOptions, SymbolSet, SymbolSetInfo};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";

/// Characters that are easily confused with one another when displayed.
pub const AMBIGUOUS: &str = "il1Lo0O";

/// Punctuation recognised by the complexity check and the strength scan.
///
/// This is fixed and independent of the configured symbol set.
pub const COMPLEXITY_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?~`";

const BASIC_SYMBOLS: &str = "!@#$%&*+-=?";
const SAFE_SYMBOLS: &str = "!@#$%&*+-=?.";
const EXTENDED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
const BRACKET_SYMBOLS: &str = "()[]{}";
const PUNCTUATION_SYMBOLS: &str = "!@#$%&*+-=?:;,.";
const MATH_SYMBOLS: &str = "+-=*%^";

/// The built-in characters of a symbol set. `Custom` has none of its own.
pub fn symbols_for(set: SymbolSet) -> &'static str {
    match set {
        SymbolSet::Basic => BASIC_SYMBOLS,
        SymbolSet::Safe => SAFE_SYMBOLS,
        SymbolSet::Extended => EXTENDED_SYMBOLS,
        SymbolSet::Brackets => BRACKET_SYMBOLS,
        SymbolSet::Punctuation => PUNCTUATION_SYMBOLS,
        SymbolSet::Math => MATH_SYMBOLS,
        SymbolSet::Custom => "",
    }
}

lazy_static! {
    static ref SYMBOL_SET_CATALOG: BTreeMap<SymbolSet, SymbolSetInfo> = {
        let entries = [
            (SymbolSet::Basic, "Basic", "Common safe symbols"),
            (SymbolSet::Safe, "Safe", "Very safe symbols"),
            (SymbolSet::Extended, "Extended", "All common symbols"),
            (SymbolSet::Brackets, "Brackets", "Bracket symbols only"),
            (SymbolSet::Punctuation, "Punctuation", "Punctuation symbols"),
            (SymbolSet::Math, "Math", "Mathematical symbols"),
            (SymbolSet::Custom, "Custom", "Your own symbols"),
        ];

        entries
            .into_iter()
            .map(|(set, name, description)| {
                (set, SymbolSetInfo { name, symbols: symbols_for(set), description })
            })
            .collect()
    };
}

pub fn symbol_set_catalog() -> &'static BTreeMap<SymbolSet, SymbolSetInfo> {
    &SYMBOL_SET_CATALOG
}

/// Assemble the draw alphabet for a random password.
///
/// Classes are appended in a fixed order (uppercase, lowercase, digits,
/// symbols). Custom symbols are taken verbatim, duplicates included. The
/// ambiguous filter runs over the assembled alphabet, after every class has
/// been appended.
pub fn build_alphabet(options: &RandomOptions) -> Vec<char> {
    let mut alphabet: Vec<char> = Vec::new();

    if options.include_uppercase {
        alphabet.extend(UPPERCASE.chars());
    }
    if options.include_lowercase {
        alphabet.extend(LOWERCASE.chars());
    }
    if options.include_numbers {
        alphabet.extend(NUMBERS.chars());
    }
    if options.include_symbols {
        match options.symbol_set {
            SymbolSet::Custom => alphabet.extend(options.custom_symbols.chars()),
            set => alphabet.extend(symbols_for(set).chars()),
        }
    }

    if options.exclude_ambiguous {
        alphabet.retain(|c| !AMBIGUOUS.contains(*c));
    }

    alphabet
}

pub fn is_complexity_symbol(c: char) -> bool {
    COMPLEXITY_SYMBOLS.contains(c)
}

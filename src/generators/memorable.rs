use log::{debug, warn};

use crate::crypto::{modulo_index, OsRandom, RandomSource};
use crate::generators::vocabulary::{ADJECTIVES, SEPARATORS, WORDS};
use crate::generators::{PasswordScheme, Result};
use crate::models::{
    MemorableOptions, PassphrasePattern, SeparatorType, StrengthAssessment, StrengthDetails,
};

const MAX_LENGTH_ATTEMPTS: usize = 50;

// Assumed vocabulary size for entropy estimation
const ASSUMED_VOCABULARY: f64 = 1000.0;
const NUMBER_SUFFIX_BITS: f64 = 10.0;
const MEMORABLE_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Builds passwords out of whole words with random casing, a separator and
/// an optional numeric suffix.
///
/// Every pick here is a plain modulo reduction of one raw draw.
pub struct MemorablePasswordGenerator<R = OsRandom> {
    source: R,
}

impl MemorablePasswordGenerator<OsRandom> {
    pub fn new() -> Self {
        MemorablePasswordGenerator { source: OsRandom }
    }
}

impl Default for MemorablePasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> MemorablePasswordGenerator<R> {
    pub fn with_source(source: R) -> Self {
        MemorablePasswordGenerator { source }
    }

    /// Compose a password, retrying until its length falls inside
    /// `[min_length, max_length]`. When the band cannot be hit the last
    /// attempt is returned anyway.
    pub fn generate_password(&mut self, options: &MemorableOptions) -> Result<String> {
        let mut password = String::new();

        for attempt in 0..MAX_LENGTH_ATTEMPTS {
            let words = self.select_words(options.word_count, options.include_capitalization)?;
            let separator = self.separator(options.separator)?;
            let numbers = if options.include_numbers {
                self.random_numbers()?
            } else {
                String::new()
            };

            password = words.join(separator.as_str()) + &numbers;

            let length = password.chars().count();
            if length >= options.min_length && length <= options.max_length {
                debug!("Memorable password fit the length band on attempt {}", attempt + 1);
                return Ok(password);
            }
        }

        warn!(
            "No memorable password within {}..={} characters after {} attempts; returning last attempt",
            options.min_length, options.max_length, MAX_LENGTH_ATTEMPTS
        );
        Ok(password)
    }

    pub fn generate_passphrase(&mut self, pattern: PassphrasePattern) -> Result<String> {
        match pattern {
            PassphrasePattern::AdjectiveNounNumber => {
                let adjective = self.pick(ADJECTIVES)?;
                let adjective = self.capitalize(adjective)?;
                let noun = self.pick(WORDS)?;
                let noun = self.capitalize(noun)?;
                let number = self.random_numbers()?;
                Ok(format!("{}-{}-{}", adjective, noun, number))
            }
            PassphrasePattern::WordWordWord => Ok(self.select_words(3, true)?.join("-")),
            PassphrasePattern::Mixed => {
                let word_count = modulo_index(&mut self.source, 3)? + 2;
                self.generate_password(&MemorableOptions {
                    word_count,
                    ..MemorableOptions::default()
                })
            }
        }
    }

    fn select_words(&mut self, count: usize, capitalize: bool) -> Result<Vec<String>> {
        let mut words = Vec::with_capacity(count);

        for i in 0..count {
            // Only the first word may be an adjective, on a fair coin
            let list = if i == 0 && modulo_index(&mut self.source, 2)? == 0 {
                ADJECTIVES
            } else {
                WORDS
            };
            let word = self.pick(list)?;

            words.push(if capitalize {
                self.capitalize(word)?
            } else {
                word.to_string()
            });
        }

        Ok(words)
    }

    fn pick(&mut self, list: &'static [&'static str]) -> Result<&'static str> {
        Ok(list[modulo_index(&mut self.source, list.len())?])
    }

    fn capitalize(&mut self, word: &str) -> Result<String> {
        let cased = match modulo_index(&mut self.source, 3)? {
            0 => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            1 => word.to_uppercase(),
            _ => word.to_string(),
        };
        Ok(cased)
    }

    fn separator(&mut self, separator: SeparatorType) -> Result<String> {
        let separator = match separator {
            SeparatorType::None => String::new(),
            SeparatorType::Dash => "-".to_string(),
            SeparatorType::Underscore => "_".to_string(),
            SeparatorType::Random => {
                SEPARATORS[modulo_index(&mut self.source, SEPARATORS.len())?].to_string()
            }
        };
        Ok(separator)
    }

    // 1-3 decimal digits
    fn random_numbers(&mut self) -> Result<String> {
        let count = modulo_index(&mut self.source, 3)? + 1;
        let mut numbers = String::with_capacity(count);
        for _ in 0..count {
            let digit = modulo_index(&mut self.source, 10)?;
            numbers.push(char::from(b'0' + digit as u8));
        }
        Ok(numbers)
    }
}

impl<R: RandomSource> PasswordScheme for MemorablePasswordGenerator<R> {
    type Options = MemorableOptions;

    fn generate(&mut self, options: &MemorableOptions) -> Result<String> {
        self.generate_password(options)
    }

    fn assess_strength(&self, password: &str) -> StrengthAssessment {
        assess_memorable_strength(password)
    }
}

fn is_word_boundary(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}

/// Estimate the entropy of a word-based password from its visible shape.
pub fn assess_memorable_strength(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment::new(
            0,
            0.0,
            StrengthDetails::Memorable {
                word_count: 0,
                has_numbers: false,
                has_capitals: false,
                has_symbols: false,
            },
        );
    }

    let word_count = password.split(is_word_boundary).count();
    let has_numbers = password.chars().any(|c| c.is_ascii_digit());
    let has_capitals = password.chars().any(|c| c.is_ascii_uppercase());
    let has_symbols = password.chars().any(|c| MEMORABLE_SYMBOLS.contains(c));

    let words = word_count as f64;
    let mut entropy = words * ASSUMED_VOCABULARY.log2();
    if has_numbers {
        entropy += NUMBER_SUFFIX_BITS;
    }
    if has_capitals {
        entropy += words * 3f64.log2();
    }
    if has_symbols {
        entropy += 10f64.log2();
    }

    let score = if entropy < 30.0 {
        1
    } else if entropy < 50.0 {
        2
    } else if entropy < 70.0 {
        3
    } else if entropy < 90.0 {
        4
    } else {
        5
    };

    StrengthAssessment::new(
        score,
        entropy,
        StrengthDetails::Memorable {
            word_count,
            has_numbers,
            has_capitals,
            has_symbols,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_support::{seeded, ScriptedSource, UnavailableSource};
    use crate::generators::GeneratorError;
    use crate::models::StrengthLabel;

    fn plain(word_count: usize, separator: SeparatorType) -> MemorableOptions {
        MemorableOptions {
            word_count,
            include_numbers: false,
            include_capitalization: false,
            separator,
            min_length: 1,
            max_length: 200,
        }
    }

    fn is_vocabulary_word(word: &str) -> bool {
        WORDS.contains(&word) || ADJECTIVES.contains(&word)
    }

    #[test]
    fn stays_within_length_band() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(21));
        let options = MemorableOptions {
            word_count: 3,
            min_length: 8,
            max_length: 50,
            ..MemorableOptions::default()
        };

        for _ in 0..200 {
            let password = generator.generate_password(&options).unwrap();
            let length = password.len();
            assert!((8..=50).contains(&length), "{} has length {}", password, length);
        }
    }

    #[test]
    fn composes_words_separator_and_digits_in_draw_order() {
        // coin 0 -> adjective, "bright" upper-cased, then "dragon" capitalised,
        // dash separator, then two digits 7 and 2
        let mut generator =
            MemorablePasswordGenerator::with_source(ScriptedSource::new(&[0, 0, 1, 3, 0, 1, 7, 12]));
        let options = MemorableOptions {
            word_count: 2,
            separator: SeparatorType::Dash,
            ..MemorableOptions::default()
        };

        assert_eq!(generator.generate_password(&options).unwrap(), "BRIGHT-Dragon72");
    }

    #[test]
    fn fixed_separators_join_vocabulary_words() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(4));

        for (separator, symbol) in [(SeparatorType::Dash, '-'), (SeparatorType::Underscore, '_')] {
            let password = generator.generate_password(&plain(4, separator)).unwrap();
            let words: Vec<&str> = password.split(symbol).collect();
            assert_eq!(words.len(), 4);
            assert!(words.iter().all(|w| is_vocabulary_word(w)), "{}", password);
        }

        let password = generator.generate_password(&plain(3, SeparatorType::None)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn only_the_first_word_can_be_an_adjective() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(8));
        let mut saw_adjective_only_first_word = false;

        for _ in 0..300 {
            let password = generator.generate_password(&plain(4, SeparatorType::Dash)).unwrap();
            let words: Vec<&str> = password.split('-').collect();
            assert!(words[1..].iter().all(|w| WORDS.contains(w)), "{}", password);
            if !WORDS.contains(&words[0]) {
                assert!(ADJECTIVES.contains(&words[0]));
                saw_adjective_only_first_word = true;
            }
        }

        assert!(saw_adjective_only_first_word);
    }

    #[test]
    fn random_separator_comes_from_the_fixed_set() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(13));

        for _ in 0..100 {
            let password = generator.generate_password(&plain(2, SeparatorType::Random)).unwrap();
            let separators: Vec<char> = password.chars().filter(|c| !c.is_ascii_lowercase()).collect();
            assert_eq!(separators.len(), 1, "{}", password);
            assert!(SEPARATORS.contains(&separators[0]));
        }
    }

    #[test]
    fn number_suffix_has_one_to_three_digits() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(17));
        let options = MemorableOptions {
            include_numbers: true,
            ..plain(2, SeparatorType::Dash)
        };

        for _ in 0..100 {
            let password = generator.generate_password(&options).unwrap();
            let digits = password.chars().rev().take_while(|c| c.is_ascii_digit()).count();
            assert!((1..=3).contains(&digits), "{}", password);
        }
    }

    #[test]
    fn unreachable_band_returns_last_attempt() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(2));
        let options = MemorableOptions {
            word_count: 2,
            min_length: 200,
            max_length: 300,
            ..MemorableOptions::default()
        };

        let password = generator.generate_password(&options).unwrap();
        assert!(!password.is_empty());
        assert!(password.len() < 200);
    }

    #[test]
    fn unavailable_source_is_an_error() {
        let mut generator = MemorablePasswordGenerator::with_source(UnavailableSource);
        let err = generator.generate_password(&MemorableOptions::default()).unwrap_err();
        assert!(matches!(err, GeneratorError::Crypto(_)));
    }

    #[test]
    fn passphrase_patterns() {
        let mut generator = MemorablePasswordGenerator::with_source(seeded(30));

        let passphrase = generator.generate_passphrase(PassphrasePattern::AdjectiveNounNumber).unwrap();
        let parts: Vec<&str> = passphrase.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0].to_lowercase().as_str()));
        assert!(WORDS.contains(&parts[1].to_lowercase().as_str()));
        assert!((1..=3).contains(&parts[2].len()));
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));

        let passphrase = generator.generate_passphrase(PassphrasePattern::WordWordWord).unwrap();
        let parts: Vec<String> = passphrase.split('-').map(str::to_lowercase).collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|w| is_vocabulary_word(w)));

        let passphrase = generator.generate_passphrase(PassphrasePattern::Mixed).unwrap();
        assert!((8..=50).contains(&passphrase.len()));
    }

    #[test]
    fn assesses_example_passphrase() {
        let assessment = assess_memorable_strength("Bright-Apple-123");
        let expected = 3.0 * 1000f64.log2() + 10.0 + 3.0 * 3f64.log2() + 10f64.log2();
        assert!((assessment.entropy_bits - expected).abs() < 1e-9);
        assert_eq!(assessment.score, 2);
        assert_eq!(assessment.label, StrengthLabel::Weak);
        assert_eq!(
            assessment.details,
            StrengthDetails::Memorable {
                word_count: 3,
                has_numbers: true,
                has_capitals: true,
                has_symbols: true,
            }
        );
    }

    #[test]
    fn word_count_splits_on_whitespace_and_dots() {
        let assessment = assess_memorable_strength("calm river.storm wind_fire");
        match assessment.details {
            StrengthDetails::Memorable { word_count, .. } => assert_eq!(word_count, 5),
            other => panic!("unexpected details {:?}", other),
        }
        // 5 words, a '.' and '_' count as symbols
        assert_eq!(assessment.score, 3);
    }

    #[test]
    fn empty_passphrase_scores_zero() {
        let assessment = assess_memorable_strength("");
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.label, StrengthLabel::None);
    }

    #[test]
    fn memorable_assessment_is_deterministic() {
        assert_eq!(
            assess_memorable_strength("swift_TIGER_moon9"),
            assess_memorable_strength("swift_TIGER_moon9")
        );
    }
}

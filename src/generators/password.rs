use log::{debug, warn};

use crate::crypto::{self, unbiased_index, OsRandom, RandomSource};
use crate::generators::charsets::{build_alphabet, is_complexity_symbol};
use crate::generators::{GeneratorError, PasswordScheme, Result};
use crate::models::{CrackTime, RandomOptions, StrengthAssessment, StrengthDetails};

pub const EMPTY_ALPHABET_MESSAGE: &str = "At least one character type must be selected";

const MAX_COMPLEXITY_ATTEMPTS: usize = 100;
const GUESSES_PER_SECOND: f64 = 1e9;

/// Draws passwords character by character from an alphabet assembled out of
/// the requested character classes.
pub struct RandomPasswordGenerator<R = OsRandom> {
    source: R,
}

impl RandomPasswordGenerator<OsRandom> {
    pub fn new() -> Self {
        RandomPasswordGenerator { source: OsRandom }
    }
}

impl Default for RandomPasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> RandomPasswordGenerator<R> {
    pub fn with_source(source: R) -> Self {
        RandomPasswordGenerator { source }
    }

    pub fn generate_password(&mut self, options: &RandomOptions) -> Result<String> {
        let alphabet = build_alphabet(options);
        if alphabet.is_empty() {
            return Err(GeneratorError::Configuration(EMPTY_ALPHABET_MESSAGE.to_string()));
        }

        debug!(
            "Generating {}-character password from a {}-character alphabet",
            options.length,
            alphabet.len()
        );

        let password = self.draw(&alphabet, options.length)?;
        if options.ensure_complexity {
            return self.ensure_complexity(password, &alphabet, options);
        }

        Ok(password)
    }

    /// Generate `count` independent passwords with the same options.
    pub fn generate_batch(&mut self, options: &RandomOptions, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate_password(options)).collect()
    }

    fn draw(&mut self, alphabet: &[char], length: usize) -> Result<String> {
        let password = (0..length)
            .map(|_| unbiased_index(&mut self.source, alphabet.len()).map(|i| alphabet[i]))
            .collect::<crypto::Result<String>>()?;
        Ok(password)
    }

    // Whole-password regeneration, never per-position patching.
    fn ensure_complexity(
        &mut self,
        mut password: String,
        alphabet: &[char],
        options: &RandomOptions,
    ) -> Result<String> {
        let mut attempts = 0;

        while attempts < MAX_COMPLEXITY_ATTEMPTS {
            if meets_complexity(&password, options) {
                debug!("Complexity satisfied after {} regenerations", attempts);
                return Ok(password);
            }
            password = self.draw(alphabet, options.length)?;
            attempts += 1;
        }

        if !meets_complexity(&password, options) {
            warn!(
                "Password still misses a selected character class after {} regenerations; returning last attempt",
                MAX_COMPLEXITY_ATTEMPTS
            );
        }

        Ok(password)
    }
}

impl<R: RandomSource> PasswordScheme for RandomPasswordGenerator<R> {
    type Options = RandomOptions;

    fn generate(&mut self, options: &RandomOptions) -> Result<String> {
        self.generate_password(options)
    }

    fn assess_strength(&self, password: &str) -> StrengthAssessment {
        assess_password_strength(password)
    }
}

/// Check that every selected class is represented. Symbols are checked
/// against the fixed complexity pattern whatever symbol set was configured.
pub fn meets_complexity(password: &str, options: &RandomOptions) -> bool {
    let classes = CharClasses::scan(password);

    !(options.include_uppercase && !classes.upper
        || options.include_lowercase && !classes.lower
        || options.include_numbers && !classes.digit
        || options.include_symbols && !classes.symbol)
}

#[derive(Debug, Default, Clone, Copy)]
struct CharClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn scan(password: &str) -> Self {
        password.chars().fold(CharClasses::default(), |mut classes, c| {
            classes.lower |= c.is_ascii_lowercase();
            classes.upper |= c.is_ascii_uppercase();
            classes.digit |= c.is_ascii_digit();
            classes.symbol |= is_complexity_symbol(c);
            classes
        })
    }

    fn charset_size(&self) -> usize {
        let mut size = 0;
        if self.lower {
            size += 26;
        }
        if self.upper {
            size += 26;
        }
        if self.digit {
            size += 10;
        }
        if self.symbol {
            size += 32;
        }
        size
    }

    fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

/// Score a password by the character classes it actually contains.
///
/// The options that produced the password play no part: the charset size is
/// re-derived from the password itself.
pub fn assess_password_strength(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment::new(
            0,
            0.0,
            StrengthDetails::Random {
                charset_size: 0,
                char_types: 0,
                estimated_crack_time: CrackTime::Instantly,
            },
        );
    }

    let classes = CharClasses::scan(password);
    let charset_size = classes.charset_size();
    let length = password.chars().count();

    let entropy = if charset_size == 0 {
        0.0
    } else {
        length as f64 * (charset_size as f64).log2()
    };

    let mut score: u8 = if entropy < 25.0 {
        1
    } else if entropy < 50.0 {
        2
    } else if entropy < 75.0 {
        3
    } else if entropy < 100.0 {
        4
    } else {
        5
    };

    if length < 8 {
        score = score.min(2);
    } else if length >= 16 {
        score = (score + 1).min(5);
    }

    let char_types = classes.count();
    if char_types < 2 {
        score = score.min(2);
    } else if char_types >= 4 {
        score = (score + 1).min(5);
    }

    StrengthAssessment::new(
        score,
        entropy,
        StrengthDetails::Random {
            charset_size,
            char_types,
            estimated_crack_time: estimate_time_to_crack(entropy),
        },
    )
}

/// Average-case time to search half the keyspace at a billion guesses/second.
pub fn estimate_time_to_crack(entropy: f64) -> CrackTime {
    let combinations = 2f64.powf(entropy);
    CrackTime::from_seconds(combinations / (2.0 * GUESSES_PER_SECOND))
}

/// Entropy of a password under the alphabet its options describe.
pub fn calculate_entropy(password: &str, options: &RandomOptions) -> Result<f64> {
    let alphabet = build_alphabet(options);
    if alphabet.is_empty() {
        return Err(GeneratorError::Configuration(EMPTY_ALPHABET_MESSAGE.to_string()));
    }
    Ok(password.chars().count() as f64 * (alphabet.len() as f64).log2())
}

// src/api/mod.rs
//! Entry points the surrounding application calls into.
//!
//! Every generating function draws from the operating system's CSPRNG and
//! fails with [`GeneratorError::Crypto`] if it is unavailable. Assessment
//! functions are pure.

use std::collections::BTreeMap;

use crate::generators::charsets::symbol_set_catalog;
use crate::generators::{memorable, password, pin, Result};
use crate::generators::{MemorablePasswordGenerator, PinGenerator, RandomPasswordGenerator};
use crate::models::{
    MemorableOptions, PassphrasePattern, RandomOptions, Scheme, StrengthAssessment, SymbolSet,
    SymbolSetInfo,
};

pub mod types;

pub use crate::generators::GeneratorError;
pub use types::ValidationResult;

pub const MIN_RANDOM_LENGTH: usize = 4;
pub const MAX_RANDOM_LENGTH: usize = 256;

/// Generate a random password. Fails with a configuration error when the
/// options select no characters.
pub fn generate_random_password(options: &RandomOptions) -> Result<String> {
    RandomPasswordGenerator::new().generate_password(options)
}

pub fn generate_random_batch(options: &RandomOptions, count: usize) -> Result<Vec<String>> {
    RandomPasswordGenerator::new().generate_batch(options, count)
}

pub fn assess_random_strength(password: &str) -> StrengthAssessment {
    password::assess_password_strength(password)
}

/// Entropy of `password` measured against the alphabet `options` describe.
pub fn calculate_entropy(password: &str, options: &RandomOptions) -> Result<f64> {
    password::calculate_entropy(password, options)
}

pub fn generate_memorable_password(options: &MemorableOptions) -> Result<String> {
    MemorablePasswordGenerator::new().generate_password(options)
}

pub fn generate_passphrase(pattern: PassphrasePattern) -> Result<String> {
    MemorablePasswordGenerator::new().generate_passphrase(pattern)
}

pub fn assess_memorable_strength(password: &str) -> StrengthAssessment {
    memorable::assess_memorable_strength(password)
}

pub fn generate_pin(length: usize) -> Result<String> {
    PinGenerator::new().generate_pin(length)
}

pub fn assess_pin_strength(length: usize) -> StrengthAssessment {
    pin::assess_pin_strength(length)
}

/// Assess a password with the model of the scheme that produced it.
pub fn assess_strength(scheme: Scheme, password: &str) -> StrengthAssessment {
    match scheme {
        Scheme::Random => assess_random_strength(password),
        Scheme::Memorable => assess_memorable_strength(password),
        Scheme::Pin => assess_pin_strength(password.chars().count()),
    }
}

pub fn list_symbol_sets() -> &'static BTreeMap<SymbolSet, SymbolSetInfo> {
    symbol_set_catalog()
}

/// Check length bounds and that at least one character class is requested.
///
/// The generator does not repeat these checks; callers run this first to get
/// messages they can show instead of an error.
pub fn validate_random_options(options: &RandomOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if options.length < MIN_RANDOM_LENGTH {
        errors.push(format!("Password length must be at least {}", MIN_RANDOM_LENGTH));
    }
    if options.length > MAX_RANDOM_LENGTH {
        errors.push(format!("Password length cannot exceed {}", MAX_RANDOM_LENGTH));
    }

    let has_any_class = options.include_uppercase
        || options.include_lowercase
        || options.include_numbers
        || options.include_symbols;
    if !has_any_class {
        errors.push(password::EMPTY_ALPHABET_MESSAGE.to_string());
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_reports_every_problem() {
        let options = RandomOptions {
            length: 2,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..RandomOptions::default()
        };

        let result = validate_random_options(&options);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Password length must be at least 4".to_string(),
                "At least one character type must be selected".to_string(),
            ]
        );
    }

    #[test]
    fn validation_upper_bound() {
        let options = RandomOptions { length: 257, ..RandomOptions::default() };
        let result = validate_random_options(&options);
        assert_eq!(result.errors, vec!["Password length cannot exceed 256".to_string()]);

        let options = RandomOptions { length: 256, ..RandomOptions::default() };
        assert!(validate_random_options(&options).is_valid);
    }

    #[test]
    fn dispatches_assessment_by_scheme() {
        assert_eq!(assess_strength(Scheme::Pin, "1234"), assess_pin_strength(4));
        assert_eq!(
            assess_strength(Scheme::Memorable, "calm-river"),
            assess_memorable_strength("calm-river")
        );
        assert_eq!(assess_strength(Scheme::Random, "abc"), assess_random_strength("abc"));
    }
}

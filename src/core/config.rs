// src/core/config.rs
use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use log::LevelFilter;

use crate::models::{MemorableOptions, PinOptions, RandomOptions, SeparatorType, SymbolSet};

pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 2..=6;
pub const PIN_LENGTH_RANGE: RangeInclusive<usize> = 4..=12;

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Random passwords
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub default_symbol_set: SymbolSet,
    pub default_custom_symbols: String,
    pub default_exclude_ambiguous: bool,
    pub default_ensure_complexity: bool,
    pub default_batch_count: usize,

    // Memorable passwords
    pub default_word_count: usize,
    pub default_include_capitalization: bool,
    pub default_separator: SeparatorType,
    pub default_min_length: usize,
    pub default_max_length: usize,

    // PINs
    pub default_pin_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: 20,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: false,
            default_symbol_set: SymbolSet::Basic,
            default_custom_symbols: String::new(),
            default_exclude_ambiguous: false,
            default_ensure_complexity: true,
            default_batch_count: 5,

            default_word_count: 3,
            default_include_capitalization: true,
            default_separator: SeparatorType::Random,
            default_min_length: 8,
            default_max_length: 50,

            default_pin_length: 4,

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

fn parse_into<T: FromStr>(target: &mut T, key: &str, value: Option<String>) {
    if let Some(val) = value {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

fn parse_in_range(target: &mut usize, key: &str, value: Option<String>, range: RangeInclusive<usize>) {
    let mut parsed = *target;
    parse_into(&mut parsed, key, value);

    if range.contains(&parsed) {
        *target = parsed;
    } else {
        log::warn!(
            "{} must be between {} and {}, got {}; keeping {}",
            key,
            range.start(),
            range.end(),
            parsed,
            target
        );
    }
}

fn parse_enum<T: ValueEnum>(target: &mut T, key: &str, value: Option<String>) {
    if let Some(val) = value {
        match T::from_str(val.trim(), true) {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Unknown value '{}' for {}, keeping default", val, key),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Resolve configuration against an arbitrary key lookup.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Random passwords
        parse_into(&mut config.default_password_length, "DEFAULT_PASSWORD_LENGTH", lookup("DEFAULT_PASSWORD_LENGTH"));
        parse_into(&mut config.default_include_uppercase, "DEFAULT_INCLUDE_UPPERCASE", lookup("DEFAULT_INCLUDE_UPPERCASE"));
        parse_into(&mut config.default_include_lowercase, "DEFAULT_INCLUDE_LOWERCASE", lookup("DEFAULT_INCLUDE_LOWERCASE"));
        parse_into(&mut config.default_include_numbers, "DEFAULT_INCLUDE_NUMBERS", lookup("DEFAULT_INCLUDE_NUMBERS"));
        parse_into(&mut config.default_include_symbols, "DEFAULT_INCLUDE_SYMBOLS", lookup("DEFAULT_INCLUDE_SYMBOLS"));
        parse_enum(&mut config.default_symbol_set, "DEFAULT_SYMBOL_SET", lookup("DEFAULT_SYMBOL_SET"));
        if let Some(symbols) = lookup("DEFAULT_CUSTOM_SYMBOLS") {
            config.default_custom_symbols = symbols;
        }
        parse_into(&mut config.default_exclude_ambiguous, "DEFAULT_EXCLUDE_AMBIGUOUS", lookup("DEFAULT_EXCLUDE_AMBIGUOUS"));
        parse_into(&mut config.default_ensure_complexity, "DEFAULT_ENSURE_COMPLEXITY", lookup("DEFAULT_ENSURE_COMPLEXITY"));
        parse_into(&mut config.default_batch_count, "DEFAULT_BATCH_COUNT", lookup("DEFAULT_BATCH_COUNT"));

        // Memorable passwords
        parse_in_range(&mut config.default_word_count, "DEFAULT_WORD_COUNT", lookup("DEFAULT_WORD_COUNT"), WORD_COUNT_RANGE);
        parse_into(&mut config.default_include_capitalization, "DEFAULT_INCLUDE_CAPITALIZATION", lookup("DEFAULT_INCLUDE_CAPITALIZATION"));
        parse_enum(&mut config.default_separator, "DEFAULT_SEPARATOR", lookup("DEFAULT_SEPARATOR"));
        parse_into(&mut config.default_min_length, "DEFAULT_MIN_LENGTH", lookup("DEFAULT_MIN_LENGTH"));
        parse_into(&mut config.default_max_length, "DEFAULT_MAX_LENGTH", lookup("DEFAULT_MAX_LENGTH"));

        // PINs
        parse_in_range(&mut config.default_pin_length, "DEFAULT_PIN_LENGTH", lookup("DEFAULT_PIN_LENGTH"), PIN_LENGTH_RANGE);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn random_options(&self) -> RandomOptions {
        RandomOptions {
            length: self.default_password_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
            symbol_set: self.default_symbol_set,
            custom_symbols: self.default_custom_symbols.clone(),
            exclude_ambiguous: self.default_exclude_ambiguous,
            ensure_complexity: self.default_ensure_complexity,
        }
    }

    pub fn memorable_options(&self) -> MemorableOptions {
        MemorableOptions {
            word_count: self.default_word_count,
            include_numbers: self.default_include_numbers,
            include_capitalization: self.default_include_capitalization,
            separator: self.default_separator,
            min_length: self.default_min_length,
            max_length: self.default_max_length,
        }
    }

    pub fn pin_options(&self) -> PinOptions {
        PinOptions { length: self.default_pin_length }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]);
        assert_eq!(config.default_password_length, 20);
        assert!(!config.default_include_symbols);
        assert_eq!(config.default_symbol_set, SymbolSet::Basic);
        assert_eq!(config.default_pin_length, 4);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "32"),
            ("DEFAULT_INCLUDE_SYMBOLS", "true"),
            ("DEFAULT_SYMBOL_SET", "Brackets"),
            ("DEFAULT_SEPARATOR", "underscore"),
            ("DEFAULT_WORD_COUNT", "5"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/passgen.log"),
        ]);

        let random = config.random_options();
        assert_eq!(random.length, 32);
        assert!(random.include_symbols);
        assert_eq!(random.symbol_set, SymbolSet::Brackets);

        let memorable = config.memorable_options();
        assert_eq!(memorable.word_count, 5);
        assert_eq!(memorable.separator, SeparatorType::Underscore);

        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "long"),
            ("DEFAULT_SYMBOL_SET", "emoji"),
            ("DEFAULT_ENSURE_COMPLEXITY", "maybe"),
        ]);
        assert_eq!(config.default_password_length, 20);
        assert_eq!(config.default_symbol_set, SymbolSet::Basic);
        assert!(config.default_ensure_complexity);
    }

    #[test]
    fn out_of_range_pin_length_keeps_default() {
        for value in ["2", "13", "0"] {
            let config = load(&[("DEFAULT_PIN_LENGTH", value)]);
            assert_eq!(config.pin_options().length, 4, "accepted {}", value);
        }

        let config = load(&[("DEFAULT_PIN_LENGTH", "12")]);
        assert_eq!(config.pin_options().length, 12);
    }

    #[test]
    fn out_of_range_word_count_keeps_default() {
        for value in ["1", "7", "40"] {
            let config = load(&[("DEFAULT_WORD_COUNT", value)]);
            assert_eq!(config.memorable_options().word_count, 3, "accepted {}", value);
        }

        let config = load(&[("DEFAULT_WORD_COUNT", "6")]);
        assert_eq!(config.memorable_options().word_count, 6);
    }
}

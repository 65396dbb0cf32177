// src/cli/commands.rs
use clap::{Args, Subcommand};

use rust_passgen::models::{
    MemorableOptions, PassphrasePattern, RandomOptions, Scheme, SeparatorType, SymbolSet,
};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Random {
        #[command(flatten)]
        options: RandomArgs,

        /// Generate several passwords at once
        #[arg(long, short)]
        count: Option<usize>,
    },

    /// Generate a memorable word-based password
    Memorable(MemorableArgs),

    /// Generate a passphrase following a fixed pattern
    Passphrase {
        #[arg(long, value_enum, default_value_t = PassphrasePattern::AdjectiveNounNumber)]
        pattern: PassphrasePattern,
    },

    /// Generate a numeric PIN
    Pin {
        /// Number of digits
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(4..=12))]
        length: Option<u8>,
    },

    /// Assess the strength of a password
    Assess {
        /// Strength model to apply
        #[arg(long, value_enum, default_value_t = Scheme::Random)]
        mode: Scheme,

        /// Password to assess
        #[arg(required = true)]
        password: String,
    },

    /// List the available symbol sets
    SymbolSets,

    /// Check random password options without generating anything
    Validate(RandomArgs),
}

/// Random password options. Anything left unset falls back to configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct RandomArgs {
    /// Password length
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long)]
    pub uppercase: Option<bool>,

    /// Include lowercase letters
    #[arg(long)]
    pub lowercase: Option<bool>,

    /// Include digits
    #[arg(long)]
    pub numbers: Option<bool>,

    /// Include symbols
    #[arg(long)]
    pub symbols: Option<bool>,

    /// Which symbols to draw from
    #[arg(long, value_enum)]
    pub symbol_set: Option<SymbolSet>,

    /// Symbols used with `--symbol-set custom`
    #[arg(long)]
    pub custom_symbols: Option<String>,

    /// Leave out characters like l, 1, O and 0
    #[arg(long)]
    pub exclude_ambiguous: Option<bool>,

    /// Regenerate until every selected class appears
    #[arg(long)]
    pub ensure_complexity: Option<bool>,
}

impl RandomArgs {
    pub fn apply(&self, base: RandomOptions) -> RandomOptions {
        RandomOptions {
            length: self.length.unwrap_or(base.length),
            include_uppercase: self.uppercase.unwrap_or(base.include_uppercase),
            include_lowercase: self.lowercase.unwrap_or(base.include_lowercase),
            include_numbers: self.numbers.unwrap_or(base.include_numbers),
            include_symbols: self.symbols.unwrap_or(base.include_symbols),
            symbol_set: self.symbol_set.unwrap_or(base.symbol_set),
            custom_symbols: self.custom_symbols.clone().unwrap_or(base.custom_symbols),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(base.exclude_ambiguous),
            ensure_complexity: self.ensure_complexity.unwrap_or(base.ensure_complexity),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct MemorableArgs {
    /// Number of words
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(2..=6))]
    pub words: Option<u8>,

    /// Append 1-3 digits
    #[arg(long)]
    pub numbers: Option<bool>,

    /// Randomly capitalise words
    #[arg(long)]
    pub capitalization: Option<bool>,

    /// Separator between words
    #[arg(long, value_enum)]
    pub separator: Option<SeparatorType>,

    /// Shortest acceptable result
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Longest acceptable result
    #[arg(long)]
    pub max_length: Option<usize>,
}

impl MemorableArgs {
    pub fn apply(&self, base: MemorableOptions) -> MemorableOptions {
        MemorableOptions {
            word_count: self.words.map(usize::from).unwrap_or(base.word_count),
            include_numbers: self.numbers.unwrap_or(base.include_numbers),
            include_capitalization: self.capitalization.unwrap_or(base.include_capitalization),
            separator: self.separator.unwrap_or(base.separator),
            min_length: self.min_length.unwrap_or(base.min_length),
            max_length: self.max_length.unwrap_or(base.max_length),
        }
    }
}

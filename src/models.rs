// src/models.rs
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize, Serializer};

/// Which symbol characters a random password may draw from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSet {
    #[default]
    Basic,
    Safe,
    Extended,
    Brackets,
    Punctuation,
    Math,
    Custom,
}

// Random password generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub symbol_set: SymbolSet,
    /// Only consulted when `symbol_set` is `Custom`; used verbatim.
    pub custom_symbols: String,
    pub exclude_ambiguous: bool,
    pub ensure_complexity: bool,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            symbol_set: SymbolSet::Basic,
            custom_symbols: String::new(),
            exclude_ambiguous: false,
            ensure_complexity: true,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorType {
    #[default]
    Random,
    Dash,
    Underscore,
    None,
}

// Memorable (word based) password generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorableOptions {
    pub word_count: usize,
    pub include_numbers: bool,
    pub include_capitalization: bool,
    pub separator: SeparatorType,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            word_count: 3,
            include_numbers: true,
            include_capitalization: true,
            separator: SeparatorType::Random,
            min_length: 8,
            max_length: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinOptions {
    pub length: usize,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self { length: 4 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PassphrasePattern {
    AdjectiveNounNumber,
    WordWordWord,
    Mixed,
}

/// The generation scheme a password came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Random,
    Memorable,
    Pin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    None,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Map a 0-5 score onto the label scale. Scores above 5 saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::None,
            1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Fair,
            4 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::None => write!(f, "None"),
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Fair => write!(f, "Fair"),
            StrengthLabel::Good => write!(f, "Good"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Average-case offline crack time, bucketed into human units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackTime {
    Instantly,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    Centuries,
}

impl CrackTime {
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 60.0 {
            CrackTime::Instantly
        } else if seconds < 3_600.0 {
            CrackTime::Minutes((seconds / 60.0).round() as u64)
        } else if seconds < 86_400.0 {
            CrackTime::Hours((seconds / 3_600.0).round() as u64)
        } else if seconds < 31_536_000.0 {
            CrackTime::Days((seconds / 86_400.0).round() as u64)
        } else if seconds < 31_536_000_000.0 {
            CrackTime::Years((seconds / 31_536_000.0).round() as u64)
        } else {
            CrackTime::Centuries
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Instantly => write!(f, "Instantly"),
            CrackTime::Minutes(n) => write!(f, "{} minutes", n),
            CrackTime::Hours(n) => write!(f, "{} hours", n),
            CrackTime::Days(n) => write!(f, "{} days", n),
            CrackTime::Years(n) => write!(f, "{} years", n),
            CrackTime::Centuries => write!(f, "Centuries"),
        }
    }
}

impl Serialize for CrackTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Scheme-specific facts gathered while assessing a password.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum StrengthDetails {
    Random {
        charset_size: usize,
        char_types: usize,
        estimated_crack_time: CrackTime,
    },
    Memorable {
        word_count: usize,
        has_numbers: bool,
        has_capitals: bool,
        has_symbols: bool,
    },
    Pin {
        length: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthAssessment {
    pub score: u8,
    pub label: StrengthLabel,
    /// Serialized as whole bits under `entropy`.
    #[serde(rename = "entropy", serialize_with = "serialize_rounded_bits")]
    pub entropy_bits: f64,
    #[serde(flatten)]
    pub details: StrengthDetails,
}

impl StrengthAssessment {
    pub fn new(score: u8, entropy_bits: f64, details: StrengthDetails) -> Self {
        Self {
            score,
            label: StrengthLabel::from_score(score),
            entropy_bits,
            details,
        }
    }
}

fn serialize_rounded_bits<S: Serializer>(bits: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(bits.max(0.0).round() as u64)
}

/// One entry of the static symbol-set catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolSetInfo {
    pub name: &'static str,
    pub symbols: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_score_scale() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::None);
        assert_eq!(StrengthLabel::from_score(1).to_string(), "Very Weak");
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(9), StrengthLabel::Strong);
    }

    #[test]
    fn crack_time_buckets() {
        assert_eq!(CrackTime::from_seconds(59.9), CrackTime::Instantly);
        assert_eq!(CrackTime::from_seconds(600.0), CrackTime::Minutes(10));
        assert_eq!(CrackTime::from_seconds(7_200.0), CrackTime::Hours(2));
        assert_eq!(CrackTime::from_seconds(86_400.0 * 3.0), CrackTime::Days(3));
        assert_eq!(CrackTime::from_seconds(31_536_000.0 * 40.0), CrackTime::Years(40));
        assert_eq!(CrackTime::from_seconds(31_536_000_000.0), CrackTime::Centuries);
        assert_eq!(CrackTime::from_seconds(f64::INFINITY), CrackTime::Centuries);
        assert_eq!(CrackTime::Days(3).to_string(), "3 days");
    }

    #[test]
    fn assessment_serializes_with_entropy_and_scheme_fields() {
        let assessment = StrengthAssessment::new(
            2,
            47.9,
            StrengthDetails::Memorable {
                word_count: 3,
                has_numbers: true,
                has_capitals: true,
                has_symbols: true,
            },
        );
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["label"], "Weak");
        assert_eq!(json["scheme"], "memorable");
        assert_eq!(json["entropy"], 48);
        assert_eq!(json["word_count"], 3);
    }

    #[test]
    fn entropy_serializes_as_whole_bits() {
        let pin = StrengthAssessment::new(1, 13.287, StrengthDetails::Pin { length: 4 });
        let json = serde_json::to_value(&pin).unwrap();
        assert_eq!(json["entropy"], 13);
        assert_eq!(pin.entropy_bits, 13.287);
    }

    #[test]
    fn enum_defaults() {
        assert_eq!(SymbolSet::default(), SymbolSet::Basic);
        assert_eq!(SeparatorType::default(), SeparatorType::Random);
    }

    #[test]
    fn random_options_default_from_partial_json() {
        let options: RandomOptions = serde_json::from_str(r#"{"length": 12, "symbol_set": "math"}"#).unwrap();
        assert_eq!(options.length, 12);
        assert_eq!(options.symbol_set, SymbolSet::Math);
        assert!(options.ensure_complexity);
    }
}

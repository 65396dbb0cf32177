// src/generators/mod.rs
use thiserror::Error;

use crate::crypto::CryptoError;
use crate::models::StrengthAssessment;

pub mod charsets;
pub mod memorable;
pub mod password;
pub mod pin;
pub mod vocabulary;

pub use memorable::MemorablePasswordGenerator;
pub use password::RandomPasswordGenerator;
pub use pin::PinGenerator;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The options select no characters to draw from.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A way of producing passwords and scoring what it produces.
///
/// Each scheme is independent: none of them delegates to another, they only
/// share the secure random source.
pub trait PasswordScheme {
    type Options;

    fn generate(&mut self, options: &Self::Options) -> Result<String>;

    fn assess_strength(&self, password: &str) -> StrengthAssessment;
}

// src/api/types.rs
use serde::{Deserialize, Serialize};

use crate::models::StrengthAssessment;

/// Outcome of pre-generation option checks, meant for user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the options can be used as-is
    pub is_valid: bool,
    /// One human readable message per problem found
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (single generation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Generated passwords (batch generation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwords: Option<Vec<String>>,
    /// Strength of the generated password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthAssessment>,
    /// Error message (if operation failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn single(password: String, strength: StrengthAssessment) -> Self {
        Self {
            success: true,
            password: Some(password),
            passwords: None,
            strength: Some(strength),
            error: None,
        }
    }

    pub fn batch(passwords: Vec<String>) -> Self {
        Self {
            success: true,
            password: None,
            passwords: Some(passwords),
            strength: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            passwords: None,
            strength: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    /// Whether the operation was successful
    pub success: bool,
    pub strength: StrengthAssessment,
}

//! Password, passphrase and PIN generation with entropy-based strength
//! assessment.
//!
//! The [`api`] module holds the entry points; [`generators`] holds the
//! individual schemes behind them.

pub mod api;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod logging;
pub mod models;

pub use crate::generators::{GeneratorError, PasswordScheme};

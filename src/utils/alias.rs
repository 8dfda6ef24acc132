//! Alias generation and validation.
//!
//! Generated aliases are random alphanumeric strings; caller-chosen aliases are
//! checked so they stay reachable through the `/{alias}` route.

use rand::{Rng, distr::Alphanumeric};

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Upper bound for both generated and caller-chosen aliases.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases shadowed by fixed routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Reasons a caller-chosen alias is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    #[error("alias is too long")]
    TooLong,

    #[error("alias contains invalid characters")]
    InvalidCharacters,

    #[error("alias is reserved")]
    Reserved,
}

/// Generates a random alias of `length` ASCII letters and digits.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a caller-chosen alias.
///
/// # Rules
///
/// - At most [`MAX_ALIAS_LENGTH`] bytes
/// - No `/`, `?`, `#`, whitespace or control characters
/// - Not one of the reserved route names
///
/// Emptiness is not checked here: an empty alias means "generate one".
///
/// # Errors
///
/// Returns the first [`AliasError`] rule that is violated.
pub fn validate_alias(alias: &str) -> Result<(), AliasError> {
    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(AliasError::TooLong);
    }

    if alias
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace() || c.is_control())
    {
        return Err(AliasError::InvalidCharacters);
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AliasError::Reserved);
    }

    Ok(())
}

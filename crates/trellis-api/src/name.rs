//! Artifact name-format validation
//!
//! Shared by every place an artifact name is declared or referenced.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern an artifact name must match: starts and ends with an
/// alphanumeric character, interior characters alphanumeric, `-`, `_` or
/// `.`. Single-character names are alphanumeric only.
pub const ARTIFACT_NAME_FORMAT: &str = r"^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$";

static ARTIFACT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(ARTIFACT_NAME_FORMAT).expect("artifact name pattern is valid"));

/// Check a name against [`ARTIFACT_NAME_FORMAT`]
#[inline]
#[must_use]
pub fn is_valid_artifact_name(name: &str) -> bool {
    ARTIFACT_NAME_REGEX.is_match(name)
}

/// Validate a name against [`ARTIFACT_NAME_FORMAT`]
///
/// # Errors
/// Returns [`NameError::InvalidName`] if the name does not match.
pub fn validate_artifact_name(name: &str) -> Result<(), NameError> {
    if is_valid_artifact_name(name) {
        Ok(())
    } else {
        Err(NameError::InvalidName(name.to_string()))
    }
}

/// Errors related to artifact names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Name does not match the artifact name format
    #[error("invalid artifact name: {0:?} (must match {ARTIFACT_NAME_FORMAT:?})")]
    InvalidName(String),
}

//! Validation of numeric text fields

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Error type for user-entered field values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} must be a non-negative integer, got '{value}'")]
    InvalidNumericField { field: String, value: String },
}

/// Result type for field validation
pub type FieldResult<T> = Result<T, FieldError>;

/// Parse an optional count from a text field.
///
/// Blank text means "not set" and yields `Ok(None)`. Anything else must be a
/// non-negative integer that fits in a `u32`.
pub fn parse_count(field: &str, text: &str) -> FieldResult<Option<u32>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FieldError::InvalidNumericField {
            field: field.to_string(),
            value: text.to_string(),
        })
}

/// Deserialize a trigger interval, raising `0` to `1`.
///
/// Use with `#[serde(deserialize_with = "sfm_core::positive_interval")]`.
pub fn positive_interval<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

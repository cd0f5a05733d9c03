//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! business config file. Limits are chosen based on:
//! - Page header and menu card widths
//! - Messaging apps truncating very long prefilled messages

use shared::{ConfigError, ConfigResult};

// ── Text length limits ──────────────────────────────────────────────

/// Business name, menu section and item names
pub const MAX_NAME_LEN: usize = 120;

/// Tagline, item descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Labels: prices, delivery fee, minimum order, zipcode, state
pub const MAX_SHORT_TEXT_LEN: usize = 40;

/// Street, neighborhood, city
pub const MAX_ADDRESS_LEN: usize = 200;

/// E.164 allows at most 15 digits
pub const MAX_PHONE_DIGITS: usize = 15;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::validation(format!("{field} must not be empty")));
    }
    validate_max_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> ConfigResult<()> {
    match value {
        Some(v) => validate_max_len(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_max_len(value: &str, field: &str, max_len: usize) -> ConfigResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ConfigError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate a coordinate lies within `[-limit, limit]` decimal degrees.
pub fn validate_degrees(value: f64, field: &str, limit: f64) -> ConfigResult<()> {
    if !value.is_finite() || value.abs() > limit {
        return Err(ConfigError::validation(format!(
            "{field} must be between -{limit} and {limit} (got {value})"
        )));
    }
    Ok(())
}

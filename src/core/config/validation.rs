//! Validation helper functions for configuration types.

use crate::core::errors::{Result, SimHashError};

/// Validate that a usize value is within a bounded range (inclusive).
pub fn validate_bounded_usize(value: usize, min: usize, max: usize, field: &str) -> Result<()> {
    if value < min || value > max {
        return Err(SimHashError::config_field(
            format!("{field} must be between {min} and {max} (got {value})"),
            field,
        ));
    }
    Ok(())
}

//! Validation utilities for signature operations

use super::types::{Error, Result};

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate the outcome of a signature check
pub fn signature(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::VerificationFailed { context });
    }
    Ok(())
}

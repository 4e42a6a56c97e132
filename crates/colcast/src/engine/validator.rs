//! Input validation for array construction.
//!
//! ## Purpose
//!
//! This module provides the validation checks the sanitization pipeline
//! runs before converting anything: element order, dimensionality, mask
//! pairing, and requested-length agreement.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Typed errors**: Every rejection carries the offending values.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform, reshape, or repair input data.
//! * This module does not perform inference or casting.

// Internal dependencies
use crate::arrays::input::ArrayLike;
use crate::primitives::errors::ConstructError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for construction inputs.
///
/// Provides static methods that return `Result<(), ConstructError>` and
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Reject inputs whose element order is undefined.
    pub fn ensure_ordered(data: &ArrayLike) -> Result<(), ConstructError> {
        if matches!(data, ArrayLike::Unordered(_)) {
            return Err(ConstructError::UnorderedInput);
        }
        Ok(())
    }

    /// Require a 1-dimensional shape.
    pub fn ensure_1d(shape: &[usize]) -> Result<(), ConstructError> {
        match shape.len() {
            0 => Err(ConstructError::ZeroDimensional),
            1 => Ok(()),
            _ => Err(ConstructError::NotOneDimensional {
                shape: shape.to_vec(),
            }),
        }
    }

    /// Require data and mask buffers of equal length.
    pub fn ensure_mask(data_len: usize, mask_len: usize) -> Result<(), ConstructError> {
        if data_len != mask_len {
            return Err(ConstructError::MaskLengthMismatch { data_len, mask_len });
        }
        Ok(())
    }

    /// Require the constructed length to match the requested one.
    pub fn ensure_length(data_len: usize, expected: usize) -> Result<(), ConstructError> {
        if data_len != expected {
            return Err(ConstructError::LengthMismatch { data_len, expected });
        }
        Ok(())
    }
}

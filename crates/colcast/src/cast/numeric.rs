//! Checked scalar-level numeric conversions.
//!
//! ## Purpose
//!
//! This module provides the value-level conversions the cast layer is
//! built on. Each function is generic over the target primitive via
//! `num-traits` and reports range violations as typed errors instead of
//! wrapping or truncating.
//!
//! ## Design notes
//!
//! * **Safe-cast discipline**: A float converts to an integer only when
//!   it is finite and exactly integral; an integer converts only when it
//!   is in range for the target.
//! * **Target-driven errors**: Errors carry the requested dtype so the
//!   caller's context survives into diagnostics.
//!
//! ## Non-goals
//!
//! * This module does not know about arrays, masks, or missing values.

// External dependencies
use num_traits::NumCast;

// Internal dependencies
use crate::primitives::dtype::DType;
use crate::primitives::errors::ConstructError;

/// Convert a signed integer into the target primitive, checking range.
pub fn cast_int<T: NumCast>(value: i64, dtype: DType) -> Result<T, ConstructError> {
    T::from(value).ok_or(ConstructError::IntegerOverflow {
        value: <i128 as From<i64>>::from(value),
        dtype,
    })
}

/// Convert an unsigned integer into the target primitive, checking range.
pub fn cast_uint<T: NumCast>(value: u64, dtype: DType) -> Result<T, ConstructError> {
    T::from(value).ok_or(ConstructError::IntegerOverflow {
        value: <i128 as From<u64>>::from(value),
        dtype,
    })
}

/// Convert a float into a float target.
pub fn cast_float<T: NumCast>(value: f64, dtype: DType) -> Result<T, ConstructError> {
    T::from(value).ok_or(ConstructError::LossyFloatCast { value, dtype })
}

/// Convert a float into an integer target.
///
/// The value must be finite and exactly integral, and must fit the
/// target's range; anything else is a lossy cast.
pub fn cast_float_to_int<T: NumCast>(value: f64, dtype: DType) -> Result<T, ConstructError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ConstructError::LossyFloatCast { value, dtype });
    }
    T::from(value).ok_or(ConstructError::LossyFloatCast { value, dtype })
}

/// Widen a boolean into a numeric target. 0 and 1 fit every target.
pub fn cast_bool<T: NumCast>(value: bool, dtype: DType) -> Result<T, ConstructError> {
    let value = <i64 as From<bool>>::from(value);
    T::from(value).ok_or(ConstructError::IntegerOverflow {
        value: <i128 as From<i64>>::from(value),
        dtype,
    })
}

//! Error types for array construction.
//!
//! ## Purpose
//!
//! This module defines every error condition the construction pipeline
//! can report: malformed input shapes, impossible casts, overflowing
//! ranges, and missing-value violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., actual
//!   vs. expected lengths, the shape that was rejected).
//! * **Typed**: Each failure mode is a distinct variant; callers can
//!   match rather than parse messages.
//! * **Trait Implementation**: Implements `Display` and
//!   `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Zero-dimensional and multi-dimensional
//!    buffers, mask/length mismatches.
//! 2. **Cast validation**: Overflowing integers, non-equivalent floats,
//!    undefined conversions, missing values cast to dense dtypes.
//! 3. **Range realization**: Zero steps and ranges exceeding every
//!    supported integer dtype.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the widest type of the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::dtype::{DType, TimeUnit};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for array construction operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructError {
    /// Scalar input was given without a broadcast length.
    ScalarWithoutLength,

    /// Result length differs from the requested length and is not
    /// broadcastable.
    LengthMismatch {
        /// Number of elements in the constructed array.
        data_len: usize,
        /// Length that was requested.
        expected: usize,
    },

    /// Data and mask buffers have different lengths.
    MaskLengthMismatch {
        /// Number of elements in the data buffer.
        data_len: usize,
        /// Number of elements in the mask buffer.
        mask_len: usize,
    },

    /// A zero-dimensional buffer was given where an array is required.
    ZeroDimensional,

    /// A multi-dimensional buffer was given where 1-dimensional data is
    /// required.
    NotOneDimensional {
        /// Shape of the rejected buffer.
        shape: Vec<usize>,
    },

    /// Input collection has no defined element order.
    UnorderedInput,

    /// Integer value does not fit the target dtype.
    IntegerOverflow {
        /// The offending value.
        value: i128,
        /// Target dtype.
        dtype: DType,
    },

    /// Float value has a fractional part or is out of range for an
    /// integer target.
    LossyFloatCast {
        /// The offending value.
        value: f64,
        /// Target dtype.
        dtype: DType,
    },

    /// No conversion is defined between the two dtypes.
    IncompatibleDtype {
        /// Dtype of the value being converted.
        from: DType,
        /// Requested target dtype.
        to: DType,
    },

    /// A missing value was cast to a dtype with no missing representation.
    NullToDense {
        /// Target dtype.
        dtype: DType,
    },

    /// Realized range exceeds every supported integer dtype.
    RangeOverflow {
        /// Range start.
        start: i128,
        /// Range stop (exclusive).
        stop: i128,
        /// Range step.
        step: i128,
    },

    /// Range step must be nonzero.
    ZeroStep,

    /// Temporal value overflows the nanosecond range during unit
    /// canonicalization.
    OutOfBoundsDatetime {
        /// The offending value, in source units.
        value: i64,
        /// Source unit.
        unit: TimeUnit,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ConstructError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ScalarWithoutLength => {
                write!(f, "a length is required when data is a scalar")
            }
            Self::LengthMismatch { data_len, expected } => {
                write!(
                    f,
                    "Length mismatch: data has {data_len} elements, requested length is {expected}"
                )
            }
            Self::MaskLengthMismatch { data_len, mask_len } => {
                write!(
                    f,
                    "Mask length mismatch: data has {data_len} elements, mask has {mask_len}"
                )
            }
            Self::ZeroDimensional => {
                write!(f, "Data must be at least 1-dimensional, got a 0-d buffer")
            }
            Self::NotOneDimensional { shape } => {
                write!(f, "Data must be 1-dimensional, got shape {shape:?} instead")
            }
            Self::UnorderedInput => {
                write!(f, "Unordered collections have no defined element order")
            }
            Self::IntegerOverflow { value, dtype } => {
                write!(f, "Integer {value} overflows {dtype}")
            }
            Self::LossyFloatCast { value, dtype } => {
                write!(f, "Cannot safely cast non-equivalent value {value} to {dtype}")
            }
            Self::IncompatibleDtype { from, to } => {
                write!(f, "Cannot cast {from} to {to}")
            }
            Self::NullToDense { dtype } => {
                write!(f, "Cannot convert missing values to {dtype}")
            }
            Self::RangeOverflow { start, stop, step } => {
                write!(
                    f,
                    "Range {start}..{stop} (step {step}) exceeds every supported integer dtype"
                )
            }
            Self::ZeroStep => write!(f, "Range step must be nonzero"),
            Self::OutOfBoundsDatetime { value, unit } => {
                write!(
                    f,
                    "Temporal value {value} [{unit}] overflows the nanosecond range"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl std::error::Error for ConstructError {}

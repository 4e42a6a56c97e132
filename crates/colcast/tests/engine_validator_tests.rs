#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation checks run ahead of conversion:
//! - Dimensionality (0-d, 1-d, n-d)
//! - Mask pairing
//! - Requested-length agreement
//! - Element-order requirements
//!
//! ## Test Organization
//!
//! 1. **Dimensionality** - Shape acceptance and rejection
//! 2. **Masks and Lengths** - Pairing and exact-match checks
//! 3. **Ordering** - Unordered input rejection

use colcast::internals::engine::validator::Validator;
use colcast::prelude::*;

// ============================================================================
// Dimensionality Tests
// ============================================================================

/// Test 1-d acceptance, including empty buffers.
#[test]
fn test_ensure_1d_accepts() {
    assert!(Validator::ensure_1d(&[3]).is_ok());
    assert!(Validator::ensure_1d(&[0]).is_ok());
}

/// Test 0-d rejection.
#[test]
fn test_ensure_1d_rejects_zero_dim() {
    assert_eq!(
        Validator::ensure_1d(&[]).unwrap_err(),
        ConstructError::ZeroDimensional
    );
}

/// Test n-d rejection carries the offending shape.
#[test]
fn test_ensure_1d_rejects_multi_dim() {
    let err = Validator::ensure_1d(&[2, 3]).unwrap_err();
    assert_eq!(err, ConstructError::NotOneDimensional { shape: vec![2, 3] });

    let err = Validator::ensure_1d(&[4, 1, 1]).unwrap_err();
    assert_eq!(
        err,
        ConstructError::NotOneDimensional {
            shape: vec![4, 1, 1],
        }
    );
}

// ============================================================================
// Masks and Lengths Tests
// ============================================================================

/// Test mask pairing.
#[test]
fn test_ensure_mask() {
    assert!(Validator::ensure_mask(3, 3).is_ok());
    assert_eq!(
        Validator::ensure_mask(3, 2).unwrap_err(),
        ConstructError::MaskLengthMismatch {
            data_len: 3,
            mask_len: 2,
        }
    );
}

/// Test requested-length agreement.
#[test]
fn test_ensure_length() {
    assert!(Validator::ensure_length(3, 3).is_ok());
    assert_eq!(
        Validator::ensure_length(2, 5).unwrap_err(),
        ConstructError::LengthMismatch {
            data_len: 2,
            expected: 5,
        }
    );
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test that unordered inputs are rejected and ordered ones pass.
#[test]
fn test_ensure_ordered() {
    let unordered = ArrayLike::Unordered(vec![Scalar::Int(1)]);
    assert_eq!(
        Validator::ensure_ordered(&unordered).unwrap_err(),
        ConstructError::UnorderedInput
    );

    let ordered = ArrayLike::Values(vec![Scalar::Int(1)]);
    assert!(Validator::ensure_ordered(&ordered).is_ok());
}

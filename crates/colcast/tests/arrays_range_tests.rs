//! Tests for lazy ranges and their realization.
//!
//! These tests verify range semantics:
//! - Half-open length computation for both directions
//! - Zero-step rejection
//! - The Int64 → UInt64 → error realization chain
//!
//! ## Test Organization
//!
//! 1. **Range Semantics** - Construction, length, iteration
//! 2. **Realization** - Dtype fallback chain and overflow

use colcast::prelude::*;

// ============================================================================
// Range Semantics Tests
// ============================================================================

/// Test zero-step rejection.
#[test]
fn test_range_zero_step() {
    let err = RangeSpec::new(0, 10, 0).unwrap_err();
    assert_eq!(err, ConstructError::ZeroStep);
}

/// Test half-open length computation.
#[test]
fn test_range_len() {
    assert_eq!(RangeSpec::new(0, 10, 3).unwrap().len(), 4);
    assert_eq!(RangeSpec::new(0, 9, 3).unwrap().len(), 3);
    assert_eq!(RangeSpec::new(10, 0, -2).unwrap().len(), 5);
    assert_eq!(RangeSpec::new(0, 0, 1).unwrap().len(), 0);
    assert_eq!(RangeSpec::new(5, 4, 1).unwrap().len(), 0);
    assert_eq!(RangeSpec::new(4, 5, -1).unwrap().len(), 0);
    assert!(RangeSpec::new(0, 0, 1).unwrap().is_empty());
}

/// Test value iteration.
#[test]
fn test_range_values() {
    let rng = RangeSpec::new(2, 11, 4).unwrap();
    let values: Vec<i128> = rng.values().collect();
    assert_eq!(values, vec![2, 6, 10]);

    let rng = RangeSpec::new(3, -4, -3).unwrap();
    let values: Vec<i128> = rng.values().collect();
    assert_eq!(values, vec![3, 0, -3]);
}

// ============================================================================
// Realization Tests
// ============================================================================

/// Test the common signed-integer realization.
#[test]
fn test_range_realizes_to_int64() {
    let rng = RangeSpec::new(-2, 3, 1).unwrap();
    let arr = range_to_ndarray(&rng).unwrap();
    match arr {
        CanonicalArray::Int64(a) => assert_eq!(a.to_vec(), vec![-2, -1, 0, 1, 2]),
        other => panic!("expected Int64, got {:?}", other.dtype()),
    }
}

/// Test that an empty range realizes to an empty signed array.
#[test]
fn test_empty_range_realization() {
    let rng = RangeSpec::new(5, 5, 1).unwrap();
    let arr = range_to_ndarray(&rng).unwrap();
    assert_eq!(arr.dtype(), DType::Int64);
    assert!(arr.is_empty());
}

/// Test the unsigned fallback above `i64::MAX`.
#[test]
fn test_range_unsigned_fallback() {
    let start = i128::from(i64::MAX);
    let rng = RangeSpec::new(start, start + 3, 1).unwrap();
    let arr = range_to_ndarray(&rng).unwrap();
    match arr {
        CanonicalArray::UInt64(a) => {
            let max = i64::MAX as u64;
            assert_eq!(a.to_vec(), vec![max, max + 1, max + 2]);
        }
        other => panic!("expected UInt64, got {:?}", other.dtype()),
    }
}

/// Test overflow rejection for ranges no integer dtype can hold.
#[test]
fn test_range_overflow() {
    // Falls below i64::MIN, where no unsigned fallback exists.
    let start = i128::from(i64::MIN) - 10;
    let rng = RangeSpec::new(start, start + 3, 1).unwrap();
    let err = range_to_ndarray(&rng).unwrap_err();
    assert!(matches!(err, ConstructError::RangeOverflow { .. }));

    // Spans both a negative value and a magnitude above i64::MAX.
    let rng = RangeSpec::new(-2, 2 * i128::from(i64::MAX), i128::from(i64::MAX)).unwrap();
    let err = range_to_ndarray(&rng).unwrap_err();
    assert!(matches!(err, ConstructError::RangeOverflow { .. }));

    // Exceeds u64 entirely.
    let start = i128::from(u64::MAX) + 1;
    let rng = RangeSpec::new(start, start + 2, 1).unwrap();
    let err = range_to_ndarray(&rng).unwrap_err();
    assert!(matches!(err, ConstructError::RangeOverflow { .. }));
}

//! Tests for array storage types.
//!
//! These tests verify the array representations beneath the pipeline:
//! - Masked storage invariants and accessors
//! - Temporal canonicalization, the `NAT` sentinel, and overflow
//! - Canonical array dtype/length/null bookkeeping and the scalar view
//! - Column and index wrappers
//!
//! ## Test Organization
//!
//! 1. **Masked Storage** - Construction, masking, iteration
//! 2. **Temporal Storage** - Unit conversion, sentinels, zones
//! 3. **Canonical View** - Dtype, length, scalar projection
//! 4. **Wrappers** - Column and index accessors

use ndarray::Array1;

use colcast::prelude::*;

// ============================================================================
// Masked Storage Tests
// ============================================================================

/// Test that mismatched value/mask lengths are rejected.
#[test]
fn test_masked_length_mismatch() {
    let values = Array1::from(vec![1_i64, 2, 3]);
    let mask = Array1::from(vec![false, true]);
    let err = MaskedArray::new(values, mask).unwrap_err();
    assert_eq!(
        err,
        ConstructError::MaskLengthMismatch {
            data_len: 3,
            mask_len: 2,
        }
    );
}

/// Test construction from optional values.
#[test]
fn test_masked_from_options() {
    let arr = MaskedArray::from_options(vec![Some(1_i64), None, Some(3)]);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.null_count(), 1);
    assert_eq!(arr.get(0), Some(1));
    assert_eq!(arr.get(1), None);
    assert_eq!(arr.get(2), Some(3));

    let collected: Vec<Option<i64>> = arr.iter().collect();
    assert_eq!(collected, vec![Some(1), None, Some(3)]);
}

/// Test the fully-valid constructor.
#[test]
fn test_masked_dense_constructor() {
    let arr = MaskedArray::dense(Array1::from(vec![true, false]));
    assert_eq!(arr.null_count(), 0);
    assert_eq!(arr.get(1), Some(false));
}

// ============================================================================
// Temporal Storage Tests
// ============================================================================

/// Test unit canonicalization to nanoseconds.
#[test]
fn test_datetime_unit_conversion() {
    let arr = DatetimeArray::from_units(
        Array1::from(vec![1_i64, 2]),
        TimeUnit::Seconds,
        Some(TimeZone::Utc),
    )
    .unwrap();
    assert_eq!(arr.values().to_vec(), vec![1_000_000_000, 2_000_000_000]);
    assert_eq!(arr.tz(), Some(TimeZone::Utc));
}

/// Test that `NAT` survives unit conversion untouched.
#[test]
fn test_datetime_nat_passthrough() {
    let arr =
        DatetimeArray::from_units(Array1::from(vec![NAT, 5]), TimeUnit::Seconds, None).unwrap();
    assert_eq!(arr.values()[0], NAT);
    assert_eq!(arr.values()[1], 5_000_000_000);
    assert_eq!(arr.null_count(), 1);
    assert_eq!(arr.get(0), None);
    assert_eq!(arr.get(1), Some(5_000_000_000));
}

/// Test overflow detection during canonicalization.
#[test]
fn test_datetime_overflow() {
    let err = DatetimeArray::from_units(Array1::from(vec![i64::MAX]), TimeUnit::Seconds, None)
        .unwrap_err();
    assert!(matches!(err, ConstructError::OutOfBoundsDatetime { .. }));
}

/// Test timedelta canonicalization.
#[test]
fn test_timedelta_units() {
    let arr = TimedeltaArray::from_units(Array1::from(vec![3_i64, NAT]), TimeUnit::Milliseconds)
        .unwrap();
    assert_eq!(arr.values().to_vec(), vec![3_000_000, NAT]);
    assert_eq!(arr.null_count(), 1);
}

// ============================================================================
// Canonical View Tests
// ============================================================================

/// Test dtype/length/null bookkeeping across variants.
#[test]
fn test_canonical_bookkeeping() {
    let ints = CanonicalArray::Int64(Array1::from(vec![1, 2, 3]));
    assert_eq!(ints.dtype(), DType::Int64);
    assert_eq!(ints.len(), 3);
    assert_eq!(ints.null_count(), 0);
    assert!(!ints.is_empty());

    let floats = CanonicalArray::Float64(Array1::from(vec![1.0, f64::NAN]));
    assert_eq!(floats.null_count(), 1);

    let objects = CanonicalArray::Object(Array1::from(vec![Scalar::Int(1), Scalar::Null]));
    assert_eq!(objects.dtype(), DType::Object);
    assert_eq!(objects.null_count(), 1);

    let masked = CanonicalArray::MaskedInt64(MaskedArray::from_options(vec![None, Some(2)]));
    assert_eq!(masked.dtype(), DType::MaskedInt64);
    assert_eq!(masked.null_count(), 1);
}

/// Test the scalar projection of each storage family.
#[test]
fn test_canonical_scalar_view() {
    let ints = CanonicalArray::Int32(Array1::from(vec![4_i32]));
    assert_eq!(ints.scalar_at(0), Scalar::Int(4));

    let strings = CanonicalArray::Utf8(Array1::from(vec!["a".to_string()]));
    assert_eq!(strings.scalar_at(0), Scalar::Utf8("a".to_string()));

    let dt = CanonicalArray::Datetime(DatetimeArray::from_nanos(
        Array1::from(vec![7, NAT]),
        None,
    ));
    assert_eq!(
        dt.scalar_at(0),
        Scalar::Datetime {
            value: 7,
            unit: TimeUnit::Nanoseconds,
            tz: None,
        }
    );
    assert_eq!(dt.scalar_at(1), Scalar::Null);

    let masked = CanonicalArray::MaskedBool(MaskedArray::from_options(vec![Some(true), None]));
    assert_eq!(masked.scalar_at(0), Scalar::Bool(true));
    assert_eq!(masked.scalar_at(1), Scalar::Null);

    let scalars = masked.to_scalars();
    assert_eq!(scalars, vec![Scalar::Bool(true), Scalar::Null]);
}

// ============================================================================
// Wrapper Tests
// ============================================================================

/// Test column naming and unwrapping.
#[test]
fn test_column_wrapper() {
    let values = CanonicalArray::Int64(Array1::from(vec![1, 2]));

    let anon = Column::new(values.clone());
    assert_eq!(anon.name(), None);
    assert_eq!(anon.len(), 2);

    let named = Column::named("price", values.clone());
    assert_eq!(named.name(), Some("price"));
    assert_eq!(named.values(), &values);
    assert_eq!(named.into_values(), values);
}

/// Test index length for lazy and materialized variants.
#[test]
fn test_index_wrapper() {
    let lazy = IndexArray::Range(RangeSpec::new(0, 10, 2).unwrap());
    assert_eq!(lazy.len(), 5);
    assert!(!lazy.is_empty());

    let dense = IndexArray::Values(CanonicalArray::Int64(Array1::from(vec![1])));
    assert_eq!(dense.len(), 1);
}

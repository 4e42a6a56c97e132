//! Tests for wrapper extraction and datetime-like re-wrapping.
//!
//! These tests verify the unwrap step of the pipeline:
//! - Columns unwrap to their backing arrays
//! - Index wrappers unwrap to keys, lazily for ranges
//! - Range realization on request
//! - Raw temporal buffers re-wrap into extension arrays
//!
//! ## Test Organization
//!
//! 1. **Wrapper Extraction** - Columns, indexes, passthrough
//! 2. **Range Realization** - Lazy vs realized
//! 3. **Datetime-like Re-wrapping** - Canonicalization and errors

use ndarray::{Array1, ArrayD, IxDyn};

use colcast::prelude::*;

fn int_column() -> CanonicalArray {
    CanonicalArray::Int64(Array1::from(vec![1, 2, 3]))
}

// ============================================================================
// Wrapper Extraction Tests
// ============================================================================

/// Test that a column unwraps to its backing array.
#[test]
fn test_extract_column() {
    let wrapped = ArrayLike::from(Column::named("x", int_column()));
    let extracted = extract_array(wrapped, false).unwrap();
    assert_eq!(extracted, ArrayLike::Extension(int_column()));
}

/// Test that a materialized index unwraps to its keys.
#[test]
fn test_extract_index_values() {
    let wrapped = ArrayLike::from(IndexArray::Values(int_column()));
    let extracted = extract_array(wrapped, false).unwrap();
    assert_eq!(extracted, ArrayLike::Extension(int_column()));
}

/// Test non-wrapper passthrough.
#[test]
fn test_extract_passthrough() {
    let values = ArrayLike::Values(vec![Scalar::Int(1)]);
    let extracted = extract_array(values.clone(), true).unwrap();
    assert_eq!(extracted, values);
}

// ============================================================================
// Range Realization Tests
// ============================================================================

/// Test that a range index stays lazy without the realize flag.
#[test]
fn test_extract_range_stays_lazy() {
    let rng = RangeSpec::new(0, 4, 1).unwrap();
    let wrapped = ArrayLike::from(IndexArray::Range(rng));
    let extracted = extract_array(wrapped, false).unwrap();
    assert_eq!(extracted, ArrayLike::Range(rng));
}

/// Test realization of lazy ranges on request.
#[test]
fn test_extract_realizes_ranges() {
    let rng = RangeSpec::new(0, 4, 1).unwrap();

    for input in [
        ArrayLike::from(IndexArray::Range(rng)),
        ArrayLike::Range(rng),
    ] {
        let extracted = extract_array(input, true).unwrap();
        match extracted {
            ArrayLike::Extension(CanonicalArray::Int64(a)) => {
                assert_eq!(a.to_vec(), vec![0, 1, 2, 3]);
            }
            other => panic!("expected realized Int64, got {other:?}"),
        }
    }
}

// ============================================================================
// Datetime-like Re-wrapping Tests
// ============================================================================

/// Test that raw datetime buffers re-wrap with nanosecond storage.
#[test]
fn test_rewrap_datetime() {
    let raw = RawArray::Datetime(
        Array1::from(vec![1_i64, NAT]).into_dyn(),
        TimeUnit::Seconds,
    );
    let wrapped = ensure_wrapped_if_datetimelike(ArrayLike::Raw(raw)).unwrap();
    match wrapped {
        ArrayLike::Extension(CanonicalArray::Datetime(a)) => {
            assert_eq!(a.values().to_vec(), vec![1_000_000_000, NAT]);
            assert_eq!(a.tz(), None);
        }
        other => panic!("expected Datetime extension, got {other:?}"),
    }
}

/// Test that raw timedelta buffers re-wrap.
#[test]
fn test_rewrap_timedelta() {
    let raw = RawArray::Timedelta(
        Array1::from(vec![2_i64]).into_dyn(),
        TimeUnit::Milliseconds,
    );
    let wrapped = ensure_wrapped_if_datetimelike(ArrayLike::Raw(raw)).unwrap();
    match wrapped {
        ArrayLike::Extension(CanonicalArray::Timedelta(a)) => {
            assert_eq!(a.values().to_vec(), vec![2_000_000]);
        }
        other => panic!("expected Timedelta extension, got {other:?}"),
    }
}

/// Test that non-temporal inputs pass through untouched.
#[test]
fn test_rewrap_passthrough() {
    let raw = ArrayLike::from(vec![1_i64, 2]);
    let out = ensure_wrapped_if_datetimelike(raw.clone()).unwrap();
    assert_eq!(out, raw);
}

/// Test that a multi-dimensional temporal buffer is rejected.
#[test]
fn test_rewrap_rejects_multi_dim() {
    let buf = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1_i64, 2, 3, 4]).unwrap();
    let raw = RawArray::Datetime(buf, TimeUnit::Seconds);
    let err = ensure_wrapped_if_datetimelike(ArrayLike::Raw(raw)).unwrap_err();
    assert_eq!(err, ConstructError::NotOneDimensional { shape: vec![2, 2] });
}

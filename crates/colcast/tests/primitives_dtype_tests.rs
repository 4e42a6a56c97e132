//! Tests for the dtype taxonomy and scalar model.
//!
//! These tests verify the primitive abstractions used throughout the
//! crate:
//! - Dtype family predicates (numeric, temporal, masked, extension)
//! - Missing-value representability per dtype
//! - Time unit arithmetic and display
//! - Scalar construction, conversion, and null semantics
//!
//! ## Test Organization
//!
//! 1. **Dtype Predicates** - Family membership checks
//! 2. **Dtype Display** - Diagnostic names
//! 3. **Time Units and Zones** - Tick arithmetic, formatting
//! 4. **Scalars** - Conversions and null semantics

use colcast::prelude::*;

// ============================================================================
// Dtype Predicates Tests
// ============================================================================

/// Test integer/float/numeric family membership.
#[test]
fn test_dtype_numeric_predicates() {
    assert!(DType::Int64.is_integer());
    assert!(DType::Int32.is_integer());
    assert!(DType::UInt64.is_integer());
    assert!(DType::MaskedInt64.is_integer());
    assert!(!DType::Float64.is_integer());

    assert!(DType::Float32.is_float());
    assert!(DType::Float64.is_float());
    assert!(DType::MaskedFloat64.is_float());
    assert!(!DType::Int64.is_float());

    assert!(DType::Int64.is_numeric());
    assert!(DType::Float32.is_numeric());
    assert!(!DType::Bool.is_numeric());
    assert!(!DType::Utf8.is_numeric());
    assert!(!DType::Object.is_numeric());
}

/// Test boolean, temporal, masked, and extension membership.
#[test]
fn test_dtype_family_predicates() {
    assert!(DType::Bool.is_boolean());
    assert!(DType::MaskedBool.is_boolean());
    assert!(!DType::Int64.is_boolean());

    assert!(DType::Datetime(TimeUnit::Nanoseconds).is_temporal());
    assert!(DType::Timedelta(TimeUnit::Seconds).is_temporal());
    assert!(!DType::Int64.is_temporal());

    assert!(DType::MaskedBool.is_masked());
    assert!(DType::MaskedInt64.is_masked());
    assert!(DType::MaskedFloat64.is_masked());
    assert!(!DType::Bool.is_masked());

    // Extension dtypes: masked family, temporal family, strings.
    assert!(DType::MaskedInt64.is_extension());
    assert!(DType::Datetime(TimeUnit::Nanoseconds).is_extension());
    assert!(DType::Utf8.is_extension());
    assert!(!DType::Int64.is_extension());
    assert!(!DType::Object.is_extension());
}

/// Test which dtypes can represent a missing value.
#[test]
fn test_dtype_missing_representation() {
    assert!(DType::Float32.has_missing_repr());
    assert!(DType::Float64.has_missing_repr());
    assert!(DType::Object.has_missing_repr());
    assert!(DType::Datetime(TimeUnit::Nanoseconds).has_missing_repr());
    assert!(DType::Timedelta(TimeUnit::Nanoseconds).has_missing_repr());
    assert!(DType::MaskedBool.has_missing_repr());
    assert!(DType::MaskedInt64.has_missing_repr());
    assert!(DType::MaskedFloat64.has_missing_repr());

    assert!(!DType::Bool.has_missing_repr());
    assert!(!DType::Int32.has_missing_repr());
    assert!(!DType::Int64.has_missing_repr());
    assert!(!DType::UInt64.has_missing_repr());
    assert!(!DType::Utf8.has_missing_repr());
}

// ============================================================================
// Dtype Display Tests
// ============================================================================

/// Test diagnostic names for all dtypes.
#[test]
fn test_dtype_display() {
    assert_eq!(DType::Bool.to_string(), "bool");
    assert_eq!(DType::Int64.to_string(), "int64");
    assert_eq!(DType::UInt64.to_string(), "uint64");
    assert_eq!(DType::Float64.to_string(), "float64");
    assert_eq!(DType::Utf8.to_string(), "utf8");
    assert_eq!(DType::Object.to_string(), "object");
    assert_eq!(
        DType::Datetime(TimeUnit::Nanoseconds).to_string(),
        "datetime[ns]"
    );
    assert_eq!(
        DType::Timedelta(TimeUnit::Milliseconds).to_string(),
        "timedelta[ms]"
    );
    assert_eq!(DType::MaskedInt64.to_string(), "int64 (masked)");
}

// ============================================================================
// Time Units and Zones Tests
// ============================================================================

/// Test nanosecond multipliers and default unit.
#[test]
fn test_time_unit_ticks() {
    assert_eq!(TimeUnit::Seconds.nanos_per_tick(), 1_000_000_000);
    assert_eq!(TimeUnit::Milliseconds.nanos_per_tick(), 1_000_000);
    assert_eq!(TimeUnit::Microseconds.nanos_per_tick(), 1_000);
    assert_eq!(TimeUnit::Nanoseconds.nanos_per_tick(), 1);
    assert_eq!(TimeUnit::default(), TimeUnit::Nanoseconds);
}

/// Test zone formatting for UTC and fixed offsets.
#[test]
fn test_time_zone_display() {
    assert_eq!(TimeZone::Utc.to_string(), "UTC");
    assert_eq!(TimeZone::FixedOffset(3600).to_string(), "+01:00");
    assert_eq!(TimeZone::FixedOffset(-19800).to_string(), "-05:30");
    assert_eq!(TimeZone::FixedOffset(0).to_string(), "+00:00");
}

// ============================================================================
// Scalar Tests
// ============================================================================

/// Test null semantics: `Null` and NaN floats are missing.
#[test]
fn test_scalar_is_null() {
    assert!(Scalar::Null.is_null());
    assert!(Scalar::Float(f64::NAN).is_null());
    assert!(!Scalar::Float(0.0).is_null());
    assert!(!Scalar::Int(0).is_null());
    assert!(!Scalar::Bool(false).is_null());
    assert!(!Scalar::Utf8(String::new()).is_null());
}

/// Test conversions from native Rust types.
#[test]
fn test_scalar_conversions() {
    assert_eq!(Scalar::from(true), Scalar::Bool(true));
    assert_eq!(Scalar::from(5_i32), Scalar::Int(5));
    assert_eq!(Scalar::from(5_i64), Scalar::Int(5));
    assert_eq!(Scalar::from(5_u64), Scalar::UInt(5));
    assert_eq!(Scalar::from(2.5_f32), Scalar::Float(2.5));
    assert_eq!(Scalar::from(2.5_f64), Scalar::Float(2.5));
    assert_eq!(Scalar::from("abc"), Scalar::Utf8("abc".to_string()));
    assert_eq!(Scalar::from(Some(7_i64)), Scalar::Int(7));
    assert_eq!(Scalar::from(None::<i64>), Scalar::Null);
}

/// Test temporal scalar constructors.
#[test]
fn test_scalar_temporal_constructors() {
    let dt = Scalar::datetime(10, TimeUnit::Seconds);
    assert_eq!(
        dt,
        Scalar::Datetime {
            value: 10,
            unit: TimeUnit::Seconds,
            tz: None,
        }
    );

    let dt_tz = Scalar::datetime_tz(10, TimeUnit::Seconds, TimeZone::Utc);
    assert!(matches!(
        dt_tz,
        Scalar::Datetime {
            tz: Some(TimeZone::Utc),
            ..
        }
    ));

    let td = Scalar::timedelta(3, TimeUnit::Milliseconds);
    assert_eq!(
        td,
        Scalar::Timedelta {
            value: 3,
            unit: TimeUnit::Milliseconds,
        }
    );
}

/// Test scalar display formatting.
#[test]
fn test_scalar_display() {
    assert_eq!(Scalar::Null.to_string(), "null");
    assert_eq!(Scalar::Bool(true).to_string(), "true");
    assert_eq!(Scalar::Int(-3).to_string(), "-3");
    assert_eq!(Scalar::Float(2.5).to_string(), "2.5");
    assert_eq!(Scalar::Utf8("x".to_string()).to_string(), "x");
}

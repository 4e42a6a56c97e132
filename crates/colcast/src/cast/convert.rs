//! Whole-array casting and scalar broadcast.
//!
//! ## Purpose
//!
//! This module converts heterogeneous scalars into a canonical array of
//! a requested dtype. It implements the per-dtype missing-value policy
//! (NaN for floats, `NAT` for temporals, mask bits for the masked
//! family, a typed error for everything dense) and the scalar broadcast
//! used when a single value is constructed against a length.
//!
//! ## Design notes
//!
//! * **Scalar view as the bridge**: Re-dtyping an existing canonical
//!   array goes through its scalar projection, so every conversion rule
//!   lives exactly once.
//! * **No parsing**: Strings never convert into numbers or datetimes;
//!   the conversion is undefined, not lossy.
//! * **Formatting is opt-in**: Values format into `Utf8` only when that
//!   dtype was explicitly requested; inference never lands there from
//!   non-string data.
//! * **Temporal targets**: Integer scalars are interpreted as epoch
//!   offsets in the requested unit; datetime scalars convert from their
//!   own unit. A zone-mixed run cannot cast to a single datetime dtype.
//!
//! ## Invariants
//!
//! * The returned array's dtype equals the requested dtype, except that
//!   temporal requests canonicalize to nanosecond storage.
//!
//! ## Non-goals
//!
//! * This module does not choose dtypes (see `infer`).
//! * This module does not validate shapes or lengths (see `engine`).

// External dependencies
use ndarray::Array1;
use num_traits::NumCast;

// Internal dependencies
use crate::arrays::canonical::CanonicalArray;
use crate::arrays::masked::MaskedArray;
use crate::arrays::temporal::{checked_nanos, DatetimeArray, TimedeltaArray, NAT};
use crate::cast::numeric;
use crate::infer::temporal::common_zone;
use crate::primitives::dtype::{DType, TimeUnit};
use crate::primitives::errors::ConstructError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Scalar-level conversions
// ============================================================================

/// Dtype naming the scalar's own kind, for error context.
fn kind(s: &Scalar) -> DType {
    match s {
        Scalar::Null => DType::Object,
        Scalar::Bool(_) => DType::Bool,
        Scalar::Int(_) => DType::Int64,
        Scalar::UInt(_) => DType::UInt64,
        Scalar::Float(_) => DType::Float64,
        Scalar::Utf8(_) => DType::Utf8,
        Scalar::Datetime { unit, .. } => DType::Datetime(*unit),
        Scalar::Timedelta { unit, .. } => DType::Timedelta(*unit),
    }
}

/// Convert a scalar into an integer primitive.
fn to_integer<T: NumCast>(s: &Scalar, dtype: DType) -> Result<T, ConstructError> {
    match s {
        Scalar::Bool(b) => numeric::cast_bool(*b, dtype),
        Scalar::Int(v) => numeric::cast_int(*v, dtype),
        Scalar::UInt(v) => numeric::cast_uint(*v, dtype),
        Scalar::Float(v) => numeric::cast_float_to_int(*v, dtype),
        Scalar::Null => Err(ConstructError::NullToDense { dtype }),
        other => Err(ConstructError::IncompatibleDtype {
            from: kind(other),
            to: dtype,
        }),
    }
}

/// Convert a scalar into a float primitive; `Null` becomes NaN.
fn to_float<T: NumCast>(s: &Scalar, dtype: DType) -> Result<T, ConstructError> {
    match s {
        Scalar::Null => numeric::cast_float(f64::NAN, dtype),
        Scalar::Bool(b) => numeric::cast_bool(*b, dtype),
        Scalar::Int(v) => numeric::cast_int(*v, dtype),
        Scalar::UInt(v) => numeric::cast_uint(*v, dtype),
        Scalar::Float(v) => numeric::cast_float(*v, dtype),
        other => Err(ConstructError::IncompatibleDtype {
            from: kind(other),
            to: dtype,
        }),
    }
}

/// Convert a scalar into a boolean; numeric values use truthiness.
fn to_bool(s: &Scalar, dtype: DType) -> Result<bool, ConstructError> {
    match s {
        Scalar::Bool(b) => Ok(*b),
        Scalar::Int(v) => Ok(*v != 0),
        Scalar::UInt(v) => Ok(*v != 0),
        Scalar::Float(v) if !v.is_nan() => Ok(*v != 0.0),
        Scalar::Null | Scalar::Float(_) => Err(ConstructError::NullToDense { dtype }),
        other => Err(ConstructError::IncompatibleDtype {
            from: kind(other),
            to: dtype,
        }),
    }
}

/// Format a scalar into a string.
fn to_string_value(s: &Scalar, dtype: DType) -> Result<String, ConstructError> {
    match s {
        Scalar::Bool(_) | Scalar::Int(_) | Scalar::UInt(_) | Scalar::Float(_) => {
            Ok(s.to_string())
        }
        Scalar::Utf8(v) => Ok(v.clone()),
        Scalar::Null => Err(ConstructError::NullToDense { dtype }),
        other => Err(ConstructError::IncompatibleDtype {
            from: kind(other),
            to: dtype,
        }),
    }
}

/// Convert a scalar into datetime nanoseconds; `Null` becomes `NAT`,
/// integers are epoch offsets in `unit`.
fn to_datetime_nanos(s: &Scalar, unit: TimeUnit, dtype: DType) -> Result<i64, ConstructError> {
    match s {
        Scalar::Null => Ok(NAT),
        Scalar::Datetime {
            value,
            unit: own_unit,
            ..
        } => checked_nanos(*value, *own_unit),
        Scalar::Int(v) => checked_nanos(*v, unit),
        other => Err(ConstructError::IncompatibleDtype {
            from: kind(other),
            to: dtype,
        }),
    }
}

/// Convert a scalar into timedelta nanoseconds; `Null` becomes `NAT`,
/// integers are durations in `unit`.
fn to_timedelta_nanos(s: &Scalar, unit: TimeUnit, dtype: DType) -> Result<i64, ConstructError> {
    match s {
        Scalar::Null => Ok(NAT),
        Scalar::Timedelta {
            value,
            unit: own_unit,
        } => checked_nanos(*value, *own_unit),
        Scalar::Int(v) => checked_nanos(*v, unit),
        other => Err(ConstructError::IncompatibleDtype {
            from: kind(other),
            to: dtype,
        }),
    }
}

// ============================================================================
// Whole-array cast
// ============================================================================

/// Convert heterogeneous scalars into a canonical array of the
/// requested dtype.
pub fn try_cast(values: &[Scalar], dtype: DType) -> Result<CanonicalArray, ConstructError> {
    match dtype {
        DType::Bool => {
            let out: Array1<bool> = values
                .iter()
                .map(|s| to_bool(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Bool(out))
        }
        DType::Int32 => {
            let out: Array1<i32> = values
                .iter()
                .map(|s| to_integer(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Int32(out))
        }
        DType::Int64 => {
            let out: Array1<i64> = values
                .iter()
                .map(|s| to_integer(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Int64(out))
        }
        DType::UInt64 => {
            let out: Array1<u64> = values
                .iter()
                .map(|s| to_integer(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::UInt64(out))
        }
        DType::Float32 => {
            let out: Array1<f32> = values
                .iter()
                .map(|s| to_float(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Float32(out))
        }
        DType::Float64 => {
            let out: Array1<f64> = values
                .iter()
                .map(|s| to_float(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Float64(out))
        }
        DType::Utf8 => {
            let out: Array1<String> = values
                .iter()
                .map(|s| to_string_value(s, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Utf8(out))
        }
        DType::Object => Ok(CanonicalArray::Object(Array1::from_vec(values.to_vec()))),
        DType::Datetime(unit) => {
            let tz = common_zone(values).ok_or(ConstructError::IncompatibleDtype {
                from: DType::Object,
                to: dtype,
            })?;
            let out: Array1<i64> = values
                .iter()
                .map(|s| to_datetime_nanos(s, unit, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Datetime(DatetimeArray::from_nanos(out, tz)))
        }
        DType::Timedelta(unit) => {
            let out: Array1<i64> = values
                .iter()
                .map(|s| to_timedelta_nanos(s, unit, dtype))
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::Timedelta(TimedeltaArray::from_nanos(out)))
        }
        DType::MaskedBool => {
            let out: Vec<Option<bool>> = values
                .iter()
                .map(|s| {
                    if s.is_null() {
                        Ok(None)
                    } else {
                        to_bool(s, dtype).map(Some)
                    }
                })
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::MaskedBool(MaskedArray::from_options(out)))
        }
        DType::MaskedInt64 => {
            let out: Vec<Option<i64>> = values
                .iter()
                .map(|s| {
                    if s.is_null() {
                        Ok(None)
                    } else {
                        to_integer(s, dtype).map(Some)
                    }
                })
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::MaskedInt64(MaskedArray::from_options(out)))
        }
        DType::MaskedFloat64 => {
            let out: Vec<Option<f64>> = values
                .iter()
                .map(|s| {
                    if s.is_null() {
                        Ok(None)
                    } else {
                        to_float(s, dtype).map(Some)
                    }
                })
                .collect::<Result<_, _>>()?;
            Ok(CanonicalArray::MaskedFloat64(MaskedArray::from_options(out)))
        }
    }
}

// ============================================================================
// Broadcast and re-dtype
// ============================================================================

/// Broadcast a single scalar into an array of `len` elements.
pub fn construct_full(
    value: &Scalar,
    len: usize,
    dtype: DType,
) -> Result<CanonicalArray, ConstructError> {
    let values = vec![value.clone(); len];
    try_cast(&values, dtype)
}

/// Convert an existing canonical array to another dtype.
///
/// Identity requests return the array unchanged; everything else goes
/// through the scalar view.
pub fn cast_canonical(
    array: CanonicalArray,
    dtype: DType,
) -> Result<CanonicalArray, ConstructError> {
    if array.dtype() == dtype {
        return Ok(array);
    }
    try_cast(&array.to_scalars(), dtype)
}

//! Canonical array representation.
//!
//! ## Purpose
//!
//! This module defines [`CanonicalArray`], the output type of every
//! construction routine: a 1-dimensional array with a definite dtype.
//! One variant exists per dtype, so dispatch on the result is a single
//! `match`.
//!
//! ## Design notes
//!
//! * **Dual granularity**: Callers match the enum for broad category
//!   handling or take the inner storage for concrete-type handling.
//! * **Scalar view**: `scalar_at`/`to_scalars` project any variant into
//!   the dynamically-typed [`Scalar`] model; the cast layer is built on
//!   this view.
//! * **1-D only**: Multi-dimensional data never reaches this type; the
//!   engine validates dimensionality first.
//!
//! ## Invariants
//!
//! * `dtype()` and the carried storage always agree.
//! * Temporal variants store nanoseconds (see `arrays::temporal`).
//!
//! ## Non-goals
//!
//! * This module does not perform inference, casting, or validation.

// External dependencies
use ndarray::Array1;

// Internal dependencies
use crate::arrays::masked::MaskedArray;
use crate::arrays::temporal::{DatetimeArray, TimedeltaArray, NAT};
use crate::primitives::dtype::{DType, TimeUnit};
use crate::primitives::scalar::Scalar;

// ============================================================================
// CanonicalArray
// ============================================================================

/// A 1-dimensional array with a definite dtype.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalArray {
    /// Dense booleans.
    Bool(Array1<bool>),

    /// Dense 32-bit signed integers.
    Int32(Array1<i32>),

    /// Dense 64-bit signed integers.
    Int64(Array1<i64>),

    /// Dense 64-bit unsigned integers.
    UInt64(Array1<u64>),

    /// Dense 32-bit floats.
    Float32(Array1<f32>),

    /// Dense 64-bit floats; NaN marks missing values.
    Float64(Array1<f64>),

    /// UTF-8 strings.
    Utf8(Array1<String>),

    /// Heterogeneous scalars.
    Object(Array1<Scalar>),

    /// Wrapped datetimes (nanoseconds, optional zone).
    Datetime(DatetimeArray),

    /// Wrapped durations (nanoseconds).
    Timedelta(TimedeltaArray),

    /// Validity-masked booleans.
    MaskedBool(MaskedArray<bool>),

    /// Validity-masked 64-bit signed integers.
    MaskedInt64(MaskedArray<i64>),

    /// Validity-masked 64-bit floats.
    MaskedFloat64(MaskedArray<f64>),
}

impl CanonicalArray {
    /// Dtype of this array.
    pub fn dtype(&self) -> DType {
        match self {
            Self::Bool(_) => DType::Bool,
            Self::Int32(_) => DType::Int32,
            Self::Int64(_) => DType::Int64,
            Self::UInt64(_) => DType::UInt64,
            Self::Float32(_) => DType::Float32,
            Self::Float64(_) => DType::Float64,
            Self::Utf8(_) => DType::Utf8,
            Self::Object(_) => DType::Object,
            Self::Datetime(_) => DType::Datetime(TimeUnit::Nanoseconds),
            Self::Timedelta(_) => DType::Timedelta(TimeUnit::Nanoseconds),
            Self::MaskedBool(_) => DType::MaskedBool,
            Self::MaskedInt64(_) => DType::MaskedInt64,
            Self::MaskedFloat64(_) => DType::MaskedFloat64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(a) => a.len(),
            Self::Int32(a) => a.len(),
            Self::Int64(a) => a.len(),
            Self::UInt64(a) => a.len(),
            Self::Float32(a) => a.len(),
            Self::Float64(a) => a.len(),
            Self::Utf8(a) => a.len(),
            Self::Object(a) => a.len(),
            Self::Datetime(a) => a.len(),
            Self::Timedelta(a) => a.len(),
            Self::MaskedBool(a) => a.len(),
            Self::MaskedInt64(a) => a.len(),
            Self::MaskedFloat64(a) => a.len(),
        }
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing elements under this dtype's missing convention.
    pub fn null_count(&self) -> usize {
        match self {
            Self::Float32(a) => a.iter().filter(|v| v.is_nan()).count(),
            Self::Float64(a) => a.iter().filter(|v| v.is_nan()).count(),
            Self::Object(a) => a.iter().filter(|s| s.is_null()).count(),
            Self::Datetime(a) => a.null_count(),
            Self::Timedelta(a) => a.null_count(),
            Self::MaskedBool(a) => a.null_count(),
            Self::MaskedInt64(a) => a.null_count(),
            Self::MaskedFloat64(a) => a.null_count(),
            _ => 0,
        }
    }

    /// Element at `i`, projected into the scalar model.
    pub fn scalar_at(&self, i: usize) -> Scalar {
        match self {
            Self::Bool(a) => Scalar::Bool(a[i]),
            Self::Int32(a) => Scalar::Int(i64::from(a[i])),
            Self::Int64(a) => Scalar::Int(a[i]),
            Self::UInt64(a) => Scalar::UInt(a[i]),
            Self::Float32(a) => Scalar::Float(f64::from(a[i])),
            Self::Float64(a) => Scalar::Float(a[i]),
            Self::Utf8(a) => Scalar::Utf8(a[i].clone()),
            Self::Object(a) => a[i].clone(),
            Self::Datetime(a) => match a.values()[i] {
                NAT => Scalar::Null,
                v => Scalar::Datetime {
                    value: v,
                    unit: TimeUnit::Nanoseconds,
                    tz: a.tz(),
                },
            },
            Self::Timedelta(a) => match a.values()[i] {
                NAT => Scalar::Null,
                v => Scalar::Timedelta {
                    value: v,
                    unit: TimeUnit::Nanoseconds,
                },
            },
            Self::MaskedBool(a) => a.get(i).map_or(Scalar::Null, Scalar::Bool),
            Self::MaskedInt64(a) => a.get(i).map_or(Scalar::Null, Scalar::Int),
            Self::MaskedFloat64(a) => a.get(i).map_or(Scalar::Null, Scalar::Float),
        }
    }

    /// Project the whole array into the scalar model.
    pub fn to_scalars(&self) -> Vec<Scalar> {
        (0..self.len()).map(|i| self.scalar_at(i)).collect()
    }
}

//! Input abstractions for array construction.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over everything the
//! construction pipeline accepts: typed n-dimensional buffers,
//! heterogeneous value lists, masked buffers, lazy ranges, scalars,
//! already-canonical arrays, and higher-level wrappers. `From`
//! implementations bridge native Rust collections and `ndarray` types
//! into this model through a single interface.
//!
//! ## Design notes
//!
//! * **One entry enum**: Every construction routine takes [`ArrayLike`];
//!   dispatch happens once, in the engine.
//! * **Shape is preserved**: Raw buffers keep their dimensionality so
//!   the engine can reject multi-dimensional data with the actual shape
//!   in the error.
//! * **Unordered inputs are marked, not silently ordered**: Set-like
//!   collections convert to a dedicated variant that the pipeline
//!   rejects.
//!
//! ## Key concepts
//!
//! * **Raw buffer**: A typed `ndarray` buffer of any dimensionality, not
//!   yet validated or wrapped.
//! * **Masked input**: A raw buffer paired with a parallel boolean mask
//!   (`true` = missing).
//!
//! ## Non-goals
//!
//! * This module does not validate, infer, or convert; it only models
//!   inputs.

// External dependencies
use ndarray::{Array1, ArrayD, Ix1};
use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Range;

// Internal dependencies
use crate::arrays::canonical::CanonicalArray;
use crate::arrays::masked::MaskedArray;
use crate::arrays::range::RangeSpec;
use crate::arrays::temporal::{DatetimeArray, TimedeltaArray};
use crate::arrays::wrapper::{Column, IndexArray};
use crate::primitives::dtype::{DType, TimeUnit};
use crate::primitives::errors::ConstructError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// RawArray
// ============================================================================

/// A typed n-dimensional input buffer, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub enum RawArray {
    /// Booleans.
    Bool(ArrayD<bool>),

    /// 32-bit signed integers.
    Int32(ArrayD<i32>),

    /// 64-bit signed integers.
    Int64(ArrayD<i64>),

    /// 64-bit unsigned integers.
    UInt64(ArrayD<u64>),

    /// 32-bit floats.
    Float32(ArrayD<f32>),

    /// 64-bit floats.
    Float64(ArrayD<f64>),

    /// UTF-8 strings.
    Utf8(ArrayD<String>),

    /// Heterogeneous scalars.
    Object(ArrayD<Scalar>),

    /// Unwrapped datetimes: epoch offsets in the given unit.
    Datetime(ArrayD<i64>, TimeUnit),

    /// Unwrapped durations in the given unit.
    Timedelta(ArrayD<i64>, TimeUnit),
}

impl RawArray {
    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Buffer shape.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Bool(a) => a.shape(),
            Self::Int32(a) => a.shape(),
            Self::Int64(a) => a.shape(),
            Self::UInt64(a) => a.shape(),
            Self::Float32(a) => a.shape(),
            Self::Float64(a) => a.shape(),
            Self::Utf8(a) => a.shape(),
            Self::Object(a) => a.shape(),
            Self::Datetime(a, _) => a.shape(),
            Self::Timedelta(a, _) => a.shape(),
        }
    }

    /// Dtype the buffer would carry once canonicalized.
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
            Self::Datetime(_, unit) => DType::Datetime(*unit),
            Self::Timedelta(_, unit) => DType::Timedelta(*unit),
        }
    }

    /// Total number of elements across all dimensions.
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// Whether the buffer has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reduce a dynamic-dimensional buffer to 1-d.
///
/// Callers validate dimensionality first; the error paths here keep the
/// conversion total.
pub(crate) fn to_one_dim<T>(a: ArrayD<T>) -> Result<Array1<T>, ConstructError> {
    if a.ndim() == 0 {
        return Err(ConstructError::ZeroDimensional);
    }
    let shape = a.shape().to_vec();
    a.into_dimensionality::<Ix1>()
        .map_err(|_| ConstructError::NotOneDimensional { shape })
}

// ============================================================================
// MaskedInput
// ============================================================================

/// A raw buffer paired with a parallel validity mask (`true` = missing).
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedInput {
    /// The value buffer.
    pub data: RawArray,

    /// The mask buffer; must match `data` in length.
    pub mask: ArrayD<bool>,
}

impl MaskedInput {
    /// Pair a buffer with its mask. Lengths are validated by the
    /// sanitization pipeline, not here.
    pub fn new(data: RawArray, mask: ArrayD<bool>) -> Self {
        Self { data, mask }
    }
}

// ============================================================================
// ArrayLike
// ============================================================================

/// Unified input to the construction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayLike {
    /// A single value, broadcast against a requested length.
    Scalar(Scalar),

    /// A heterogeneous value list in element order.
    Values(Vec<Scalar>),

    /// Values from a collection with no defined order; always rejected.
    Unordered(Vec<Scalar>),

    /// A typed n-dimensional buffer.
    Raw(RawArray),

    /// A raw buffer with a validity mask.
    Masked(MaskedInput),

    /// A lazy integer range.
    Range(RangeSpec),

    /// An already-canonical array.
    Extension(CanonicalArray),

    /// A labeled column wrapper.
    Column(Box<Column>),

    /// An index wrapper.
    Index(Box<IndexArray>),
}

// ============================================================================
// Conversions: dense buffers
// ============================================================================

macro_rules! impl_from_dense {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$t>> for ArrayLike {
                fn from(v: Vec<$t>) -> Self {
                    Self::Raw(RawArray::$variant(Array1::from_vec(v).into_dyn()))
                }
            }

            impl From<&[$t]> for ArrayLike {
                fn from(v: &[$t]) -> Self {
                    Self::Raw(RawArray::$variant(Array1::from(v.to_vec()).into_dyn()))
                }
            }

            impl From<Array1<$t>> for ArrayLike {
                fn from(a: Array1<$t>) -> Self {
                    Self::Raw(RawArray::$variant(a.into_dyn()))
                }
            }

            impl From<ArrayD<$t>> for ArrayLike {
                fn from(a: ArrayD<$t>) -> Self {
                    Self::Raw(RawArray::$variant(a))
                }
            }
        )*
    };
}

impl_from_dense!(
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
);

impl From<Vec<String>> for ArrayLike {
    fn from(v: Vec<String>) -> Self {
        Self::Raw(RawArray::Utf8(Array1::from_vec(v).into_dyn()))
    }
}

impl From<Vec<&str>> for ArrayLike {
    fn from(v: Vec<&str>) -> Self {
        let v: Vec<String> = v.into_iter().map(str::to_string).collect();
        v.into()
    }
}

// ============================================================================
// Conversions: heterogeneous values and scalars
// ============================================================================

impl From<Vec<Scalar>> for ArrayLike {
    fn from(v: Vec<Scalar>) -> Self {
        Self::Values(v)
    }
}

impl<T: Into<Scalar>> From<Vec<Option<T>>> for ArrayLike {
    fn from(v: Vec<Option<T>>) -> Self {
        Self::Values(v.into_iter().map(Scalar::from).collect())
    }
}

impl From<Scalar> for ArrayLike {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<bool> for ArrayLike {
    fn from(v: bool) -> Self {
        Self::Scalar(Scalar::Bool(v))
    }
}

impl From<i64> for ArrayLike {
    fn from(v: i64) -> Self {
        Self::Scalar(Scalar::Int(v))
    }
}

impl From<f64> for ArrayLike {
    fn from(v: f64) -> Self {
        Self::Scalar(Scalar::Float(v))
    }
}

impl From<&str> for ArrayLike {
    fn from(v: &str) -> Self {
        Self::Scalar(Scalar::Utf8(v.to_string()))
    }
}

// ============================================================================
// Conversions: ranges, sets, wrappers
// ============================================================================

impl From<Range<i64>> for ArrayLike {
    fn from(r: Range<i64>) -> Self {
        Self::Range(RangeSpec::with_unit_step(
            i128::from(r.start),
            i128::from(r.end),
        ))
    }
}

impl From<RangeSpec> for ArrayLike {
    fn from(r: RangeSpec) -> Self {
        Self::Range(r)
    }
}

impl<T: Into<Scalar> + Eq + Hash> From<HashSet<T>> for ArrayLike {
    fn from(v: HashSet<T>) -> Self {
        Self::Unordered(v.into_iter().map(Into::into).collect())
    }
}

impl From<RawArray> for ArrayLike {
    fn from(a: RawArray) -> Self {
        Self::Raw(a)
    }
}

impl From<MaskedInput> for ArrayLike {
    fn from(m: MaskedInput) -> Self {
        Self::Masked(m)
    }
}

impl From<CanonicalArray> for ArrayLike {
    fn from(a: CanonicalArray) -> Self {
        Self::Extension(a)
    }
}

impl From<DatetimeArray> for ArrayLike {
    fn from(a: DatetimeArray) -> Self {
        Self::Extension(CanonicalArray::Datetime(a))
    }
}

impl From<TimedeltaArray> for ArrayLike {
    fn from(a: TimedeltaArray) -> Self {
        Self::Extension(CanonicalArray::Timedelta(a))
    }
}

impl From<MaskedArray<bool>> for ArrayLike {
    fn from(a: MaskedArray<bool>) -> Self {
        Self::Extension(CanonicalArray::MaskedBool(a))
    }
}

impl From<MaskedArray<i64>> for ArrayLike {
    fn from(a: MaskedArray<i64>) -> Self {
        Self::Extension(CanonicalArray::MaskedInt64(a))
    }
}

impl From<MaskedArray<f64>> for ArrayLike {
    fn from(a: MaskedArray<f64>) -> Self {
        Self::Extension(CanonicalArray::MaskedFloat64(a))
    }
}

impl From<Column> for ArrayLike {
    fn from(c: Column) -> Self {
        Self::Column(Box::new(c))
    }
}

impl From<IndexArray> for ArrayLike {
    fn from(i: IndexArray) -> Self {
        Self::Index(Box::new(i))
    }
}

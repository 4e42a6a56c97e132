//! The central sanitization pipeline.
//!
//! ## Purpose
//!
//! This module normalizes any construction input into a canonical
//! 1-dimensional array with a definite dtype: it unwraps containers,
//! realizes ranges, broadcasts scalars, validates shapes and masks,
//! infers a dtype when none was requested, and delegates value
//! conversion to the cast layer.
//!
//! ## Design notes
//!
//! * **One pipeline, two flavors**: The `nullable` option switches
//!   inference from the plain-buffer lattice to the masked-preferring
//!   one; the pipeline structure is identical.
//! * **Validate, then convert**: Shape and mask checks run before any
//!   value is touched.
//! * **Dtype requests win**: An explicit dtype bypasses inference and
//!   routes straight to the cast layer, which decides representability.
//!
//! ## Key concepts
//!
//! * **Masked degradation**: A masked input with no masked slots is
//!   exactly its underlying buffer and takes the plain path.
//! * **String guard**: A string buffer with no requested dtype lands on
//!   `Object` in the dense flavor; silent stringification of a column is
//!   never an inference result.
//! * **Length-1 broadcast**: A single-element result repeats up to a
//!   requested length; any other length disagreement is an error.
//!
//! ## Invariants
//!
//! * The returned array is 1-dimensional and, when a length was
//!   requested, exactly that long.
//!
//! ## Non-goals
//!
//! * This module does not define conversion rules (see `cast`).
//! * This module does not align or reindex data.

// Internal dependencies
use crate::arrays::canonical::CanonicalArray;
use crate::arrays::input::{to_one_dim, ArrayLike, MaskedInput, RawArray};
use crate::arrays::range::range_to_ndarray;
use crate::cast::convert::{cast_canonical, construct_full, try_cast};
use crate::engine::extract::{ensure_wrapped_if_datetimelike, extract_array};
use crate::engine::validator::Validator;
use crate::infer::lattice::{infer_dtype, infer_scalar_dtype, nullable_counterpart};
use crate::primitives::dtype::DType;
use crate::primitives::errors::ConstructError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Options
// ============================================================================

/// Configuration for one sanitization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Requested dtype; inferred from the data when absent.
    pub dtype: Option<DType>,

    /// Requested length; required for scalar input, broadcast target for
    /// length-1 results, exact-match constraint otherwise.
    pub length: Option<usize>,

    /// Prefer the masked dtype family when inferring.
    pub nullable: bool,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Normalize any construction input into a canonical array.
pub fn sanitize_array(
    data: ArrayLike,
    options: &SanitizeOptions,
) -> Result<CanonicalArray, ConstructError> {
    Validator::ensure_ordered(&data)?;

    // Unwrap containers; ranges stay lazy so a dtype request can steer
    // their realization.
    let data = extract_array(data, false)?;

    let result = match data {
        ArrayLike::Unordered(_) => return Err(ConstructError::UnorderedInput),

        ArrayLike::Scalar(s) => {
            let len = options
                .length
                .ok_or(ConstructError::ScalarWithoutLength)?;
            let dtype = match options.dtype {
                Some(dtype) => dtype,
                None => infer_scalar_dtype(&s, options.nullable),
            };
            construct_full(&s, len, dtype)?
        }

        ArrayLike::Values(values) => sanitize_values(&values, options)?,

        ArrayLike::Range(rng) => {
            let arr = range_to_ndarray(&rng)?;
            match options.dtype {
                Some(dtype) => cast_canonical(arr, dtype)?,
                None => arr,
            }
        }

        ArrayLike::Raw(raw) => match ensure_wrapped_if_datetimelike(ArrayLike::Raw(raw))? {
            ArrayLike::Extension(arr) => finish_dtype(arr, options)?,
            ArrayLike::Raw(raw) => sanitize_dense(raw, options)?,
            other => sanitize_array(other, options)?,
        },

        ArrayLike::Masked(masked) => sanitize_masked_array(masked, options)?,

        ArrayLike::Extension(arr) => finish_dtype(arr, options)?,

        other @ (ArrayLike::Column(_) | ArrayLike::Index(_)) => sanitize_array(other, options)?,
    };

    let result = maybe_repeat(result, options.length)?;
    if let Some(expected) = options.length {
        Validator::ensure_length(result.len(), expected)?;
    }
    Ok(result)
}

/// Normalize a masked buffer.
///
/// A mask with no set bits degrades to the plain buffer path. Otherwise
/// the masked slots become missing values and the run re-enters the
/// inference/cast machinery: the dense flavor upcasts (NaN-filled floats,
/// `Object` for non-numeric data), the nullable flavor keeps the element
/// type behind a validity mask.
pub fn sanitize_masked_array(
    masked: MaskedInput,
    options: &SanitizeOptions,
) -> Result<CanonicalArray, ConstructError> {
    Validator::ensure_1d(masked.data.shape())?;
    Validator::ensure_1d(masked.mask.shape())?;
    Validator::ensure_mask(masked.data.len(), masked.mask.len())?;

    let mask = to_one_dim(masked.mask)?;
    if !mask.iter().any(|&m| m) {
        return sanitize_array(ArrayLike::Raw(masked.data), options);
    }

    // Project the buffer through the scalar view and punch the holes.
    let base = sanitize_dense(
        masked.data,
        &SanitizeOptions {
            dtype: None,
            length: None,
            nullable: false,
        },
    )?;
    let mut values = base.to_scalars();
    for (v, &m) in values.iter_mut().zip(mask.iter()) {
        if m {
            *v = Scalar::Null;
        }
    }
    sanitize_values(&values, options)
}

// ============================================================================
// Pipeline stages
// ============================================================================

/// Convert heterogeneous values, inferring a dtype when none was
/// requested.
fn sanitize_values(
    values: &[Scalar],
    options: &SanitizeOptions,
) -> Result<CanonicalArray, ConstructError> {
    let dtype = match options.dtype {
        Some(dtype) => dtype,
        None => infer_dtype(values, options.nullable),
    };
    try_cast(values, dtype)
}

/// Canonicalize a non-temporal raw buffer.
fn sanitize_dense(
    raw: RawArray,
    options: &SanitizeOptions,
) -> Result<CanonicalArray, ConstructError> {
    Validator::ensure_1d(raw.shape())?;

    let arr = match raw {
        RawArray::Bool(a) => CanonicalArray::Bool(to_one_dim(a)?),
        RawArray::Int32(a) => CanonicalArray::Int32(to_one_dim(a)?),
        RawArray::Int64(a) => CanonicalArray::Int64(to_one_dim(a)?),
        RawArray::UInt64(a) => CanonicalArray::UInt64(to_one_dim(a)?),
        RawArray::Float32(a) => CanonicalArray::Float32(to_one_dim(a)?),
        RawArray::Float64(a) => CanonicalArray::Float64(to_one_dim(a)?),
        RawArray::Utf8(a) => return sanitize_str_dtypes(to_one_dim(a)?.to_vec(), options),
        RawArray::Object(a) => return sanitize_values(&to_one_dim(a)?.to_vec(), options),
        RawArray::Datetime(..) | RawArray::Timedelta(..) => {
            // Temporal buffers are wrapped before this stage runs.
            let wrapped = ensure_wrapped_if_datetimelike(ArrayLike::Raw(raw))?;
            return sanitize_array(wrapped, options);
        }
    };
    finish_dtype(arr, options)
}

/// Apply the string guard to a raw string buffer.
///
/// With no requested dtype, dense output is `Object` so that a column
/// of strings never masquerades as a numeric-style buffer dtype; the
/// nullable flavor keeps `Utf8`.
fn sanitize_str_dtypes(
    values: Vec<String>,
    options: &SanitizeOptions,
) -> Result<CanonicalArray, ConstructError> {
    let scalars: Vec<Scalar> = values.into_iter().map(Scalar::Utf8).collect();
    let dtype = match options.dtype {
        Some(dtype) => dtype,
        None if options.nullable => DType::Utf8,
        None => DType::Object,
    };
    try_cast(&scalars, dtype)
}

/// Re-dtype a canonical array per the options.
fn finish_dtype(
    arr: CanonicalArray,
    options: &SanitizeOptions,
) -> Result<CanonicalArray, ConstructError> {
    match options.dtype {
        Some(dtype) => cast_canonical(arr, dtype),
        None if options.nullable => {
            let target = nullable_counterpart(arr.dtype());
            cast_canonical(arr, target)
        }
        None => Ok(arr),
    }
}

/// Repeat a length-1 result up to the requested length.
fn maybe_repeat(
    result: CanonicalArray,
    length: Option<usize>,
) -> Result<CanonicalArray, ConstructError> {
    match length {
        Some(n) if result.len() == 1 && n != 1 => {
            construct_full(&result.scalar_at(0), n, result.dtype())
        }
        _ => Ok(result),
    }
}

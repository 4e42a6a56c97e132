//! Wrapper extraction and datetime-like re-wrapping.
//!
//! ## Purpose
//!
//! This module peels higher-level containers off construction inputs:
//! labeled columns unwrap to their backing arrays, index wrappers to
//! their key storage, and raw datetime-like buffers re-wrap into their
//! temporal extension arrays.
//!
//! ## Design notes
//!
//! * **Lazy ranges stay lazy**: A range index unwraps to its
//!   [`RangeSpec`]; realization happens only when explicitly requested,
//!   so callers that merely need the values' identity pay nothing.
//! * **Re-wrapping is canonicalizing**: A raw temporal buffer comes back
//!   as a nanosecond extension array, never as a plain integer buffer.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths or infer dtypes.
//!
//! [`RangeSpec`]: crate::arrays::range::RangeSpec

// Internal dependencies
use crate::arrays::canonical::CanonicalArray;
use crate::arrays::input::{to_one_dim, ArrayLike, RawArray};
use crate::arrays::range::range_to_ndarray;
use crate::arrays::temporal::{DatetimeArray, TimedeltaArray};
use crate::arrays::wrapper::IndexArray;
use crate::primitives::errors::ConstructError;

// ============================================================================
// Extraction
// ============================================================================

/// Unwrap column and index containers to their backing representation.
///
/// With `realize_ranges`, a lazy range (bare or behind an index wrapper)
/// is materialized into a concrete integer array; otherwise it is
/// returned as-is. Non-wrapper inputs pass through untouched.
pub fn extract_array(data: ArrayLike, realize_ranges: bool) -> Result<ArrayLike, ConstructError> {
    let data = match data {
        ArrayLike::Column(c) => ArrayLike::Extension(c.into_values()),
        ArrayLike::Index(ix) => match *ix {
            IndexArray::Range(rng) => ArrayLike::Range(rng),
            IndexArray::Values(values) => ArrayLike::Extension(values),
        },
        other => other,
    };

    if realize_ranges {
        if let ArrayLike::Range(rng) = data {
            return Ok(ArrayLike::Extension(range_to_ndarray(&rng)?));
        }
    }
    Ok(data)
}

// ============================================================================
// Datetime-like re-wrapping
// ============================================================================

/// Re-wrap raw datetime-like buffers into temporal extension arrays.
///
/// Raw `Datetime`/`Timedelta` buffers are validated to one dimension and
/// canonicalized to nanoseconds; every other input passes through.
pub fn ensure_wrapped_if_datetimelike(data: ArrayLike) -> Result<ArrayLike, ConstructError> {
    match data {
        ArrayLike::Raw(RawArray::Datetime(a, unit)) => {
            let values = to_one_dim(a)?;
            let wrapped = DatetimeArray::from_units(values, unit, None)?;
            Ok(ArrayLike::Extension(CanonicalArray::Datetime(wrapped)))
        }
        ArrayLike::Raw(RawArray::Timedelta(a, unit)) => {
            let values = to_one_dim(a)?;
            let wrapped = TimedeltaArray::from_units(values, unit)?;
            Ok(ArrayLike::Extension(CanonicalArray::Timedelta(wrapped)))
        }
        other => Ok(other),
    }
}

//! Lazy integer ranges and their realization.
//!
//! ## Purpose
//!
//! This module provides [`RangeSpec`], a lazy arithmetic range over
//! `i128` endpoints, and [`range_to_ndarray`], which realizes a range
//! into a concrete integer array. Endpoints wider than `i64` are
//! representable before realization, so overflow is detected rather than
//! wrapped.
//!
//! ## Design notes
//!
//! * **Half-open semantics**: `stop` is exclusive; length follows the
//!   usual ceiling division.
//! * **Dtype fallback chain**: Realization prefers `Int64`; a range that
//!   does not fit falls back to `UInt64` when provably non-negative;
//!   anything wider is a typed overflow error.
//!
//! ## Invariants
//!
//! * `step` is never zero; construction rejects it.
//!
//! ## Non-goals
//!
//! * This module does not model float or temporal ranges.

// External dependencies
use ndarray::Array1;

// Internal dependencies
use crate::arrays::canonical::CanonicalArray;
use crate::primitives::errors::ConstructError;

// ============================================================================
// RangeSpec
// ============================================================================

/// A lazy arithmetic range: `start`, `start + step`, ... up to (not
/// including) `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    start: i128,
    stop: i128,
    step: i128,
}

impl RangeSpec {
    /// Create a range; a zero step is rejected.
    pub fn new(start: i128, stop: i128, step: i128) -> Result<Self, ConstructError> {
        if step == 0 {
            return Err(ConstructError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    /// Ascending unit-step range.
    pub(crate) fn with_unit_step(start: i128, stop: i128) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// Range start.
    #[inline]
    pub fn start(&self) -> i128 {
        self.start
    }

    /// Range stop (exclusive).
    #[inline]
    pub fn stop(&self) -> i128 {
        self.stop
    }

    /// Range step.
    #[inline]
    pub fn step(&self) -> i128 {
        self.step
    }

    /// Number of elements the realized range will have.
    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.stop - self.start
        } else {
            self.start - self.stop
        };
        if span <= 0 {
            return 0;
        }
        let step = self.step.unsigned_abs();
        let span = span as u128;
        (span.div_ceil(step)) as usize
    }

    /// Whether the realized range would be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last value the realized range would contain, if any.
    fn last_value(&self) -> Option<i128> {
        let n = self.len();
        if n == 0 {
            None
        } else {
            Some(self.start + (n as i128 - 1) * self.step)
        }
    }

    /// Iterate the values of the range.
    pub fn values(&self) -> impl Iterator<Item = i128> + '_ {
        let n = self.len();
        (0..n).map(move |i| self.start + i as i128 * self.step)
    }
}

// ============================================================================
// Realization
// ============================================================================

/// Realize a lazy range into a concrete integer array.
///
/// Prefers `Int64`; falls back to `UInt64` when the range is provably
/// non-negative but exceeds `i64`; errors when neither dtype can hold
/// every value. The range is monotonic, so only the two endpoints need
/// checking.
pub fn range_to_ndarray(rng: &RangeSpec) -> Result<CanonicalArray, ConstructError> {
    let Some(last) = rng.last_value() else {
        return Ok(CanonicalArray::Int64(Array1::from_vec(Vec::new())));
    };
    let first = rng.start();

    let (lo, hi) = if first <= last { (first, last) } else { (last, first) };

    if lo >= i128::from(i64::MIN) && hi <= i128::from(i64::MAX) {
        let values: Array1<i64> = rng.values().map(|v| v as i64).collect();
        return Ok(CanonicalArray::Int64(values));
    }

    if lo >= 0 && hi <= i128::from(u64::MAX) {
        let values: Array1<u64> = rng.values().map(|v| v as u64).collect();
        return Ok(CanonicalArray::UInt64(values));
    }

    Err(ConstructError::RangeOverflow {
        start: rng.start(),
        stop: rng.stop(),
        step: rng.step(),
    })
}

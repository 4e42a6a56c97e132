//! Temporal extension arrays.
//!
//! ## Purpose
//!
//! This module provides [`DatetimeArray`] and [`TimedeltaArray`], the
//! wrapped representations of datetime-like data. Raw temporal buffers
//! arrive in arbitrary resolutions; construction canonicalizes them to
//! nanoseconds with overflow checking.
//!
//! ## Design notes
//!
//! * **Sentinel missing value**: `NAT` (`i64::MIN`) marks a missing slot
//!   and survives unit conversion untouched.
//! * **Checked canonicalization**: A value that would overflow the
//!   nanosecond range is a typed error, not a wrapped value.
//! * **Zone on the array**: Datetime storage is always a plain epoch
//!   offset; the zone is array-level metadata.
//!
//! ## Invariants
//!
//! * Stored values are nanoseconds; `NAT` is never produced by unit
//!   conversion from a non-`NAT` input.
//!
//! ## Non-goals
//!
//! * This module does not parse datetime strings.
//! * This module does not convert between zones.

// External dependencies
use ndarray::Array1;

// Internal dependencies
use crate::primitives::dtype::{TimeUnit, TimeZone};
use crate::primitives::errors::ConstructError;

/// Missing-value sentinel for temporal storage ("not a time").
pub const NAT: i64 = i64::MIN;

/// Convert one temporal value to nanoseconds, passing `NAT` through.
pub fn checked_nanos(value: i64, unit: TimeUnit) -> Result<i64, ConstructError> {
    if value == NAT {
        return Ok(NAT);
    }
    value
        .checked_mul(unit.nanos_per_tick())
        .ok_or(ConstructError::OutOfBoundsDatetime { value, unit })
}

// ============================================================================
// DatetimeArray
// ============================================================================

/// Epoch-offset datetimes in nanoseconds, optionally zone-aware.
#[derive(Debug, Clone, PartialEq)]
pub struct DatetimeArray {
    values: Array1<i64>,
    tz: Option<TimeZone>,
}

impl DatetimeArray {
    /// Wrap a raw buffer of epoch offsets in `unit` ticks, converting to
    /// nanoseconds.
    pub fn from_units(
        values: Array1<i64>,
        unit: TimeUnit,
        tz: Option<TimeZone>,
    ) -> Result<Self, ConstructError> {
        let values = values
            .into_iter()
            .map(|v| checked_nanos(v, unit))
            .collect::<Result<Array1<i64>, _>>()?;
        Ok(Self { values, tz })
    }

    /// Wrap a buffer that is already in nanoseconds.
    pub fn from_nanos(values: Array1<i64>, tz: Option<TimeZone>) -> Self {
        Self { values, tz }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of `NAT` slots.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == NAT).count()
    }

    /// Nanosecond value at `i`, or `None` for `NAT`.
    pub fn get(&self, i: usize) -> Option<i64> {
        let v = self.values[i];
        (v != NAT).then_some(v)
    }

    /// The nanosecond buffer, including `NAT` slots.
    #[inline]
    pub fn values(&self) -> &Array1<i64> {
        &self.values
    }

    /// Zone metadata, or `None` for zone-naive arrays.
    #[inline]
    pub fn tz(&self) -> Option<TimeZone> {
        self.tz
    }
}

// ============================================================================
// TimedeltaArray
// ============================================================================

/// Durations in nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedeltaArray {
    values: Array1<i64>,
}

impl TimedeltaArray {
    /// Wrap a raw buffer of durations in `unit` ticks, converting to
    /// nanoseconds.
    pub fn from_units(values: Array1<i64>, unit: TimeUnit) -> Result<Self, ConstructError> {
        let values = values
            .into_iter()
            .map(|v| checked_nanos(v, unit))
            .collect::<Result<Array1<i64>, _>>()?;
        Ok(Self { values })
    }

    /// Wrap a buffer that is already in nanoseconds.
    pub fn from_nanos(values: Array1<i64>) -> Self {
        Self { values }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of `NAT` slots.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == NAT).count()
    }

    /// Nanosecond value at `i`, or `None` for `NAT`.
    pub fn get(&self, i: usize) -> Option<i64> {
        let v = self.values[i];
        (v != NAT).then_some(v)
    }

    /// The nanosecond buffer, including `NAT` slots.
    #[inline]
    pub fn values(&self) -> &Array1<i64> {
        &self.values
    }
}

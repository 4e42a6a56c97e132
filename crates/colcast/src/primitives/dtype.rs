//! Dtype taxonomy for canonical arrays.
//!
//! ## Purpose
//!
//! This module defines the set of dtypes a canonical array can carry,
//! together with the time units and time zones used by the temporal
//! family. Every construction routine in the crate resolves to exactly
//! one of these dtypes.
//!
//! ## Design notes
//!
//! * **Closed set**: The dtype universe is a closed enum; there is no
//!   runtime dtype registry.
//! * **Masked family**: `MaskedBool`/`MaskedInt64`/`MaskedFloat64` carry
//!   an explicit validity mask and can represent missing values without
//!   sentinel encoding.
//! * **Temporal canonicalization**: Temporal dtypes carry their source
//!   unit; array storage is always nanoseconds.
//!
//! ## Key concepts
//!
//! * **Dense vs masked**: Dense dtypes store plain values; missing data is
//!   representable only where the value domain has room for it (NaN for
//!   floats, `NAT` for temporals, `Null` for `Object`).
//! * **Extension dtypes**: The masked family, the temporal family, and
//!   `Utf8` — dtypes backed by dedicated array types rather than a plain
//!   numeric buffer.
//!
//! ## Invariants
//!
//! * `has_missing_repr` is true exactly for the dtypes whose arrays can
//!   hold a missing value without erroring.
//!
//! ## Non-goals
//!
//! * This module does not perform inference or casting.
//! * This module does not model nested or categorical dtypes.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Time Units
// ============================================================================

/// Resolution of a temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Whole seconds.
    Seconds,

    /// Milliseconds (1e-3 s).
    Milliseconds,

    /// Microseconds (1e-6 s).
    Microseconds,

    /// Nanoseconds (1e-9 s). The canonical storage unit.
    #[default]
    Nanoseconds,
}

impl TimeUnit {
    /// Number of nanoseconds in one tick of this unit.
    #[inline]
    pub fn nanos_per_tick(self) -> i64 {
        match self {
            Self::Seconds => 1_000_000_000,
            Self::Milliseconds => 1_000_000,
            Self::Microseconds => 1_000,
            Self::Nanoseconds => 1,
        }
    }

    /// Short unit suffix used in dtype names.
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.suffix())
    }
}

// ============================================================================
// Time Zones
// ============================================================================

/// Time zone attached to zone-aware datetime values.
///
/// Only UTC and fixed offsets are modeled; there is no calendar database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZone {
    /// Coordinated Universal Time.
    Utc,

    /// Fixed offset from UTC, in seconds (positive east of Greenwich).
    FixedOffset(i32),
}

impl Display for TimeZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::FixedOffset(secs) => {
                let sign = if *secs < 0 { '-' } else { '+' };
                let abs = secs.unsigned_abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
            }
        }
    }
}

// ============================================================================
// DType
// ============================================================================

/// Dtype of a canonical array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    /// Dense booleans.
    Bool,

    /// Dense 32-bit signed integers.
    Int32,

    /// Dense 64-bit signed integers.
    Int64,

    /// Dense 64-bit unsigned integers.
    UInt64,

    /// Dense 32-bit floats.
    Float32,

    /// Dense 64-bit floats. NaN doubles as the missing marker.
    Float64,

    /// UTF-8 strings.
    Utf8,

    /// Heterogeneous scalars; the dtype of last resort.
    Object,

    /// Datetimes at the given resolution; storage is nanoseconds.
    Datetime(TimeUnit),

    /// Durations at the given resolution; storage is nanoseconds.
    Timedelta(TimeUnit),

    /// Validity-masked booleans.
    MaskedBool,

    /// Validity-masked 64-bit signed integers.
    MaskedInt64,

    /// Validity-masked 64-bit floats.
    MaskedFloat64,
}

impl DType {
    /// Whether this dtype is an integer family member.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int32 | Self::Int64 | Self::UInt64 | Self::MaskedInt64
        )
    }

    /// Whether this dtype is a float family member.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64 | Self::MaskedFloat64)
    }

    /// Whether this dtype is numeric (integer or float).
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Whether this dtype is boolean (dense or masked).
    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool | Self::MaskedBool)
    }

    /// Whether this dtype is datetime-like.
    #[inline]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Datetime(_) | Self::Timedelta(_))
    }

    /// Whether this dtype carries an explicit validity mask.
    #[inline]
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::MaskedBool | Self::MaskedInt64 | Self::MaskedFloat64)
    }

    /// Whether this dtype is backed by a dedicated extension array type
    /// rather than a plain numeric buffer.
    #[inline]
    pub fn is_extension(&self) -> bool {
        self.is_masked() || self.is_temporal() || matches!(self, Self::Utf8)
    }

    /// Whether arrays of this dtype can hold a missing value.
    #[inline]
    pub fn has_missing_repr(&self) -> bool {
        self.is_masked()
            || self.is_temporal()
            || matches!(self, Self::Float32 | Self::Float64 | Self::Object)
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int32 => f.write_str("int32"),
            Self::Int64 => f.write_str("int64"),
            Self::UInt64 => f.write_str("uint64"),
            Self::Float32 => f.write_str("float32"),
            Self::Float64 => f.write_str("float64"),
            Self::Utf8 => f.write_str("utf8"),
            Self::Object => f.write_str("object"),
            Self::Datetime(unit) => write!(f, "datetime[{unit}]"),
            Self::Timedelta(unit) => write!(f, "timedelta[{unit}]"),
            Self::MaskedBool => f.write_str("bool (masked)"),
            Self::MaskedInt64 => f.write_str("int64 (masked)"),
            Self::MaskedFloat64 => f.write_str("float64 (masked)"),
        }
    }
}

//! Scalar cell-value model for heterogeneous data.
//!
//! ## Purpose
//!
//! This module defines [`Scalar`], the dynamically-typed cell value used
//! wherever data arrives without a uniform dtype: object buffers,
//! heterogeneous value lists, and the scalar-broadcast path.
//!
//! ## Design notes
//!
//! * **Missing data**: `Null` is the explicit missing marker; NaN floats
//!   are treated as missing by `is_null`, matching the NaN-as-NA
//!   convention of numeric columns.
//! * **Width**: Integers are carried as `i64`/`u64` and floats as `f64`;
//!   narrower inputs widen on conversion.
//! * **Temporal values**: Carry their source unit; canonicalization to
//!   nanoseconds happens at array construction, not here.
//!
//! ## Non-goals
//!
//! * This module does not infer dtypes (see `infer`).
//! * This module does not convert between scalar kinds (see `cast`).

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::dtype::{TimeUnit, TimeZone};

// ============================================================================
// Scalar
// ============================================================================

/// A single dynamically-typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Missing value.
    Null,

    /// Boolean.
    Bool(bool),

    /// Signed integer.
    Int(i64),

    /// Unsigned integer; used for magnitudes above `i64::MAX`.
    UInt(u64),

    /// Double-precision float.
    Float(f64),

    /// UTF-8 string.
    Utf8(String),

    /// Datetime as an epoch offset in the given unit, optionally
    /// zone-aware.
    Datetime {
        /// Epoch offset, in `unit` ticks.
        value: i64,
        /// Resolution of `value`.
        unit: TimeUnit,
        /// Zone, or `None` for zone-naive values.
        tz: Option<TimeZone>,
    },

    /// Duration in the given unit.
    Timedelta {
        /// Duration, in `unit` ticks.
        value: i64,
        /// Resolution of `value`.
        unit: TimeUnit,
    },
}

impl Scalar {
    /// Whether this value is missing (`Null`, or a NaN float).
    #[inline]
    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Construct a zone-naive datetime scalar.
    #[inline]
    pub fn datetime(value: i64, unit: TimeUnit) -> Self {
        Self::Datetime {
            value,
            unit,
            tz: None,
        }
    }

    /// Construct a zone-aware datetime scalar.
    #[inline]
    pub fn datetime_tz(value: i64, unit: TimeUnit, tz: TimeZone) -> Self {
        Self::Datetime {
            value,
            unit,
            tz: Some(tz),
        }
    }

    /// Construct a timedelta scalar.
    #[inline]
    pub fn timedelta(value: i64, unit: TimeUnit) -> Self {
        Self::Timedelta { value, unit }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Utf8(v) => f.write_str(v),
            Self::Datetime { value, unit, tz } => match tz {
                Some(tz) => write!(f, "datetime({value}[{unit}], {tz})"),
                None => write!(f, "datetime({value}[{unit}])"),
            },
            Self::Timedelta { value, unit } => write!(f, "timedelta({value}[{unit}])"),
        }
    }
}

// ============================================================================
// Conversions from native types
// ============================================================================

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Utf8(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Utf8(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

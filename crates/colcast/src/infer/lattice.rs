//! Dtype promotion lattice.
//!
//! ## Purpose
//!
//! This module folds the scalar kinds observed in heterogeneous data
//! into the smallest dtype that can represent all of them. It is the
//! rule book behind every "no dtype was requested" path in the
//! pipeline.
//!
//! ## Design notes
//!
//! * **Two flavors**: The dense flavor targets plain buffers, so
//!   missing integers force a float promotion and missing booleans fall
//!   back to `Object`. The nullable flavor prefers the masked family
//!   and keeps the element type.
//! * **No value mutation**: Inference only reads; the cast layer
//!   materializes the decision.
//! * **NaN is missing**: A NaN float counts as both a float observation
//!   and a missing observation, matching the NaN-as-NA convention.
//!
//! ## Key concepts
//!
//! * **Promotion**: bool < int < float within a family; crossing
//!   families (bool + int, string + anything, datetime + timedelta)
//!   lands on `Object`.
//! * **Unsigned escape**: Magnitudes above `i64::MAX` keep an integer
//!   dtype only while every value is non-negative.
//!
//! ## Invariants
//!
//! * The inferred dtype can represent every observed value, including
//!   the missing ones.
//!
//! ## Non-goals
//!
//! * This module does not parse strings or coerce values.

// Internal dependencies
use crate::infer::temporal::{refine_datetimes, refine_timedeltas};
use crate::primitives::dtype::DType;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Observation fold
// ============================================================================

/// Scalar kinds observed while walking the data once.
#[derive(Debug, Default, Clone, Copy)]
struct Observed {
    nulls: bool,
    bools: bool,
    ints: bool,
    negative_ints: bool,
    big_uints: bool,
    floats: bool,
    strings: bool,
    datetimes: bool,
    timedeltas: bool,
}

impl Observed {
    fn scan(values: &[Scalar]) -> Self {
        let mut obs = Self::default();
        for v in values {
            match v {
                Scalar::Null => obs.nulls = true,
                Scalar::Bool(_) => obs.bools = true,
                Scalar::Int(i) => {
                    obs.ints = true;
                    if *i < 0 {
                        obs.negative_ints = true;
                    }
                }
                Scalar::UInt(u) => {
                    obs.ints = true;
                    if *u > i64::MAX as u64 {
                        obs.big_uints = true;
                    }
                }
                Scalar::Float(f) => {
                    obs.floats = true;
                    if f.is_nan() {
                        obs.nulls = true;
                    }
                }
                Scalar::Utf8(_) => obs.strings = true,
                Scalar::Datetime { .. } => obs.datetimes = true,
                Scalar::Timedelta { .. } => obs.timedeltas = true,
            }
        }
        obs
    }

    fn is_numeric_only(&self) -> bool {
        (self.ints || self.floats)
            && !self.bools
            && !self.strings
            && !self.datetimes
            && !self.timedeltas
    }
}

// ============================================================================
// Inference
// ============================================================================

/// Infer the dtype of heterogeneous data.
///
/// `nullable` selects the masked-preferring flavor used by the public
/// construction entry point; the dense flavor is the plain-buffer
/// pipeline default.
pub fn infer_dtype(values: &[Scalar], nullable: bool) -> DType {
    let obs = Observed::scan(values);

    // Nothing observed at all: no basis for a value dtype.
    if !obs.nulls
        && !obs.bools
        && !obs.ints
        && !obs.floats
        && !obs.strings
        && !obs.datetimes
        && !obs.timedeltas
    {
        return if nullable {
            DType::MaskedFloat64
        } else {
            DType::Object
        };
    }

    // Strings dominate every mix.
    if obs.strings {
        let only_strings =
            !obs.bools && !obs.ints && !obs.floats && !obs.datetimes && !obs.timedeltas;
        if only_strings && nullable && !obs.nulls {
            return DType::Utf8;
        }
        return DType::Object;
    }

    // Temporal runs refine on their own; any cross-family mix is Object.
    if obs.datetimes || obs.timedeltas {
        let pure = !obs.bools && !obs.ints && !obs.floats;
        if !pure || (obs.datetimes && obs.timedeltas) {
            return DType::Object;
        }
        if obs.datetimes {
            return refine_datetimes(values);
        }
        return refine_timedeltas();
    }

    // Booleans never promote into the numeric family.
    if obs.bools {
        if obs.ints || obs.floats {
            return DType::Object;
        }
        if nullable {
            return DType::MaskedBool;
        }
        return if obs.nulls { DType::Object } else { DType::Bool };
    }

    if obs.is_numeric_only() {
        if obs.floats || (obs.big_uints && obs.negative_ints) {
            return if nullable {
                DType::MaskedFloat64
            } else {
                DType::Float64
            };
        }
        if obs.big_uints {
            // No masked unsigned dtype exists; missing values push the
            // data into the float family.
            return if obs.nulls {
                if nullable {
                    DType::MaskedFloat64
                } else {
                    DType::Float64
                }
            } else {
                DType::UInt64
            };
        }
        if nullable {
            return DType::MaskedInt64;
        }
        return if obs.nulls { DType::Float64 } else { DType::Int64 };
    }

    // Only nulls were observed.
    if nullable {
        DType::MaskedFloat64
    } else {
        DType::Float64
    }
}

/// Infer the dtype a single scalar would broadcast to.
pub fn infer_scalar_dtype(value: &Scalar, nullable: bool) -> DType {
    infer_dtype(std::slice::from_ref(value), nullable)
}

/// Masked counterpart of a dense dtype, where one exists.
///
/// Dtypes without a masked counterpart (`UInt64`, strings, temporals,
/// `Object`, the masked family itself) map to themselves.
pub fn nullable_counterpart(dtype: DType) -> DType {
    match dtype {
        DType::Bool => DType::MaskedBool,
        DType::Int32 | DType::Int64 => DType::MaskedInt64,
        DType::Float32 | DType::Float64 => DType::MaskedFloat64,
        other => other,
    }
}

//! Temporal refinement rules for dtype inference.
//!
//! ## Purpose
//!
//! This module decides what dtype a run of datetime-like scalars
//! resolves to: homogeneous datetimes sharing one zone (or all
//! zone-naive) become a datetime dtype, mixed zones demote to `Object`,
//! and homogeneous timedeltas become a timedelta dtype.
//!
//! ## Design notes
//!
//! * **Zone consistency, not zone conversion**: Two values in different
//!   zones name different column types here; reconciling them is not
//!   this layer's job.
//! * **Nulls are transparent**: Missing values never block refinement;
//!   they become `NAT` at construction.
//!
//! ## Non-goals
//!
//! * This module does not build temporal arrays (see `cast`).

// Internal dependencies
use crate::primitives::dtype::{DType, TimeUnit, TimeZone};
use crate::primitives::scalar::Scalar;

// ============================================================================
// Zone consistency
// ============================================================================

/// Zone shared by every non-null datetime scalar.
///
/// Returns `Some(zone)` when all datetimes agree (`Some(None)` for
/// all-naive), and `None` when zones are mixed. Non-datetime scalars are
/// ignored.
pub fn common_zone(values: &[Scalar]) -> Option<Option<TimeZone>> {
    let mut seen: Option<Option<TimeZone>> = None;
    for v in values {
        if let Scalar::Datetime { tz, .. } = v {
            match seen {
                None => seen = Some(*tz),
                Some(prev) if prev == *tz => {}
                Some(_) => return None,
            }
        }
    }
    Some(seen.unwrap_or(None))
}

// ============================================================================
// Refinement
// ============================================================================

/// Dtype for a run of scalars known to contain only datetimes and nulls.
pub fn refine_datetimes(values: &[Scalar]) -> DType {
    match common_zone(values) {
        Some(_) => DType::Datetime(TimeUnit::Nanoseconds),
        None => DType::Object,
    }
}

/// Dtype for a run of scalars known to contain only timedeltas and nulls.
pub fn refine_timedeltas() -> DType {
    DType::Timedelta(TimeUnit::Nanoseconds)
}

//! High-level API for canonical array construction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder that configures a construction run (dtype, length, inference
//! flavor) and executes the sanitization pipeline on anything that
//! converts into [`ArrayLike`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults; native Rust
//!   collections convert implicitly via `Into<ArrayLike>`.
//! * **Masked by default**: The builder prefers the masked dtype family
//!   when inferring, so missing values never silently change the element
//!   type; `.dense()` restores the plain-buffer semantics.
//! * **Validated**: All validation happens inside the pipeline; `build`
//!   is the only fallible step.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`ArrayBuilder`] via `Array::new()`.
//! 2. Chain configuration methods (`.dtype()`, `.length()`, `.dense()`).
//! 3. Call `.build(data)` with any supported input.

// Publicly re-exported types
pub use crate::arrays::canonical::CanonicalArray;
pub use crate::arrays::input::{ArrayLike, MaskedInput, RawArray};
pub use crate::arrays::masked::MaskedArray;
pub use crate::arrays::range::{range_to_ndarray, RangeSpec};
pub use crate::arrays::temporal::{DatetimeArray, TimedeltaArray, NAT};
pub use crate::arrays::wrapper::{Column, IndexArray};
pub use crate::engine::extract::{ensure_wrapped_if_datetimelike, extract_array};
pub use crate::engine::sanitize::{sanitize_array, sanitize_masked_array, SanitizeOptions};
pub use crate::primitives::dtype::{DType, TimeUnit, TimeZone};
pub use crate::primitives::errors::ConstructError;
pub use crate::primitives::scalar::Scalar;

// ============================================================================
// Array Builder
// ============================================================================

/// Fluent builder for canonical array construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayBuilder {
    /// Requested dtype; inferred when absent.
    pub dtype: Option<DType>,

    /// Requested length; required for scalar input, broadcast target
    /// for length-1 results.
    pub length: Option<usize>,

    /// Use the plain-buffer inference flavor instead of the masked one.
    pub dense: bool,
}

impl ArrayBuilder {
    /// Create a builder with default settings (masked-preferring
    /// inference, no dtype or length constraints).
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an explicit dtype.
    pub fn dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Request an output length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Switch to the plain-buffer inference flavor: missing integers
    /// promote to NaN-filled floats and missing booleans fall back to
    /// `Object`, instead of landing in the masked family.
    pub fn dense(mut self) -> Self {
        self.dense = true;
        self
    }

    /// Run the construction pipeline on `data`.
    pub fn build(self, data: impl Into<ArrayLike>) -> Result<CanonicalArray, ConstructError> {
        let options = SanitizeOptions {
            dtype: self.dtype,
            length: self.length,
            nullable: !self.dense,
        };
        sanitize_array(data.into(), &options)
    }
}

//! # colcast — canonical column construction for Rust
//!
//! `colcast` coerces heterogeneous in-memory data — typed buffers,
//! mixed-type value lists, masked arrays, lazy ranges, scalars, and
//! higher-level wrappers — into a canonical 1-dimensional array with a
//! definite dtype.
//!
//! ## What is sanitization?
//!
//! Data arrives in many shapes: an `ndarray` buffer of floats, a `Vec`
//! of optional integers, a set of strings, a single value that should be
//! broadcast, a range that was never materialized. Sanitization is the
//! policy layer that turns all of them into one predictable
//! representation, inferring the smallest dtype that can hold every
//! value (including the missing ones) and rejecting inputs that cannot
//! form a 1-dimensional column.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use colcast::prelude::*;
//!
//! // Missing values keep the element type behind a validity mask.
//! let values = Array::new().build(vec![Some(1_i64), None, Some(3)])?;
//! assert_eq!(values.dtype(), DType::MaskedInt64);
//! assert_eq!(values.null_count(), 1);
//! # Result::<(), ConstructError>::Ok(())
//! ```
//!
//! ### Dense (plain-buffer) Flavor
//!
//! ```rust
//! use colcast::prelude::*;
//!
//! // Plain buffers have no room for a missing integer, so the run
//! // promotes to a NaN-filled float column.
//! let values = Array::new().dense().build(vec![Some(1_i64), None, Some(3)])?;
//! assert_eq!(values.dtype(), DType::Float64);
//! # Result::<(), ConstructError>::Ok(())
//! ```
//!
//! ### Explicit Dtypes and Broadcast
//!
//! ```rust
//! use colcast::prelude::*;
//!
//! // An explicit dtype bypasses inference; casts are checked.
//! let ints = Array::new().dtype(DType::Int64).build(vec![1.0_f64, 2.0])?;
//! assert_eq!(ints.dtype(), DType::Int64);
//!
//! // A scalar broadcasts against a requested length.
//! let fives = Array::new().dense().length(4).build(5_i64)?;
//! assert_eq!(fives.len(), 4);
//! assert_eq!(fives.dtype(), DType::Int64);
//! # Result::<(), ConstructError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Construction returns `Result<CanonicalArray, ConstructError>`; every
//! rejection is a typed variant carrying the offending values:
//!
//! ```rust
//! use colcast::prelude::*;
//!
//! let err = Array::new()
//!     .dtype(DType::Int64)
//!     .dense()
//!     .build(vec![1.5_f64])
//!     .unwrap_err();
//! assert!(matches!(err, ConstructError::LossyFloatCast { .. }));
//! ```

// Layer 1: Primitives - dtypes, scalars, and error types.
mod primitives;

// Layer 2: Arrays - canonical, masked, temporal, and input arrays.
mod arrays;

// Layer 3: Infer - pure dtype-inference rules.
mod infer;

// Layer 4: Cast - checked conversions and broadcasting.
mod cast;

// Layer 5: Engine - validation, extraction, and the pipeline.
mod engine;

// High-level fluent API for array construction.
mod api;

// Standard construction prelude.
pub mod prelude {
    pub use crate::api::{
        ensure_wrapped_if_datetimelike, extract_array, range_to_ndarray, sanitize_array,
        sanitize_masked_array, ArrayBuilder as Array, ArrayLike, CanonicalArray, Column,
        ConstructError, DType, DatetimeArray, IndexArray, MaskedArray, MaskedInput, RangeSpec,
        RawArray, SanitizeOptions, Scalar, TimeUnit, TimeZone, TimedeltaArray, NAT,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod arrays {
        pub use crate::arrays::*;
    }
    pub mod infer {
        pub use crate::infer::*;
    }
    pub mod cast {
        pub use crate::cast::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
